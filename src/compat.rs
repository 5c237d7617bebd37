//! Compatibility mode: the policy for dialect feature gaps.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Policy for requests a dialect cannot express.
///
/// Strict fails with a typed unsupported-feature error; Loose degrades to an
/// empty statement so generation continues. The empty string keeps the skip
/// observable to the caller — Loose is an explicit policy choice, not error
/// swallowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityMode {
    #[default]
    Strict,
    Loose,
}

impl CompatibilityMode {
    /// Resolve an unsupported-feature request under this policy.
    pub fn handle(&self, message: impl Into<String>) -> Result<String> {
        match self {
            CompatibilityMode::Strict => Err(Error::Unsupported(message.into())),
            CompatibilityMode::Loose => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_errors_loose_skips() {
        let err = CompatibilityMode::Strict.handle("no sequences").unwrap_err();
        assert_eq!(err.to_string(), "operation not supported: no sequences");
        assert_eq!(CompatibilityMode::Loose.handle("no sequences").unwrap(), "");
    }
}
