use std::fmt;
use thiserror::Error;

/// Which child of a slider container an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Overlay,
    Handle,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Overlay => write!(f, "overlay"),
            Role::Handle => write!(f, "handle"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    #[error("slider container #{container} has no {role} element")]
    MissingElement { container: usize, role: Role },
    #[error("slider container #{container} has {count} {role} elements, expected exactly one")]
    DuplicateElement {
        container: usize,
        role: Role,
        count: u32,
    },
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("invalid slider config: {0}")]
    Config(String),
}

/// Check that a container has exactly one element for `role`.
pub fn expect_single(container: usize, role: Role, count: u32) -> Result<(), SliderError> {
    match count {
        1 => Ok(()),
        0 => Err(SliderError::MissingElement { container, role }),
        count => Err(SliderError::DuplicateElement {
            container,
            role,
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element_is_ok() {
        assert_eq!(expect_single(0, Role::Handle, 1), Ok(()));
    }

    #[test]
    fn test_missing_element() {
        let err = expect_single(2, Role::Overlay, 0).unwrap_err();
        assert_eq!(
            err,
            SliderError::MissingElement {
                container: 2,
                role: Role::Overlay
            }
        );
        assert_eq!(err.to_string(), "slider container #2 has no overlay element");
    }

    #[test]
    fn test_duplicate_element() {
        let err = expect_single(0, Role::Handle, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "slider container #0 has 3 handle elements, expected exactly one"
        );
    }
}
