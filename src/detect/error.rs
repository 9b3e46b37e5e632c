/// Failure raised by a detector.
///
/// The only structural failure is an empty sample sequence; numeric edge
/// cases (empty pairs, flat images) are handled by policy, not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetectError {
    InvalidInput(String),
}

impl DetectError {
    pub fn code(&self) -> &'static str {
        match self {
            DetectError::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}

impl std::fmt::Display for DetectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectError::InvalidInput(message) => write!(f, "{}: {}", self.code(), message),
        }
    }
}

impl std::error::Error for DetectError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_code_and_message() {
        let err = DetectError::InvalidInput("no samples".to_string());
        assert_eq!(err.to_string(), "INVALID_INPUT: no samples");
    }

    #[test]
    fn converts_into_anyhow_and_back() {
        let err: anyhow::Error = DetectError::InvalidInput("empty".to_string()).into();
        assert!(matches!(
            err.downcast_ref::<DetectError>(),
            Some(DetectError::InvalidInput(_))
        ));
    }
}
