use reqwest::StatusCode;
use thiserror::Error;

/// Why a submission did not produce a result.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Blank input, caught before any network call.
    #[error("nothing to analyze: input is empty")]
    EmptyInput,
    /// The service answered with a non-2xx status.
    #[error("analysis service returned {0}")]
    Status(StatusCode),
    /// Connection, timeout or body decode failure.
    #[error("request to analysis service failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The two failure kinds the user can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Request,
}

impl AnalyzeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AnalyzeError::EmptyInput => FailureKind::Validation,
            AnalyzeError::Status(_) | AnalyzeError::Transport(_) => FailureKind::Request,
        }
    }

    /// Message shown in the notification popup. Request failures are not
    /// distinguished for the user; the detail goes to the log.
    pub fn user_message(&self) -> String {
        match self.kind() {
            FailureKind::Validation => t!("notify.empty_input").to_string(),
            FailureKind::Request => t!("notify.request_failed").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_validation() {
        assert_eq!(AnalyzeError::EmptyInput.kind(), FailureKind::Validation);
    }

    #[test]
    fn status_is_request_failure() {
        let err = AnalyzeError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), FailureKind::Request);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn request_failures_share_one_user_message() {
        rust_i18n::set_locale("en");
        let a = AnalyzeError::Status(StatusCode::BAD_REQUEST).user_message();
        let b = AnalyzeError::Status(StatusCode::BAD_GATEWAY).user_message();
        assert_eq!(a, b);
        assert_ne!(a, AnalyzeError::EmptyInput.user_message());
    }
}
