use notify_core::CoreError;
use thiserror::Error;

/// A descriptor that can never produce a postable notification.
///
/// Raised while the descriptor is being built, before the store is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid stack key provided.")]
    MissingStackKey,

    #[error("Invalid bubble icon provided.")]
    MissingBubbleIcon,

    #[error("Invalid target activity provided.")]
    MissingBubbleTarget,
}

/// Failures reported by a [`crate::store::NotificationStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Notification store denied the operation: {0}")]
    PermissionDenied(String),

    #[error("Notification store is unavailable: {0}")]
    Unavailable(String),

    #[error("Internal notification store error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Passed through untouched; posting is not retried.
    #[error("Notification store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify_core::ConfigError;

    #[test]
    fn validation_messages() {
        assert_eq!(ValidationError::MissingStackKey.to_string(), "Invalid stack key provided.");
        assert_eq!(ValidationError::MissingBubbleIcon.to_string(), "Invalid bubble icon provided.");
        assert_eq!(ValidationError::MissingBubbleTarget.to_string(), "Invalid target activity provided.");
    }

    #[test]
    fn notify_error_display() {
        assert_eq!(
            NotifyError::from(ValidationError::MissingStackKey).to_string(),
            "Invalid argument: Invalid stack key provided."
        );
        assert_eq!(
            NotifyError::from(StoreError::PermissionDenied("notifications disabled".to_string())).to_string(),
            "Notification store error: Notification store denied the operation: notifications disabled"
        );
        assert_eq!(
            NotifyError::from(CoreError::from(ConfigError::ValidationError("empty channel".to_string()))).to_string(),
            "Configuration error: Configuration Error: Configuration validation failed: empty channel"
        );
    }
}
