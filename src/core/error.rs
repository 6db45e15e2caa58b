/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Discount percentage is negative, above 100 or not a number
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),

    /// Price is negative, non-finite or not a number
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Discount window starts after it ends
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// No room left to book
    #[error("Room unavailable: {0}")]
    RoomUnavailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Downstream notification failures
    #[error("Notification error: {0}")]
    Notification(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn invalid_percentage(msg: impl Into<String>) -> Self {
        AppError::InvalidPercentage(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        AppError::InvalidPrice(msg.into())
    }

    pub fn invalid_date_range(msg: impl Into<String>) -> Self {
        AppError::InvalidDateRange(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn notification(msg: impl Into<String>) -> Self {
        AppError::Notification(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True for errors caused by malformed caller input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::InvalidPercentage(_)
                | AppError::InvalidPrice(_)
                | AppError::InvalidDateRange(_)
        )
    }
}
