/// Failure of an indicator computation.
///
/// An empty candle slice is not an error: indicators return an empty series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// A period parameter was zero.
    InvalidArgument { name: &'static str, value: usize },
}

impl std::fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorError::InvalidArgument { name, value } => {
                write!(f, "Invalid Argument: {} must be at least 1, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for IndicatorError {}

/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    RenderingError(String),
    ValidationError(String),
    ConfigError(String),
    Indicator(IndicatorError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            AppError::Indicator(err) => write!(f, "Indicator Error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Indicator(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IndicatorError> for AppError {
    fn from(err: IndicatorError) -> Self {
        AppError::Indicator(err)
    }
}

// Simple convenience type aliases
pub type IndicatorResult<T> = Result<T, IndicatorError>;
pub type AppResult<T> = Result<T, AppError>;
pub type DisplayResult<T> = Result<T, AppError>;
