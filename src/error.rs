use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("slide set must contain at least one slide")]
    EmptySlideSet,

    #[error("invalid track geometry: left={left}, width={width}")]
    InvalidTrackGeometry { left: f64, width: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("observer with id `{0}` is already registered")]
    DuplicateObserver(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}
