use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("insufficient data: {actual} bars, at least {required} required")]
    InsufficientData { required: usize, actual: usize },

    #[error("price series is not strictly increasing by date at index {index}")]
    UnorderedSeries { index: usize },
}
