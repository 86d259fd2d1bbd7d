use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid chart area: width_px={width_px}")]
    InvalidChartArea { width_px: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
