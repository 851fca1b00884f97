use thiserror::Error;

//------------------------------------------

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("need at least 2 days of calories, got {len}")]
    InsufficientData { len: usize },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("number of days must be a positive integer, got {0:?}")]
    InvalidDayCount(String),

    #[error("calories must be comma separated non-negative integers, got {0:?}")]
    InvalidCalories(String),

    #[error("calorie value {0} is too large")]
    ValueOutOfRange(String),

    #[error("number of days ({days}) and calories input ({values} values) do not match")]
    LengthMismatch { days: usize, values: usize },
}

//------------------------------------------
