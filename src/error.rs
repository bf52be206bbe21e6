use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid food: {0}")]
    InvalidFood(String),

    #[error("Invalid meal distribution: {0}")]
    InvalidDistribution(String),

    #[error("No profile found. Run 'nutriplan onboard' first.")]
    ProfileMissing,

    #[error("No active meal plan. Run 'nutriplan plan' first.")]
    NoActivePlan,
}

pub type Result<T> = std::result::Result<T, NutriError>;
