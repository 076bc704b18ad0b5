use thiserror::Error;

#[derive(Debug, Error)]
pub enum TierError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown nutrient '{}'{}", .label, did_you_mean(.suggestion))]
    UnknownNutrient {
        label: String,
        suggestion: Option<String>,
    },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, TierError>;
