use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactoidError {
    #[error("invalid calendar date: month {month}, day {day}")]
    InvalidDate { month: u32, day: u32 },

    #[error("could not parse date '{input}'; use a format like 'April 21' or '04/21'")]
    UnparsableDate { input: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected http status: {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid or unexpected response format")]
    InvalidResponse,
}

impl FactoidError {
    /// Whether the error is breakage of the events lookup itself, the kind
    /// recovered by falling back to the trivia source. Other kinds propagate.
    pub fn triggers_fallback(&self) -> bool {
        matches!(
            self,
            FactoidError::Http(_) | FactoidError::Status(_) | FactoidError::InvalidResponse
        )
    }
}
