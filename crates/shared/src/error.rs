use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unknown {kind} `{value}`")]
    UnknownLabel { kind: &'static str, value: String },
    #[error("invalid date `{value}`: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl DomainError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownLabel {
            kind,
            value: value.into(),
        }
    }
}
