use std::collections::BTreeMap;

pub type Result<T> = std::result::Result<T, Error>;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("Request {0} has expired")]
    RequestExpired(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Text shown in the alert raised for a failed operation.
    pub fn user_message(&self) -> String {
        match self {
            Error::BadRequest(msg) => msg.clone(),
            Error::Unauthorized(_) => "Please log in to continue".to_string(),
            Error::NotFound(msg) => msg.clone(),
            Error::Validation(_) => "Please fix the errors in the form".to_string(),
            Error::InvalidOtp => "Please check the code and try again".to_string(),
            Error::RequestExpired(_) => "This request has expired".to_string(),
            Error::Database(_)
            | Error::Migration(_)
            | Error::Json(_)
            | Error::Storage(_)
            | Error::Io(_)
            | Error::Anyhow(_)
            | Error::Internal(_)
            | Error::Config(_) => GENERIC_FAILURE.to_string(),
        }
    }

    /// Inline messages keyed by camelCase field name, matching the stored
    /// record shape; empty unless this is a validation failure.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let Error::Validation(errors) = self else {
            return BTreeMap::new();
        };

        errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, list)| {
                list.first().map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    (camel_case(field), message)
                })
            })
            .collect()
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}
