use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A JSON column holds a value that no longer matches its expected shape.
    #[error("Stored JSON in {table}.{column} is invalid: {source}")]
    CorruptJson {
        table: &'static str,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
