/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when parsing or assembling a world model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The payload was not valid JSON or did not match the schema.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was valid JSON but not shaped like a keyed collection.
    #[error("unexpected payload shape: {0}")]
    Shape(String),

    /// An entry's own `key` disagrees with the key it is stored under.
    #[error("{kind} stored under \"{map_key}\" declares key \"{key}\"")]
    KeyMismatch {
        /// What kind of entry was mismatched (`room` or `item`).
        kind: &'static str,
        /// The key the entry is stored under.
        map_key: String,
        /// The key the entry declares.
        key: String,
    },
}
