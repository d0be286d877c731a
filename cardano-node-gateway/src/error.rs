#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("error reaching the node backend")]
    Backend(#[source] std::io::Error),

    #[error("malformed node response")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("invalid value entry in node response: {0}")]
    InvalidValueEntry(String),
}
