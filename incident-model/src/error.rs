use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0} not available")]
    Unavailable(&'static str),

    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    /// The server answered with an `{ "error": ... }` body.
    #[error("{0}")]
    Server(String),

    #[error("malformed payload: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("incident id is required")]
    MissingIncident,

    #[error("response text is required")]
    EmptyResponse,

    #[error("a response is already being submitted")]
    AlreadyPending,
}
