//! Error types for community API requests.

/// Errors from fetching or decoding community documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The API answered with an `<error>` document, e.g. for a private or
    /// unknown profile.
    #[error("community error: {0}")]
    Community(String),

    #[error("invalid user handle")]
    InvalidUser,
}

impl Error {
    /// Network, read or non-2xx status failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Api { .. })
    }

    /// Malformed or unexpected XML.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Xml(_))
    }
}
