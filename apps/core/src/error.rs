use std::path::PathBuf;

use thiserror::Error;

/// Failures a section pipeline can hit before it has records to render.
///
/// None of these are fatal to the page: every variant collapses into the
/// section's fallback outcome.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("request for {resource} failed: {message}")]
    Fetch { resource: String, message: String },

    #[error("request for {resource} returned HTTP {status}")]
    Status { resource: String, status: u16 },

    #[error("could not decode {resource}: {message}")]
    Decode { resource: String, message: String },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteError {
    pub fn fetch(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            resource: resource.into(),
            message: message.into(),
        }
    }

    pub fn decode(resource: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            resource: resource.into(),
            message: message.to_string(),
        }
    }
}
