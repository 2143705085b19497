//! Resolution errors and their mapping to user-facing messages.

use thiserror::Error;

use crate::http::TransportError;
use crate::platform::Platform;

/// Error returned by a resolver or by input validation.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Blank input or input without the platform's domain marker.
    #[error("please enter a valid {platform} URL")]
    InvalidInput { platform: Platform },

    /// The request never produced an HTTP response.
    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    /// Upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {code}")]
    HttpStatus { code: u32 },

    /// Upstream body could not be decoded.
    #[error("malformed upstream response: {0}")]
    Decode(String),

    /// Upstream reported failure in its own envelope (e.g. non-zero `code`).
    #[error("upstream error: {message}")]
    Upstream { message: String },

    #[error("the provided URL is not a regular video")]
    NotVideo,

    #[error("the provided URL is not a slideshow")]
    NotSlideshow,

    #[error("not a recognized video or slideshow")]
    Unrecognized,

    #[error("no download links found")]
    NoLinks,
}

/// Coarse error class, as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any network call.
    Validation,
    /// Transport failure or non-success HTTP status.
    Network,
    /// Upstream answered but the payload holds no usable media.
    UpstreamSemantic,
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::InvalidInput { .. } => ErrorKind::Validation,
            ResolveError::Transport(_) | ResolveError::HttpStatus { .. } => ErrorKind::Network,
            ResolveError::Decode(_)
            | ResolveError::Upstream { .. }
            | ResolveError::NotVideo
            | ResolveError::NotSlideshow
            | ResolveError::Unrecognized
            | ResolveError::NoLinks => ErrorKind::UpstreamSemantic,
        }
    }
}

/// Single human-readable failure handed to the caller of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UserFacingError {
    pub kind: ErrorKind,
    pub message: String,
}

impl UserFacingError {
    /// Maps a resolver error to the message shown for `platform`.
    ///
    /// Upstream text is passed through verbatim; errors without their own
    /// wording fall back to the generic "failed to process" message.
    pub fn from_error(platform: Platform, err: &ResolveError) -> Self {
        let message = match err {
            ResolveError::InvalidInput { .. } => invalid_input_message(platform),
            ResolveError::Transport(_)
            | ResolveError::HttpStatus { .. }
            | ResolveError::Decode(_) => generic_message(platform),
            ResolveError::Upstream { message } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            ResolveError::Upstream { .. } => generic_message(platform),
            ResolveError::NotVideo => "The provided URL is not a regular video.".to_string(),
            ResolveError::NotSlideshow => "The provided URL is not a slide video.".to_string(),
            ResolveError::Unrecognized => {
                "The provided URL is not a recognized video or slideshow.".to_string()
            }
            ResolveError::NoLinks => NO_LINKS_MESSAGE.to_string(),
        };
        Self {
            kind: err.kind(),
            message,
        }
    }

    /// Generic failure for `platform`, used when no error value is available.
    pub fn generic(platform: Platform) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: generic_message(platform),
        }
    }
}

const NO_LINKS_MESSAGE: &str =
    "No download links found. Please check if the URL is valid and the video is public.";

fn invalid_input_message(platform: Platform) -> String {
    format!("Please enter a valid {} URL", platform)
}

fn generic_message(platform: Platform) -> String {
    format!(
        "Failed to process {} URL. Please check if the URL is valid.",
        platform
    )
}
