// SPDX-License-Identifier: MPL-2.0
//! Image generation port definition.
//!
//! This module defines the [`ImageGenerator`] trait implemented by the
//! generation backend. The UI never calls it directly: the application shell
//! turns each request into an Iced task and feeds the result back as a card
//! status transition.
//!
//! # Design Notes
//!
//! - The returned future is `'static` so it can be handed to `Task::perform`
//! - No retry policy lives here: every re-attempt is user-initiated
//! - The trait is `Send + Sync` so one generator can serve all cards

use crate::domain::card::Caption;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

// =============================================================================
// GenerationError
// =============================================================================

/// Errors reported by a generation backend.
///
/// The `Display` output is what ends up on the card's error face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No backend endpoint is configured.
    NotConfigured,

    /// The request could not be sent or the response could not be read.
    Request(String),

    /// The backend answered with a non-success HTTP status.
    Status(u16),

    /// The backend answered successfully but without image data.
    EmptyImage,

    /// The backend did not answer in time.
    Timeout,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::NotConfigured => write!(f, "No image generator is configured"),
            GenerationError::Request(msg) => write!(f, "Request failed: {msg}"),
            GenerationError::Status(code) => write!(f, "Generator returned HTTP {code}"),
            GenerationError::EmptyImage => write!(f, "Generator returned no image"),
            GenerationError::Timeout => write!(f, "network timeout"),
        }
    }
}

impl std::error::Error for GenerationError {}

// =============================================================================
// Request / Result
// =============================================================================

/// One generation request, keyed by the card caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub caption: Caption,
    pub prompt: String,
}

impl GenerationRequest {
    /// Builds a request by substituting `{caption}` in the prompt template.
    #[must_use]
    pub fn from_template(caption: Caption, template: &str) -> Self {
        let prompt = template.replace("{caption}", caption.as_str());
        Self { caption, prompt }
    }
}

/// A generated image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    url: String,
    bytes: Arc<[u8]>,
}

impl GeneratedImage {
    /// Wraps raw image bytes.
    ///
    /// The URL is derived from the content hash, so identical bytes always
    /// produce the identical source string.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        let url = format!("memory://{}", blake3::hash(&bytes).to_hex());
        Self { url, bytes }
    }

    /// Stable source identifier of the image.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Encoded image data.
    #[must_use]
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }
}

// =============================================================================
// ImageGenerator
// =============================================================================

/// Future returned by [`ImageGenerator::generate`].
pub type GenerationFuture =
    Pin<Box<dyn Future<Output = Result<GeneratedImage, GenerationError>> + Send + 'static>>;

/// Backend that turns a caption into an image.
pub trait ImageGenerator: Send + Sync {
    /// Starts a generation. The future resolves to the card's next status.
    fn generate(&self, request: GenerationRequest) -> GenerationFuture;
}
