// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the collaborators the cards depend on.
//!
//! # Ports
//!
//! - [`generator`]: [`ImageGenerator`] turns a caption into an image
//! - [`share`]: [`ShareSheet`] native sharing plus the clipboard fallback policy

pub mod generator;
pub mod share;

pub use generator::{
    GeneratedImage, GenerationError, GenerationFuture, GenerationRequest, ImageGenerator,
};
pub use share::{share_with_fallback, ShareError, ShareOutcome, SharePayload, ShareSheet};
