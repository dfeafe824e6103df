// SPDX-License-Identifier: MPL-2.0
//! Share port definition and the clipboard fallback policy.
//!
//! Sharing first goes through a native share sheet when the platform offers
//! one. When there is none, or it fails, the caller copies the link to the
//! clipboard and tells the user that the fallback was used.

use std::fmt;

/// Content handed to a share mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Text placed on the clipboard by the fallback path: the message
    /// followed by the link.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        let text = self.text.trim();
        if text.is_empty() {
            self.url.clone()
        } else {
            format!("{text} {}", self.url)
        }
    }
}

/// Errors raised by a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The platform share mechanism failed.
    Failed(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Failed(msg) => write!(f, "Share failed: {msg}"),
        }
    }
}

impl std::error::Error for ShareError {}

/// Native, platform-provided share mechanism.
pub trait ShareSheet {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// What the caller must do after a share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native sheet handled it.
    Shared,
    /// Copy this text to the clipboard and inform the user.
    CopyToClipboard(String),
}

/// Shares through `sheet` when available, otherwise falls back to the clipboard.
///
/// Failures of the native sheet are logged and never propagated.
pub fn share_with_fallback(sheet: Option<&dyn ShareSheet>, payload: &SharePayload) -> ShareOutcome {
    match sheet {
        Some(sheet) => match sheet.share(payload) {
            Ok(()) => ShareOutcome::Shared,
            Err(err) => {
                tracing::warn!(error = %err, url = %payload.url, "native share failed, using clipboard");
                ShareOutcome::CopyToClipboard(payload.clipboard_text())
            }
        },
        None => {
            tracing::debug!(url = %payload.url, "no native share sheet, using clipboard");
            ShareOutcome::CopyToClipboard(payload.clipboard_text())
        }
    }
}
