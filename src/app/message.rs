// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::gallery::Attempt;
use crate::application::port::{GeneratedImage, GenerationError};
use crate::domain::card::{Caption, CardIntent};
use crate::ui::notifications;
use iced::Size;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Generate one card per configured caption.
    Start,
    /// Drop every card and return to the empty state.
    Reset,
    GenerationFinished {
        caption: Caption,
        attempt: Attempt,
        result: Result<GeneratedImage, GenerationError>,
    },
    /// An action forwarded by a card.
    Intent(CardIntent),
    /// Result of the save dialog opened for a download. `bytes` are the
    /// image as it was when Download was pressed.
    SaveTargetChosen {
        caption: Caption,
        bytes: Arc<[u8]>,
        path: Option<PathBuf>,
    },
    DownloadFinished {
        caption: Caption,
        result: Result<PathBuf, String>,
    },
    ShareWebsite,
    /// Open the configured site in the browser.
    OpenSite,
    SiteOpened(Result<(), String>),
    Notification(notifications::NotificationMessage),
    WindowResized(Size),
    Tick(Instant), // Animation frames and toast expiry
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PAST_FORWARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Forces the compact (touch) layout regardless of window width.
    pub compact: bool,
}
