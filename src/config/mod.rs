// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[generation]` - Backend endpoint, prompt template, captions, timeout
//! - `[display]` - Compact layout override and breakpoint
//! - `[gesture]` - Shake detection thresholds
//! - `[share]` - Link and label used by the footer
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PAST_FORWARD_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use past_forward::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let captions = config.generation.effective_captions();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Image generation backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    /// URL the HTTP generator posts to. Unset means generation is not configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Prompt sent per card; `{caption}` is replaced by the decade.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,

    /// Captions rendered as cards, in order.
    #[serde(default = "default_captions")]
    pub captions: Vec<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            prompt_template: default_prompt_template(),
            captions: default_captions(),
            timeout_secs: DEFAULT_GENERATION_TIMEOUT_SECS,
        }
    }
}

impl GenerationConfig {
    /// Timeout clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .clamp(MIN_GENERATION_TIMEOUT_SECS, MAX_GENERATION_TIMEOUT_SECS),
        )
    }

    /// Captions with blanks and duplicates removed, falling back to the defaults
    /// when nothing usable is left.
    #[must_use]
    pub fn effective_captions(&self) -> Vec<String> {
        let mut captions: Vec<String> = Vec::with_capacity(self.captions.len());
        for caption in &self.captions {
            let caption = caption.trim();
            if !caption.is_empty() && !captions.iter().any(|c| c == caption) {
                captions.push(caption.to_string());
            }
        }

        if captions.is_empty() {
            default_captions()
        } else {
            captions
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Forces the compact (touch) layout on or off. Unset follows the window width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compact_mode: Option<bool>,

    /// Window width below which the compact layout is used.
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compact_mode: None,
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
        }
    }
}

impl DisplayConfig {
    /// Resolves compact mode for the given window width.
    #[must_use]
    pub fn is_compact(&self, window_width: f32) -> bool {
        self.compact_mode.unwrap_or_else(|| {
            let breakpoint = if self.compact_breakpoint.is_finite() {
                self.compact_breakpoint
                    .clamp(MIN_COMPACT_BREAKPOINT, MAX_COMPACT_BREAKPOINT)
            } else {
                DEFAULT_COMPACT_BREAKPOINT
            };
            window_width < breakpoint
        })
    }
}

/// Shake gesture thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Direction reversals required within the window.
    #[serde(default = "default_shake_reversals")]
    pub shake_reversals: u32,

    /// Window in which the reversals must occur (milliseconds).
    #[serde(default = "default_shake_window_ms")]
    pub shake_window_ms: u64,

    /// Release speed in pixels per second that also counts as a shake.
    #[serde(default = "default_release_velocity")]
    pub release_velocity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            shake_reversals: DEFAULT_SHAKE_REVERSALS,
            shake_window_ms: DEFAULT_SHAKE_WINDOW_MS,
            release_velocity: DEFAULT_RELEASE_VELOCITY,
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn reversals(&self) -> u32 {
        self.shake_reversals
            .clamp(MIN_SHAKE_REVERSALS, MAX_SHAKE_REVERSALS)
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        Duration::from_millis(
            self.shake_window_ms
                .clamp(MIN_SHAKE_WINDOW_MS, MAX_SHAKE_WINDOW_MS),
        )
    }

    #[must_use]
    pub fn velocity(&self) -> f32 {
        if self.release_velocity.is_finite() {
            self.release_velocity
                .clamp(MIN_RELEASE_VELOCITY, MAX_RELEASE_VELOCITY)
        } else {
            DEFAULT_RELEASE_VELOCITY
        }
    }
}

/// Share settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareConfig {
    #[serde(default = "default_site_url")]
    pub site_url: String,

    #[serde(default = "default_site_label")]
    pub site_label: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            site_label: default_site_label(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Generation backend settings.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Layout settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Shake gesture thresholds.
    #[serde(default)]
    pub gesture: GestureConfig,

    /// Share settings.
    #[serde(default)]
    pub share: ShareConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

fn default_captions() -> Vec<String> {
    DEFAULT_CAPTIONS.iter().map(|c| (*c).to_string()).collect()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_GENERATION_TIMEOUT_SECS
}

fn default_compact_breakpoint() -> f32 {
    DEFAULT_COMPACT_BREAKPOINT
}

fn default_shake_reversals() -> u32 {
    DEFAULT_SHAKE_REVERSALS
}

fn default_shake_window_ms() -> u64 {
    DEFAULT_SHAKE_WINDOW_MS
}

fn default_release_velocity() -> f32 {
    DEFAULT_RELEASE_VELOCITY
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

fn default_site_label() -> String {
    DEFAULT_SITE_LABEL.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
