// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Generation**: Backend timeout and the prompt/caption set
//! - **Display**: Compact layout breakpoint
//! - **Gesture**: Shake detection thresholds
//! - **Share**: Link shared by the footer

// ==========================================================================
// Generation Defaults
// ==========================================================================

/// Default request timeout for the image generation backend (in seconds).
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 120;

/// Minimum generation timeout (in seconds).
pub const MIN_GENERATION_TIMEOUT_SECS: u64 = 5;

/// Maximum generation timeout (in seconds).
pub const MAX_GENERATION_TIMEOUT_SECS: u64 = 600;

/// Placeholder substituted with the card caption in the prompt template.
pub const CAPTION_PLACEHOLDER: &str = "{caption}";

/// Prompt sent to the backend for each decade.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Reimagine the person in this photo in the style of the {caption}. This includes clothing, hairstyle, photo quality, and the overall aesthetic of that decade. The output must be a photorealistic image showing the person clearly.";

/// Decades rendered as cards, in display order.
pub const DEFAULT_CAPTIONS: [&str; 6] = ["1950s", "1960s", "1970s", "1980s", "1990s", "2000s"];

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Window width (logical pixels) below which the compact layout is used.
pub const DEFAULT_COMPACT_BREAKPOINT: f32 = 768.0;

/// Minimum accepted compact breakpoint.
pub const MIN_COMPACT_BREAKPOINT: f32 = 320.0;

/// Maximum accepted compact breakpoint.
pub const MAX_COMPACT_BREAKPOINT: f32 = 4096.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal direction changes needed to count a drag as a shake.
pub const DEFAULT_SHAKE_REVERSALS: u32 = 3;

/// Minimum reversal count (fewer would make every wiggle a shake).
pub const MIN_SHAKE_REVERSALS: u32 = 2;

/// Maximum reversal count.
pub const MAX_SHAKE_REVERSALS: u32 = 12;

/// Time window in which the reversals must happen (in milliseconds).
pub const DEFAULT_SHAKE_WINDOW_MS: u64 = 800;

/// Minimum shake window (in milliseconds).
pub const MIN_SHAKE_WINDOW_MS: u64 = 100;

/// Maximum shake window (in milliseconds).
pub const MAX_SHAKE_WINDOW_MS: u64 = 5_000;

/// Release speed (pixels per second) that counts as a forceful toss.
pub const DEFAULT_RELEASE_VELOCITY: f32 = 2_500.0;

/// Minimum release velocity threshold.
pub const MIN_RELEASE_VELOCITY: f32 = 200.0;

/// Maximum release velocity threshold.
pub const MAX_RELEASE_VELOCITY: f32 = 20_000.0;

// ==========================================================================
// Share Defaults
// ==========================================================================

/// Link shared by the footer's "Share Website" button.
pub const DEFAULT_SITE_URL: &str = "https://pastforward.app";

/// Label shown after "Developed by" in the footer.
pub const DEFAULT_SITE_LABEL: &str = "Past Forward";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Generation
    assert!(MIN_GENERATION_TIMEOUT_SECS > 0);
    assert!(MIN_GENERATION_TIMEOUT_SECS <= DEFAULT_GENERATION_TIMEOUT_SECS);
    assert!(DEFAULT_GENERATION_TIMEOUT_SECS <= MAX_GENERATION_TIMEOUT_SECS);
    assert!(!DEFAULT_CAPTIONS.is_empty());

    // Display
    assert!(MIN_COMPACT_BREAKPOINT > 0.0);
    assert!(MIN_COMPACT_BREAKPOINT <= DEFAULT_COMPACT_BREAKPOINT);
    assert!(DEFAULT_COMPACT_BREAKPOINT <= MAX_COMPACT_BREAKPOINT);

    // Gesture
    assert!(MIN_SHAKE_REVERSALS <= DEFAULT_SHAKE_REVERSALS);
    assert!(DEFAULT_SHAKE_REVERSALS <= MAX_SHAKE_REVERSALS);
    assert!(MIN_SHAKE_WINDOW_MS <= DEFAULT_SHAKE_WINDOW_MS);
    assert!(DEFAULT_SHAKE_WINDOW_MS <= MAX_SHAKE_WINDOW_MS);
    assert!(MIN_RELEASE_VELOCITY <= DEFAULT_RELEASE_VELOCITY);
    assert!(DEFAULT_RELEASE_VELOCITY <= MAX_RELEASE_VELOCITY);
};
