// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the file-system side of downloads.
//!
//! # Available Adapters
//!
//! - [`http_generator`]: Image generation over HTTP (implements [`ImageGenerator`])
//! - [`download`]: Save dialog and file writing for generated images
//! - [`browser`]: Opens the site link in the default browser
//!
//! [`ImageGenerator`]: crate::application::port::ImageGenerator

pub mod browser;
pub mod download;
pub mod http_generator;

pub use http_generator::HttpGenerator;
