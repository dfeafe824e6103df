// SPDX-License-Identifier: MPL-2.0
//! `past_forward` generates portraits across the decades and shows each one
//! as a polaroid card, built with the Iced GUI framework.
//!
//! Cards flip while their image develops, can be shaken to regenerate, and
//! offer download and share actions once the image is ready. Localization
//! uses Fluent and preferences live in a TOML settings file.

#![doc(html_root_url = "https://docs.rs/past_forward/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
