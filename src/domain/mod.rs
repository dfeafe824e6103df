// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`card`]: Card identity and lifecycle ([`Caption`](card::Caption),
//!   [`CardState`](card::CardState)), face selection, affordance gating and
//!   status transitions
//! - [`progress`]: Timeline progress ([`GenerationProgress`](progress::GenerationProgress))

pub mod card;
pub mod progress;
