// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports for the external collaborators.
//!
//! The generation backend and the platform share mechanism are black boxes
//! to the cards. This layer names them as traits so the shell can depend on
//! the interface while infrastructure supplies the implementation.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses `Caption`)
//! - Infrastructure layer implements application layer ports
//! - The app shell wires an implementation into the update loop

pub mod port;
