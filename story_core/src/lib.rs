//! # Story Core
//!
//! The branching dialogue engine for Qi Path. This crate loads dialogue
//! scripts, tracks the hero's four stats, and advances the story one click at
//! a time through a [`DialogueSession`].
//!
//! ## Core Components
//!
//! - **dialogue**: Pages, choices, and validated scripts
//! - **session**: The per-frame state machine that walks a script
//! - **events**: Click events and the latch that hands them to the session
//! - **host**: Capabilities the embedding environment provides
//!
//! ## Design Philosophy
//!
//! - **Host-Driven**: The host owns the frame loop and calls `update` once per frame
//! - **No Ambient State**: Clicks arrive through an explicit [`InputLatch`]
//! - **Fail Fast**: Broken scripts are rejected at load, not mid-play

pub mod config;
pub mod dialogue;
pub mod error;
pub mod events;
pub mod host;
pub mod session;
pub mod stats;

pub use config::*;
pub use dialogue::*;
pub use error::*;
pub use events::*;
pub use host::*;
pub use session::*;
pub use stats::*;
