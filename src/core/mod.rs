//! Core discovery and settings
//!
//! This module contains:
//! - Sound-bank discovery over the source tree
//! - Persisted batch settings

mod scanning;
mod state;

pub use scanning::{discover_sound_banks, format_size, is_sound_bank};
pub use state::BatchSettings;
