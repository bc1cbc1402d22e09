//! Application layer - Services wiring domain logic to ports.

pub mod admin;
pub mod playback;
pub mod preferences;
pub mod registry;
