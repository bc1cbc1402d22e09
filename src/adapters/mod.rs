//! Adapters - Concrete implementations of ports.

pub mod cloudinary;
pub mod local;
