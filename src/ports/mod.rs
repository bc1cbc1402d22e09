//! Ports - Trait definitions implemented by adapters.

pub mod storage;
pub mod transport;
