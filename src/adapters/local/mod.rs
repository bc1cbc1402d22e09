//! Local storage adapters.

pub mod fs;
pub mod memory;

pub use fs::FileStorageArea;
pub use memory::MemoryStorageArea;
