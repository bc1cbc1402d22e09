//! Domain layer - Pure business types and data.

pub mod i18n;
pub mod id;
pub mod theme;
pub mod video;
