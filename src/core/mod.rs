//! Core math shared by every system

pub mod vec2;

pub use vec2::Vec2;
