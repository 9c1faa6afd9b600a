//! HTTP handlers for the candy collection.

pub mod candy;
pub use candy::*;
