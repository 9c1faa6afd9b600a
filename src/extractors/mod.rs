//! Request extractors.

pub mod candy_body;
pub use candy_body::CandyBody;
