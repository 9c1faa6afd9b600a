//! The candy record and the seed set every fresh store starts from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candy {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl Candy {
    pub fn new(id: i64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Records loaded at process start, in iteration order.
pub fn seed() -> Vec<Candy> {
    vec![
        Candy::new(1, "Toffee Bar", "Red"),
        Candy::new(2, "Pez", "Green"),
        Candy::new(3, "Pop Rocks", "Pink"),
        Candy::new(4, "Sour Patch Kids", "Blue"),
    ]
}
