//! Cards
//!
//! A single task card. The id is assigned once at creation and stays stable
//! for the card's lifetime; only the lane ever changes afterwards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lane::Lane;

/// One task card on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub lane: Lane,
}

impl Card {
    /// Create a card with a fresh unique id.
    pub fn new(title: impl Into<String>, lane: Lane) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            lane,
        }
    }
}
