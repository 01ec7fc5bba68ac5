//! UI Components
//!
//! Reusable Leptos components.

mod add_card_form;
mod burn_barrel;
mod card;
mod lane_column;

pub use add_card_form::AddCardForm;
pub use burn_barrel::BurnBarrel;
pub use card::{CardView, DropIndicator};
pub use lane_column::LaneColumn;
