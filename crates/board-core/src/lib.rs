//! Board Core
//!
//! Pure domain logic for the driftboard task tracker: lanes, cards, the
//! ordered board collection, the nearest-gap drop resolver, and the reorder
//! engine. No DOM or rendering dependencies, so everything here is
//! unit-testable on the host.

mod board;
mod card;
mod gap;
mod lane;

pub use board::Board;
pub use card::Card;
pub use gap::{nearest_gap, Gap, GapMarker, DISTANCE_OFFSET, END_OF_LANE};
pub use lane::Lane;
