//! Board Collection & Reorder Engine
//!
//! One ordered sequence of cards across all lanes. A lane's visible list is
//! the stable-order sub-sequence of cards tagged with that lane, so moving a
//! card is always remove-then-reinsert on the full sequence. Every transform
//! returns a fresh `Board`; the UI swaps the whole collection atomically and
//! stays the single writer.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::gap::Gap;
use crate::lane::Lane;

/// The board collection. Serializes transparently as the flat JSON array of
/// cards that gets persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in `lane`, in display order.
    pub fn in_lane(&self, lane: Lane) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(move |card| card.lane == lane)
    }

    /// Add a new card at the end of `lane`. The title is trimmed; a
    /// whitespace-only title declines the add and returns `None` so the form
    /// can stay open for correction.
    pub fn add_card(&self, title: &str, lane: Lane) -> Option<Board> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let mut cards = self.cards.clone();
        cards.push(Card::new(title, lane));
        Some(Board { cards })
    }

    /// Move the card with `card_id` into `target_lane` at `gap`.
    ///
    /// Fails soft: an unknown dragged id (stale drag session) or an unknown
    /// insert-before id (stale marker from a concurrent re-render) returns
    /// the board unchanged. Dropping a card into the gap it already occupies
    /// is detected up front and is a no-op.
    pub fn move_card(&self, card_id: &str, target_lane: Lane, gap: &Gap) -> Board {
        let Some(from) = self.cards.iter().position(|c| c.id == card_id) else {
            return self.clone();
        };

        // A card's own indicator is the gap directly above it; dropping
        // there moves nothing.
        if matches!(gap, Gap::Before(before) if before == card_id) {
            return self.clone();
        }

        // Same-lane drop into the gap the card already occupies.
        if self.cards[from].lane == target_lane {
            let successor = self.successor_in_lane(from);
            let in_place = match gap {
                Gap::Before(before) => successor.map(|c| c.id.as_str()) == Some(before),
                Gap::EndOfLane => successor.is_none(),
            };
            if in_place {
                return self.clone();
            }
        }

        let mut cards = self.cards.clone();
        let mut dragged = cards.remove(from);
        dragged.lane = target_lane;

        match gap {
            Gap::EndOfLane => cards.push(dragged),
            Gap::Before(before) => {
                let Some(at) = cards.iter().position(|c| &c.id == before) else {
                    return self.clone();
                };
                cards.insert(at, dragged);
            }
        }

        Board { cards }
    }

    /// Remove the card with `card_id`. Unknown ids are a no-op.
    pub fn remove_card(&self, card_id: &str) -> Board {
        let mut cards = self.cards.clone();
        cards.retain(|card| card.id != card_id);
        Board { cards }
    }

    /// The next card after index `from` sharing its lane, if any.
    fn successor_in_lane(&self, from: usize) -> Option<&Card> {
        let lane = self.cards[from].lane;
        self.cards[from + 1..].iter().find(|card| card.lane == lane)
    }

    /// Serialize to the persisted JSON blob (a flat array of cards).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Strict parse of a persisted blob.
    pub fn try_from_json(raw: &str) -> Result<Board, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Lenient parse. Absent, empty, or malformed input all yield an empty
    /// board; a broken blob must never be fatal at startup.
    pub fn from_json(raw: Option<&str>) -> Board {
        match raw {
            Some(raw) if !raw.is_empty() => Board::try_from_json(raw).unwrap_or_default(),
            _ => Board::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn card(id: &str, lane: Lane) -> Card {
        Card {
            id: id.to_string(),
            title: format!("Card {}", id),
            lane,
        }
    }

    fn board(cards: Vec<Card>) -> Board {
        Board { cards }
    }

    fn ids(board: &Board) -> Vec<&str> {
        board.cards().iter().map(|c| c.id.as_str()).collect()
    }

    fn sample() -> Board {
        board(vec![
            card("1", Lane::Backlog),
            card("2", Lane::Backlog),
            card("3", Lane::Todo),
        ])
    }

    #[test]
    fn test_drop_before_moves_card_within_lane() {
        let next = sample().move_card("2", Lane::Backlog, &Gap::Before("1".into()));
        assert_eq!(ids(&next), vec!["2", "1", "3"]);
        assert_eq!(next.cards()[0].lane, Lane::Backlog);
    }

    #[test]
    fn test_drop_at_end_of_lane_appends_and_retags() {
        let next = sample().move_card("3", Lane::Backlog, &Gap::EndOfLane);
        assert_eq!(ids(&next), vec!["1", "2", "3"]);
        assert_eq!(next.cards()[2].lane, Lane::Backlog);
    }

    #[test]
    fn test_cross_lane_drop_before_target() {
        let next = sample().move_card("3", Lane::Backlog, &Gap::Before("2".into()));
        assert_eq!(ids(&next), vec!["1", "3", "2"]);
        assert_eq!(next.cards()[1].lane, Lane::Backlog);
        // Todo lane is now empty.
        assert_eq!(next.in_lane(Lane::Todo).count(), 0);
    }

    #[test]
    fn test_remove_card_drops_exactly_one() {
        let next = sample().remove_card("2");
        assert_eq!(ids(&next), vec!["1", "3"]);
        assert_eq!(next.len(), sample().len() - 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        assert_eq!(sample().remove_card("missing"), sample());
    }

    #[test]
    fn test_whitespace_title_declines_add() {
        assert_eq!(sample().add_card("  ", Lane::Todo), None);
        assert_eq!(sample().add_card("", Lane::Todo), None);
    }

    #[test]
    fn test_add_card_trims_and_appends() {
        let next = sample().add_card("  ship it  ", Lane::Progress).unwrap();
        assert_eq!(next.len(), 4);
        let added = next.cards().last().unwrap();
        assert_eq!(added.title, "ship it");
        assert_eq!(added.lane, Lane::Progress);
    }

    #[test]
    fn test_ids_stay_unique_across_adds() {
        let mut b = Board::new();
        for i in 0..20 {
            b = b.add_card(&format!("card {}", i), Lane::Backlog).unwrap();
        }
        let unique: HashSet<&str> = b.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(unique.len(), b.len());
    }

    #[test]
    fn test_drop_on_own_gap_is_noop() {
        let next = sample().move_card("2", Lane::Backlog, &Gap::Before("2".into()));
        assert_eq!(next, sample());
    }

    #[test]
    fn test_drop_before_current_successor_is_noop() {
        let next = sample().move_card("1", Lane::Backlog, &Gap::Before("2".into()));
        assert_eq!(next, sample());
    }

    #[test]
    fn test_drop_at_tail_while_already_last_is_noop() {
        let next = sample().move_card("2", Lane::Backlog, &Gap::EndOfLane);
        assert_eq!(next, sample());
        let next = sample().move_card("3", Lane::Todo, &Gap::EndOfLane);
        assert_eq!(next, sample());
    }

    #[test]
    fn test_unknown_dragged_id_is_noop() {
        let next = sample().move_card("ghost", Lane::Todo, &Gap::EndOfLane);
        assert_eq!(next, sample());
    }

    #[test]
    fn test_stale_insert_before_id_is_noop() {
        let next = sample().move_card("1", Lane::Todo, &Gap::Before("ghost".into()));
        assert_eq!(next, sample());
    }

    #[test]
    fn test_unrelated_reorder_keeps_other_lanes_stable() {
        let b = board(vec![
            card("1", Lane::Backlog),
            card("2", Lane::Todo),
            card("3", Lane::Backlog),
            card("4", Lane::Todo),
            card("5", Lane::Complete),
        ]);
        let todo_before: Vec<String> =
            b.in_lane(Lane::Todo).map(|c| c.id.clone()).collect();

        // Reorder within backlog only.
        let next = b.move_card("3", Lane::Backlog, &Gap::Before("1".into()));
        let todo_after: Vec<String> =
            next.in_lane(Lane::Todo).map(|c| c.id.clone()).collect();

        assert_eq!(todo_before, todo_after);
        assert_eq!(
            next.in_lane(Lane::Complete).map(|c| c.id.as_str()).collect::<Vec<_>>(),
            vec!["5"]
        );
    }

    #[test]
    fn test_lane_filter_preserves_relative_order() {
        let b = board(vec![
            card("1", Lane::Backlog),
            card("2", Lane::Todo),
            card("3", Lane::Backlog),
            card("4", Lane::Backlog),
        ]);
        let backlog: Vec<&str> = b.in_lane(Lane::Backlog).map(|c| c.id.as_str()).collect();
        assert_eq!(backlog, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_json_round_trip() {
        let b = sample();
        let blob = b.to_json().unwrap();
        assert_eq!(Board::from_json(Some(&blob)), b);

        let empty = Board::new();
        let blob = empty.to_json().unwrap();
        assert_eq!(blob, "[]");
        assert_eq!(Board::from_json(Some(&blob)), empty);
    }

    #[test]
    fn test_absent_or_malformed_blob_yields_empty_board() {
        assert_eq!(Board::from_json(None), Board::new());
        assert_eq!(Board::from_json(Some("")), Board::new());
        assert_eq!(Board::from_json(Some("not json")), Board::new());
        assert_eq!(Board::from_json(Some("{\"cards\":3}")), Board::new());
    }
}
