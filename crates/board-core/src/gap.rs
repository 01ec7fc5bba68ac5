//! Nearest-Gap Resolver
//!
//! Decides which gap between cards a pointer is aiming at during a drag.
//! The presentation layer measures the rendered drop indicators and hands
//! their positions in as plain [`GapMarker`] data, so the resolver itself
//! never touches the DOM.

/// Marker value meaning "insert at end of lane" in the DOM `data-before`
/// attribute.
pub const END_OF_LANE: &str = "-1";

/// Vertical bias in pixels applied to each marker's threshold. Hovering
/// anywhere in the upper portion of a card selects the gap above it, so the
/// user never needs pixel-perfect alignment on the thin indicator itself.
pub const DISTANCE_OFFSET: f64 = 50.0;

/// A gap between cards: either the boundary directly above a specific card,
/// or the tail of the lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gap {
    /// Insert immediately before the card with this id.
    Before(String),
    /// Append after every card currently in the lane.
    EndOfLane,
}

impl Gap {
    /// Parse the DOM `data-before` attribute value.
    pub fn from_marker(value: &str) -> Gap {
        if value == END_OF_LANE {
            Gap::EndOfLane
        } else {
            Gap::Before(value.to_string())
        }
    }

    /// The `data-before` attribute value for this gap.
    pub fn marker(&self) -> &str {
        match self {
            Gap::Before(id) => id,
            Gap::EndOfLane => END_OF_LANE,
        }
    }
}

/// A rendered drop indicator in one lane: the gap it stands for plus its
/// screen-space top edge. Recomputed from the live layout on every pointer
/// event, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GapMarker {
    pub gap: Gap,
    pub top: f64,
}

/// Resolve the gap nearest to `pointer_y` among `markers`, which must be in
/// top-to-bottom display order (the lane's end-of-lane marker last).
///
/// Each marker's threshold sits [`DISTANCE_OFFSET`] below its top edge. Of
/// the markers whose threshold the pointer has not yet passed, the lowest
/// one wins; on an exact tie the earlier marker is kept. A pointer below
/// every threshold falls back to the last marker, i.e. append at end.
/// Returns `None` only for an empty marker list.
pub fn nearest_gap(pointer_y: f64, markers: &[GapMarker]) -> Option<&GapMarker> {
    let mut nearest: Option<(&GapMarker, f64)> = None;
    for marker in markers {
        let offset = pointer_y - (marker.top + DISTANCE_OFFSET);
        if offset < 0.0 {
            match nearest {
                Some((_, best)) if offset <= best => {}
                _ => nearest = Some((marker, offset)),
            }
        }
    }
    match nearest {
        Some((marker, _)) => Some(marker),
        None => markers.last(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(before: &str, top: f64) -> GapMarker {
        GapMarker {
            gap: Gap::from_marker(before),
            top,
        }
    }

    fn lane_markers() -> Vec<GapMarker> {
        // Three cards roughly 80px apart plus the tail sentinel.
        vec![
            marker("a", 100.0),
            marker("b", 180.0),
            marker("c", 260.0),
            marker(END_OF_LANE, 340.0),
        ]
    }

    #[test]
    fn test_pointer_near_card_top_picks_gap_above() {
        let markers = lane_markers();
        // 190 is below b's top edge but above its biased threshold (230),
        // so the gap above b is still the intended target.
        let hit = nearest_gap(190.0, &markers).unwrap();
        assert_eq!(hit.gap, Gap::Before("b".to_string()));
    }

    #[test]
    fn test_pointer_between_thresholds_picks_next_gap() {
        let markers = lane_markers();
        // Past a's threshold (150) and b's (230), above c's (310).
        let hit = nearest_gap(240.0, &markers).unwrap();
        assert_eq!(hit.gap, Gap::Before("c".to_string()));
    }

    #[test]
    fn test_pointer_below_all_thresholds_falls_back_to_tail() {
        let markers = lane_markers();
        let hit = nearest_gap(1000.0, &markers).unwrap();
        assert_eq!(hit.gap, Gap::EndOfLane);
    }

    #[test]
    fn test_pointer_at_threshold_passes_it() {
        let markers = lane_markers();
        // offset == 0 is not "above" the threshold, so a's gap no longer
        // qualifies and b's wins.
        let hit = nearest_gap(150.0, &markers).unwrap();
        assert_eq!(hit.gap, Gap::Before("b".to_string()));
    }

    #[test]
    fn test_equal_offsets_keep_first_marker() {
        let markers = vec![marker("a", 100.0), marker("b", 100.0)];
        let hit = nearest_gap(120.0, &markers).unwrap();
        assert_eq!(hit.gap, Gap::Before("a".to_string()));
    }

    #[test]
    fn test_empty_lane_resolves_to_sentinel() {
        // An empty lane still renders its tail indicator.
        let markers = vec![marker(END_OF_LANE, 100.0)];
        let hit = nearest_gap(0.0, &markers).unwrap();
        assert_eq!(hit.gap, Gap::EndOfLane);
    }

    #[test]
    fn test_no_markers_resolves_to_none() {
        assert_eq!(nearest_gap(50.0, &[]), None);
    }

    #[test]
    fn test_marker_string_round_trip() {
        assert_eq!(Gap::from_marker("-1"), Gap::EndOfLane);
        assert_eq!(Gap::EndOfLane.marker(), "-1");
        assert_eq!(Gap::from_marker("xyz").marker(), "xyz");
    }
}
