//! Drag-and-Drop DOM Glue
//!
//! Translates raw pointer events into resolver input. The indicator
//! elements carry `data-lane`/`data-before` attributes; this module measures
//! them into plain [`GapMarker`] data so the core resolver never sees the
//! DOM.

use board_core::{nearest_gap, Gap, GapMarker, Lane, END_OF_LANE};
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// Measure the drop indicators of `lane`, top to bottom in document order
/// (the end-of-lane sentinel renders last).
pub fn collect_gap_markers(lane: Lane) -> Vec<GapMarker> {
    let mut markers = Vec::new();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return markers;
    };
    let selector = format!("[data-lane=\"{}\"]", lane.key());
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return markers;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let before = element
            .get_attribute("data-before")
            .unwrap_or_else(|| END_OF_LANE.to_string());
        markers.push(GapMarker {
            gap: Gap::from_marker(&before),
            top: element.get_bounding_client_rect().top(),
        });
    }
    markers
}

/// Resolve the gap a pointer at `client_y` is aiming at in `lane`. Used for
/// both the live indicator and the authoritative drop, so the two always
/// agree.
pub fn resolve_gap(lane: Lane, client_y: f64) -> Gap {
    let markers = collect_gap_markers(lane);
    nearest_gap(client_y, &markers)
        .map(|m| m.gap.clone())
        .unwrap_or(Gap::EndOfLane)
}

/// Stamp the dragged card id onto the event's dataTransfer. Firefox won't
/// start a drag without a payload; the drop handlers read the id from the
/// drag context instead.
pub fn set_transfer_card_id(ev: &DragEvent, card_id: &str) {
    if let Some(transfer) = ev.data_transfer() {
        let _ = transfer.set_data("cardId", card_id);
    }
}
