//! Lane Column Component
//!
//! One workflow column: heading with live count, the lane's cards with a
//! drop indicator above each, the end-of-lane indicator, and the add-card
//! form. Owns the lane's ephemeral drag state (hover background + which
//! indicator is lit).

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::components::{AddCardForm, CardView, DropIndicator};
use crate::context::use_drag_context;
use crate::dnd::resolve_gap;

use board_core::{Board, Gap, Lane};

/// Lane column with drag-and-drop reordering
#[component]
pub fn LaneColumn(
    lane: Lane,
    board: ReadSignal<Board>,
    set_board: WriteSignal<Board>,
) -> impl IntoView {
    let drag = use_drag_context();

    let (active, set_active) = signal(false);
    // The one lit indicator in this lane; None clears them all.
    let (highlight, set_highlight) = signal::<Option<Gap>>(None);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if drag.dragging_id().is_none() {
            return;
        }
        // Re-resolve on every move so the indicator always matches what a
        // drop at this instant would do.
        set_highlight.set(Some(resolve_gap(lane, ev.client_y() as f64)));
        set_active.set(true);
    };

    // Cancellation semantic: leaving only resets ephemeral state, never the
    // board.
    let on_dragleave = move |_: DragEvent| {
        set_active.set(false);
        set_highlight.set(None);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_active.set(false);
        set_highlight.set(None);

        let Some(card_id) = drag.dragging_id() else {
            return;
        };
        drag.end();

        let gap = resolve_gap(lane, ev.client_y() as f64);
        web_sys::console::log_1(
            &format!(
                "[DND] Drop: card={}, lane={}, before={}",
                card_id,
                lane.key(),
                gap.marker()
            )
            .into(),
        );
        set_board.set(board.get_untracked().move_card(&card_id, lane, &gap));
    };

    let lane_cards = move || board.get().in_lane(lane).cloned().collect::<Vec<_>>();

    let area_class = move || {
        let mut c = String::from("lane-drop-area");
        if active.get() {
            c.push_str(" active");
        }
        c
    };

    view! {
        <div class="lane-column">
            <div class="lane-header">
                <h3 class=format!("lane-heading {}", lane.key())>{lane.title()}</h3>
                <span class="lane-count">{move || board.get().in_lane(lane).count()}</span>
            </div>
            <div
                class=area_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <For
                    each=lane_cards
                    key=|card| card.id.clone()
                    children=move |card| {
                        view! { <CardView card=card highlight=highlight /> }
                    }
                />
                <DropIndicator gap=Gap::EndOfLane lane=lane highlight=highlight />
                <AddCardForm lane=lane board=board set_board=set_board />
            </div>
        </div>
    }
}
