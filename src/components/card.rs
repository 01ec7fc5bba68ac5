//! Card Component
//!
//! A draggable task card plus the drop indicator rendered above it.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::use_drag_context;
use crate::dnd::set_transfer_card_id;

use board_core::{Card, Gap, Lane};

/// Draggable card with its leading drop indicator
#[component]
pub fn CardView(card: Card, highlight: ReadSignal<Option<Gap>>) -> impl IntoView {
    let drag = use_drag_context();

    let gap_above = Gap::Before(card.id.clone());
    let drag_id = card.id.clone();

    let on_dragstart = move |ev: DragEvent| {
        set_transfer_card_id(&ev, &drag_id);
        drag.start(drag_id.clone());
    };

    // Fires on drop and on cancel alike; either way the session is over.
    let on_dragend = move |_: DragEvent| {
        drag.end();
    };

    view! {
        <DropIndicator gap=gap_above lane=card.lane highlight=highlight />
        <div
            class="card"
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <p class="card-title">{card.title}</p>
        </div>
    }
}

/// Drop indicator: the thin boundary line that acts as a drop target. The
/// `data-lane`/`data-before` attributes are what `dnd::collect_gap_markers`
/// measures.
#[component]
pub fn DropIndicator(
    gap: Gap,
    lane: Lane,
    highlight: ReadSignal<Option<Gap>>,
) -> impl IntoView {
    let marker = gap.marker().to_string();
    let is_active = move || highlight.get().as_ref() == Some(&gap);

    view! {
        <div
            class=move || {
                let mut c = String::from("drop-indicator");
                if is_active() {
                    c.push_str(" active");
                }
                c
            }
            data-before=marker
            data-lane=lane.key()
        />
    }
}
