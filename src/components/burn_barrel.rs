//! Burn Barrel Component
//!
//! The delete-by-drop zone. Dropping a card here removes it from the board;
//! no gap resolution is involved.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::use_drag_context;

use board_core::Board;

/// Delete zone shown beside the lanes
#[component]
pub fn BurnBarrel(
    board: ReadSignal<Board>,
    set_board: WriteSignal<Board>,
) -> impl IntoView {
    let drag = use_drag_context();

    let (active, set_active) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_active.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_active.set(false);

        let Some(card_id) = drag.dragging_id() else {
            return;
        };
        drag.end();

        web_sys::console::log_1(&format!("[DND] Burn: card={}", card_id).into());
        set_board.set(board.get_untracked().remove_card(&card_id));
    };

    view! {
        <div
            class=move || {
                let mut c = String::from("burn-barrel");
                if active.get() {
                    c.push_str(" active");
                }
                c
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            {move || if active.get() { "🔥" } else { "🗑" }}
        </div>
    }
}
