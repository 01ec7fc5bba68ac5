//! Driftboard Frontend App
//!
//! Main application component: owns the one mutable board signal, persists
//! it on change, and lays out the four lanes plus the burn barrel.

use leptos::prelude::*;

use crate::components::{BurnBarrel, LaneColumn};
use crate::context::DragContext;
use crate::storage;

use board_core::Lane;

#[component]
pub fn App() -> impl IntoView {
    // The authoritative collection. Every mutation swaps the whole board,
    // so readers never observe a partial update. Loading happens before the
    // persist effect exists, so the first save can only re-write loaded
    // state.
    let (board, set_board) = signal(storage::load_board());
    let dragging = signal::<Option<String>>(None);

    // Provide the drag session to all children
    provide_context(DragContext::new(dragging));

    // Persist on every board change
    Effect::new(move |_| {
        let current = board.get();
        storage::save_board(&current);
    });

    view! {
        <div class="board">
            {Lane::ALL
                .into_iter()
                .map(|lane| {
                    view! { <LaneColumn lane=lane board=board set_board=set_board /> }
                })
                .collect_view()}
            <BurnBarrel board=board set_board=set_board />
        </div>
    }
}
