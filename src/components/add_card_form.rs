//! Add Card Form Component
//!
//! Collapsed "Add card" button that expands into a textarea form at the
//! bottom of a lane. A whitespace-only title is declined by the core and
//! keeps the form open for correction.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use board_core::{Board, Lane};

/// Form for creating new cards in one lane
#[component]
pub fn AddCardForm(
    lane: Lane,
    board: ReadSignal<Board>,
    set_board: WriteSignal<Board>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (adding, set_adding) = signal(false);

    let create_card = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match board.get_untracked().add_card(&text.get_untracked(), lane) {
            Some(next) => {
                set_board.set(next);
                set_text.set(String::new());
                set_adding.set(false);
            }
            // Declined (empty title): leave the form open, nothing changes.
            None => {}
        }
    };

    view! {
        <Show when=move || adding.get()>
            <form class="add-card-form" on:submit=create_card>
                <textarea
                    placeholder="Add new task..."
                    autofocus
                    prop:value=move || text.get()
                    on:input=move |ev| {
                        let Some(target) = ev.target() else { return };
                        if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                            set_text.set(area.value());
                        }
                    }
                />
                <div class="add-card-actions">
                    <button
                        type="button"
                        class="close-btn"
                        on:click=move |_| set_adding.set(false)
                    >
                        "Close"
                    </button>
                    <button type="submit" class="submit-btn">
                        "Add +"
                    </button>
                </div>
            </form>
        </Show>
        <Show when=move || !adding.get()>
            <button class="add-card-btn" on:click=move |_| set_adding.set(true)>
                "Add card +"
            </button>
        </Show>
    }
}
