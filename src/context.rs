//! Drag Session Context
//!
//! The single active drag session, provided via Leptos Context API. Only one
//! card can be dragged at a time in the single-pointer model, so one signal
//! pair is the whole session.

use leptos::prelude::*;

/// App-wide drag session provided via context
#[derive(Clone, Copy)]
pub struct DragContext {
    /// Id of the card currently being dragged, if any - read
    pub dragging: ReadSignal<Option<String>>,
    /// Id of the card currently being dragged, if any - write
    set_dragging: WriteSignal<Option<String>>,
}

impl DragContext {
    pub fn new(dragging: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            dragging: dragging.0,
            set_dragging: dragging.1,
        }
    }

    /// Begin a drag session for one card
    pub fn start(&self, card_id: String) {
        self.set_dragging.set(Some(card_id));
    }

    /// Tear down the session (drop or cancel)
    pub fn end(&self) {
        self.set_dragging.set(None);
    }

    /// The dragged card id without subscribing to the signal
    pub fn dragging_id(&self) -> Option<String> {
        self.dragging.get_untracked()
    }
}

/// Get the drag context from Leptos context
pub fn use_drag_context() -> DragContext {
    expect_context::<DragContext>()
}
