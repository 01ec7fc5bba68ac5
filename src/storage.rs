//! Local Storage Persistence
//!
//! Fire-and-forget persistence of the board to browser localStorage. A
//! missing or unparseable blob is never fatal; startup just begins with an
//! empty board.

use board_core::Board;

const STORAGE_KEY: &str = "driftboard.cards";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the persisted board, or an empty one when nothing usable is stored.
pub fn load_board() -> Board {
    let raw = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    match raw {
        Some(raw) if !raw.is_empty() => match Board::try_from_json(&raw) {
            Ok(board) => {
                web_sys::console::log_1(
                    &format!("[STORE] Loaded {} cards", board.len()).into(),
                );
                board
            }
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[STORE] Discarding malformed persisted board: {}", e).into(),
                );
                Board::new()
            }
        },
        _ => Board::new(),
    }
}

/// Persist the board. Serialization or storage failures only warn; the
/// in-memory board stays authoritative either way.
pub fn save_board(board: &Board) {
    let Some(storage) = local_storage() else {
        return;
    };
    match board.to_json() {
        Ok(blob) => {
            if storage.set_item(STORAGE_KEY, &blob).is_err() {
                web_sys::console::warn_1(&"[STORE] Failed to write board".into());
            }
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[STORE] Serialize failed: {}", e).into());
        }
    }
}
