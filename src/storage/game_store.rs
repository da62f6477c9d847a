//! Game Store
//!
//! Save/load of the board pool and the single game-state record. The
//! snapshot codec lives in `bingo-core`; this module only moves codec
//! types across the JS boundary.

use wasm_bindgen::JsValue;
use web_sys::{IdbDatabase, IdbRequest, IdbTransactionMode};

use bingo_core::{GameSnapshot, StoredBoard, GAME_STATE_KEY};

use super::idb::{await_request, open_db, BOARDS_STORE, STATE_STORE};

/// Durably store the snapshot: one row per board plus the state
/// record, in a single readwrite transaction.
pub async fn save(snapshot: &GameSnapshot) -> Result<(), String> {
    let db = open_db().await?;
    let result = write_snapshot(&db, snapshot).await;
    db.close();
    result
}

/// Most recent stored snapshot, or `None` when nothing was saved yet.
pub async fn load() -> Result<Option<GameSnapshot>, String> {
    let db = open_db().await?;
    let result = read_snapshot(&db).await;
    db.close();
    result
}

/// Drop both stores (used together with the worker's cache clear).
pub async fn clear() -> Result<(), String> {
    let db = open_db().await?;
    let result = clear_stores(&db).await;
    db.close();
    result
}

fn store_names() -> js_sys::Array {
    js_sys::Array::of2(
        &JsValue::from_str(BOARDS_STORE),
        &JsValue::from_str(STATE_STORE),
    )
}

async fn write_snapshot(db: &IdbDatabase, snapshot: &GameSnapshot) -> Result<(), String> {
    let tx = db
        .transaction_with_str_sequence_and_mode(&store_names(), IdbTransactionMode::Readwrite)
        .map_err(|e| format!("open transaction: {e:?}"))?;

    // Queue every write before awaiting anything, so the transaction
    // always has a pending request and cannot auto-commit early.
    let mut pending: Vec<IdbRequest> = Vec::new();

    let boards = tx
        .object_store(BOARDS_STORE)
        .map_err(|e| format!("boards store: {e:?}"))?;
    for board in &snapshot.boards {
        let value = serde_wasm_bindgen::to_value(board).map_err(|e| e.to_string())?;
        let request = boards
            .put_with_key(&value, &JsValue::from(board.id))
            .map_err(|e| format!("queue board write: {e:?}"))?;
        pending.push(request);
    }

    let state = tx
        .object_store(STATE_STORE)
        .map_err(|e| format!("state store: {e:?}"))?;
    let value = serde_wasm_bindgen::to_value(snapshot).map_err(|e| e.to_string())?;
    let request = state
        .put_with_key(&value, &JsValue::from(GAME_STATE_KEY))
        .map_err(|e| format!("queue state write: {e:?}"))?;
    pending.push(request);

    for request in pending {
        await_request(request).await?;
    }
    Ok(())
}

async fn read_snapshot(db: &IdbDatabase) -> Result<Option<GameSnapshot>, String> {
    let tx = db
        .transaction_with_str_sequence_and_mode(&store_names(), IdbTransactionMode::Readonly)
        .map_err(|e| format!("open transaction: {e:?}"))?;

    let state = tx
        .object_store(STATE_STORE)
        .map_err(|e| format!("state store: {e:?}"))?;
    let request = state
        .get(&JsValue::from(GAME_STATE_KEY))
        .map_err(|e| format!("queue state read: {e:?}"))?;
    let value = await_request(request).await?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let mut snapshot: GameSnapshot =
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())?;

    // Board rows are authoritative; the snapshot's embedded copies
    // are the fallback for older saves.
    let boards = tx
        .object_store(BOARDS_STORE)
        .map_err(|e| format!("boards store: {e:?}"))?;
    let request = boards
        .get_all()
        .map_err(|e| format!("queue board read: {e:?}"))?;
    let rows = await_request(request).await?;
    let mut rows: Vec<StoredBoard> = serde_wasm_bindgen::from_value(rows).unwrap_or_default();
    if !rows.is_empty() {
        rows.sort_by_key(|b| b.id);
        snapshot.boards = rows;
    }

    Ok(Some(snapshot))
}

async fn clear_stores(db: &IdbDatabase) -> Result<(), String> {
    let tx = db
        .transaction_with_str_sequence_and_mode(&store_names(), IdbTransactionMode::Readwrite)
        .map_err(|e| format!("open transaction: {e:?}"))?;
    let pending = [
        tx.object_store(BOARDS_STORE)
            .and_then(|s| s.clear())
            .map_err(|e| format!("clear boards: {e:?}"))?,
        tx.object_store(STATE_STORE)
            .and_then(|s| s.clear())
            .map_err(|e| format!("clear state: {e:?}"))?,
    ];
    for request in pending {
        await_request(request).await?;
    }
    Ok(())
}
