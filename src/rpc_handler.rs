//! RPC method handler for the search history JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the store or the settings
//! engine held by [`App`].

use tokio::sync::Mutex;

use crate::app::App;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::suggestions;
use crate::types::history::SearchHistoryItem;

use serde_json::{json, Value};

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn items_to_json(items: &[SearchHistoryItem]) -> Result<Value, String> {
    serde_json::to_value(items).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── History ───
        "history.get" => {
            let a = app.lock().await;
            let items = a.store.get_history().map_err(|e| e.to_string())?;
            items_to_json(&items)
        }
        "history.add" => {
            let query = str_param(params, "query")?;
            let mut a = app.lock().await;
            a.store.add_to_history(query).await.map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.remove" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().await;
            a.store.remove_from_history(id).await.map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.clear" => {
            let mut a = app.lock().await;
            a.store.clear_history().await.map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.suggest" => {
            let query = params.get("query").and_then(|v| v.as_str()).unwrap_or("");
            let a = app.lock().await;
            let limit = a.settings_engine.get_settings().suggestion_limit;
            let items = match params.get("history") {
                Some(snapshot) => {
                    let history: Vec<SearchHistoryItem> = serde_json::from_value(snapshot.clone())
                        .map_err(|e| format!("invalid history: {}", e))?;
                    suggestions::suggest_with_limit(query, &history, limit)
                }
                None => a.store.suggestions(query).map_err(|e| e.to_string())?,
            };
            items_to_json(&items)
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().await;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().await;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
