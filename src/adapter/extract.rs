//! Key-gated extraction of scannable text from nested hook payloads.
//!
//! Hook documents bury user text and tool output at varying depths and under
//! host-specific key names. The walkers here collect candidate strings: a
//! string becomes eligible once the walk has passed through a key from the
//! relevant allowlist, and tool-output walks additionally pick up strings
//! that were never under any labeled key (post-hook payloads are scanned
//! exhaustively).

use serde_json::Value;
use std::collections::HashSet;

/// Keys under which user-authored message text may appear.
pub const USER_MESSAGE_KEYS: &[&str] = &[
    "messages",
    "message",
    "text",
    "content",
    "input",
    "input_text",
    "prompt",
    "body",
    "segments",
    "user_message",
];

/// Keys under which command or tool output may appear.
pub const COMMAND_OUTPUT_KEYS: &[&str] = &[
    "stdout",
    "stderr",
    "output",
    "content",
    "text",
    "message",
    "result",
    "body",
    "response",
    "value",
];

/// Collect user-authored texts from a prompt-submission payload.
///
/// Handles both the `messages` array shape (entries with `role: "user"`) and
/// the flat single-field shapes the hosts emit.
pub fn user_texts(payload: &Value) -> Vec<String> {
    let mut out = Vec::new();
    let Some(obj) = payload.as_object() else {
        return out;
    };

    if let Some(Value::Array(msgs)) = obj.get("messages") {
        for entry in msgs {
            let Some(entry) = entry.as_object() else {
                continue;
            };
            if entry.get("role").and_then(Value::as_str) != Some("user") {
                continue;
            }
            match entry.get("content") {
                Some(Value::String(s)) if !s.trim().is_empty() => out.push(s.clone()),
                Some(other) => texts_for_keys(other, USER_MESSAGE_KEYS, true, &mut out),
                None => {}
            }
            if let Some(Value::String(t)) = entry.get("text") {
                if !t.trim().is_empty() {
                    out.push(t.clone());
                }
            }
        }
    }

    for key in ["message", "input", "input_text", "prompt", "body", "text", "userMessage"] {
        if let Some(value) = obj.get(key) {
            texts_for_keys(value, USER_MESSAGE_KEYS, true, &mut out);
        }
    }

    out
}

fn texts_for_keys(value: &Value, keys: &[&str], allowed: bool, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            if allowed && !s.trim().is_empty() {
                out.push(s.clone());
            }
        }
        Value::Array(items) => {
            for item in items {
                texts_for_keys(item, keys, allowed, out);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                let next = allowed || keys.contains(&k.to_lowercase().as_str());
                texts_for_keys(v, keys, next, out);
            }
        }
        _ => {}
    }
}

/// Collect (raw label, text) pairs of tool output from a post-hook payload,
/// deduplicated by trimmed text.
pub fn command_outputs(data: &Value) -> Vec<(String, String)> {
    let mut collected = Vec::new();

    if let Value::String(s) = data {
        if !s.trim().is_empty() {
            collected.push(("content".to_string(), s.clone()));
        }
    } else {
        walk_outputs(data, None, false, &mut collected);
    }

    let mut seen = HashSet::new();
    collected
        .into_iter()
        .filter(|(_, text)| {
            let trimmed = text.trim();
            !trimmed.is_empty() && seen.insert(trimmed.to_string())
        })
        .collect()
}

fn walk_outputs(
    node: &Value,
    label: Option<&str>,
    allowed: bool,
    out: &mut Vec<(String, String)>,
) {
    match node {
        Value::String(s) => {
            // Strings never nested under a labeled key are still collected;
            // post-hook content is scanned exhaustively.
            if !s.trim().is_empty() && (allowed || label.is_none()) {
                out.push((label.unwrap_or("content").to_string(), s.clone()));
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_outputs(item, label, allowed, out);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                let lower = k.to_lowercase();
                let recognized = COMMAND_OUTPUT_KEYS.contains(&lower.as_str());
                let next_allowed = allowed || recognized;
                let next_label = if recognized { Some(k.as_str()) } else { label };
                walk_outputs(v, next_label, next_allowed, out);
            }
        }
        _ => {}
    }
}
