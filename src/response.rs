//! Machine-readable hook responses, one shape per host.
//!
//! Both hosts read a single JSON document from the gate's stdout. Claude
//! Code uses one envelope whose meaning varies by hook event; Cursor uses a
//! small family of shapes keyed on the event name. Fields the host does not
//! expect are omitted rather than serialized as null.

use crate::decision::Outcome;
use serde::Serialize;

/// Envelope understood by Claude Code hooks.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeResponse {
    pub hook_specific_output: ClaudeHookOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeHookOutput {
    pub hook_event_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

/// Build the Claude Code response for a verdict.
///
/// `PreToolUse` carries the verdict as a permission decision; prompt and
/// post events carry a block as a top-level `decision`/`reason` pair and
/// anything informational as `additionalContext`.
pub fn claude_response(outcome: Outcome, message: Option<&str>, hook_event: &str) -> ClaudeResponse {
    let message = message.map(|m| m.trim_end().to_string()).filter(|m| !m.is_empty());
    let mut response = ClaudeResponse {
        hook_specific_output: ClaudeHookOutput {
            hook_event_name: hook_event.to_string(),
            permission_decision: None,
            permission_decision_reason: None,
            additional_context: None,
        },
        decision: None,
        reason: None,
    };

    if hook_event == "PreToolUse" {
        response.hook_specific_output.permission_decision = Some(match outcome {
            Outcome::Block => "deny",
            Outcome::Allow | Outcome::Warn => "allow",
        });
        response.hook_specific_output.permission_decision_reason = message;
    } else if outcome == Outcome::Block {
        response.decision = Some("block");
        response.reason = message;
    } else {
        response.hook_specific_output.additional_context = message;
    }

    response
}

/// Response shapes understood by Cursor hooks.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CursorResponse {
    /// `beforeSubmitPrompt`.
    Submit {
        #[serde(rename = "continue")]
        continue_: bool,
        #[serde(rename = "userMessage", skip_serializing_if = "Option::is_none")]
        user_message: Option<String>,
    },
    /// `beforeReadFile`, `beforeShellExecution`, `beforeMCPExecution`.
    Permission {
        permission: &'static str,
        #[serde(rename = "userMessage", skip_serializing_if = "Option::is_none")]
        user_message: Option<String>,
    },
    /// `after*` events and `stop`: informational only.
    Notice {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

/// Build the Cursor response for a verdict.
pub fn cursor_response(outcome: Outcome, message: Option<&str>, event_name: Option<&str>) -> CursorResponse {
    let message = message.map(|m| m.trim_end().to_string()).filter(|m| !m.is_empty());
    let permission = match outcome {
        Outcome::Block => "deny",
        Outcome::Allow | Outcome::Warn => "allow",
    };

    match event_name.map(str::trim).unwrap_or_default() {
        "beforeSubmitPrompt" => CursorResponse::Submit {
            continue_: outcome != Outcome::Block,
            user_message: message,
        },
        "beforeReadFile" | "beforeShellExecution" | "beforeMCPExecution" => {
            CursorResponse::Permission {
                permission,
                user_message: message,
            }
        }
        "afterFileEdit" | "afterShellExecution" | "afterMCPExecution" | "stop" => {
            CursorResponse::Notice { message }
        }
        _ => CursorResponse::Permission {
            permission,
            user_message: message,
        },
    }
}
