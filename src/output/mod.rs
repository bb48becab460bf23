pub mod human;

use serde_json::{Value, json};

/// Standard JSON envelope for a successful command.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Error code for the envelope: formula rejections are told apart from
/// everything else.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<crate::core::ValidationError>().is_some() {
        "validation_error"
    } else {
        "general_error"
    }
}
