use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "api": {
                "type": "object",
                "properties": {
                    "api_key": { "type": "string", "minLength": 1 },
                    "base_url": { "type": "string", "format": "uri" },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                },
                "additionalProperties": false
            },
            "output": {
                "type": "object",
                "properties": {
                    "quiet": { "type": "boolean" },
                    "positive_only": { "type": "boolean" },
                    "clear": { "type": "boolean" }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
