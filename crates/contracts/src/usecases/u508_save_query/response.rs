/// Response of the "create saved query" call
///
/// Only the status of the call matters to callers, so the body is kept opaque.
pub type SaveQueryResponse = serde_json::Value;
