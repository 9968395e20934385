use serde::{Deserialize, Serialize};

/// Endpoint that creates a saved query record
pub const CREATE_SAVED_QUERY_PATH: &str = "/savedqueryviewapi/api/create";

/// Body of the "create saved query" call
///
/// Field names are the wire names expected by the saved query API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveQueryRequest {
    /// User supplied label, sent as-is (may be empty)
    pub label: String,

    /// User supplied description, sent as-is (may be empty)
    pub description: String,

    /// Database the query runs against
    pub db_id: i64,

    /// Schema the query runs against
    pub schema: String,

    /// SQL text being saved
    pub sql: String,

    /// Anti-forgery token of the current session
    pub csrf_token: String,
}
