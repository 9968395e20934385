use serde::Deserialize;

use crate::shared::csrf::DEFAULT_CSRF_SELECTOR;

/// Settings of the save query widget, provided to it via context
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SaveQueryConfig {
    /// Label the form starts with when the host passes none
    pub default_label: String,
    /// Animate the popover when it opens
    pub animation: bool,
    /// Origin of the saved query API; page origin when unset
    pub api_base: Option<String>,
    /// Selector of the hidden input holding the CSRF token
    pub csrf_selector: String,
    /// How long notifications stay on screen; zero keeps them until dismissed
    pub notification_timeout_ms: u32,
}

impl Default for SaveQueryConfig {
    fn default() -> Self {
        Self {
            default_label: "Undefined".to_string(),
            animation: true,
            api_base: None,
            csrf_selector: DEFAULT_CSRF_SELECTOR.to_string(),
            notification_timeout_ms: 3000,
        }
    }
}

impl SaveQueryConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a query string such as `?api_base=http://localhost:8088`
    pub fn from_query(search: &str) -> Result<Self, serde_qs::Error> {
        serde_qs::from_str(search.trim_start_matches('?'))
    }

    /// Reads overrides from the URL of the current page, defaults otherwise
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search).unwrap_or_else(|e| {
            log::warn!("ignoring malformed save query settings in URL: {}", e);
            Self::default()
        })
    }
}
