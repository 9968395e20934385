//! u508: "Save Query" toolbar widget
//!
//! A toggle button opening a popover with label and description fields that
//! submits the current SQL to the saved query API.

pub mod api;
pub mod config;
pub mod error;
pub mod outcome;
pub mod state;
pub mod view;

use std::sync::Arc;

use crate::shared::csrf::{CsrfTokenSource, PageCsrfToken};
use crate::shared::notifications::Notifier;

pub use api::{HttpSaveQueryTransport, SaveQueryTransport};
pub use config::SaveQueryConfig;
pub use error::SaveQueryError;
pub use state::{AnchorRect, PopoverState, QueryContext, SaveQueryForm, SaveQuerySubmission};
pub use view::SaveQuery;

/// Collaborators the widget talks to, injected by the host
#[derive(Clone)]
pub struct SaveQueryServices {
    pub notifier: Arc<dyn Notifier + Send + Sync>,
    pub csrf: Arc<dyn CsrfTokenSource + Send + Sync>,
    pub transport: Arc<dyn SaveQueryTransport + Send + Sync>,
}

impl SaveQueryServices {
    /// Page token lookup and HTTP transport configured from `config`
    pub fn from_config<N>(config: &SaveQueryConfig, notifier: N) -> Self
    where
        N: Notifier + Send + Sync + 'static,
    {
        Self {
            notifier: Arc::new(notifier),
            csrf: Arc::new(PageCsrfToken::new(config.csrf_selector.clone())),
            transport: Arc::new(HttpSaveQueryTransport::new(config.api_base.clone())),
        }
    }
}
