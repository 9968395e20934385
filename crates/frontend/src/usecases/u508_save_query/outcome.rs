//! Completion handling of a dispatched save

use contracts::usecases::u508_save_query::SaveQueryResponse;
use leptos::prelude::*;

use super::error::SaveQueryError;
use super::state::SaveStatus;
use crate::shared::notifications::Notifier;

pub const SAVED_MESSAGE: &str = "The query was saved";
pub const FAILED_MESSAGE_PREFIX: &str = "The query couldn't be saved. \n";

/// Sends exactly one notification for a finished save
pub fn report_outcome(
    result: &Result<SaveQueryResponse, SaveQueryError>,
    notifier: &dyn Notifier,
) -> SaveStatus {
    match result {
        Ok(_) => {
            notifier.success(SAVED_MESSAGE);
            SaveStatus::Saved
        }
        Err(e) => {
            log::warn!("saving query failed: {}", e);
            notifier.error(&format!("{}{}", FAILED_MESSAGE_PREFIX, e));
            SaveStatus::Failed
        }
    }
}

/// Cleared when the owning widget is unmounted
///
/// Lives in the widget's reactive owner, so it also reads as gone once that
/// owner is disposed. Completions that outlive the widget check it before
/// touching widget state.
#[derive(Clone, Copy)]
pub struct Liveness(StoredValue<bool>);

impl Liveness {
    pub fn new() -> Self {
        Self(StoredValue::new(true))
    }

    pub fn is_alive(&self) -> bool {
        self.0.try_get_value().unwrap_or(false)
    }

    pub fn mark_gone(&self) {
        let _ = self.0.try_update_value(|alive| *alive = false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
