//! Form state of a single widget instance
//!
//! Framework independent so the transitions can be exercised without a DOM.

use contracts::usecases::u508_save_query::{SaveQueryRequest, CREATE_SAVED_QUERY_PATH};

/// Popover width in pixels
pub const POPOVER_WIDTH_PX: u32 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverState {
    #[default]
    Hidden,
    Visible,
}

impl PopoverState {
    fn flipped(self) -> Self {
        match self {
            PopoverState::Hidden => PopoverState::Visible,
            PopoverState::Visible => PopoverState::Hidden,
        }
    }
}

/// Viewport geometry of the control the popover hangs from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorRect {
    /// Inline style placing the popover right below the anchor
    pub fn popover_style(&self) -> String {
        format!(
            "position: fixed; left: {}px; top: {}px; width: {}px;",
            self.left,
            self.top + self.height,
            POPOVER_WIDTH_PX
        )
    }
}

/// Query being saved, as supplied by the hosting page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    pub sql: String,
    pub schema: String,
    pub db_id: i64,
}

/// One outbound "create saved query" call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveQuerySubmission {
    pub path: &'static str,
    pub request: SaveQueryRequest,
}

/// How the last submission of this widget ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed,
}

impl SaveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SaveStatus::Saved => "saved",
            SaveStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveQueryForm {
    label: String,
    description: String,
    popover: PopoverState,
    anchor: Option<AnchorRect>,
    last_status: Option<SaveStatus>,
}

impl SaveQueryForm {
    pub fn new(default_label: impl Into<String>) -> Self {
        Self {
            label: default_label.into(),
            description: String::new(),
            popover: PopoverState::Hidden,
            anchor: None,
            last_status: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn popover(&self) -> PopoverState {
        self.popover
    }

    pub fn visible(&self) -> bool {
        self.popover == PopoverState::Visible
    }

    pub fn anchor(&self) -> Option<AnchorRect> {
        self.anchor
    }

    pub fn last_status(&self) -> Option<SaveStatus> {
        self.last_status
    }

    /// Shows or hides the popover and remembers where it was opened from
    pub fn toggle(&mut self, anchor: Option<AnchorRect>) {
        self.anchor = anchor;
        self.popover = self.popover.flipped();
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Closes the popover; edits stay local to the form
    pub fn cancel(&mut self) {
        self.popover = PopoverState::Hidden;
    }

    /// Closes the popover and returns the request to send
    ///
    /// The popover is hidden before any response exists. Empty label and
    /// description are sent unchanged.
    pub fn save(&mut self, context: QueryContext, csrf_token: String) -> SaveQuerySubmission {
        self.popover = PopoverState::Hidden;
        SaveQuerySubmission {
            path: CREATE_SAVED_QUERY_PATH,
            request: SaveQueryRequest {
                label: self.label.clone(),
                description: self.description.clone(),
                db_id: context.db_id,
                schema: context.schema,
                sql: context.sql,
                csrf_token,
            },
        }
    }

    pub fn record_status(&mut self, status: SaveStatus) {
        self.last_status = Some(status);
    }
}
