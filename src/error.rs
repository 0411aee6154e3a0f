//! Error type for the disclosure controller.
//!
//! Missing markup is not an error: absent containers and sections are
//! skipped during mount. These variants cover real failures only.

use crate::controller::WidgetId;

#[derive(Debug, thiserror::Error)]
pub enum DisclosureError {
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid disclosure config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown widget: {0:?}")]
    UnknownWidget(WidgetId),
}
