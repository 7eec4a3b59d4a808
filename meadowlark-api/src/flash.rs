use serde::{Deserialize, Serialize};
use tower_sessions::Session;

const FLASH_KEY: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Danger,
    Warning,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
        }
    }
}

/// One-shot notification: queued by a mutating request, shown and cleared
/// by the next rendered page. At most one pending message per session; a
/// new write replaces an unread one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub severity: Severity,
    pub intro: String,
    pub message: String,
}

impl Flash {
    pub fn success(intro: &str, message: &str) -> Self {
        Self::new(Severity::Success, intro, message)
    }

    pub fn danger(intro: &str, message: &str) -> Self {
        Self::new(Severity::Danger, intro, message)
    }

    pub fn warning(intro: &str, message: &str) -> Self {
        Self::new(Severity::Warning, intro, message)
    }

    fn new(severity: Severity, intro: &str, message: &str) -> Self {
        Self {
            severity,
            intro: intro.to_string(),
            message: message.to_string(),
        }
    }
}

pub async fn set_flash(
    session: &Session,
    flash: Flash,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(FLASH_KEY, flash).await
}

/// Read-and-clear. Each message is delivered exactly once.
pub async fn take_flash(
    session: &Session,
) -> Result<Option<Flash>, tower_sessions::session::Error> {
    session.remove::<Flash>(FLASH_KEY).await
}
