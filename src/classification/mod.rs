pub mod localize;
pub mod table;

use serde::Serialize;

use crate::codes::ErrorKind;

/// Host-provided full reload of the presentation process.
///
/// Fire-and-forget: callers never observe completion.
pub trait Reloader {
    fn reload(&self);
}

impl<F: Fn()> Reloader for F {
    fn reload(&self) {
        self();
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    ReloadPage,
}

/// A button label paired with the handler it triggers.
///
/// Holding both in one value keeps label and handler set or unset together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryAction {
    #[serde(rename = "buttonText")]
    pub label: String,
    #[serde(rename = "action")]
    pub kind: ActionKind,
}

impl RecoveryAction {
    pub fn run(&self, reloader: &dyn Reloader) {
        match self.kind {
            ActionKind::ReloadPage => reloader.reload(),
        }
    }
}

/// What the error surface displays for one failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub kind: ErrorKind,
    pub title: String,
    pub message: String,
    #[serde(flatten)]
    pub action: Option<RecoveryAction>,
}

impl ContentRecord {
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn button_text(&self) -> Option<&str> {
        self.action.as_ref().map(|a| a.label.as_str())
    }

    /// Run the recovery action, if any. Returns whether one ran.
    pub fn click(&self, reloader: &dyn Reloader) -> bool {
        match &self.action {
            Some(action) => {
                action.run(reloader);
                true
            }
            None => false,
        }
    }
}
