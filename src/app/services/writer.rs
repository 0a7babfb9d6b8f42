use thiserror::Error;

use crate::app::domain::{Notification, TargetTheme};
use crate::app::infrastructure::error::CommandError;
use crate::app::infrastructure::store::AppearanceStore;

/// A theme that was written and propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub theme: TargetTheme,
}

impl Applied {
    pub fn label(&self) -> &'static str {
        self.theme.display_name()
    }
}

/// Why a switch failed.
///
/// `Refresh` means the flag *was* written but running applications may
/// not have picked it up. The write is not rolled back.
#[derive(Error, Debug, Clone)]
pub enum ApplyError {
    #[error("failed to set the appearance flag: {0}")]
    Apply(#[source] CommandError),

    #[error("appearance flag set, but refreshing the display failed: {0}")]
    Refresh(#[source] CommandError),

    /// The switch worker panicked before it could finish
    #[error("switch stopped unexpectedly: {0}")]
    Interrupted(String),
}

impl ApplyError {
    pub fn cause(&self) -> Option<&CommandError> {
        match self {
            Self::Apply(e) | Self::Refresh(e) => Some(e),
            Self::Interrupted(_) => None,
        }
    }

    /// Underlying message shown under the toast title
    pub fn detail(&self) -> String {
        match self {
            Self::Apply(e) | Self::Refresh(e) => e.to_string(),
            Self::Interrupted(reason) => reason.clone(),
        }
    }

    /// Toast title for this failure
    pub fn title(&self) -> &'static str {
        match self {
            Self::Apply(_) | Self::Interrupted(_) => "Failed to switch theme",
            Self::Refresh(_) => "Failed to refresh theme display",
        }
    }
}

/// Write the flag for `theme`, then ask the OS to propagate it.
///
/// The broadcast only runs once the write has succeeded.
pub fn apply(store: &dyn AppearanceStore, theme: TargetTheme) -> Result<Applied, ApplyError> {
    log::info!("switching to {} mode", theme);

    store.set(theme.flag_value()).map_err(ApplyError::Apply)?;
    store.broadcast().map_err(ApplyError::Refresh)?;

    Ok(Applied { theme })
}

/// Toast describing the outcome of `apply`
pub fn notification(result: &Result<Applied, ApplyError>) -> Notification {
    match result {
        Ok(applied) => Notification::success(format!("Theme switched to {} mode", applied.label())),
        Err(e) => Notification::failure(e.title(), e.detail()),
    }
}
