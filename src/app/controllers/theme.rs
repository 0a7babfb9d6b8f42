use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crate::app::domain::{Notification, TargetTheme, Theme};
use crate::app::infrastructure::store::AppearanceStore;
use crate::app::services::reader::ThemeReader;
use crate::app::services::writer::{self, Applied, ApplyError};

/// What the list view renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub current: Theme,
    pub is_loading: bool,
}

/// Result of one write + re-read cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub target: TargetTheme,
    pub result: Result<Applied, ApplyError>,
    /// Theme observed after the write, whatever its outcome
    pub current: Theme,
}

impl CycleReport {
    pub fn notification(&self) -> Notification {
        writer::notification(&self.result)
    }
}

/// Apply `theme` and re-read the flag. Blocks on both child processes.
pub fn run_cycle(store: &dyn AppearanceStore, reader: &ThemeReader, theme: TargetTheme) -> CycleReport {
    let result = writer::apply(store, theme);
    if let Err(e) = &result {
        log::warn!("{}", e);
    }
    let current = reader.read(store);
    log::info!("theme after switch: {}", current);

    CycleReport {
        target: theme,
        result,
        current,
    }
}

/// `run_cycle` that still produces a report if the store panics, so the
/// controller always gets to leave the loading state.
pub fn run_cycle_guarded(store: &dyn AppearanceStore, reader: &ThemeReader, theme: TargetTheme) -> CycleReport {
    match panic::catch_unwind(AssertUnwindSafe(|| run_cycle(store, reader, theme))) {
        Ok(report) => report,
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            log::error!("switch to {} panicked: {}", theme, reason);
            let current = panic::catch_unwind(AssertUnwindSafe(|| reader.read(store)))
                .unwrap_or(Theme::Unknown);
            CycleReport {
                target: theme,
                result: Err(ApplyError::Interrupted(reason)),
                current,
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub struct ThemeController {
    store: Arc<dyn AppearanceStore>,
    reader: ThemeReader,
    state: UiState,
    switching: bool,
}

impl ThemeController {
    /// Starts loading with an unknown theme; call `refresh` to do the first read.
    pub fn new(store: Arc<dyn AppearanceStore>, reader: ThemeReader) -> Self {
        Self {
            store,
            reader,
            state: UiState {
                current: Theme::Unknown,
                is_loading: true,
            },
            switching: false,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn current(&self) -> Theme {
        self.state.current
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Re-read the flag. Ignored while a switch is in flight, since the
    /// switch re-reads on completion anyway.
    pub fn refresh(&mut self) -> Theme {
        if self.switching {
            return self.state.current;
        }
        self.state.is_loading = true;
        let current = self.reader.read(self.store.as_ref());
        self.state = UiState {
            current,
            is_loading: false,
        };
        log::debug!("current theme: {}", current);
        current
    }

    /// Enter the loading state for a switch. Returns false if one is
    /// already running.
    pub fn begin_select(&mut self, theme: TargetTheme) -> bool {
        if self.switching {
            log::debug!("ignoring switch to {}: busy", theme);
            return false;
        }
        self.switching = true;
        self.state.is_loading = true;
        true
    }

    /// Leave the loading state with the theme observed by the cycle.
    pub fn finish(&mut self, report: &CycleReport) {
        log::debug!("switch to {} finished, theme is now {}", report.target, report.current);
        self.switching = false;
        self.state = UiState {
            current: report.current,
            is_loading: false,
        };
    }

    /// Switch synchronously. Returns `None` if a switch is already running.
    pub fn select(&mut self, theme: TargetTheme) -> Option<CycleReport> {
        if !self.begin_select(theme) {
            return None;
        }
        let report = run_cycle_guarded(self.store.as_ref(), &self.reader, theme);
        self.finish(&report);
        Some(report)
    }

    /// Switch on a worker thread and hand the report to `on_done` there.
    /// The caller must pass the report back to `finish`.
    pub fn spawn_select<F>(&mut self, theme: TargetTheme, on_done: F) -> bool
    where
        F: FnOnce(CycleReport) + Send + 'static,
    {
        if !self.begin_select(theme) {
            return false;
        }

        let store = Arc::clone(&self.store);
        let reader = self.reader.clone();
        let spawned = thread::Builder::new()
            .name("theme-switch".to_string())
            .spawn(move || on_done(run_cycle_guarded(store.as_ref(), &reader, theme)));

        if let Err(e) = spawned {
            log::error!("failed to start switch worker: {}", e);
            self.switching = false;
            self.refresh();
            return false;
        }
        true
    }
}
