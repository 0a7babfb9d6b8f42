use regex_lite::Regex;

use crate::app::domain::Theme;
use crate::app::infrastructure::config::StoreConfig;
use crate::app::infrastructure::store::AppearanceStore;

/// Classifies the appearance flag from `reg query` output.
#[derive(Debug, Clone)]
pub struct ThemeReader {
    pattern: Regex,
}

impl ThemeReader {
    /// Build a reader matching lines such as
    /// `AppsUseLightTheme    REG_DWORD    0x1`
    pub fn new(config: &StoreConfig) -> Result<Self, regex_lite::Error> {
        let pattern = Regex::new(&format!(
            r"(?i){}\s+{}\s+0x(\d)",
            regex_lite::escape(&config.value_name),
            regex_lite::escape(&config.value_type),
        ))?;
        Ok(Self { pattern })
    }

    /// Map query output to a theme. Only the first hex digit is looked at.
    pub fn classify(&self, output: &str) -> Theme {
        let Some(caps) = self.pattern.captures(output) else {
            return Theme::Unknown;
        };
        match caps.get(1).map(|m| m.as_str()) {
            Some("1") => Theme::Light,
            Some(_) => Theme::Dark,
            None => Theme::Unknown,
        }
    }

    /// Query the store and classify the result. Never fails: any query
    /// error is logged and reported as `Theme::Unknown`.
    pub fn read(&self, store: &dyn AppearanceStore) -> Theme {
        match store.get() {
            Ok(output) => {
                let theme = self.classify(&output);
                if theme == Theme::Unknown {
                    log::debug!("unrecognised query output: {:?}", output.trim());
                }
                theme
            }
            Err(e) => {
                log::debug!("appearance query failed: {}", e);
                Theme::Unknown
            }
        }
    }
}
