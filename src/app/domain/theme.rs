use std::fmt;

/// Classification of the per-user appearance flag.
///
/// `Unknown` is a normal outcome: the flag could not be read, or the query
/// output did not have the expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Unknown,
}

impl Theme {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A theme the user can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetTheme {
    Light,
    Dark,
}

impl TargetTheme {
    /// Get all selectable themes, in list order
    pub fn all() -> &'static [TargetTheme] {
        &[Self::Light, Self::Dark]
    }

    /// Value written to `AppsUseLightTheme`: 1 = light, 0 = dark
    pub fn flag_value(&self) -> u32 {
        match self {
            Self::Light => 1,
            Self::Dark => 0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.as_theme().display_name()
    }

    pub fn as_theme(&self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

impl From<TargetTheme> for Theme {
    fn from(target: TargetTheme) -> Self {
        target.as_theme()
    }
}

impl fmt::Display for TargetTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What the UI shows for one row of the theme list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeListItem {
    pub target: TargetTheme,
    pub title: String,
    pub subtitle: String,
    pub accessory: &'static str,
}

impl ThemeListItem {
    pub fn new(target: TargetTheme, current: Theme) -> Self {
        let is_current = current == target.as_theme();
        let title = if is_current {
            format!("Already in {} mode", target)
        } else {
            format!("Switch to {} mode", target)
        };
        let subtitle = match current {
            Theme::Unknown => "Current theme unknown".to_string(),
            known => format!("Current theme: {}", known),
        };

        Self {
            target,
            title,
            subtitle,
            accessory: if is_current { "Current" } else { "Available" },
        }
    }

    /// Build both rows for the given current theme
    pub fn for_current(current: Theme) -> Vec<ThemeListItem> {
        TargetTheme::all()
            .iter()
            .map(|&target| Self::new(target, current))
            .collect()
    }
}
