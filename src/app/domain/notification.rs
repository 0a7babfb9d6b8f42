/// Visual style of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    Success,
    Failure,
}

/// A toast shown after each theme switch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub style: NotificationStyle,
    pub title: String,
    pub message: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            style: NotificationStyle::Success,
            title: title.into(),
            message: None,
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: NotificationStyle::Failure,
            title: title.into(),
            message: Some(message.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.style == NotificationStyle::Failure
    }

    /// Single-line text for the banner
    pub fn banner_text(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: {}", self.title, message.trim()),
            None => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_banner() {
        let n = Notification::success("Theme switched to Dark mode");
        assert!(!n.is_failure());
        assert_eq!(n.banner_text(), "Theme switched to Dark mode");
    }

    #[test]
    fn test_failure_banner_trims_message() {
        let n = Notification::failure("Failed to switch theme", "Access is denied.\r\n");
        assert!(n.is_failure());
        assert_eq!(n.banner_text(), "Failed to switch theme: Access is denied.");
    }
}
