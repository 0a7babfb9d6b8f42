/// Registry location and commands used to read, write and propagate the
/// appearance flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Full key path as understood by `reg.exe`
    pub key: String,

    /// Value name under `key`
    pub value_name: String,

    /// Registry type the value is written with and reported as
    pub value_type: String,

    pub reg_program: String,

    /// Program and entry point that re-broadcasts per-user display parameters
    pub refresh_program: String,
    pub refresh_entry: String,
}

fn default_key() -> String {
    r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize".to_string()
}

fn default_value_name() -> String {
    "AppsUseLightTheme".to_string()
}

fn default_value_type() -> String {
    "REG_DWORD".to_string()
}

fn default_reg_program() -> String {
    "reg".to_string()
}

fn default_refresh_program() -> String {
    "rundll32.exe".to_string()
}

fn default_refresh_entry() -> String {
    "user32.dll,UpdatePerUserSystemParameters".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            value_name: default_value_name(),
            value_type: default_value_type(),
            reg_program: default_reg_program(),
            refresh_program: default_refresh_program(),
            refresh_entry: default_refresh_entry(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.key, r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize");
        assert_eq!(config.value_name, "AppsUseLightTheme");
        assert_eq!(config.value_type, "REG_DWORD");
        assert_eq!(config.refresh_program, "rundll32.exe");
        assert_eq!(config.refresh_entry, "user32.dll,UpdatePerUserSystemParameters");
    }
}
