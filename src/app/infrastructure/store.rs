use super::command::{CommandRunner, SystemRunner};
use super::config::StoreConfig;
use super::error::CommandError;

/// The OS-global appearance flag.
///
/// `get` returns the raw query output so that classification stays with the
/// reader. Implementations must be shareable with the switch worker thread.
pub trait AppearanceStore: Send + Sync {
    fn get(&self) -> Result<String, CommandError>;
    fn set(&self, value: u32) -> Result<(), CommandError>;

    /// Ask the OS to re-broadcast per-user display parameters
    fn broadcast(&self) -> Result<(), CommandError>;
}

/// Appearance flag stored in the registry, reached through `reg.exe` and
/// `rundll32.exe`.
pub struct RegistryStore<R: CommandRunner = SystemRunner> {
    config: StoreConfig,
    runner: R,
}

impl RegistryStore<SystemRunner> {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> RegistryStore<R> {
    pub fn with_runner(config: StoreConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl<R: CommandRunner> AppearanceStore for RegistryStore<R> {
    fn get(&self) -> Result<String, CommandError> {
        let c = &self.config;
        self.runner
            .run(&c.reg_program, &["query", c.key.as_str(), "/v", c.value_name.as_str()])
    }

    fn set(&self, value: u32) -> Result<(), CommandError> {
        let c = &self.config;
        let data = value.to_string();
        self.runner.run(
            &c.reg_program,
            &[
                "add",
                c.key.as_str(),
                "/v",
                c.value_name.as_str(),
                "/t",
                c.value_type.as_str(),
                "/d",
                data.as_str(),
                "/f",
            ],
        )?;
        Ok(())
    }

    fn broadcast(&self) -> Result<(), CommandError> {
        let c = &self.config;
        self.runner.run(&c.refresh_program, &[c.refresh_entry.as_str()])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingRunner {
        calls: Mutex<Vec<Vec<String>>>,
        fail_program: Option<&'static str>,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
            let mut call = vec![program.to_string()];
            call.extend(args.iter().map(|a| a.to_string()));
            self.calls.lock().unwrap().push(call);

            if self.fail_program == Some(program) {
                return Err(CommandError::Status {
                    program: program.to_string(),
                    code: Some(1),
                    stderr: "ERROR: Access is denied.".to_string(),
                });
            }
            Ok("    AppsUseLightTheme    REG_DWORD    0x1\r\n".to_string())
        }
    }

    const KEY: &str = r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";

    #[test]
    fn test_get_issues_query() {
        let store = RegistryStore::with_runner(StoreConfig::default(), RecordingRunner::default());
        let out = store.get().unwrap();
        assert!(out.contains("0x1"));

        let calls = store.runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec!["reg", "query", KEY, "/v", "AppsUseLightTheme"]);
    }

    #[test]
    fn test_set_issues_add_with_decimal_value() {
        let store = RegistryStore::with_runner(StoreConfig::default(), RecordingRunner::default());
        store.set(0).unwrap();
        store.set(1).unwrap();

        let calls = store.runner.calls.lock().unwrap();
        assert_eq!(
            calls[0],
            vec!["reg", "add", KEY, "/v", "AppsUseLightTheme", "/t", "REG_DWORD", "/d", "0", "/f"]
        );
        assert_eq!(calls[1][8], "1");
    }

    #[test]
    fn test_broadcast_runs_refresh_entry() {
        let store = RegistryStore::with_runner(StoreConfig::default(), RecordingRunner::default());
        store.broadcast().unwrap();

        let calls = store.runner.calls.lock().unwrap();
        assert_eq!(calls[0], vec!["rundll32.exe", "user32.dll,UpdatePerUserSystemParameters"]);
    }

    #[test]
    fn test_set_failure_is_propagated() {
        let runner = RecordingRunner {
            fail_program: Some("reg"),
            ..Default::default()
        };
        let store = RegistryStore::with_runner(StoreConfig::default(), runner);
        let err = store.set(1).unwrap_err();
        assert!(err.to_string().contains("Access is denied"));
    }

    #[test]
    fn test_custom_config_is_used() {
        let config = StoreConfig {
            value_name: "SystemUsesLightTheme".to_string(),
            ..Default::default()
        };
        let store = RegistryStore::with_runner(config, RecordingRunner::default());
        assert_eq!(store.config().value_name, "SystemUsesLightTheme");
        store.get().unwrap();

        let calls = store.runner.calls.lock().unwrap();
        assert_eq!(calls[0][4], "SystemUsesLightTheme");
    }
}
