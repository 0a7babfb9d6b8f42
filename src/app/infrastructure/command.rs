use std::process::Command;

use super::error::CommandError;

/// Runs an external program to completion and returns its stdout.
///
/// A non-zero exit status is an error carrying whatever the program wrote
/// to stderr (or stdout, if stderr was empty).
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

/// Runs commands as real child processes, waiting without a timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let mut command = Command::new(program);
        command.args(args);

        // Keep console windows from flashing up behind the GUI
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        log::debug!("running {} {}", program, args.join(" "));
        let output = command
            .output()
            .map_err(|e| CommandError::spawn(program, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() { stdout.trim() } else { stderr.trim() };
        Err(CommandError::Status {
            program: program.to_string(),
            code: output.status.code(),
            stderr: detail.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let result = SystemRunner.run("themeswitch-no-such-program", &[]);
        assert!(matches!(result, Err(CommandError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_is_returned() {
        let out = SystemRunner.run("sh", &["-c", "printf 'AppsUseLightTheme    REG_DWORD    0x1'"]).unwrap();
        assert_eq!(out, "AppsUseLightTheme    REG_DWORD    0x1");
    }

    /// Answers every query with the output of a fixed shell script
    #[cfg(unix)]
    struct ShellQuery(&'static str);

    #[cfg(unix)]
    impl CommandRunner for ShellQuery {
        fn run(&self, _program: &str, _args: &[&str]) -> Result<String, CommandError> {
            SystemRunner.run("sh", &["-c", self.0])
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_before_matching_line() {
        use crate::app::domain::Theme;
        use crate::app::infrastructure::config::StoreConfig;
        use crate::app::infrastructure::store::{AppearanceStore, RegistryStore};
        use crate::app::services::reader::ThemeReader;

        let config = StoreConfig::default();
        let reader = ThemeReader::new(&config).unwrap();
        let store = RegistryStore::with_runner(
            config,
            ShellQuery(r"printf '\377\376 AppsUseLightTheme    REG_DWORD    0x0'"),
        );

        let out = store.get().unwrap();
        assert!(out.contains('\u{fffd}'));
        assert_eq!(reader.read(&store), Theme::Dark);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_carries_stderr() {
        let err = SystemRunner.run("sh", &["-c", "echo 'ERROR: denied' >&2; exit 3"]).unwrap_err();
        match err {
            CommandError::Status { program, code, stderr } => {
                assert_eq!(program, "sh");
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "ERROR: denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_falls_back_to_stdout() {
        let err = SystemRunner.run("sh", &["-c", "echo 'only stdout'; exit 1"]).unwrap_err();
        assert!(err.to_string().ends_with("only stdout"));
    }
}
