//! Child-process implementation of the `CommandRunner` port.
//!
//! Arguments are handed to the OS as a vector; no shell is involved.

use async_trait::async_trait;
use smithery_core::{CommandError, CommandResult, CommandRunner, SmitheryConfig};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs external commands with tokio and captures their output.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner {
    timeout: Option<Duration>,
}

impl ProcessCommandRunner {
    /// Create a runner without a timeout.
    pub const fn new() -> Self {
        Self { timeout: None }
    }

    /// Kill commands that run longer than `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a runner honoring the configured timeout.
    pub fn from_config(config: &SmitheryConfig) -> Self {
        Self {
            timeout: config.command_timeout(),
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(&self, argv: &[String]) -> Result<CommandResult, CommandError> {
        let (program, args) = argv.split_first().ok_or(CommandError::EmptyCommand)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(command = %argv.join(" "), "Running external command");

        let child = cmd.spawn().map_err(|source| CommandError::Spawn {
            program: program.clone(),
            source,
        })?;

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    warn!(program = %program, timeout = ?limit, "Command timed out, killing child");
                    CommandError::TimedOut { timeout: limit }
                })??,
            None => child.wait_with_output().await?,
        };

        let result = CommandResult::new(
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
            output.status.code().unwrap_or(-1),
        );

        if !output.status.success() {
            warn!(
                program = %program,
                exit_code = result.exit_code,
                "Command exited with failure"
            );
            return Err(CommandError::Failed {
                exit_code: output.status.code(),
                stderr: result.stderr,
            });
        }

        debug!(program = %program, stdout_bytes = result.stdout.len(), "Command finished");
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::SmitheryCli;
    use std::fs;
    use tempfile::TempDir;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_captures_stdout_and_stderr() {
        let runner = ProcessCommandRunner::new();
        let result = runner
            .run(&argv(&["sh", "-c", "echo out; echo err 1>&2"]))
            .await
            .unwrap();

        assert_eq!(result.stdout, "out\n");
        assert_eq!(result.stderr, "err\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_non_zero_exit_carries_stderr() {
        let runner = ProcessCommandRunner::new();
        let err = runner
            .run(&argv(&["sh", "-c", "echo 'server not found' 1>&2; exit 3"]))
            .await
            .unwrap_err();

        match err {
            CommandError::Failed { exit_code, stderr } => {
                assert_eq!(exit_code, Some(3));
                assert_eq!(stderr, "server not found\n");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_arguments_are_not_shell_interpolated() {
        let runner = ProcessCommandRunner::new();
        let result = runner
            .run(&argv(&["echo", "$HOME; echo injected"]))
            .await
            .unwrap();

        assert_eq!(result.stdout, "$HOME; echo injected\n");
    }

    #[tokio::test]
    async fn test_empty_argv() {
        let runner = ProcessCommandRunner::new();
        let err = runner.run(&[]).await.unwrap_err();
        assert!(matches!(err, CommandError::EmptyCommand));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let runner = ProcessCommandRunner::new();
        let err = runner
            .run(&argv(&["smithery-definitely-not-installed-xyz"]))
            .await
            .unwrap_err();

        assert!(
            matches!(err, CommandError::Spawn { ref program, .. } if program == "smithery-definitely-not-installed-xyz")
        );
    }

    #[tokio::test]
    async fn test_timeout_kills_slow_command() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("finished");
        let script = format!("sleep 1; touch '{}'", marker.display());

        let runner = ProcessCommandRunner::new().with_timeout(Duration::from_millis(100));
        let err = runner.run(&argv(&["sh", "-c", &script])).await.unwrap_err();

        assert!(
            matches!(err, CommandError::TimedOut { timeout } if timeout == Duration::from_millis(100))
        );
        assert_eq!(err.to_string(), "Command timed out after 100ms");

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(!marker.exists(), "child kept running after the timeout");
    }

    /// A fake package runner script receives the Smithery argv unchanged.
    #[tokio::test]
    async fn test_fake_invoker_receives_install_argv() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("fake-npx.sh");
        fs::write(&script, "for arg in \"$@\"; do echo \"$arg\"; done\n").unwrap();

        let config = SmitheryConfig {
            invoker: vec!["sh".to_string(), script.to_string_lossy().into_owned()],
            ..SmitheryConfig::default()
        };
        let cli = SmitheryCli::from_config(&config);
        let runner = ProcessCommandRunner::from_config(&config);

        let result = runner
            .run(&cli.install_argv("exa", "claude", Some("my config.json")))
            .await
            .unwrap();

        let lines: Vec<&str> = result.stdout.lines().collect();
        assert_eq!(
            lines,
            vec![
                "@smithery/cli",
                "install",
                "exa",
                "--client",
                "claude",
                "--config",
                "my config.json"
            ]
        );
    }
}
