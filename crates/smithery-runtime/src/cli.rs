//! Argv construction for the Smithery CLI.
//!
//! Commands have the shape `<invoker...> <package> <subcommand> <args...>`,
//! e.g. `npx -y @smithery/cli install exa --client claude`.

use smithery_core::SmitheryConfig;

/// Builds argv vectors for Smithery CLI subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmitheryCli {
    invoker: Vec<String>,
    cli_package: String,
    inspect_package: String,
}

impl SmitheryCli {
    /// Create a builder from configuration.
    pub fn from_config(config: &SmitheryConfig) -> Self {
        Self {
            invoker: config.invoker.clone(),
            cli_package: config.cli_package.clone(),
            inspect_package: config.inspect_package.clone(),
        }
    }

    fn base(&self, package: &str, subcommand: &str) -> Vec<String> {
        let mut argv = self.invoker.clone();
        argv.push(package.to_string());
        argv.push(subcommand.to_string());
        argv
    }

    /// `install <server> --client <client> [--config <file>]`
    pub fn install_argv(&self, server: &str, client: &str, config_file: Option<&str>) -> Vec<String> {
        let mut argv = self.base(&self.cli_package, "install");
        argv.extend([server.to_string(), "--client".to_string(), client.to_string()]);

        if let Some(file) = config_file {
            argv.extend(["--config".to_string(), file.to_string()]);
        }

        argv
    }

    /// `inspect <server>`
    pub fn inspect_argv(&self, server: &str) -> Vec<String> {
        let mut argv = self.base(&self.inspect_package, "inspect");
        argv.push(server.to_string());
        argv
    }
}

impl Default for SmitheryCli {
    fn default() -> Self {
        Self::from_config(&SmitheryConfig::default())
    }
}

/// Human-readable form of an argv vector, for reporting only.
pub fn render_command(argv: &[String]) -> String {
    argv.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_argv_default() {
        let cli = SmitheryCli::default();
        let argv = cli.install_argv("exa", "claude", None);
        assert_eq!(
            render_command(&argv),
            "npx -y @smithery/cli install exa --client claude"
        );
    }

    #[test]
    fn test_install_argv_with_config_file() {
        let cli = SmitheryCli::default();
        let argv = cli.install_argv("@org/server", "cursor", Some("exa.json"));
        assert_eq!(
            argv,
            vec![
                "npx",
                "-y",
                "@smithery/cli",
                "install",
                "@org/server",
                "--client",
                "cursor",
                "--config",
                "exa.json"
            ]
        );
    }

    #[test]
    fn test_inspect_uses_latest_package() {
        let cli = SmitheryCli::default();
        assert_eq!(
            render_command(&cli.inspect_argv("exa")),
            "npx -y @smithery/cli@latest inspect exa"
        );
    }

    #[test]
    fn test_server_names_stay_single_arguments() {
        let cli = SmitheryCli::default();
        let argv = cli.inspect_argv("exa; rm -rf /");
        assert_eq!(argv.last().map(String::as_str), Some("exa; rm -rf /"));
    }

    #[test]
    fn test_custom_invoker() {
        let config = SmitheryConfig {
            invoker: vec!["bunx".to_string()],
            ..SmitheryConfig::default()
        };
        let cli = SmitheryCli::from_config(&config);
        assert_eq!(cli.inspect_argv("exa")[0], "bunx");
    }
}
