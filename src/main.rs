//! Panel - operator front end for the approach/launch interlock.
//!
//! Reads one selection per line from stdin (`APPROACH`, `LAUNCH_READY`,
//! `CRAWL`, `FAULT`, a menu number, or `quit`) and prints the resulting
//! status for each.

use anyhow::Result;
use clap::Parser;
use panel_interlock::config::{PanelConfig, DEFAULT_CONFIG_PATH};
use panel_interlock::panel::{OutputFormat, Panel};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "panel", version, about = "Approach/launch panel controller")]
struct Cli {
    /// Configuration file (YAML); defaults to ./panel.yaml when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Audit log path, overriding the configuration
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Monochrome output
    #[arg(long = "bw")]
    monochrome: bool,

    /// Output status lines as JSON
    #[arg(long)]
    json: bool,

    /// Verbose diagnostics (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Merge the config file (explicit, or the default file if it exists)
    /// with command-line overrides.
    fn resolve_config(&self, default_path: &Path) -> Result<PanelConfig> {
        let mut config = match &self.config {
            Some(path) => PanelConfig::load(path)?,
            None if default_path.exists() => PanelConfig::load_or_default(default_path),
            None => PanelConfig::default(),
        };
        if let Some(path) = &self.log_file {
            config.audit.path = path.clone();
        }
        Ok(config)
    }

    fn output_format(&self, config: &PanelConfig) -> OutputFormat {
        OutputFormat::from_flags(self.json, self.monochrome || config.display.monochrome)
    }

    fn log_filter<'a>(&self, config: &'a PanelConfig) -> &'a str {
        match self.verbose {
            0 => config.logging.level.as_str(),
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config(Path::new(DEFAULT_CONFIG_PATH))?;

    // Diagnostics go to stderr so stdout carries only status lines
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter(&config)));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.output_format(&config);
    tracing::debug!(audit = %config.audit.path.display(), ?format, "Starting panel");

    let mut panel = Panel::from_config(&config, format);
    let stdin = std::io::stdin();
    panel.run(stdin.lock(), std::io::stdout().lock())?;

    tracing::debug!(status = %panel.controller().status(), "Panel closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("panel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn log_file_overrides_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("panel.yaml");
        std::fs::write(&config_path, "audit:\n  path: /var/log/panel.log\n").unwrap();

        let cli = parse(&[
            "--config",
            config_path.to_str().unwrap(),
            "--log-file",
            "override.log",
        ]);
        let config = cli.resolve_config(&dir.path().join("absent.yaml")).unwrap();

        assert_eq!(config.audit.path, PathBuf::from("override.log"));
    }

    #[test]
    fn explicit_config_must_load() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");

        let cli = parse(&["--config", missing.to_str().unwrap()]);

        assert!(cli.resolve_config(&dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn default_config_file_is_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("panel.yaml");
        std::fs::write(&default_path, "display:\n  monochrome: true\n").unwrap();

        let cli = parse(&[]);
        let config = cli.resolve_config(&default_path).unwrap();

        assert!(config.display.monochrome);
        assert_eq!(cli.output_format(&config), OutputFormat::Monochrome);
    }

    #[test]
    fn broken_default_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("panel.yaml");
        std::fs::write(&default_path, "audit: [unclosed").unwrap();

        let config = parse(&[]).resolve_config(&default_path).unwrap();

        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn bw_flag_and_config_merge_into_format() {
        let plain = PanelConfig::default();
        let mut mono = PanelConfig::default();
        mono.display.monochrome = true;

        assert_eq!(parse(&[]).output_format(&plain), OutputFormat::Color);
        assert_eq!(parse(&["--bw"]).output_format(&plain), OutputFormat::Monochrome);
        assert_eq!(parse(&[]).output_format(&mono), OutputFormat::Monochrome);
        assert_eq!(parse(&["--json", "--bw"]).output_format(&mono), OutputFormat::Json);
    }

    #[test]
    fn verbosity_overrides_configured_level() {
        let config = PanelConfig::default();

        assert_eq!(parse(&[]).log_filter(&config), "warn");
        assert_eq!(parse(&["-v"]).log_filter(&config), "debug");
        assert_eq!(parse(&["-vv"]).log_filter(&config), "trace");
    }
}
