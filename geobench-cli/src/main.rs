#![forbid(unsafe_code)]
//! `geobench-cli`: renders the geo benchmark chart report from a snapshot directory.

use anyhow::Context;
use clap::{Parser, Subcommand};
use geobench_core::{format_timestamp, ReportConfig};
use geobench_report::{aggregate, generate_report};
use geobench_snapshot::{DirectoryStore, SnapshotSource};
use geobench_telemetry::LogFormat;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_CONFIG_FILE: &str = "geobench.toml";

#[derive(Debug, Parser)]
#[command(name = "geobench-cli", version, about = "Geo benchmark chart report", disable_help_subcommand = true)]
struct Cli {
	/// Configuration file (default: $GEOBENCH_CONFIG, then ./geobench.toml)
	#[arg(long, global = true)]
	config: Option<PathBuf>,
	/// Log level override (trace, debug, info, warn, error)
	#[arg(long, global = true)]
	log_level: Option<String>,
	/// Log output format
	#[arg(long, global = true, default_value = "text")]
	log_format: LogFormat,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// Load every snapshot and write the HTML chart report
	Render {
		/// Directory holding the timestamp-named snapshot files
		#[arg(long)]
		snapshots: PathBuf,
		/// Report destination
		#[arg(long)]
		output: PathBuf,
	},
	/// Summarise the loaded snapshots as JSON without rendering
	Inspect {
		#[arg(long)]
		snapshots: PathBuf,
	},
	/// Configuration helpers
	Config {
		#[command(subcommand)]
		action: ConfigCmd,
	},
}

#[derive(Debug, Subcommand)]
enum ConfigCmd {
	/// Print the effective configuration
	Show,
	/// Write the default configuration as TOML
	WriteTemplate {
		#[arg(long)]
		path: Option<PathBuf>,
		/// Overwrite an existing file
		#[arg(long)]
		force: bool,
	},
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Start with defaults, then the config file, then env, then CLI args
	let mut cfg = load_config(cli.config.as_deref())?;
	if let Some(level) = cli.log_level {
		cfg.log_level = level.trim().to_ascii_lowercase();
	}
	cfg.validate()?;
	geobench_telemetry::init(&geobench_telemetry::Config::new(cfg.log_level.clone(), cli.log_format))?;
	debug!(categories = cfg.categories.len(), level = %cfg.log_level, "configuration resolved");

	match cli.command {
		Commands::Render { snapshots, output } => {
			let set = DirectoryStore::new(&snapshots).load_all()?;
			let report = generate_report(&set, &cfg)?;
			report.write_to(&output).with_context(|| format!("writing {}", output.display()))?;
			info!(charts = report.charts.len(), path = %output.display(), "report written");
			eprintln!("wrote {}", output.display());
		}
		Commands::Inspect { snapshots } => {
			let set = DirectoryStore::new(&snapshots).load_all()?;
			let agg = aggregate(&set)?;
			let out = json!({
				"snapshots": set.len(),
				"first": set.keys().next().map(format_timestamp),
				"last": set.keys().next_back().map(format_timestamp),
				"categories": agg.summary(),
			});
			println!("{}", serde_json::to_string_pretty(&out)?);
		}
		Commands::Config { action } => match action {
			ConfigCmd::Show => {
				println!("{}", serde_json::to_string_pretty(&cfg)?);
			}
			ConfigCmd::WriteTemplate { path, force } => {
				let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
				if path.exists() && !force {
					eprintln!("refusing to overwrite existing file: {} (use --force)", path.display());
					std::process::exit(2);
				}
				ReportConfig::default().write_to_file(&path)?;
				eprintln!("wrote {}", path.display());
			}
		},
	}
	Ok(())
}

/// Search order: `--config`, `$GEOBENCH_CONFIG`, `./geobench.toml`. A file
/// named explicitly must exist; the implicit one is optional.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<ReportConfig> {
	let named = explicit.map(Path::to_path_buf).or_else(|| {
		std::env::var("GEOBENCH_CONFIG").ok().filter(|p| !p.trim().is_empty()).map(PathBuf::from)
	});
	let mut cfg = match named {
		Some(p) => ReportConfig::load_from_file(&p).with_context(|| format!("loading config {}", p.display()))?,
		None if Path::new(DEFAULT_CONFIG_FILE).is_file() => ReportConfig::load_from_file(DEFAULT_CONFIG_FILE)
			.with_context(|| format!("loading config {DEFAULT_CONFIG_FILE}"))?,
		None => ReportConfig::default(),
	};
	cfg.apply_env_overrides();
	Ok(cfg)
}
