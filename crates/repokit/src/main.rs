//! repokit - repository files for the Ultimate Hyperfocus Constellation
//!
//! Commands:
//! - generate [BUNDLE...]: Write bundles (default: all) under the output dir
//! - list: List bundles and the files they write
//! - show <PATH>: Print one file's text
//! - summary: Print the production package summary
//! - config: Show or initialize the config file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use repokit::{
    catalog, constellation_report, render, Bundle, Emitter, FileSink, Layout, MemorySink, Report,
    TracingSink, WriterSink,
};
use repokit_core::{Config, Paths};

#[derive(Parser)]
#[command(name = "repokit")]
#[command(about = "Write the repository files for the Ultimate Hyperfocus Constellation")]
#[command(version)]
#[command(after_help = r#"BUNDLES:
    community       CONTRIBUTING.md
    essentials      CODE_OF_CONDUCT.md, LICENSE, package.json
    github          Deploy workflow and issue templates
    repository      PR template, .gitignore, SECURITY.md, FUNDING.yml
    seo             seo-manager.js

EXAMPLES:
    repokit generate                      # Write every bundle here
    repokit generate github seo --out site
    repokit generate --dry-run            # Show what would be written
    repokit show LICENSE                  # Print one file
    repokit summary --sink file           # Write the package summary log
"#)]
struct Cli {
    /// Config file (default: ~/.config/repokit/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write bundles to disk
    Generate {
        /// Bundles to write (default: all)
        bundles: Vec<String>,

        /// Output directory (default: output_dir from config)
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// List what would be written without writing
        #[arg(long)]
        dry_run: bool,

        /// Only print errors
        #[arg(long, short)]
        quiet: bool,
    },

    /// List bundles and their files
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the text of one file
    Show {
        /// Path as listed by `repokit list`
        path: PathBuf,
    },

    /// Print the production package summary
    Summary {
        /// Where the summary goes
        #[arg(long, value_enum, default_value_t = SinkKind::Console)]
        sink: SinkKind,

        /// File for `--sink file` (default: summary.log_file from config)
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,

        /// Report definition as JSON (default: the built-in package summary)
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,

        /// Output the report and totals as JSON (ignores --sink)
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SinkKind {
    /// Plain lines on stdout
    Console,
    /// Info-level tracing events on stderr
    Log,
    /// A log file, replaced on each run
    File,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,repokit::summary=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(|| Paths::new().config_file());

    match cli.command {
        Some(Commands::Generate {
            bundles,
            out,
            dry_run,
            quiet,
        }) => {
            let config = Config::load_from(&config_path)?;
            cmd_generate(&config, &bundles, out, dry_run, quiet)
        }

        Some(Commands::List { json }) => cmd_list(json),

        Some(Commands::Show { path }) => cmd_show(&path),

        Some(Commands::Summary {
            sink,
            log_file,
            report,
            json,
        }) => {
            let config = Config::load_from(&config_path)?;
            let report = match report {
                Some(path) => load_report(&path)?,
                None => constellation_report(),
            };
            cmd_summary(&config, &report, sink, log_file, json)
        }

        Some(Commands::Config { init, force }) => cmd_config(&config_path, init, force),

        None => cmd_list(false),
    }
}

/// Resolve bundle names, keeping the first occurrence of each
fn select_bundles(names: &[String]) -> Result<Vec<&'static Bundle>> {
    if names.is_empty() {
        return Ok(catalog::catalog().iter().collect());
    }

    let mut selected: Vec<&'static Bundle> = Vec::new();
    for name in names {
        let bundle = catalog::find(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown bundle: {}\nKnown bundles: {}",
                name,
                catalog::names().join(", ")
            )
        })?;
        if !selected.iter().any(|b| b.name == bundle.name) {
            selected.push(bundle);
        }
    }
    Ok(selected)
}

/// Write the selected bundles
fn cmd_generate(
    config: &Config,
    names: &[String],
    out: Option<PathBuf>,
    dry_run: bool,
    quiet: bool,
) -> Result<()> {
    let bundles = select_bundles(names)?;
    let root = out.unwrap_or_else(|| config.output_dir.clone());
    let quiet = quiet || config.quiet;
    let emitter = Emitter::new(&root).quiet(quiet || dry_run);

    let mut total = 0;
    for bundle in bundles {
        let set = bundle.artifact_set()?;

        if dry_run {
            for planned in emitter.plan(&set)? {
                println!(
                    "would write {} ({} bytes{})",
                    planned.dest.display(),
                    planned.bytes,
                    if planned.overwrites { ", overwrite" } else { "" }
                );
            }
            continue;
        }

        let written = emitter
            .emit_all(&set)
            .with_context(|| format!("Failed to write bundle: {}", bundle.name))?;
        total += written.len();

        if !quiet {
            println!();
            println!("\x1b[1m🌟 {}:\x1b[0m", bundle.title);
            for feature in bundle.features {
                println!("   {}", feature);
            }
            println!();
        }
    }

    if !dry_run && !quiet {
        println!("success: {} files written to {}", total, root.display());
    }

    Ok(())
}

/// List bundles and the files they write
fn cmd_list(json: bool) -> Result<()> {
    let bundles = catalog::catalog();

    if json {
        let json_output: Vec<_> = bundles
            .iter()
            .map(|b| {
                let artifacts: Vec<_> = b
                    .artifacts()
                    .map(|a| {
                        serde_json::json!({
                            "path": a.path.to_string_lossy(),
                            "bytes": a.len(),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "name": b.name,
                    "title": b.title,
                    "artifacts": artifacts,
                    "features": b.features,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    println!("\x1b[1mBundles\x1b[0m");
    println!();

    for bundle in bundles {
        println!("  \x1b[32m{}\x1b[0m  \x1b[2m{}\x1b[0m", bundle.name, bundle.title);
        for artifact in bundle.artifacts() {
            println!("    {}", artifact.path.display());
        }
    }

    Ok(())
}

/// Print one artifact's text exactly as it would be written
fn cmd_show(path: &Path) -> Result<()> {
    let (_, artifact) = catalog::find_artifact(path).ok_or_else(|| {
        anyhow::anyhow!(
            "No bundle writes {}\nRun 'repokit list' to see all files",
            path.display()
        )
    })?;

    print!("{}", artifact.content);
    Ok(())
}

/// Read a report definition from a JSON file
fn load_report(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read report: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse report: {}", path.display()))
}

/// Print a package summary
fn cmd_summary(
    config: &Config,
    report: &Report,
    sink: SinkKind,
    log_file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let layout = Layout::from(&config.summary);

    if json {
        let stats = render(report, &layout, &mut MemorySink::new())?;
        let output = serde_json::json!({
            "report": report,
            "total_kb": stats.total_kb,
            "skipped": stats.skipped,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let stats = match sink {
        SinkKind::Console => render(report, &layout, &mut WriterSink::stdout())?,
        SinkKind::Log => render(report, &layout, &mut TracingSink)?,
        SinkKind::File => {
            let path = log_file.unwrap_or_else(|| config.summary.log_file.clone());
            let mut file_sink = FileSink::create(&path)
                .with_context(|| format!("Failed to create summary log: {}", path.display()))?;
            let stats = render(report, &layout, &mut file_sink)
                .with_context(|| format!("Failed to write summary log: {}", path.display()))?;
            let path = file_sink
                .finish()
                .with_context(|| format!("Failed to flush summary log: {}", path.display()))?;
            println!("success: Summary written to {}", path.display());
            stats
        }
    };

    tracing::debug!(records = stats.records, lines = stats.lines, "summary rendered");
    Ok(())
}

/// Show the effective configuration, or write a default one
fn cmd_config(path: &Path, init: bool, force: bool) -> Result<()> {
    if init {
        if path.exists() && !force {
            bail!(
                "Config already exists: {}\nUse --force to overwrite",
                path.display()
            );
        }
        Config::default().save_to(path)?;
        println!("success: Config written to {}", path.display());
        return Ok(());
    }

    let config = Config::load_from(path)?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("# {}", source);
    print!("{}", config.to_yaml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parsing() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from(["repokit", "generate", "github", "seo", "--out", "site"]);
        match cli.command {
            Some(Commands::Generate { bundles, out, dry_run, .. }) => {
                assert_eq!(bundles, vec!["github", "seo"]);
                assert_eq!(out, Some(PathBuf::from("site")));
                assert!(!dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_select_bundles() {
        let all = select_bundles(&[]).unwrap();
        assert_eq!(all.len(), 5);

        let picked = select_bundles(&["seo".to_string(), "SEO".to_string(), "github".to_string()])
            .unwrap();
        let names: Vec<_> = picked.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["seo", "github"]);

        let err = select_bundles(&["website".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Unknown bundle: website"));
    }

    #[test]
    fn test_generate_writes_every_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::default();

        cmd_generate(&config, &[], Some(dir.path().to_path_buf()), false, true).unwrap();

        for bundle in catalog::catalog() {
            for artifact in bundle.artifacts() {
                let on_disk = std::fs::read_to_string(dir.path().join(&artifact.path)).unwrap();
                assert_eq!(on_disk, artifact.content);
            }
        }
    }

    #[test]
    fn test_generate_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site");

        cmd_generate(&Config::default(), &[], Some(out.clone()), true, true).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_summary_file_sink_uses_config_path() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.summary.log_file = dir.path().join("logs/summary.log");

        cmd_summary(&config, &constellation_report(), SinkKind::File, None, false).unwrap();

        let text = std::fs::read_to_string(&config.summary.log_file).unwrap();
        assert!(text.contains("💾 Total Size: 181.1 KB optimized package"));
    }

    #[test]
    fn test_load_report_from_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(
            &path,
            r#"{
                "title": "MINI",
                "sections": [{
                    "heading": "FILES:",
                    "label": "files",
                    "counted": true,
                    "records": [
                        {"id": 1, "name": "a.js", "size": "40.4 KB", "description": "a"},
                        {"id": 2, "name": "b.js", "size": "bad", "description": "b"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let report = load_report(&path).unwrap();
        let mut sink = MemorySink::new();
        let stats = render(&report, &Layout::default(), &mut sink).unwrap();
        assert_eq!(stats.skipped, vec!["b.js".to_string()]);
        assert!(sink.text().contains("💾 Total Size: 40.4 KB"));
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        cmd_config(&path, true, false).unwrap();
        assert!(cmd_config(&path, true, false).is_err());
        cmd_config(&path, true, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
