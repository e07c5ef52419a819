//! CLI entry point for termux-keys
//!
//! Provides command-line interface for checking a properties file,
//! previewing the extra-keys layout, listing shortcuts and watching
//! the file for changes.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::time::Duration;
use termux_keys::config::{source, FileWatcher, PreferencesHandle, ReloadReport, TerminalPreferences};
use termux_keys::core::{display::display_matrix, Style};

#[derive(Parser)]
#[command(name = "termux-keys")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to termux.properties (default: ~/.termux/termux.properties,
    /// then ~/.config/termux/termux.properties)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the properties file for errors
    Check,

    /// Show the extra-keys layout with display glyphs
    Keys {
        /// Glyph style (default, arrows-only, arrows-all, all, none);
        /// overrides extra-keys-style
        #[arg(short, long)]
        style: Option<String>,
    },

    /// List keyboard shortcuts
    Shortcuts,

    /// Reprint the layout whenever the properties file changes
    Watch,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    termux_keys::logging::init(cli.verbose);

    let config_path = resolve_config_path(cli.config.as_ref())?;
    let handle = PreferencesHandle::default();
    let report = handle.reload_from_file(config_path.as_deref());

    match cli.command {
        Commands::Check => check(&report, config_path.as_ref()),
        Commands::Keys { style } => {
            print_report(&report);
            let prefs = handle.snapshot();
            let style = style.as_deref().map(Style::from_name).unwrap_or(prefs.extra_keys_style);
            print_keys(&prefs, style);
        }
        Commands::Shortcuts => {
            print_report(&report);
            print_shortcuts(&handle.snapshot());
        }
        Commands::Watch => {
            let path = config_path
                .ok_or_else(|| anyhow::anyhow!("No termux.properties found to watch"))?;
            watch(&handle, report, path)?;
        }
    }

    Ok(())
}

/// Expands `--config`, or discovers the file in the home directory
fn resolve_config_path(config: Option<&PathBuf>) -> anyhow::Result<Option<PathBuf>> {
    match config {
        Some(path) => {
            // Expand tilde in path
            let expanded = shellexpand::tilde(
                path.to_str()
                    .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
            );
            Ok(Some(PathBuf::from(expanded.as_ref())))
        }
        None => Ok(source::find_properties_file(&source::home_dir())),
    }
}

/// Print errors and exit non-zero if the reload failed anywhere
fn check(report: &ReloadReport, path: Option<&PathBuf>) {
    match path {
        Some(path) => println!("{} Checking: {}", "→".cyan(), path.display()),
        None => println!("{} No termux.properties found, using defaults", "→".cyan()),
    }

    if report.is_ok() {
        println!("{} {}", "✓".green().bold(), "No errors detected!".bold());
        return;
    }

    print_report(report);
    std::process::exit(1);
}

fn print_report(report: &ReloadReport) {
    for message in report.messages() {
        eprintln!("{} {}", "✗".red().bold(), message);
    }
}

fn print_keys(prefs: &TerminalPreferences, style: Style) {
    println!("{}", format!("Extra keys (style: {})\n", style).bold());

    if prefs.extra_keys.is_empty() {
        println!("{}", "(no rows)".dimmed());
        return;
    }

    for row in display_matrix(style, &prefs.extra_keys) {
        let cells: Vec<String> = row.iter().map(|glyph| format!("[{}]", glyph)).collect();
        println!("  {}", cells.join(" ").cyan());
    }

    println!(
        "\n{} {} rows, {} columns",
        "✓".green(),
        prefs.extra_keys.row_count(),
        prefs.extra_keys.max_row_len()
    );
}

fn print_shortcuts(prefs: &TerminalPreferences) {
    if prefs.shortcuts.is_empty() {
        println!("{}", "No keyboard shortcuts configured".yellow());
        return;
    }

    for shortcut in &prefs.shortcuts {
        println!(
            "{}  {}",
            format!("{}", shortcut).green(),
            format!("({})", shortcut.action.property_name()).dimmed()
        );
    }

    println!("\n{} Total: {} shortcuts", "✓".green(), prefs.shortcuts.len());
}

/// Poll the file watcher and reload on every change
fn watch(handle: &PreferencesHandle, report: ReloadReport, path: PathBuf) -> anyhow::Result<()> {
    let watcher = FileWatcher::new(path.clone())?;

    println!("{} Watching: {}", "→".cyan(), path.display());
    print_report(&report);
    let prefs = handle.snapshot();
    print_keys(&prefs, prefs.extra_keys_style);

    loop {
        std::thread::sleep(Duration::from_millis(250));

        if !watcher.check_for_changes() {
            continue;
        }

        let report = handle.reload_from_file(Some(watcher.path()));
        println!("\n{} Reloaded", "↻".cyan());
        print_report(&report);

        let prefs = handle.snapshot();
        print_keys(&prefs, prefs.extra_keys_style);
    }
}
