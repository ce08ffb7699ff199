use std::process;

use clap::Parser;
use serde::Serialize;

use theme_probe_core::{Appearance, DesktopEnvironment, PlatformKind, ThemeProbe};

/// Report whether the operating system is using a dark UI theme.
#[derive(Parser)]
#[command(name = "theme-probe")]
struct Cli {
    /// Theme preference to resolve: system, dark or light.
    #[arg(long, default_value = "system")]
    appearance: Appearance,

    /// Classify the platform from this OS name instead of the build target.
    #[arg(long)]
    os_name: Option<String>,

    /// Print a JSON report instead of `dark` / `light`.
    #[arg(long)]
    json: bool,
}

/// JSON shape printed by `--json`.
#[derive(Serialize)]
struct Report {
    platform: PlatformKind,
    desktops: Vec<DesktopEnvironment>,
    /// What the OS itself reports.
    system_dark: bool,
    appearance: Appearance,
    /// What to present after applying `appearance`.
    dark: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut probe = ThemeProbe::new();
    if let Some(name) = cli.os_name {
        probe = probe.with_os_name(name);
    }
    log::info!("Probing theme on {}", probe.platform());

    if cli.json {
        let report = build_report(&probe, cli.appearance);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", label(cli.appearance.resolve_dark(&probe)));
    }

    Ok(())
}

fn build_report(probe: &ThemeProbe, appearance: Appearance) -> Report {
    let report = probe.report();
    Report {
        platform: report.platform,
        desktops: report.desktops,
        system_dark: report.dark,
        appearance,
        dark: appearance.apply(report.dark),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(name) = &cli.os_name {
        if name.trim().is_empty() {
            return Err("--os-name must not be empty".into());
        }
    }
    Ok(())
}

fn label(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}
