//! CLI entry point for themesync.

mod cli;

use clap::Parser;
use themesync::apply::{self, ApplyOptions};
use themesync::config::{load_settings, resolve, SettingsDefaults};
use themesync::error::ApplyError;
use themesync::render::Renderer;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let renderer = Renderer::new(!args.no_color);
    if let Err(e) = run(&args, &renderer) {
        renderer.error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: &cli::Args, renderer: &Renderer) -> Result<(), ApplyError> {
    let loaded = load_settings(&args.root, args.settings.as_deref())?;
    for msg in &loaded.diagnostics.deprecations {
        renderer.warn(msg);
    }

    // Resolve everything before touching a single file.
    let settings = resolve(&args.overrides(), &loaded.stored, &SettingsDefaults::default())?;
    let options = ApplyOptions {
        skip_settings_rewrite: args.skip_palette,
    };
    let report = apply::run(&args.root, &loaded, &settings, options)?;
    renderer.report(&report);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
