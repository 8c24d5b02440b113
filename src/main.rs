//! CLI entry point for tint.

mod cli;

use clap::{CommandFactory, Parser};
use tint::export::shell_exports;
use tint::prefs;
use tint::render::Renderer;
use tint::resolver::Resolver;
use tint::theme::Catalog;
use tracing::debug;

fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let renderer = Renderer::new(!args.no_color);
    let mut resolver = Resolver::new(Catalog::builtin());

    // Seed the active selection from the persisted preference, if present.
    let prefs_path = args.prefs_file.clone().or_else(prefs::default_path);
    if let Some(path) = prefs_path.as_deref() {
        if let Some(saved) = prefs::load(path) {
            if resolver.seed(&saved) {
                debug!(theme = %saved, "seeded active theme from preference file");
            } else {
                debug!(
                    theme = %saved,
                    "preference file names an unknown theme; using fallback"
                );
            }
        }
    }

    let Some(command) = args.command else {
        // No subcommand prints usage help, matching `tint --help`.
        let _ = cli::Args::command().print_help();
        return;
    };

    match command {
        cli::Command::List => {
            println!("Available themes:");
            for theme in resolver.catalog().iter() {
                renderer.theme_row(theme, theme.name == resolver.current_name());
            }
        }
        cli::Command::Get { name } => match resolver.resolve(name.as_deref()) {
            Ok(theme) => match serde_json::to_string_pretty(theme) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    renderer.error(&format!("failed to serialize theme: {e}"));
                    std::process::exit(1);
                }
            },
            Err(e) => {
                renderer.error(&e.to_string());
                std::process::exit(1);
            }
        },
        cli::Command::Set { name } => {
            if let Err(e) = resolver.select(&name) {
                renderer.error(&e.to_string());
                std::process::exit(1);
            }
            let Some(path) = prefs_path.as_deref() else {
                renderer.error(
                    "could not determine a home directory for the preference file; pass --prefs-file",
                );
                std::process::exit(1);
            };
            if let Err(e) = prefs::save(path, &name) {
                renderer.error(&e);
                std::process::exit(1);
            }
            println!("Theme set to: {name}");
        }
        cli::Command::Apply => match resolver.resolve(None) {
            Ok(theme) => println!("{}", shell_exports(theme)),
            Err(e) => {
                renderer.error(&e.to_string());
                std::process::exit(1);
            }
        },
        cli::Command::Export { file } => match resolver.resolve(None) {
            Ok(theme) => {
                if let Err(e) = std::fs::write(&file, shell_exports(theme)) {
                    renderer.error(&format!("failed to write {}: {e}", file.display()));
                    std::process::exit(1);
                }
                println!("Theme exported to: {}", file.display());
            }
            Err(e) => {
                renderer.error(&e.to_string());
                std::process::exit(1);
            }
        },
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("TINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
