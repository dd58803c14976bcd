//! Hueprint CLI
//!
//! Command-line front end over the theme pipeline: export pasteable theme
//! code, dump token maps, derive state colors, inspect presets, and build or
//! read share links.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hueprint_core::ColorScheme;
use hueprint_editor::config::CONFIG_FILE_NAME;
use hueprint_editor::{EditorConfig, FontCategory};

/// Theme customization toolkit for chat widgets
#[derive(Parser, Debug)]
#[command(name = "hueprint")]
#[command(about = "Build, inspect, and share chat widget themes")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./hueprint.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print pasteable theme code for a saved state
    Export {
        /// State JSON file ({"light": ..., "dark": ...})
        state: PathBuf,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the token map of one mode as JSON
    Tokens {
        state: PathBuf,
        #[arg(short, long, default_value = "light")]
        mode: ColorScheme,
    },
    /// Print every derived variant of one color
    Derive {
        color: String,
        #[arg(short, long, default_value = "light")]
        mode: ColorScheme,
        /// Color engine name
        #[arg(short, long, default_value = "default")]
        engine: String,
    },
    /// List bundled presets
    Presets,
    /// Print a preset's state as JSON
    Preset {
        id: String,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Build a share link for a saved state
    Share {
        state: PathBuf,
        /// Mode to tag as displayed
        #[arg(short, long)]
        mode: Option<ColorScheme>,
        /// Page the link points at (overrides config)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Read the state carried by a share link
    Decode {
        url: String,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show weights and stylesheet links for font families
    Fonts {
        #[arg(required_unless_present = "category")]
        families: Vec<String>,
        /// List the picker fonts of a category instead
        /// (sans-serif, serif, monospace, system)
        #[arg(short, long, conflicts_with = "families")]
        category: Option<FontCategory>,
    },
    /// Remember a preset as the selected theme
    Select { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded config");

    let output = match cli.command {
        Command::Export { state, out } => {
            let code = commands::export(&state)?;
            commands::emit(code, out.as_deref())?
        }
        Command::Tokens { state, mode } => Some(commands::tokens(&state, mode)?),
        Command::Derive {
            color,
            mode,
            engine,
        } => Some(commands::derive(&color, mode, &engine)),
        Command::Presets => Some(commands::presets()),
        Command::Preset { id, out } => {
            let json = commands::preset(&id)?;
            commands::emit(json, out.as_deref())?
        }
        Command::Share {
            state,
            mode,
            base_url,
        } => Some(commands::share(&state, mode, base_url.as_deref(), &config)?),
        Command::Decode { url, out } => {
            let json = commands::decode(&url, &config)?;
            commands::emit(json, out.as_deref())?
        }
        Command::Fonts { families, category } => Some(match category {
            Some(category) => commands::font_catalog(category),
            None => commands::fonts(&families),
        }),
        Command::Select { id } => Some(commands::select(&id, &config)?),
    };

    if let Some(output) = output {
        println!("{output}");
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit path must exist; otherwise the first config found wins
fn load_config(explicit: Option<&std::path::Path>) -> Result<EditorConfig> {
    if let Some(path) = explicit {
        return EditorConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    let candidates = [
        Some(PathBuf::from(CONFIG_FILE_NAME)),
        dirs::config_dir().map(|dir| dir.join("hueprint").join(CONFIG_FILE_NAME)),
    ];
    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            return EditorConfig::load_from_path(&path)
                .with_context(|| format!("Failed to load config {}", path.display()));
        }
    }
    Ok(EditorConfig::default())
}
