//! Declension Fixer - rewrite a sentence to agree with a selected word
//!
//! Command line host for the "fix declension" editor action.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use declension_fixer::commands;
use declension_fixer::completion;
use declension_fixer::config::{self, Config};
use declension_fixer::core::{sentence_span, DeclensionFixer};
use declension_fixer::editor::{Editor, Position, TextDocument};
use declension_fixer::notify::ConsoleNotifier;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite the sentence under the cursor to match the selected word
    Fix {
        /// Document to edit
        file: PathBuf,

        /// Zero-based line holding the cursor
        #[arg(long)]
        line: usize,

        /// Zero-based column where the key word selection starts (defaults to --to)
        #[arg(long)]
        from: Option<usize>,

        /// Zero-based column of the cursor, where the key word selection ends
        #[arg(long)]
        to: usize,

        /// Print the rewritten line instead of saving the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the sentence span around an index, without calling the model
    Span {
        text: String,

        #[arg(long)]
        index: usize,
    },

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List available editor commands
    Commands {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print current settings (API key redacted)
    Show,
    /// Print the settings file location
    Path,
    /// Update settings
    Set {
        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        base_url: Option<String>,

        #[arg(long)]
        model: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging before settings are read so load warnings are visible.
    // RUST_LOG wins, then --verbose, then the configured level.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let pinned = env_filter.is_some() || args.verbose;
    let initial = env_filter.unwrap_or_else(|| {
        EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });
    let (filter_layer, filter_handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let config = Config::load_from(&config_path)?;

    if !pinned {
        filter_handle.reload(EnvFilter::new(&config.log_level))?;
    }

    debug!("⚙️ Settings from {}: {:?}", config_path.display(), config);

    match args.command {
        Command::Fix {
            file,
            line,
            from,
            to,
            dry_run,
        } => run_fix(&config, &file, line, from.unwrap_or(to), to, dry_run).await,
        Command::Span { text, index } => {
            let span = sentence_span(&text, index);
            println!("{}\t{}\t{}", span.start, span.end, span.slice(&text).trim());
            Ok(())
        }
        Command::Config { action } => run_config(config, &config_path, action),
        Command::Commands { json } => {
            let registry = commands::registry();
            if json {
                println!("{}", serde_json::to_string_pretty(&registry)?);
            } else {
                for cmd in registry {
                    let hotkey = cmd.hotkey.map(|h| h.to_string()).unwrap_or_default();
                    println!("{}\t{}\t{}", cmd.id, cmd.name, hotkey);
                }
            }
            Ok(())
        }
    }
}

async fn run_fix(
    config: &Config,
    file: &Path,
    line: usize,
    from: usize,
    to: usize,
    dry_run: bool,
) -> Result<()> {
    let mut doc = TextDocument::open(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    doc.select(Position::new(line, from), Position::new(line, to))
        .with_context(|| format!("Cannot place the cursor in {}", file.display()))?;

    let service = completion::create_service(config)?;
    let fixer = DeclensionFixer::new(service, Arc::new(ConsoleNotifier), config.model.clone());

    let Some(rewrite) = fixer.fix_declension(&mut doc).await else {
        std::process::exit(1);
    };

    if dry_run {
        println!("{}", doc.line(rewrite.line)?);
    } else if doc.is_modified() {
        doc.save(file)
            .with_context(|| format!("Failed to save {}", file.display()))?;
        info!("💾 Updated {}", file.display());
    }
    Ok(())
}

fn run_config(mut config: Config, path: &Path, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let shown = Config {
                api_key: config.redacted_api_key(),
                ..config
            };
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Set {
            api_key,
            base_url,
            model,
            timeout,
        } => {
            if let Some(v) = api_key {
                config.api_key = v;
            }
            if let Some(v) = base_url {
                config.base_url = v;
            }
            if let Some(v) = model {
                config.model = v;
            }
            if let Some(v) = timeout {
                config.request_timeout_secs = v;
            }
            config.save_to(path)?;
            info!("✅ Settings saved to {}", path.display());
        }
    }
    Ok(())
}
