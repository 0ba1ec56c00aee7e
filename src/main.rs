//! critique CLI entry point.
//!
//! Sends source code to the analysis service and prints the critique, either
//! one-shot (`review`) or through an interactive shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use critique::domain::ReviewType;
use critique::infra::api::{HttpReviewClient, ReviewTransport};
use critique::infra::app_config::{self, AppConfig};
use critique::infra::source::{self, LoadedSource};
use critique::session::{ReviewDraft, SessionStore};
use critique::ui::{render, shell};

#[derive(Parser, Debug)]
#[command(name = "critique")]
#[command(version)]
#[command(about = "AI-powered code review from the terminal", long_about = None)]
struct Args {
    /// Base address of the analysis service (overrides CRITIQUE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Review a file, stdin, or the built-in sample
    Review {
        /// File to review (stdin is used when omitted and piped)
        path: Option<PathBuf>,

        /// Read code from stdin
        #[arg(long, conflicts_with = "path")]
        stdin: bool,

        /// Review the built-in sample snippet
        #[arg(long, conflicts_with_all = ["path", "stdin"])]
        sample: bool,

        /// Filename sent along with the code
        #[arg(short, long)]
        filename: Option<String>,

        /// Review focus (general, security, performance, style)
        #[arg(short = 't', long = "type", default_value = "general", value_parser = parse_review_type)]
        review_type: ReviewType,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the analysis service is reachable
    Health,

    /// List available review types
    Types {
        /// Ask the service instead of using the built-in list
        #[arg(long)]
        remote: bool,
    },

    /// Interactive session (default)
    Shell,
}

fn parse_review_type(value: &str) -> Result<ReviewType, String> {
    value.parse().map_err(|e| format!("{e}"))
}

fn resolve_config(args: &Args) -> Result<AppConfig> {
    let config = match &args.config {
        Some(path) => app_config::load_config_from(path)?,
        None => app_config::load_config(),
    };
    Ok(config.with_api_url_override(args.api_url.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let client = HttpReviewClient::from_config(&config)?;
    log::debug!("Using analysis service at {}", client.base_url());

    match args.command.unwrap_or(Commands::Shell) {
        Commands::Review {
            path,
            stdin,
            sample,
            filename,
            review_type,
            json,
        } => {
            let mut loaded = if sample {
                LoadedSource::sample()
            } else if let Some(path) = path {
                source::load_source_file(&path)?
            } else if stdin {
                LoadedSource {
                    code: source::read_stdin_source()?,
                    filename: config.default_filename.clone(),
                }
            } else if let Some(code) = source::try_read_stdin_source()? {
                LoadedSource {
                    code,
                    filename: config.default_filename.clone(),
                }
            } else {
                eprintln!("Error: No code provided. Pass a file, pipe code to stdin, or use --sample");
                std::process::exit(2);
            };
            if let Some(filename) = filename {
                loaded.filename = filename;
            }

            let mut store = SessionStore::new(Arc::new(client));
            store.load_source(loaded);
            store.select_review_type(review_type);
            store.submit_draft();
            store.settle().await;

            let state = store.state();
            if let Some(error) = &state.error {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }
            if let Some(result) = &state.result {
                if json {
                    let text = serde_json::to_string_pretty(result)
                        .context("Failed to serialize review result")?;
                    println!("{}", text);
                } else {
                    print!("{}", render::render_result(result));
                }
            }
        }
        Commands::Health => {
            let status = client.health().await;
            print!("{}", render::render_health(&status));
            if status.is_offline() {
                std::process::exit(1);
            }
        }
        Commands::Types { remote } => {
            if remote {
                match client.review_types().await {
                    Ok(types) => print!("{}", render::render_remote_review_types(&types)),
                    Err(err) => {
                        eprintln!("Error: {}", err);
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", render::render_review_types());
            }
        }
        Commands::Shell => {
            let draft = ReviewDraft::with_filename(config.default_filename.clone());
            let mut store = SessionStore::with_draft(Arc::new(client), draft);
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let mut out = std::io::stdout();
            shell::run_shell(&mut store, input, &mut out).await?;
        }
    }

    Ok(())
}
