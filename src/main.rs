use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use ember::config::Config;
use ember::keywords::KeywordSet;
use ember::normalize::Normalizer;
use ember::output::terminal;
use ember::pipeline::analyze;
use ember::youtube::comments::{ApiCommentSource, CommentSource};
use ember::youtube::link::extract_video_id;

/// Ember: Abusive comment detection for YouTube.
///
/// Fetches a video's comments and flags the ones containing abusive
/// keywords, after running each comment through a text-normalization
/// pipeline.
#[derive(Parser)]
#[command(name = "ember", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and classify all comments on a video
    Analyze {
        /// A YouTube video link (watch-page or youtu.be form)
        video_link: String,

        /// Path to the keyword list (overrides EMBER_KEYWORDS)
        #[arg(long)]
        keywords: Option<PathBuf>,

        /// Stop after this many comments (default: fetch all pages)
        #[arg(long)]
        max_comments: Option<usize>,

        /// Emit the results as JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Run a single piece of text through the pipeline
    Check {
        /// The text to normalize and classify
        text: String,

        /// Path to the keyword list (overrides EMBER_KEYWORDS)
        #[arg(long)]
        keywords: Option<PathBuf>,
    },

    /// Show the loaded keyword list
    Keywords {
        /// Path to the keyword list (overrides EMBER_KEYWORDS)
        #[arg(long)]
        keywords: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ember=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            video_link,
            keywords,
            max_comments,
            json,
        } => {
            let config = Config::load()?;
            config.require_youtube()?;

            let video_id = match extract_video_id(&video_link) {
                Ok(id) => id,
                Err(e) => {
                    // Validation failure: show the message, never fetch.
                    eprintln!(
                        "{} {}\nPlease provide a valid YouTube video link.",
                        "error:".red().bold(),
                        e
                    );
                    std::process::exit(1);
                }
            };
            info!(video_id = video_id, "Extracted video id");

            // The keyword list is loaded fresh every run. A read failure
            // aborts here — before any fetching happens.
            let keyword_path = keywords.unwrap_or(config.keywords_path);
            let keyword_set = KeywordSet::load(&keyword_path)?;
            if !json {
                println!(
                    "Loaded {} keywords from {}",
                    keyword_set.len(),
                    keyword_path.display()
                );
            }

            let client =
                ember::youtube::client::YouTubeClient::new(&config.youtube_api_url, &config.youtube_api_key)?;
            let mut source = ApiCommentSource::new(&client);
            if let Some(max) = max_comments {
                source = source.with_max_comments(max);
            }

            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
            pb.set_message("Fetching comments...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));

            let batch = source.list_comments(&video_id).await?;
            pb.finish_and_clear();

            let normalizer = Normalizer::english();
            let results = analyze::classify_comments(&batch.comments, &normalizer, &keyword_set);

            if json {
                // Machine-readable report: the partial-fetch state rides
                // along instead of going to the warning line.
                let report = serde_json::json!({
                    "video_id": video_id,
                    "complete": batch.is_complete(),
                    "truncated_by": batch.truncated_by,
                    "results": results,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Fetched {} comments", batch.comments.len());
                if let Some(reason) = &batch.truncated_by {
                    terminal::display_partial_warning(reason);
                }
                terminal::display_results(&results);
            }
        }

        Commands::Check { text, keywords } => {
            let config = Config::load()?;
            let keyword_path = keywords.unwrap_or(config.keywords_path);
            let keyword_set = KeywordSet::load(&keyword_path)?;

            let normalizer = Normalizer::english();
            let result = analyze::classify_text(&text, &normalizer, &keyword_set);
            terminal::display_single(&result);
        }

        Commands::Keywords { keywords } => {
            let config = Config::load()?;
            let keyword_path = keywords.unwrap_or(config.keywords_path);
            let keyword_set = KeywordSet::load(&keyword_path)?;

            println!(
                "{}",
                format!(
                    "=== Keyword list ({} terms, {}) ===",
                    keyword_set.len(),
                    keyword_path.display()
                )
                .bold()
            );
            for term in keyword_set.terms() {
                println!("  {term}");
            }
        }
    }

    Ok(())
}
