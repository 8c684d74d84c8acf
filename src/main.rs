use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use resumatch::config::{budget_from_millis, Config};
use resumatch::error::{DocumentRole, MatchError};
use resumatch::extract::{clean_path_input, extract_text};
use resumatch::matching::similarity::SimilarityMetric;
use resumatch::pipeline::MatchPipeline;
use resumatch::text::model::LinguisticModel;
use resumatch::text::stopwords::Language;

/// Resumatch: resume vs job description compatibility scoring.
///
/// Reports what share of the job description's vocabulary shows up in the
/// resume, after normalizing both documents to lemmas.
#[derive(Parser)]
#[command(name = "resumatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a resume against a job description
    Match {
        /// Resume file (.pdf or plain text). Prompted for when omitted
        resume: Option<PathBuf>,

        /// Job description file (.pdf or plain text). Prompted for when omitted
        job: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Max lemmas to list per set (default: 25, 0 = all)
        #[arg(long, default_value = "25")]
        limit: usize,

        /// Stopword and lemmatizer language (overrides RESUMATCH_LANGUAGE)
        #[arg(long, value_enum)]
        language: Option<Language>,

        /// Fuzzy similarity metric (overrides RESUMATCH_SIMILARITY)
        #[arg(long, value_enum)]
        similarity: Option<SimilarityMetric>,

        /// Fuzzy matching time budget in ms, 0 = unbounded (overrides RESUMATCH_FUZZY_BUDGET_MS)
        #[arg(long)]
        budget_ms: Option<u64>,
    },

    /// Show the tagged tokens and lemmas of one document
    Normalize {
        /// Document file (.pdf or plain text)
        file: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,

        /// Max tokens to list (default: 0 = all)
        #[arg(long, default_value = "0")]
        limit: usize,

        /// Stopword and lemmatizer language (overrides RESUMATCH_LANGUAGE)
        #[arg(long, value_enum)]
        language: Option<Language>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging on stderr so reports on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resumatch=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            resume,
            job,
            json,
            limit,
            language,
            similarity,
            budget_ms,
        } => {
            let mut config = Config::load()?;
            if let Some(language) = language {
                config.language = language;
            }
            if let Some(similarity) = similarity {
                config.similarity = similarity;
            }
            if let Some(ms) = budget_ms {
                config.fuzzy_budget = budget_from_millis(ms);
            }

            // Model load failures abort before any document is touched
            let model = load_model(&config)?;

            let resume_path = match resume {
                Some(path) => path,
                None => prompt_path(DocumentRole::Resume)?,
            };
            let job_path = match job {
                Some(path) => path,
                None => prompt_path(DocumentRole::JobDescription)?,
            };

            let spinner = extraction_spinner(json);
            let extracted = tokio::try_join!(
                extract_blocking(resume_path, DocumentRole::Resume),
                extract_blocking(job_path, DocumentRole::JobDescription),
            );
            if let Some(pb) = &spinner {
                pb.finish_and_clear();
            }
            let (resume_text, job_text) = extracted?;

            info!(
                similarity = %config.similarity,
                budget_ms = config.fuzzy_budget.map(|b| b.as_millis() as u64),
                "Comparing documents"
            );

            let pipeline = MatchPipeline::new(model)
                .with_similarity(Arc::from(config.similarity.build()))
                .with_fuzzy_budget(config.fuzzy_budget);

            let result = tokio::task::spawn_blocking(move || {
                pipeline.compute_match(&resume_text, &job_text)
            })
            .await
            .context("Matching task failed")?;

            match result {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        resumatch::output::terminal::display_match_report(&report, limit);
                    }
                }
                Err(e @ MatchError::DegenerateScore) => {
                    if json {
                        let body = serde_json::json!({
                            "score": null,
                            "error": e.to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&body)?);
                    } else {
                        resumatch::output::terminal::display_undefined_score(&e.to_string());
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Normalize {
            file,
            json,
            limit,
            language,
        } => {
            let mut config = Config::load()?;
            if let Some(language) = language {
                config.language = language;
            }

            let model = load_model(&config)?;
            let text = extract_blocking(file, DocumentRole::Resume).await?;

            let pipeline = MatchPipeline::new(model);
            let analyzed = pipeline.analyze(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&analyzed)?);
            } else {
                resumatch::output::terminal::display_analysis(&analyzed, limit);
                println!(
                    "{}",
                    format!(
                        "Language: {} | stopwords: {}",
                        pipeline.model().language(),
                        pipeline.model().stopwords().len()
                    )
                    .dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Load the linguistic model described by the config.
fn load_model(config: &Config) -> Result<Arc<LinguisticModel>> {
    let model = LinguisticModel::load(config.language, config.stopwords_file.as_deref())
        .with_context(|| format!("Failed to load the {} linguistic model", config.language))?;
    Ok(Arc::new(model))
}

/// Ask for a document path on stdin.
fn prompt_path(role: DocumentRole) -> Result<PathBuf> {
    print!("Path to the {role}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read path from stdin")?;

    let path = clean_path_input(&line);
    if path.as_os_str().is_empty() {
        anyhow::bail!("No path given for the {role}");
    }
    Ok(path)
}

/// Extract one document on the blocking pool.
async fn extract_blocking(path: PathBuf, role: DocumentRole) -> Result<String> {
    let text = tokio::task::spawn_blocking(move || extract_text(&path, role))
        .await
        .with_context(|| format!("Extraction of the {role} failed"))??;
    Ok(text)
}

/// Spinner shown while documents are read. Hidden in JSON mode.
fn extraction_spinner(json: bool) -> Option<ProgressBar> {
    if json {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Extracting documents...");
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}
