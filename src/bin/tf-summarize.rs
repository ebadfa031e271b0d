use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tf_summarize::interactive::{self, SUMMARY_BANNER, TEXT_PROMPT};
use tf_summarize::{DuplicatePolicy, Summarizer, SummarizerConfig};

#[derive(Debug, Parser)]
#[command(name = "tf-summarize", version)]
#[command(about = "Extractive summaries by normalized term frequency", long_about = None)]
struct Cli {
    /// Number of sentences to keep; prompts when omitted
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    sentences: Option<u64>,

    /// Read the text from a file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stopword language (en, de, fr, ...)
    #[arg(short, long)]
    language: Option<String>,

    /// Treat repeated identical sentences as one candidate
    #[arg(long)]
    merge_duplicates: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<SummarizerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SummarizerConfig::from_json(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SummarizerConfig::default(),
    };

    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if cli.merge_duplicates {
        config.duplicate_policy = DuplicatePolicy::MergeByText;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let summarizer = Summarizer::with_config(config).context("building summarizer")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading input {}", path.display()))?,
        None => {
            writeln!(out, "{}", TEXT_PROMPT)?;
            out.flush()?;
            interactive::read_text_block(&mut input).context("reading text")?
        }
    };

    let num_sentences = match cli.sentences {
        Some(n) => usize::try_from(n).context("sentence count out of range")?,
        None => interactive::prompt_sentence_count(&mut input, &mut out)
            .context("reading sentence count")?,
    };

    let rendered = match summarizer.summarize(&text, num_sentences) {
        Ok(summary) if cli.json => serde_json::to_string_pretty(&summary)?,
        Ok(summary) => summary.text,
        Err(err) if err.is_empty_vocabulary() => err.report(),
        Err(err) => return Err(err).context("summarizing"),
    };

    writeln!(out)?;
    writeln!(out, "{}", SUMMARY_BANNER)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
