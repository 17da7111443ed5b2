//! # README Harness CLI (`rdme`)
//!
//! Scans a project directory, assembles its readable source files into one
//! prompt, asks a text-generation provider for a README, and writes the
//! result to disk.
//!
//! ## Usage
//!
//! ```bash
//! rdme <directory> [-o <output>] [--gemini-api-key …] [--openai-api-key …] [--groq-api-key …]
//! ```
//!
//! Exactly one backend runs per invocation: the first configured credential
//! wins (Gemini, then OpenAI, then Groq); with no credential at all a local
//! Ollama server is used. Keys may also come from the `GEMINI_API_KEY`,
//! `OPENAI_API_KEY`, and `GROQ_API_KEY` environment variables.

use clap::Parser;
use std::path::PathBuf;

use readme_harness::backend::Credentials;
use readme_harness::config;
use readme_harness::pipeline::{self, RunOptions};
use readme_harness::progress::ProgressMode;

/// README Harness — generate a README for a codebase with a
/// text-generation provider.
#[derive(Parser)]
#[command(
    name = "rdme",
    about = "Generate a README for a codebase with a text-generation provider",
    version,
    long_about = "README Harness scans a project directory, concatenates its readable source \
    files into a single prompt, sends it to a text-generation backend (Gemini, OpenAI, Groq, \
    or a local Ollama server), and writes the generated README to disk."
)]
struct Cli {
    /// Path to the project directory to ingest.
    directory: PathBuf,

    /// Destination file for the generated document.
    ///
    /// Defaults to a freshly named `.md` file under the configured output
    /// directory (the system temp dir unless overridden in the config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Gemini API key. Takes precedence over every other credential.
    #[arg(long)]
    gemini_api_key: Option<String>,

    /// OpenAI API key. Used when no Gemini key is configured.
    #[arg(long)]
    openai_api_key: Option<String>,

    /// Groq API key. Used when neither a Gemini nor an OpenAI key is configured.
    #[arg(long)]
    groq_api_key: Option<String>,

    /// Path to configuration file (TOML).
    ///
    /// Overrides the ignore rules, backend models, the Ollama endpoint,
    /// and the default output directory. When the flag is omitted and
    /// `./rdme.toml` does not exist, built-in defaults apply.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scan and assemble only: print file count and prompt size, then exit
    /// without calling any backend or writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Progress output on stderr: off, human, or json.
    ///
    /// Defaults to human when stderr is a terminal, off otherwise.
    #[arg(long)]
    progress: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => {
            let default_path = PathBuf::from("./rdme.toml");
            if default_path.exists() {
                config::load_config(&default_path)?
            } else {
                config::Config::minimal()
            }
        }
    };

    let progress = match cli.progress.as_deref() {
        None => ProgressMode::default_for_tty(),
        Some("off") => ProgressMode::Off,
        Some("human") => ProgressMode::Human,
        Some("json") => ProgressMode::Json,
        Some(other) => anyhow::bail!("Unknown progress mode: '{}'. Must be off, human, or json.", other),
    };

    let credentials = Credentials::resolve(
        cli.gemini_api_key,
        cli.openai_api_key,
        cli.groq_api_key,
    );

    pipeline::run_generate(
        &cfg,
        RunOptions {
            directory: cli.directory,
            output: cli.output,
            credentials,
            dry_run: cli.dry_run,
            progress,
        },
    )
}
