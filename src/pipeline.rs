//! Pipeline orchestration.
//!
//! Coordinates the full run: scan → prompt assembly → backend dispatch →
//! output sanitization → artifact write. The scan degrades gracefully
//! (missing directory or unreadable files mean less content, not a crash);
//! a backend failure is terminal and propagates to the caller.

use anyhow::Result;
use std::path::PathBuf;

use crate::backend::{self, Credentials};
use crate::config::Config;
use crate::filter::PathFilter;
use crate::instruction::SYSTEM_INSTRUCTION;
use crate::models::FileSet;
use crate::output;
use crate::progress::ProgressMode;
use crate::prompt;
use crate::sanitize;
use crate::scanner;

pub struct RunOptions {
    pub directory: PathBuf,
    pub output: Option<PathBuf>,
    pub credentials: Credentials,
    pub dry_run: bool,
    pub progress: ProgressMode,
}

pub fn run_generate(config: &Config, opts: RunOptions) -> Result<()> {
    let filter = PathFilter::new(&config.filter);
    let reporter = opts.progress.reporter();

    let files: FileSet = scanner::scan_directory(&opts.directory, &filter, reporter.as_ref());

    if files.is_empty() {
        println!("Could not read any relevant code content.");
        return Ok(());
    }

    let prompt_content = prompt::assemble(&files);

    if opts.dry_run {
        println!("generate (dry-run)");
        println!("  files read: {}", files.len());
        println!("  prompt size: {} bytes", prompt_content.len());
        return Ok(());
    }

    let backend = backend::select_backend(&opts.credentials, &config.generation);
    eprintln!("generating with {}", backend.name());

    let generated = backend.generate(SYSTEM_INSTRUCTION, &prompt_content)?;

    // Models sometimes wrap the document in ```markdown fences even though
    // the instruction forbids it.
    let cleaned = sanitize::strip_enclosing_fence(&generated);

    let destination = output::resolve_destination(opts.output, &config.output)?;
    match output::write_artifact(&destination, &cleaned) {
        Ok(()) => {
            println!("{}", destination.display());
            println!("Generated README saved to {}", destination.display());
        }
        Err(err) => {
            // The run ends without the artifact, but exits normally.
            eprintln!("{:#}", err);
        }
    }

    Ok(())
}
