//! Prompt assembly.
//!
//! Renders a [`FileSet`] into the single delimited text block sent to the
//! generation backend. Assembly is deterministic: the same set in the same
//! order always yields byte-identical output, which the tests rely on.

use crate::models::FileSet;

/// Header preceding the first file section.
pub const PROMPT_HEADER: &str = "Project Files:\n\n";

/// Sentinel returned for an empty [`FileSet`]. Callers short-circuit
/// generation when the scan found nothing, so this string only appears
/// when `assemble` is invoked directly.
pub const NO_CONTENT_SENTINEL: &str = "No code content was read from the directory.";

/// Render the file set as one prompt document.
///
/// Each entry becomes a marker line naming the file, its content inside a
/// generic fence, and a blank separator line. File content is embedded
/// verbatim; fence-like content inside a file is not escaped.
pub fn assemble(files: &FileSet) -> String {
    if files.is_empty() {
        return NO_CONTENT_SENTINEL.to_string();
    }

    let mut prompt = String::from(PROMPT_HEADER);
    for entry in files {
        prompt.push_str(&format!("--- File: {} ---\n", entry.path));
        prompt.push_str(&format!("```\n{}\n```\n\n", entry.content));
    }

    prompt
}
