use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Ignore rules applied during the directory scan.
///
/// Three independent sets: a path is excluded when it matches ANY of them.
/// Overriding a set in the config file replaces that set entirely.
#[derive(Debug, Deserialize, Clone)]
pub struct FilterConfig {
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    #[serde(default = "default_ignore_extensions")]
    pub ignore_extensions: Vec<String>,
    #[serde(default = "default_ignore_files")]
    pub ignore_files: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: default_ignore_dirs(),
            ignore_extensions: default_ignore_extensions(),
            ignore_files: default_ignore_files(),
        }
    }
}

// Dependency caches, build output, and framework-internal directories.
// Virtual-env names matter: without them the prompt fills up with
// thousands of vendored files.
fn default_ignore_dirs() -> Vec<String> {
    [
        ".venv",
        "venv",
        "myenv",
        "__pycache__",
        "node_modules",
        "build",
        "dist",
        "target",
        ".codecrafters",
        ".next",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_ignore_extensions() -> Vec<String> {
    [".o", ".dll", ".exe", ".yml"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ignore_files() -> Vec<String> {
    [
        "Cargo.lock",
        "Cargo.toml",
        "package-lock.json",
        "requirements.txt",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Model and endpoint settings for the generation backends.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,
    /// Context window requested from Ollama (`options.num_ctx`).
    #[serde(default = "default_ollama_num_ctx")]
    pub ollama_num_ctx: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            gemini_model: default_gemini_model(),
            openai_model: default_openai_model(),
            groq_model: default_groq_model(),
            ollama_model: default_ollama_model(),
            ollama_url: default_ollama_url(),
            ollama_num_ctx: default_ollama_num_ctx(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}
fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}
fn default_groq_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}
fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}
fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}
fn default_ollama_num_ctx() -> u32 {
    64_000
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory for generated files when no explicit output path is given.
    /// Created on demand.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    std::env::temp_dir().join("generated-readme")
}

impl Config {
    /// Built-in defaults, used when no config file is present.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.generation.ollama_url.is_empty() {
        anyhow::bail!("generation.ollama_url must not be empty");
    }
    if config.generation.ollama_num_ctx == 0 {
        anyhow::bail!("generation.ollama_num_ctx must be > 0");
    }
    for model in [
        &config.generation.gemini_model,
        &config.generation.openai_model,
        &config.generation.groq_model,
        &config.generation.ollama_model,
    ] {
        if model.is_empty() {
            anyhow::bail!("generation model names must not be empty");
        }
    }

    Ok(config)
}
