use crate::domain::model::MetaTags;
use crate::domain::ports::SuggestionTask;
use crate::utils::error::{Result, SeoError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "seo-analyzer")]
#[command(about = "Keyword density, readability, mock backlinks and on-page SEO audits")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "json", global = true)]
    pub format: OutputFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Most frequent significant words and their density
    Keywords(TextInput),
    /// Flesch reading ease and Flesch-Kincaid grade
    Readability(TextInput),
    /// Demo link-profile metrics derived from the domain name
    Backlinks { domain: String },
    /// On-page SEO audit of HTML markup
    Audit {
        #[command(flatten)]
        input: TextInput,

        /// Audit a simulated page for this URL instead of markup
        #[arg(long, conflicts_with_all = ["text", "file"])]
        url: Option<String>,
    },
    /// Render title, description, Open Graph and Twitter tags
    Meta(MetaArgs),
    /// Ask the suggestion service for advice on a text
    Suggest {
        #[arg(long, value_enum)]
        task: SuggestionTask,

        #[command(flatten)]
        input: TextInput,
    },
}

/// Text comes from `--text`, `--file`, or stdin, in that order.
#[derive(Debug, Clone, Default, Args)]
pub struct TextInput {
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl TextInput {
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            tracing::debug!("Reading input from {}", path.display());
            return Ok(std::fs::read_to_string(path)?);
        }

        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct MetaArgs {
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Comma separated
    #[arg(long, default_value = "")]
    pub keywords: String,

    #[arg(long, default_value = "")]
    pub og_title: String,

    #[arg(long, default_value = "")]
    pub og_description: String,

    #[arg(long, default_value = "")]
    pub og_image: String,

    /// Also ask the suggestion service for a better title and description
    #[arg(long)]
    pub suggest: bool,
}

impl MetaArgs {
    pub fn to_tags(&self) -> MetaTags {
        MetaTags {
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            og_title: self.og_title.clone(),
            og_description: self.og_description.clone(),
            og_image: self.og_image.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Backlinks { domain } => validate_non_empty_string("domain", domain),
            Command::Audit { url: Some(url), .. } => validate_non_empty_string("url", url),
            Command::Meta(args) if args.suggest && args.title.is_empty() && args.description.is_empty() => {
                Err(SeoError::InputError {
                    message: "enter at least a title or a description before asking for suggestions"
                        .to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
