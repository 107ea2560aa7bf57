use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use promptbank_store::{DEFAULT_EXPORT_NAME, Language, PromptRecord};

/// Manage a library of image-generation prompts.
#[derive(Parser, Debug)]
#[command(name = "promptbank", version, about)]
pub struct Args {
    /// Prompt library file
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Settings file
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Viewport width used for layout previews
    #[arg(long, default_value_t = 960.0)]
    pub width: f32,

    /// Only show prompts whose title contains this text
    #[arg(long, value_name = "QUERY")]
    pub filter: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List prompt titles
    List,
    /// Print each card's position for the viewport width
    Layout,
    /// Merge prompts from a backup file, skipping titles already present
    Import {
        path: PathBuf,
    },
    /// Write every prompt to a backup file
    Export {
        #[arg(default_value = DEFAULT_EXPORT_NAME)]
        path: PathBuf,
    },
    /// Save a new prompt
    Add {
        title: String,
        #[command(flatten)]
        fields: PromptFields,
    },
    /// Change a prompt, given its position in `list` or its exact title
    Edit {
        target: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: PromptFields,
    },
    /// Delete a prompt, given its position in `list` or its exact title
    Delete {
        target: String,
    },
    /// Switch between light and dark theme
    Theme,
    /// Set the interface language
    Language {
        #[arg(value_enum)]
        language: LanguageArg,
    },
}

/// Prompt text and image options shared by `add` and `edit`.
#[derive(ClapArgs, Debug, Default)]
pub struct PromptFields {
    /// Positive prompt text
    #[arg(long)]
    pub prompt: Option<String>,

    /// Negative prompt text
    #[arg(long)]
    pub negative: Option<String>,

    /// Path of an attached image
    #[arg(long, value_name = "PATH")]
    pub image: Option<String>,

    /// Turn the positive prompt off
    #[arg(long)]
    pub no_prompt: bool,

    /// Turn the negative prompt off
    #[arg(long)]
    pub no_negative: bool,
}

impl PromptFields {
    /// Apply the given options on top of `record`.
    pub fn apply(self, mut record: PromptRecord) -> PromptRecord {
        if let Some(prompt) = self.prompt {
            record = record.prompt(prompt);
        }
        if let Some(negative) = self.negative {
            record = record.negative_prompt(negative);
        }
        if let Some(image) = self.image {
            record = record.image(image);
        }
        if self.no_prompt {
            record = record.positive_enabled(false);
        }
        if self.no_negative {
            record = record.negative_enabled(false);
        }
        record
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LanguageArg {
    En,
    Tr,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::En,
            LanguageArg::Tr => Language::Tr,
        }
    }
}
