//! A single prompt record.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A titled pair of prompts with an optional image.
///
/// Older files may lack the flag fields; they are filled in on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct PromptRecord {
    pub title: String,
    pub prompt: String,
    pub negative_prompt: String,
    pub is_positive: bool,
    pub is_negative: bool,
    pub image_path: String,
}

/// On-disk shape with every field optional.
#[derive(Deserialize)]
struct StoredRecord {
    #[serde(default)]
    title: String,
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    negative_prompt: String,
    is_positive: Option<bool>,
    is_negative: Option<bool>,
    #[serde(default)]
    image_path: String,
}

impl From<StoredRecord> for PromptRecord {
    fn from(raw: StoredRecord) -> Self {
        let is_negative = raw.is_negative.unwrap_or(!raw.negative_prompt.is_empty());
        Self {
            title: raw.title,
            prompt: raw.prompt,
            negative_prompt: raw.negative_prompt,
            is_positive: raw.is_positive.unwrap_or(true),
            is_negative,
            image_path: raw.image_path,
        }
    }
}

impl PromptRecord {
    /// A record with a title and nothing else. Positive prompt enabled.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: String::new(),
            negative_prompt: String::new(),
            is_positive: true,
            is_negative: false,
            image_path: String::new(),
        }
    }

    /// Set and enable the positive prompt.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self.is_positive = true;
        self
    }

    /// Set and enable the negative prompt.
    pub fn negative_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.negative_prompt = prompt.into();
        self.is_negative = true;
        self
    }

    pub fn positive_enabled(mut self, enabled: bool) -> Self {
        self.is_positive = enabled;
        self
    }

    pub fn negative_enabled(mut self, enabled: bool) -> Self {
        self.is_negative = enabled;
        self
    }

    pub fn image(mut self, path: impl Into<String>) -> Self {
        self.image_path = path.into();
        self
    }

    pub fn has_image(&self) -> bool {
        !self.image_path.trim().is_empty()
    }

    /// Positive prompt text, if enabled and non-empty.
    pub fn active_prompt(&self) -> Option<&str> {
        let text = self.prompt.trim();
        (self.is_positive && !text.is_empty()).then_some(text)
    }

    /// Negative prompt text, if enabled and non-empty.
    pub fn active_negative_prompt(&self) -> Option<&str> {
        let text = self.negative_prompt.trim();
        (self.is_negative && !text.is_empty()).then_some(text)
    }

    /// Check that the record is worth saving: it needs a title and at least
    /// one of an image or an enabled, non-empty prompt.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if !self.has_image()
            && self.active_prompt().is_none()
            && self.active_negative_prompt().is_none()
        {
            return Err(ValidationError::EmptyRecord);
        }
        Ok(())
    }

    /// Trim the fields and blank the text of a disabled prompt.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.prompt = match self.is_positive {
            true => self.prompt.trim().to_string(),
            false => String::new(),
        };
        self.negative_prompt = match self.is_negative {
            true => self.negative_prompt.trim().to_string(),
            false => String::new(),
        };
        self.image_path = self.image_path.trim().to_string();
        self
    }

    /// Case-insensitive title substring match. An empty query matches all.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.title.to_lowercase().contains(&query)
    }
}
