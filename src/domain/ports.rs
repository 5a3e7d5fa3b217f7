use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Which instruction template the suggestion service is asked to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SuggestionTask {
    Keyword,
    Meta,
    Audit,
}

impl SuggestionTask {
    pub fn instruction(&self) -> &'static str {
        match self {
            SuggestionTask::Keyword => "Analyze the following text for keyword optimization. Suggest 3-5 specific keywords to target that are missing or underutilized, and provide one tip for better semantic relevance. Keep it brief.",
            SuggestionTask::Meta => "Generate an optimized Title Tag (max 60 chars) and Meta Description (max 160 chars) for the following content. Also suggest one improvement for click-through rate.",
            SuggestionTask::Audit => "Provide a quick SEO checklist for this content regarding structure, readability, and intent.",
        }
    }
}

/// Advisory text generation. Implementations never fail: they answer with
/// a human-readable fallback instead.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn suggest(&self, content: &str, task: SuggestionTask) -> String;
}

pub trait LoadTimeSource: Send + Sync {
    fn sample_seconds(&self) -> f64;
}
