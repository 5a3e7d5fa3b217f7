pub mod backlinks;
pub mod engine;
pub mod keyword_density;
pub mod load_time;
pub mod meta_tags;
pub mod readability;
pub mod seo_audit;
pub mod tokenizer;

pub use crate::domain::model::{
    BacklinkData, KeywordDensityResult, ReadabilityResult, SeoAuditResult,
};
pub use crate::domain::ports::{LoadTimeSource, SuggestionService, SuggestionTask};
pub use crate::utils::error::Result;
