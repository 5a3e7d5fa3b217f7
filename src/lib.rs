pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{GeminiClient, GeminiSettings, SuggestionClient};
pub use crate::core::backlinks::generate_mock_backlink_data;
pub use crate::core::engine::AnalysisEngine;
pub use crate::core::keyword_density::analyze_keyword_density;
pub use crate::core::meta_tags::{build_meta_tag_report, render_meta_tags};
pub use crate::core::readability::analyze_readability;
pub use crate::core::seo_audit::{analyze_seo_html, analyze_seo_html_with};
pub use domain::model::*;
pub use domain::ports::{LoadTimeSource, SuggestionService, SuggestionTask};
pub use utils::error::{Result, SeoError};
