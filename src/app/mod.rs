pub mod commands;
pub mod render;

use crate::adapters::gemini::SuggestionClient;
use crate::config::toml_config::TomlConfig;
use crate::core::engine::AnalysisEngine;
use crate::core::load_time::FixedLoadTime;
use crate::utils::error::Result;

/// Wires the engine from configuration: the suggestion client is
/// unconfigured unless an API key is available.
pub fn build_engine(config: &TomlConfig) -> Result<AnalysisEngine<SuggestionClient>> {
    let client = SuggestionClient::from_settings(config.gemini_settings())?;
    if client.is_configured() {
        tracing::info!("🤖 Suggestion service configured");
    } else {
        tracing::debug!("Suggestion service not configured; suggestions will return a notice");
    }

    let engine = AnalysisEngine::new(client);
    Ok(match config.audit.fixed_load_time {
        Some(seconds) => engine.with_load_time(FixedLoadTime(seconds)),
        None => engine,
    })
}
