use crate::app::render;
use crate::config::cli::{Command, OutputFormat};
use crate::core::engine::AnalysisEngine;
use crate::domain::ports::SuggestionService;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::json;

/// Runs one CLI command and returns what should be printed on stdout.
pub async fn run_command<S: SuggestionService>(
    engine: &AnalysisEngine<S>,
    command: &Command,
    format: OutputFormat,
) -> Result<String> {
    match command {
        Command::Keywords(input) => {
            let result = engine.keyword_density(&input.read()?);
            emit(format, &result, || render::keyword_report(&result))
        }
        Command::Readability(input) => {
            let result = engine.readability(&input.read()?);
            emit(format, &result, || render::readability_report(&result))
        }
        Command::Backlinks { domain } => {
            let data = engine.backlinks(domain);
            emit(format, &data, || render::backlink_report(domain, &data))
        }
        Command::Audit { input, url } => {
            let result = match url {
                Some(url) => engine.audit_url(url),
                None => engine.audit_html(&input.read()?),
            };
            emit(format, &result, || render::audit_report(&result))
        }
        Command::Meta(args) => {
            let tags = args.to_tags();
            let report = engine.meta_tags(&tags);
            let suggestion = if args.suggest {
                Some(engine.suggest_meta(&tags).await)
            } else {
                None
            };

            match format {
                OutputFormat::Json => {
                    let mut value = serde_json::to_value(&report)?;
                    if let Some(suggestion) = &suggestion {
                        value["suggestion"] = json!(suggestion);
                    }
                    Ok(serde_json::to_string_pretty(&value)?)
                }
                OutputFormat::Text => {
                    let mut out = render::meta_report(&report);
                    if let Some(suggestion) = suggestion {
                        out.push_str("\nAI suggestion:\n");
                        out.push_str(&suggestion);
                        out.push('\n');
                    }
                    Ok(out)
                }
            }
        }
        Command::Suggest { task, input } => {
            let suggestion = engine.suggest(&input.read()?, *task).await;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(
                    &json!({ "task": task, "suggestion": suggestion }),
                )?),
                OutputFormat::Text => Ok(format!("{}\n", suggestion)),
            }
        }
    }
}

fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gemini::{SuggestionClient, UNAVAILABLE_MESSAGE};
    use crate::config::cli::{MetaArgs, TextInput};
    use crate::core::load_time::FixedLoadTime;
    use crate::domain::ports::SuggestionTask;

    fn engine() -> AnalysisEngine<SuggestionClient> {
        AnalysisEngine::new(SuggestionClient::Unconfigured).with_load_time(FixedLoadTime(1.0))
    }

    fn text(value: &str) -> TextInput {
        TextInput {
            text: Some(value.to_string()),
            file: None,
        }
    }

    #[tokio::test]
    async fn test_keywords_json_output() {
        let out = run_command(
            &engine(),
            &Command::Keywords(text("seo seo tools")),
            OutputFormat::Json,
        )
        .await
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["totalWords"], 3);
        assert_eq!(value["keywords"][0]["word"], "seo");
        assert_eq!(value["keywords"][0]["count"], 2);
    }

    #[tokio::test]
    async fn test_audit_json_uses_wire_names() {
        let out = run_command(
            &engine(),
            &Command::Audit {
                input: text("<h1>Hello</h1>"),
                url: None,
            },
            OutputFormat::Json,
        )
        .await
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["score"], 60);
        assert_eq!(value["loadTime"], 1.0);
        assert_eq!(value["issues"][0]["type"], "error");
        assert_eq!(value["issues"][2]["type"], "success");
        assert!(value["issues"][2].get("recommendation").is_none());
        assert_eq!(value["details"]["h1Count"], 1);
    }

    #[tokio::test]
    async fn test_audit_url_text_output() {
        let out = run_command(
            &engine(),
            &Command::Audit {
                input: TextInput::default(),
                url: Some("https://example.com".to_string()),
            },
            OutputFormat::Text,
        )
        .await
        .unwrap();
        assert!(out.starts_with("SEO score: 88/100"));
    }

    #[tokio::test]
    async fn test_readability_label_serializes_as_band_text() {
        let out = run_command(
            &engine(),
            &Command::Readability(text("The cat sat on the mat. It was a sunny day.")),
            OutputFormat::Json,
        )
        .await
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["label"], "Very Easy (5th grade)");
        assert_eq!(value["sentenceCount"], 2);
    }

    #[tokio::test]
    async fn test_meta_with_unconfigured_suggestions() {
        let args = MetaArgs {
            title: "Rust SEO".to_string(),
            suggest: true,
            ..Default::default()
        };
        let out = run_command(&engine(), &Command::Meta(args), OutputFormat::Json)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tags"]["ogTitle"], "Rust SEO");
        assert_eq!(value["suggestion"], UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn test_suggest_text_output() {
        let out = run_command(
            &engine(),
            &Command::Suggest {
                task: SuggestionTask::Keyword,
                input: text("anything"),
            },
            OutputFormat::Text,
        )
        .await
        .unwrap();
        assert_eq!(out, format!("{}\n", UNAVAILABLE_MESSAGE));
    }
}
