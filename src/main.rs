use clap::Parser;
use seo_analyzer::app::{build_engine, commands::run_command};
use seo_analyzer::utils::error::SeoError;
use seo_analyzer::utils::{logger, validation::Validate};
use seo_analyzer::{CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let toml_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(toml_config) => toml_config,
                Err(e) => fail(&e),
            }
        }
        None => TomlConfig::default(),
    };

    if let Err(e) = toml_config.validate() {
        fail(&e);
    }

    let engine = match build_engine(&toml_config) {
        Ok(engine) => engine,
        Err(e) => fail(&e),
    };

    match run_command(&engine, &config.command, config.format).await {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &SeoError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
