use anyhow::Context;
use clap::Parser;
use pet_shelter::utils::error::ErrorSeverity;
use pet_shelter::utils::{logger, validation::Validate};
use pet_shelter::{
    CliConfig, CommandLoop, ConsoleTerminal, RecordStore, SessionSettings, ShelterConfig,
    ShelterError,
};

fn load_config(cli: &CliConfig) -> anyhow::Result<Option<ShelterConfig>> {
    let Some(path) = cli.config.as_ref() else {
        return Ok(None);
    };

    let config = ShelterConfig::from_file(path)
        .with_context(|| format!("Failed to load config file '{}'", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file '{}'", path.display()))?;
    Ok(Some(config))
}

fn main() {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(3);
        }
    };

    let settings = SessionSettings::from_config(config.as_ref()).with_overrides(
        cli.verbose,
        cli.log_format,
        cli.no_banner,
    );

    logger::init_cli_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );
    tracing::debug!("Session settings: {:?}", settings);

    let mut session = CommandLoop::new(RecordStore::new(), ConsoleTerminal::stdio())
        .with_banner(settings.show_banner);

    match session.run() {
        Ok(()) => {}
        Err(ShelterError::InputClosed) => {
            tracing::info!("Operator input closed, ending session");
        }
        Err(e) => {
            tracing::error!(
                "Session aborted: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
