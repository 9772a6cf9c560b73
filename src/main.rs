use anyhow::Context;
use clap::Parser;
use course_registry::config::toml_config::LogFormat;
use course_registry::core::ConfigProvider;
use course_registry::utils::error::ErrorSeverity;
use course_registry::utils::logger;
use course_registry::{CliConfig, Command, LocalStorage, Menu, Registry, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
            };
            std::process::exit(exit_code);
        }
    };

    match settings.log_format {
        LogFormat::Compact => logger::init_cli_logger(settings.verbose, settings.log_directive()),
        LogFormat::Json => logger::init_json_logger(settings.verbose, settings.log_directive()),
    }

    tracing::info!("Starting course-registry");
    tracing::debug!("Settings: {:?}", settings);

    let storage = LocalStorage::new(&settings.base_dir);
    let mut registry = Registry::open(storage, settings.data_file());

    match settings.command {
        Command::Menu => {
            let stdin = std::io::stdin();
            let mut menu = Menu::new(stdin.lock(), std::io::stdout());
            menu.run(&mut registry)
                .context("console input/output failed")?;
        }
        Command::List => println!("{}", registry.list_courses()),
    }

    Ok(())
}
