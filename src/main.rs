use clap::Parser;
use formfillr::app::{Destination, FrontEnd};
use formfillr::core::ConfigProvider;
use formfillr::utils::{logger, validation::Validate};
use formfillr::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let front_end = FrontEnd {
        ui_locale: config.ui_locale(),
        preview_rows: config.preview_rows,
    };
    let strings = front_end.strings();
    eprintln!("{} | {}", strings.title, strings.tagline);

    let destination = Destination::from_output(config.output.as_deref());
    eprintln!(
        "{}",
        front_end.request_summary(&config.request(), config.format(), &destination)
    );

    match front_end.run(config, &destination).await {
        Ok(outcome) => {
            eprintln!("{}", front_end.success_report(&outcome, &destination));
        }
        Err(e) => {
            tracing::error!(
                "Generation run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", front_end.failure_message(&e, &destination));
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
