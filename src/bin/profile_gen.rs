use anyhow::Context;
use clap::Parser;
use formfillr::app::{Destination, FrontEnd};
use formfillr::core::ConfigProvider;
use formfillr::utils::{logger, validation::Validate};
use formfillr::ProfileConfig;

#[derive(Parser)]
#[command(name = "formfillr-profile")]
#[command(about = "Generate fake user records from a TOML profile")]
struct Args {
    /// Path to the TOML profile
    #[arg(short, long, default_value = "formfillr.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be generated without generating it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Loading profile from: {}", args.config);

    let config = ProfileConfig::from_file(&args.config)
        .with_context(|| format!("failed to load profile '{}'", args.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("Profile validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let front_end = FrontEnd {
        ui_locale: config.ui_locale(),
        preview_rows: config.preview_rows(),
    };
    let destination = Destination::from_output(config.output_path());

    display_profile_summary(&config, &front_end, &destination);

    if args.dry_run {
        tracing::info!("Dry run, nothing generated");
        return Ok(());
    }

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

fn display_profile_summary(config: &ProfileConfig, front_end: &FrontEnd, destination: &Destination) {
    eprintln!("📋 {}", config.profile.name);
    if let Some(description) = &config.profile.description {
        eprintln!("  {}", description);
    }
    eprintln!(
        "{}",
        front_end.request_summary(&config.request(), config.format(), destination)
    );
    if let Some(seed) = config.seed() {
        eprintln!("  seed: {}", seed);
    }
    eprintln!();
}
