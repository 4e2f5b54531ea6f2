use clap::Parser;
use uk_postcode::core::input;
use uk_postcode::utils::logger;
use uk_postcode::{render_report, CheckSettings, CliConfig, PostcodeChecker, PostcodeError};

fn run(settings: &CheckSettings) -> Result<bool, PostcodeError> {
    let mut candidates = settings.postcodes.clone();
    if let Some(path) = &settings.input_path {
        candidates.extend(input::read_inputs_from_path(
            path,
            settings.column.as_deref(),
            settings.delimiter,
        )?);
    }

    if candidates.is_empty() {
        tracing::warn!("No postcodes given; pass them as arguments or with --input");
    }

    let checker = PostcodeChecker::new(settings.grammar);
    let report = checker.check_all(&candidates);
    print!("{}", render_report(&report, settings.output)?);

    Ok(report.all_valid())
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match run(&settings) {
        Ok(true) => {}
        Ok(false) if settings.fail_on_invalid => std::process::exit(2),
        Ok(false) => {}
        Err(e) => {
            tracing::error!("Postcode check failed: {}", e);
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
