use clap::Parser;
use fleet_registry::utils::error::ErrorSeverity;
use fleet_registry::utils::logger;
use fleet_registry::{Console, ConsoleConfig};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConsoleConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("Console config: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if let Err(e) = console.run() {
        tracing::error!(
            "Console session aborted: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
