//! wx CLI - Command line client for the weather forecast service.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wx-cli",
    version,
    about = "Vietnam 7-day weather forecast client"
)]
struct Cli {
    #[command(subcommand)]
    command: wx_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);
    wx_cmd::run(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_command_is_loggable() {
        let cli = Cli::try_parse_from(["wx-cli", "mood", "--hour", "7"]).unwrap();
        assert_eq!(format!("{:?}", cli.command), "Mood { hour: Some(7) }");

        let cli = Cli::try_parse_from(["wx-cli", "forecast", "-c", "hanoi"]).unwrap();
        let logged = format!("{:?}", cli.command);
        assert!(logged.starts_with("Forecast {"));
        assert!(logged.contains("city: \"hanoi\""));
    }
}
