//! Command implementations for the forecast CLI.
//!
//! Provides subcommands for fetching a forecast from the prediction service
//! and for inspecting the static city and mood tables.

use clap::Subcommand;
use wx_core::api::DEFAULT_SERVER;
use wx_core::city::DEFAULT_CITY;

pub mod forecast;
pub mod info;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the forecast for a city and print it
    Forecast {
        /// City code (see `cities`)
        #[arg(short = 'c', long, default_value = DEFAULT_CITY)]
        city: String,

        /// Forecast the days after this date (YYYY-MM-DD); the server uses today if omitted
        #[arg(short = 'd', long)]
        end_date: Option<String>,

        /// Base URL of the forecast server
        #[arg(short = 's', long, default_value = DEFAULT_SERVER)]
        server: String,

        /// Also write the daily rows to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// List known cities with their temperature bias
    Cities,

    /// Show the background mood for an hour of the day
    Mood {
        /// Hour 0-23 (defaults to the current local hour)
        #[arg(long)]
        hour: Option<u32>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Forecast {
            city,
            end_date,
            server,
            csv,
        } => forecast::run_forecast(&city, end_date.as_deref(), &server, csv.as_deref()).await,
        Command::Cities => {
            print!("{}", info::cities_table());
            Ok(())
        }
        Command::Mood { hour } => info::run_mood(hour),
    }
}
