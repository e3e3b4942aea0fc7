mod booking;
mod commands;
mod config;
mod logging;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{Overrides, Settings};

#[derive(Parser)]
#[command(name = "bookcal")]
#[command(about = "Browse upcoming months and book a day on your scheduling page")]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Grid layout, "fit" or "fixed" (overrides config)
    #[arg(long, global = true)]
    policy: Option<String>,

    /// First column of the grid, "monday" or "sunday" (overrides config)
    #[arg(long, global = true)]
    week_start: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month grid
    Show {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Choose a date and open the scheduling page for it
    Book {
        /// Date to book (YYYY-MM-DD)
        date: String,

        /// Print the booking link instead of opening a browser
        #[arg(long)]
        no_open: bool,
    },
    /// Browse months interactively and pick a day
    Pick {
        /// Print the booking link instead of opening a browser
        #[arg(long)]
        no_open: bool,
    },
    /// Show config location and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let overrides = Overrides {
        today: cli.today,
        policy: cli.policy,
        week_start: cli.week_start,
    };

    match cli.command {
        Commands::Show { month, json } => {
            let settings = Settings::resolve(&overrides)?;
            commands::show::run(&settings, month.as_deref(), json)
        }
        Commands::Book { date, no_open } => {
            let settings = Settings::resolve(&overrides)?;
            commands::book::run(&settings, &date, !no_open)
        }
        Commands::Pick { no_open } => {
            let settings = Settings::resolve(&overrides)?;
            commands::pick::run(&settings, !no_open)
        }
        Commands::Config => commands::config::run(&overrides),
    }
}
