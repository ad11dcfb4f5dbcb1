use anyhow::Result;
use clap::{Parser, Subcommand};
use menuplan::cli::Overrides;
use menuplan_shared::{DailyMode, Profile};

/// menuplan - Weekly meal planner
#[derive(Parser)]
#[command(name = "menuplan")]
#[command(about = "Deterministic weekly meal plans from fixed dish pools", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the week plan and today's meals
    Show {
        /// Dietary profile (balanced, highProtein, vegetarian, quick)
        #[arg(long, value_parser = Profile::parse)]
        profile: Option<Profile>,

        /// Daily calorie target
        #[arg(long)]
        calories: Option<u32>,

        /// Comma separated terms, dishes containing one are replaced
        #[arg(long)]
        exclude: Option<String>,

        /// `on` pins the plan to today, `off` keeps one static plan
        #[arg(long)]
        daily_mode: Option<DailyMode>,

        /// Drop the cached week before drawing
        #[arg(long)]
        regenerate: bool,
    },
    /// Print stored settings
    Settings,
    /// Drop cached weeks for the stored settings
    Clear {
        /// Drop every cached week, whatever its date or profile
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = menuplan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    menuplan::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        &config.logging.format,
    )?;

    match cli.command {
        Commands::Show {
            profile,
            calories,
            exclude,
            daily_mode,
            regenerate,
        } => {
            let overrides = Overrides {
                profile,
                calories,
                exclude,
                daily_mode,
            };
            menuplan::cli::show(config, overrides, regenerate)
        }
        Commands::Settings => menuplan::cli::print_settings(config),
        Commands::Clear { all } => menuplan::cli::clear(config, all),
    }
}
