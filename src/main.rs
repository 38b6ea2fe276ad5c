use anyhow::Result;
use clap::{Parser, Subcommand};
use dietplan::cli::{load_catalog, plan::PlanArgs, recipe::ListArgs};

/// dietplan - Daily meal plans that fit a diet
#[derive(Parser)]
#[command(name = "dietplan")]
#[command(about = "Build daily meal plans from a recipe catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Path to the recipe catalog (overrides config file)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a meal plan for one day
    Plan(PlanArgs),
    /// List recipes
    Recipes(ListArgs),
    /// Show a recipe with its nutrition
    Recipe {
        /// Recipe id
        id: u32,
    },
    /// List diets
    Diets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = dietplan::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    dietplan::observability::init_observability(
        "dietplan",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    let catalog = load_catalog(&config, cli.catalog)?;

    let output = match cli.command {
        Commands::Plan(args) => dietplan::cli::plan::run(&config.planner, &catalog, &args)?,
        Commands::Recipes(args) => dietplan::cli::recipe::list(&catalog, &args),
        Commands::Recipe { id } => dietplan::cli::recipe::show(&catalog, id)?,
        Commands::Diets => dietplan::cli::recipe::diets(&catalog),
    };

    println!("{output}");

    Ok(())
}
