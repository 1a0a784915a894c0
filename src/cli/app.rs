//! CLI definitions and entry point

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pcshop::adapters::json::{JsonCatalogFile, LoadOptions};
use pcshop::config::ShopConfig;
use pcshop::core::models::{Customer, Money, RemovalPolicy};
use pcshop::core::ports::CatalogSource;
use pcshop::output::{OperationResult, OutputMode, Render};

use super::prompt::Prompter;
use super::shell::Session;

/// pcshop - Browse computer parts, build a PC and check out on a budget
#[derive(Parser, Debug)]
#[command(
    name = "pcshop",
    version,
    about = "Browse computer parts, build a PC and check out on a budget",
    long_about = "A text-driven storefront for computer parts.\n\n\
                  Load an inventory file, check part compatibility, assemble\n\
                  custom computers and check out against your budget."
)]
pub struct Cli {
    /// Path to the inventory JSON file
    pub catalog: PathBuf,

    /// Customer name (skips the name prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Starting budget (skips the budget prompt)
    #[arg(long, allow_negative_numbers = true)]
    pub budget: Option<Money>,

    /// Config file (defaults to $PCSHOP_CONFIG, then ~/.config/pcshop/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reject inventory items with an unknown type instead of skipping them
    #[arg(long)]
    pub strict_catalog: bool,

    /// Remove several items all-or-nothing instead of stopping at the first failure
    #[arg(long)]
    pub all_or_nothing: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = ShopConfig::load(cli.config.as_deref())?;

    let source = JsonCatalogFile::new(
        &cli.catalog,
        LoadOptions {
            strict_categories: cli.strict_catalog || config.catalog.strict_categories,
        },
    );
    let catalog = source
        .load()
        .with_context(|| format!("failed to load catalog from {}", source.describe()))?;

    let removal = if cli.all_or_nothing {
        RemovalPolicy::AllOrNothing
    } else {
        config.cart.removal
    };

    let stdin = io::stdin();
    let mut input = Prompter::new(stdin.lock(), output_mode);

    let name = match cli.name.or(config.customer.name) {
        Some(name) => name,
        None => match input.ask("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        },
    };
    let budget = match cli.budget.or(config.customer.budget) {
        Some(budget) => budget,
        None => match ask_budget(&mut input, output_mode)? {
            Some(budget) => budget,
            None => return Ok(()),
        },
    };

    let customer = Customer::new(name, budget);
    let mut session = Session::new(&catalog, customer, output_mode, removal, input);
    session.run()
}

fn ask_budget<R: BufRead>(input: &mut Prompter<R>, mode: OutputMode) -> anyhow::Result<Option<Money>> {
    while let Some(answer) = input.ask("Enter your budget: ")? {
        match answer.parse() {
            Ok(budget) => return Ok(Some(budget)),
            Err(_) => OperationResult::failed("Please enter a numerical amount.").render(mode),
        }
    }
    Ok(None)
}
