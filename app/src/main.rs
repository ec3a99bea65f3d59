//! Halving Demo
//!
//! A command-line tour of how running time grows with input size, built
//! around a logarithmic halving search.
//!
//! # Usage
//!
//! ```bash
//! # Is 7 in the list? Show every range the search probes
//! halving-demo search 7 0 1 2 3 4 5 6 7 8 9 --trace
//!
//! # Refuse unsorted input instead of returning an unspecified answer
//! halving-demo search 2 1 3 2 --strict
//!
//! # Quadratic time: print a multiplication table
//! halving-demo table --size 3
//!
//! # Run the whole walkthrough, optionally from a TOML config
//! halving-demo walkthrough --config walkthrough.toml
//! ```

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use config::WalkthroughConfig;
use halving_search::complexity::{
    first_name, linear_listing, multiplication_table, render_table, sorted_copy,
};
use halving_search::{step_bound, trace, ComplexityClass, SearchTrace, SortedSlice};

/// Halving Demo
///
/// Constant, linear, quadratic and logarithmic time, one command each
#[derive(Parser, Debug)]
#[command(name = "halving-demo")]
#[command(version = "0.1.0")]
#[command(about = "Walk through time complexity with a verified halving search")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search a sorted list of integers for a target
    Search {
        /// Value to look for
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Values to search, in non-decreasing order
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Print every range the search probes
        #[arg(short, long)]
        trace: bool,

        /// Check the values are sorted before searching
        #[arg(short, long)]
        strict: bool,
    },

    /// Print a multiplication table
    Table {
        /// Side length of the table
        #[arg(short, long, default_value_t = 2)]
        size: u32,
    },

    /// Print values in sorted order
    Sort {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print the first name given
    First { names: Vec<String> },

    /// Run the full complexity walkthrough
    Walkthrough {
        /// TOML config (default: built-in walkthrough values)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Search {
            target,
            values,
            trace,
            strict,
        } => handle_search(target, &values, trace, strict),
        Commands::Table { size } => handle_table(size),
        Commands::Sort { values } => {
            for value in sorted_copy(&values) {
                println!("{value}");
            }
            Ok(())
        }
        Commands::First { names } => {
            println!("{}", first_name(&names).unwrap_or("no names"));
            Ok(())
        }
        Commands::Walkthrough { config } => {
            let config = match config {
                Some(path) => WalkthroughConfig::load(&path)?,
                None => WalkthroughConfig::default(),
            };
            run_walkthrough(&config);
            Ok(())
        }
    }
}

fn handle_search(target: i64, values: &[i64], show_trace: bool, strict: bool) -> Result<()> {
    let result = if strict {
        SortedSlice::new(values)
            .context("Refusing to search unsorted values (drop --strict to search anyway)")?
            .trace(&target)
    } else {
        trace(values, &target)
    };

    if show_trace {
        print_trace(values, &result);
    }

    match result.position {
        Some(index) => println!(
            "{} {} found at index {}",
            "[FOUND]".green().bold(),
            target,
            index
        ),
        None => println!("{} {} not present", "[ABSENT]".yellow().bold(), target),
    }
    Ok(())
}

fn handle_table(size: u32) -> Result<()> {
    if size > config::MAX_TABLE_SIZE {
        anyhow::bail!(
            "Table size {} is too large (maximum {})",
            size,
            config::MAX_TABLE_SIZE
        );
    }
    print!("{}", render_table(&multiplication_table(size)));
    Ok(())
}

fn print_trace(values: &[i64], result: &SearchTrace) {
    for (step, &(lo, hi)) in result.ranges.iter().enumerate() {
        let mid = lo + (hi - lo) / 2;
        println!(
            "  step {}: range [{}, {}) probe values[{}] = {}",
            step + 1,
            lo,
            hi,
            mid,
            values[mid]
        );
    }
    let bound = step_bound(result.len);
    let steps = format!("{} of at most {} steps", result.steps, bound);
    if result.within_bound() {
        println!("  {}", steps.dimmed());
    } else {
        println!("  {}", steps.red());
    }
}

fn section(class: ComplexityClass, title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{}", format!("{title} - {class}").cyan().bold());
    println!("  {}", class.summary().dimmed());
    println!("{}", "=".repeat(60));
}

fn run_walkthrough(config: &WalkthroughConfig) {
    section(ComplexityClass::Constant, "Constant time");
    println!("{}", first_name(&config.names).unwrap_or("no names"));

    section(ComplexityClass::Linear, "Linear time");
    for line in linear_listing(&config.names) {
        println!("{line}");
    }

    section(ComplexityClass::Quadratic, "Quadratic time");
    print!("{}", render_table(&multiplication_table(config.table_size)));

    section(ComplexityClass::Logarithmic, "Logarithmic time");
    // validate() already checked the order
    let numbers = SortedSlice::new_unchecked(&config.numbers[..]);
    for target in &config.targets {
        let result = numbers.trace(target);
        println!(
            "{:>6} in {:?}: {} ({} of at most {} steps)",
            target,
            numbers.as_slice(),
            result.found(),
            result.steps,
            step_bound(numbers.len())
        );
    }

    section(ComplexityClass::Quasilinear, "Quasilinear time");
    for value in sorted_copy(&config.numbers) {
        println!("{value}");
    }
}
