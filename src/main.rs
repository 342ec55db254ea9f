// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Solves the knapsack instance stored in a file and prints the outcome on two
//! lines: the value of the selection and whether it is proved optimal, then
//! the selection flags of all items in input order.

use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use knapsack::{read_instance, Selector, SelectorConfigBuilder, DEFAULT_EXACT_SIZES};

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance file
    fname: String,
    /// The maximum amount of time (seconds) granted to the exact resolution
    #[clap(short, long)]
    duration: Option<u64>,
    /// The maximum number of cells of the dynamic programming table
    #[clap(short, long)]
    max_cells: Option<usize>,
    /// Instances with less items than this are solved exactly
    #[clap(short, long, default_value = "400")]
    exact_max_items: usize,
    /// Instance sizes that are always solved exactly (repeatable)
    #[clap(long = "exact-size")]
    exact_sizes: Vec<usize>,
    /// Let the greedy solver take items exactly filling the remaining capacity
    #[clap(short, long)]
    fill_exact: bool,
    /// Increase the log verbosity (repeatable)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// This is your executable's entry point. It is the place where all the pieces are put together
/// to solve one knapsack instance.
fn main() -> Result<()> {
    let args = Args::parse();
    Builder::new().filter_level(level(args.verbose)).init();

    let exact_sizes: BTreeSet<usize> = if args.exact_sizes.is_empty() {
        DEFAULT_EXACT_SIZES.into_iter().collect()
    } else {
        args.exact_sizes.iter().copied().collect()
    };
    let config = SelectorConfigBuilder::default()
        .exact_max_items(args.exact_max_items)
        .exact_exact_sizes(exact_sizes)
        .greedy_fills_exact(args.fill_exact)
        .max_table_cells(args.max_cells)
        .time_limit(args.duration.map(Duration::from_secs))
        .build()?;

    let problem = read_instance(&args.fname)
        .with_context(|| format!("reading instance {}", args.fname))?;
    log::info!("solving {} ({} items)", args.fname, problem.nb_items());

    let record = Selector::new(config).select_and_solve(&problem);
    println!("{}", record);
    Ok(())
}
