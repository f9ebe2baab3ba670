use anyhow::{Context, Result};
use docfill_map::BatchCoordinator;
use docfill_model::BatchResult;
use tracing::info;

use docfill_cli::request::{apply_overrides, load_request};
use docfill_cli::summary::{print_plan, strategies_table};

use crate::cli::{OutputFormatArg, PlanArgs};

pub fn run_strategies() -> Result<()> {
    println!("{}", strategies_table());
    Ok(())
}

pub fn run_plan(args: &PlanArgs) -> Result<()> {
    let request = load_request(&args.request)?;
    let options = apply_overrides(request.options, args.no_consistency, args.optimize);
    info!(
        pairs = request.pairs.len(),
        consistency = options.consistency,
        optimize = options.optimize,
        "Planning mapping batch"
    );

    let result = BatchCoordinator::new(options)
        .create(&request.pairs)
        .context("build mapping batch")?;
    emit(&result, args.format)
}

fn emit(result: &BatchResult, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => print_plan(result),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize plan")?;
            println!("{json}");
        }
    }
    Ok(())
}
