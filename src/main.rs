use crate::common::{
    constants::{CHART_FOLDERS, DEFAULT_TRACING_FILTER},
    error::Error::{CliArgsParse, TracingSubscriberFilter},
};
use clap::Parser;
use common::error::{must, Result};
use opts::CliArgs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod chart;
mod common;
mod opts;
mod repo;
mod report;

#[tokio::main]
async fn main() {
    must(init_logging());

    let opts = must(parse_cli_args());

    must(run(&opts).await);
}

/// Initialize logging components -- tracing.
fn init_logging() -> Result<()> {
    let fmt_layer = fmt::layer().with_target(false);
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_TRACING_FILTER))
        .map_err(|e| TracingSubscriberFilter {
            source: e,
            filter: DEFAULT_TRACING_FILTER.to_string(),
        })?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

fn parse_cli_args() -> Result<CliArgs> {
    CliArgs::try_parse().map_err(|e| CliArgsParse { source: e })
}

/// Refreshes the local chart repository, then reports on each category folder in
/// turn. One folder's report is fully rendered before the next folder is scanned.
async fn run(opts: &CliArgs) -> Result<()> {
    let workdir = opts.workdir();

    repo::refresh_chart_repo(&opts.repo_url(), workdir.as_path()).await?;

    for folder in CHART_FOLDERS {
        let summaries = report::scan_folder(workdir.as_path(), folder).await?;
        let display = report::build_report(summaries, opts.include_deprecated());
        report::render_table(display.as_slice());
    }

    Ok(())
}
