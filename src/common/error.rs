use snafu::Snafu;
use std::path::PathBuf;
use url::Url;

/// For use with multiple fallible operations which may fail for different reasons, but are
/// defined withing the same scope and must return to the outer scope (calling scope) using
/// the try operator -- '?'.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub(crate) enum Error {
    /// Error for when cli args are parsed.
    #[snafu(display("Failed to parse cli args: {}", source))]
    CliArgsParse { source: clap::error::Error },

    /// Error for use when parsing invalid tracing-subscriber filter directive.
    #[snafu(display(
        "Failed to create tracing-subscriber filter with directive {}: {}",
        filter,
        source
    ))]
    TracingSubscriberFilter {
        source: tracing_subscriber::filter::ParseError,
        filter: String,
    },

    /// Error for when a git command fails to run.
    #[snafu(display(
        "Failed to run git command, command: {}, args: {:?}, command_error: {}",
        command,
        args,
        source
    ))]
    GitCommand {
        source: std::io::Error,
        command: String,
        args: Vec<String>,
    },

    /// Error for when git clone exits with a failure status.
    #[snafu(display("Failed to clone chart repository {}: {}", repo_url, stderr))]
    GitClone { repo_url: Url, stderr: String },

    #[snafu(display("Failed to remove directory {}: {}", path.display(), source))]
    RemoveWorkdir {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Error for when a category folder cannot be listed.
    #[snafu(display("Failed to read charts folder {}: {}", path.display(), source))]
    ReadChartsFolder {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Failed to read entry in charts folder {}: {}", path.display(), source))]
    ChartsFolderEntry {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Error for when a chart's Chart.yaml is missing or unreadable.
    #[snafu(display("Failed to read chart metadata at {}: {}", filepath.display(), source))]
    ReadChartMetadata {
        source: std::io::Error,
        filepath: PathBuf,
    },

    #[snafu(display("Failed to parse YAML at {}: {}", filepath.display(), source))]
    ParseChartMetadata {
        source: serde_yaml::Error,
        filepath: PathBuf,
    },
}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn must<T>(output: Result<T>) -> T {
    if let Err(error) = output {
        tracing::error!(?error, "Failed to generate chart report");
        std::process::exit(-1);
    }
    output.unwrap()
}
