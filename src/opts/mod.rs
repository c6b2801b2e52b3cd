use crate::common::constants::{DEFAULT_CHART_REPO_URL, DEFAULT_REPO_DIR};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Chart governance report options.
#[derive(Parser)]
#[command(name = "chart-report", version)]
pub(crate) struct CliArgs {
    /// Include charts marked deprecated in the report output.
    #[arg(long)]
    include_deprecated: bool,

    /// Chart repository to clone and report on.
    #[arg(long, env = "CHART_REPO_URL", default_value = DEFAULT_CHART_REPO_URL)]
    repo_url: Url,

    /// Local directory the chart repository is cloned into. Any pre-existing
    /// directory at this path is removed before the clone.
    #[arg(long, env = "CHART_REPO_DIR", default_value = DEFAULT_REPO_DIR)]
    workdir: PathBuf,
}

impl CliArgs {
    pub(crate) fn include_deprecated(&self) -> bool {
        self.include_deprecated
    }

    pub(crate) fn repo_url(&self) -> Url {
        self.repo_url.clone()
    }

    pub(crate) fn workdir(&self) -> PathBuf {
        self.workdir.clone()
    }
}
