/// Fallback for when RUST_LOG is unset or invalid.
pub(crate) const DEFAULT_TRACING_FILTER: &str = "info";

/// Upstream chart repository cloned on every run.
pub(crate) const DEFAULT_CHART_REPO_URL: &str = "https://github.com/helm/charts.git";

/// Local directory the chart repository is cloned into.
pub(crate) const DEFAULT_REPO_DIR: &str = "charts";

/// The chart's defining metadata document.
pub(crate) const CHART_METADATA_FILE: &str = "Chart.yaml";

/// Optional governance document alongside Chart.yaml.
pub(crate) const CHART_OWNERS_FILE: &str = "OWNERS";

/// Category folders reported on, in report order.
pub(crate) const CHART_FOLDERS: [&str; 2] = ["stable", "incubator"];
