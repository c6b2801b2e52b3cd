use crate::{
    chart::{read_summary, ChartSummary},
    common::error::{
        Error::{ChartsFolderEntry, ReadChartsFolder},
        Result,
    },
};
use futures::future::try_join_all;
use std::path::Path;
use tracing::info;

/// Scans one category folder and reads every chart in it. Per-chart reads are
/// independent, so they are issued concurrently and joined; the first chart whose
/// Chart.yaml is missing or invalid fails the whole folder, since that indicates
/// a structurally broken source tree.
pub(crate) async fn scan_folder(workdir: &Path, folder: &str) -> Result<Vec<ChartSummary>> {
    let folder_path = workdir.join(folder);
    let mut entries = tokio::fs::read_dir(folder_path.as_path())
        .await
        .map_err(|e| ReadChartsFolder {
            source: e,
            path: folder_path.clone(),
        })?;

    let mut chart_names: Vec<String> = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ChartsFolderEntry {
            source: e,
            path: folder_path.clone(),
        })?
    {
        let file_type = entry.file_type().await.map_err(|e| ChartsFolderEntry {
            source: e,
            path: folder_path.clone(),
        })?;
        if file_type.is_dir() {
            chart_names.push(format!(
                "{}/{}",
                folder,
                entry.file_name().to_string_lossy()
            ));
        }
    }

    info!("Reading {} charts in folder '{}'", chart_names.len(), folder);
    try_join_all(
        chart_names
            .iter()
            .map(|chart_name| read_summary(workdir, chart_name)),
    )
    .await
}

/// Orders and filters chart summaries for display. Sorted ascending by maintainer
/// count with a stable sort, so charts with equal counts keep their discovery
/// order. Deprecated charts are dropped unless explicitly included.
pub(crate) fn build_report(
    mut summaries: Vec<ChartSummary>,
    include_deprecated: bool,
) -> Vec<ChartSummary> {
    if !include_deprecated {
        summaries.retain(|summary| !summary.deprecated);
    }
    summaries.sort_by_key(|summary| summary.maintainers);
    summaries
}

/// Renders one row per summary to stdout, name column sized to fit.
pub(crate) fn render_table(summaries: &[ChartSummary]) {
    let name_width = summaries
        .iter()
        .map(|summary| summary.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or_default();

    println!(
        "{:<name_width$}  {:>11}  {:>9}  {:>9}  {}",
        "NAME", "MAINTAINERS", "APPROVERS", "REVIEWERS", "DEPRECATED"
    );
    for summary in summaries {
        println!(
            "{:<name_width$}  {:>11}  {:>9}  {:>9}  {}",
            summary.name, summary.maintainers, summary.approvers, summary.reviewers,
            summary.deprecated
        );
    }
}
