use crate::common::{
    constants::{CHART_METADATA_FILE, CHART_OWNERS_FILE},
    error::{
        Error::{ParseChartMetadata, ReadChartMetadata},
        Result,
    },
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChartMaintainer {
    pub(crate) name: String,
    pub(crate) email: Option<String>,
    pub(crate) url: Option<String>,
}

/// The subset of Chart.yaml this report cares about. Unrecognized fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChartMetadata {
    #[serde(default)]
    pub(crate) maintainers: Vec<ChartMaintainer>,
    #[serde(default)]
    pub(crate) deprecated: bool,
}

/// The subset of the OWNERS document this report cares about.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChartOwners {
    #[serde(default)]
    pub(crate) approvers: Vec<String>,
    #[serde(default)]
    pub(crate) reviewers: Vec<String>,
}

/// Outcome of the optional OWNERS read. Charts predating the ownership migration
/// have no OWNERS file, and that must not block reporting on them, so the failure
/// reasons live here instead of in the crate error type.
#[derive(Debug)]
pub(crate) enum OwnersOutcome {
    Recorded(ChartOwners),
    Unavailable(OwnersUnavailable),
}

#[derive(Debug)]
pub(crate) enum OwnersUnavailable {
    Unreadable(std::io::Error),
    Unparsable(serde_yaml::Error),
}

impl OwnersOutcome {
    /// Approver and reviewer counts, 0 for both when no OWNERS record exists.
    fn counts(self) -> (usize, usize) {
        match self {
            OwnersOutcome::Recorded(owners) => (owners.approvers.len(), owners.reviewers.len()),
            OwnersOutcome::Unavailable(reason) => {
                debug!(?reason, "No usable OWNERS record");
                (0, 0)
            }
        }
    }
}

/// Governance metadata aggregated for one chart. Built once per chart directory
/// per run, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChartSummary {
    pub(crate) name: String,
    pub(crate) maintainers: usize,
    pub(crate) approvers: usize,
    pub(crate) reviewers: usize,
    pub(crate) deprecated: bool,
}

/// Reads one chart's Chart.yaml and OWNERS documents and aggregates them into a
/// ChartSummary. Chart.yaml is the chart's defining file, so its absence fails the
/// whole read; OWNERS is optional and falls back to zero counts.
pub(crate) async fn read_summary(workdir: &Path, chart_name: &str) -> Result<ChartSummary> {
    let chart_dir = workdir.join(chart_name);

    let metadata_path = chart_dir.join(CHART_METADATA_FILE);
    let contents = tokio::fs::read(metadata_path.as_path())
        .await
        .map_err(|e| ReadChartMetadata {
            source: e,
            filepath: metadata_path.clone(),
        })?;
    let metadata: ChartMetadata =
        serde_yaml::from_slice(contents.as_slice()).map_err(|e| ParseChartMetadata {
            source: e,
            filepath: metadata_path,
        })?;

    let (approvers, reviewers) = read_owners(chart_dir.join(CHART_OWNERS_FILE).as_path())
        .await
        .counts();

    Ok(ChartSummary {
        name: chart_name.to_string(),
        maintainers: metadata.maintainers.len(),
        approvers,
        reviewers,
        deprecated: metadata.deprecated,
    })
}

async fn read_owners(owners_path: &Path) -> OwnersOutcome {
    let contents = match tokio::fs::read(owners_path).await {
        Ok(contents) => contents,
        Err(error) => return OwnersOutcome::Unavailable(OwnersUnavailable::Unreadable(error)),
    };

    match serde_yaml::from_slice::<ChartOwners>(contents.as_slice()) {
        Ok(owners) => OwnersOutcome::Recorded(owners),
        Err(error) => OwnersOutcome::Unavailable(OwnersUnavailable::Unparsable(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mktemp::Temp;
    use std::fs;

    fn chart_dir(root: &Path, name: &str) -> std::path::PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(dir.as_path()).unwrap();
        dir
    }

    #[tokio::test]
    async fn deprecated_chart_without_owners() {
        let tmp = Temp::new_dir().unwrap();
        let root = tmp.to_path_buf();
        let dir = chart_dir(&root, "stable/legacy");
        fs::write(
            dir.join(CHART_METADATA_FILE),
            "name: legacy\nversion: 1.0.0\nmaintainers:\n  - name: a\n  - name: b\ndeprecated: true\n",
        )
        .unwrap();

        let summary = read_summary(&root, "stable/legacy").await.unwrap();
        assert_eq!(summary.maintainers, 2);
        assert_eq!(summary.approvers, 0);
        assert_eq!(summary.reviewers, 0);
        assert!(summary.deprecated);
    }

    #[tokio::test]
    async fn owners_counted_when_maintainers_absent() {
        let tmp = Temp::new_dir().unwrap();
        let root = tmp.to_path_buf();
        let dir = chart_dir(&root, "incubator/fresh");
        fs::write(
            dir.join(CHART_METADATA_FILE),
            "name: fresh\nversion: 0.1.0\n",
        )
        .unwrap();
        fs::write(
            dir.join(CHART_OWNERS_FILE),
            "approvers:\n  - x\n  - y\n  - z\nreviewers:\n  - w\n",
        )
        .unwrap();

        let summary = read_summary(&root, "incubator/fresh").await.unwrap();
        assert_eq!(summary.maintainers, 0);
        assert_eq!(summary.approvers, 3);
        assert_eq!(summary.reviewers, 1);
        assert!(!summary.deprecated);
    }

    #[tokio::test]
    async fn missing_chart_yaml_is_fatal() {
        let tmp = Temp::new_dir().unwrap();
        let root = tmp.to_path_buf();
        chart_dir(&root, "stable/broken");

        let error = read_summary(&root, "stable/broken").await.unwrap_err();
        assert!(error.to_string().contains("stable/broken"));
    }

    #[tokio::test]
    async fn unparsable_owners_falls_back_to_zero() {
        let tmp = Temp::new_dir().unwrap();
        let root = tmp.to_path_buf();
        let dir = chart_dir(&root, "stable/odd");
        fs::write(
            dir.join(CHART_METADATA_FILE),
            "name: odd\nversion: 2.0.0\nmaintainers:\n  - name: a\n",
        )
        .unwrap();
        fs::write(dir.join(CHART_OWNERS_FILE), "approvers: [unclosed\n").unwrap();

        let summary = read_summary(&root, "stable/odd").await.unwrap();
        assert_eq!(summary.maintainers, 1);
        assert_eq!(summary.approvers, 0);
        assert_eq!(summary.reviewers, 0);
    }

    #[tokio::test]
    async fn unparsable_chart_yaml_is_fatal() {
        let tmp = Temp::new_dir().unwrap();
        let root = tmp.to_path_buf();
        let dir = chart_dir(&root, "stable/junk");
        fs::write(
            dir.join(CHART_METADATA_FILE),
            "name: junk\nversion: 1.0.0\ndeprecated: maybe\n",
        )
        .unwrap();

        let error = read_summary(&root, "stable/junk").await.unwrap_err();
        assert!(error.to_string().contains("stable/junk"));
    }
}
