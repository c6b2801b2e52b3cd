use crate::common::error::{
    Error::{GitClone, GitCommand, RemoveWorkdir},
    Result,
};
use std::path::Path;
use tokio::process::Command;
use tracing::info;
use url::Url;

/// Replaces any local copy of the chart repository with a fresh clone. The report
/// must never mix stale and fresh chart directories, so the prior tree is removed
/// entirely rather than updated in place.
pub(crate) async fn refresh_chart_repo(repo_url: &Url, workdir: &Path) -> Result<()> {
    if workdir.exists() {
        info!("Removing existing chart repository at {}", workdir.display());
        tokio::fs::remove_dir_all(workdir)
            .await
            .map_err(|e| RemoveWorkdir {
                source: e,
                path: workdir.to_path_buf(),
            })?;
    }

    let command: &str = "git";
    let args: Vec<String> = vec![
        "clone".to_string(),
        repo_url.to_string(),
        workdir.to_string_lossy().to_string(),
    ];

    info!("Cloning chart repository {}", repo_url);
    let output = Command::new(command)
        .args(args.clone())
        .output()
        .await
        .map_err(|e| GitCommand {
            source: e,
            command: command.to_string(),
            args,
        })?;

    if !output.status.success() {
        return Err(GitClone {
            repo_url: repo_url.clone(),
            stderr: String::from_utf8_lossy(output.stderr.as_slice()).to_string(),
        });
    }

    Ok(())
}
