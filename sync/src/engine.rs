use crate::error::SyncResult;
use chrono::{DateTime, Utc};
use config::Settings;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use github::{EntryKind, RepoEntry, RepoTreeClient};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use vault::Whitelist;

/// Materializes a note for every whitelisted remote file.
pub struct SyncEngine {
    settings: Settings,
    client: Arc<dyn RepoTreeClient>
}

/// Outcome of one sync run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub files_synced: u32,
    pub files_skipped: u32,
    pub failures: Vec<SyncFailure>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncFailure {
    pub path: String,
    pub error: String,
    pub timestamp: DateTime<Utc>
}

impl SyncReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            ..Default::default()
        }
    }

    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn add_failure(&mut self, path: &str, error: impl ToString) {
        self.failures.push(SyncFailure {
            path: path.to_string(),
            error: error.to_string(),
            timestamp: Utc::now()
        });
    }
}

impl SyncEngine {
    pub fn new(settings: Settings, client: Arc<dyn RepoTreeClient>) -> Self {
        Self { settings, client }
    }

    /// Walk the remote tree and write a note for every whitelisted file.
    ///
    /// Fetch and write failures for a single file, and listing failures
    /// for a subdirectory, are recorded in the report and the walk
    /// continues; only a failure listing the repository root aborts the
    /// run.
    pub async fn run(&self) -> SyncResult<SyncReport> {
        let mut report = SyncReport::new();
        info!(
            sync_root = %self.settings.sync_root.display(),
            whitelist = %self.settings.whitelist_path.display(),
            "Starting repository sync"
        );

        let whitelist = vault::load_whitelist(&self.settings.whitelist_path)?;
        info!(count = whitelist.len(), "Loaded whitelist");
        for path in &whitelist {
            info!(path = %path, "Whitelisted");
        }

        self.walk("", &whitelist, &mut report).await?;

        report.complete();
        info!(
            files_synced = report.files_synced,
            files_skipped = report.files_skipped,
            failures = report.failures.len(),
            "Repository sync complete"
        );
        Ok(report)
    }

    fn walk<'a>(
        &'a self,
        path: &'a str,
        whitelist: &'a Whitelist,
        report: &'a mut SyncReport
    ) -> BoxFuture<'a, SyncResult<()>> {
        async move {
            let entries = self.client.list_directory(path).await?;

            for entry in entries {
                match entry.kind {
                    EntryKind::Dir => {
                        // A subdirectory listing failure skips that subtree;
                        // only the root listing aborts the run.
                        if let Err(e) = self.walk(&entry.path, whitelist, report).await {
                            report.add_failure(&entry.path, &e);
                            warn!(path = %entry.path, error = %e, "Error processing directory");
                        }
                    }
                    EntryKind::File => {
                        if whitelist.contains(&entry.path) {
                            match self.sync_file(&entry).await {
                                Ok(destination) => {
                                    report.files_synced += 1;
                                    info!(
                                        path = %entry.path,
                                        destination = %destination.display(),
                                        "Processed"
                                    );
                                }
                                Err(e) => {
                                    report.add_failure(&entry.path, &e);
                                    warn!(path = %entry.path, error = %e, "Error processing file");
                                }
                            }
                        } else {
                            report.files_skipped += 1;
                            info!(path = %entry.path, "Skipped (not in whitelist)");
                        }
                    }
                    EntryKind::Other => {}
                }
            }

            Ok(())
        }
        .boxed()
    }

    async fn sync_file(&self, entry: &RepoEntry) -> SyncResult<PathBuf> {
        let content = self.client.fetch_file_content(&entry.url).await?;
        let last_updated = self.client.last_commit_date(&entry.path).await?;
        let destination = vault::write_note(
            &self.settings.sync_root,
            &entry.path,
            &content,
            &last_updated
        )?;
        Ok(destination)
    }
}
