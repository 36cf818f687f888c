use async_trait::async_trait;
use github::{EntryKind, GithubError, GithubResult, RepoEntry, RepoTreeClient, UNKNOWN_LAST_UPDATED};
use std::collections::{HashMap, HashSet};

pub fn blob_url(path: &str) -> String {
    format!("https://example.com/blob/{path}")
}

pub fn file(path: &str) -> RepoEntry {
    let name = path.rsplit('/').next().unwrap_or(path).to_string();
    RepoEntry {
        name,
        path: path.to_string(),
        kind: EntryKind::File,
        url: blob_url(path)
    }
}

pub fn dir(path: &str) -> RepoEntry {
    let name = path.rsplit('/').next().unwrap_or(path).to_string();
    RepoEntry {
        name,
        path: path.to_string(),
        kind: EntryKind::Dir,
        url: format!("https://example.com/tree/{path}")
    }
}

/// In-memory repository tree standing in for the GitHub API.
#[derive(Default)]
pub struct FakeClient {
    dirs: HashMap<String, Vec<RepoEntry>>,
    contents: HashMap<String, String>,
    dates: HashMap<String, String>,
    failing_content: HashSet<String>
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: &str, entries: Vec<RepoEntry>) -> Self {
        self.dirs.insert(path.to_string(), entries);
        self
    }

    pub fn with_content(mut self, path: &str, content: &str) -> Self {
        self.contents.insert(blob_url(path), content.to_string());
        self
    }

    pub fn with_date(mut self, path: &str, date: &str) -> Self {
        self.dates.insert(path.to_string(), date.to_string());
        self
    }

    pub fn failing_content_for(mut self, path: &str) -> Self {
        self.failing_content.insert(blob_url(path));
        self
    }
}

#[async_trait]
impl RepoTreeClient for FakeClient {
    async fn list_directory(&self, path: &str) -> GithubResult<Vec<RepoEntry>> {
        self.dirs.get(path).cloned().ok_or_else(|| GithubError::Api {
            status: 404,
            message: format!("no such directory: {path}")
        })
    }

    async fn fetch_file_content(&self, url: &str) -> GithubResult<String> {
        if self.failing_content.contains(url) {
            return Err(GithubError::Api {
                status: 500,
                message: "content fetch failed".to_string()
            });
        }
        self.contents.get(url).cloned().ok_or_else(|| GithubError::Api {
            status: 404,
            message: format!("no blob at {url}")
        })
    }

    async fn last_commit_date(&self, path: &str) -> GithubResult<String> {
        Ok(self
            .dates
            .get(path)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_LAST_UPDATED.to_string()))
    }
}
