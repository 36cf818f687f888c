use crate::error::{GithubError, GithubResult};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDateTime;
use config::GithubConfig;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Sentinel rendered into a note when a path has no commit history.
pub const UNKNOWN_LAST_UPDATED: &str = "Unknown";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const COMMIT_DATE_WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const COMMIT_DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read access to a repository tree.
///
/// `fetch_file_content` takes the entry's API url rather than its path: the
/// listing response already carries a direct blob reference, so content is
/// fetched through it instead of re-resolving the path.
#[async_trait]
pub trait RepoTreeClient: Send + Sync {
    /// List one directory level. An empty path lists the repository root.
    async fn list_directory(&self, path: &str) -> GithubResult<Vec<RepoEntry>>;

    /// Fetch and decode the body of a single file.
    async fn fetch_file_content(&self, url: &str) -> GithubResult<String>;

    /// Display-formatted timestamp of the most recent commit touching
    /// `path`, or [`UNKNOWN_LAST_UPDATED`] when the history is empty.
    async fn last_commit_date(&self, path: &str) -> GithubResult<String>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub url: String
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks and submodules; never traversed or synced.
    #[serde(other)]
    Other
}

pub struct GithubClient {
    client: Client,
    owner: String,
    repo: String,
    api_base: String,
    token: String
}

impl GithubClient {
    pub fn new(config: &GithubConfig, token: String) -> GithubResult<Self> {
        let client = Client::builder()
            .user_agent("repovault")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(GithubError::Http)?;

        Ok(Self {
            client,
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            api_base: config.api_base.clone(),
            token
        })
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.owner, self.repo, path
        )
    }

    fn commits_url(&self) -> String {
        format!("{}/repos/{}/{}/commits", self.api_base, self.owner, self.repo)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, &str)]
    ) -> GithubResult<T> {
        debug!(url = %url, "Making GitHub API request");

        let response = self
            .client
            .get(url)
            .query(query)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", GITHUB_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status: status.as_u16(),
                message: body
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RepoTreeClient for GithubClient {
    async fn list_directory(&self, path: &str) -> GithubResult<Vec<RepoEntry>> {
        self.get_json(&self.contents_url(path), &[]).await
    }

    async fn fetch_file_content(&self, url: &str) -> GithubResult<String> {
        let blob: BlobResponse = self.get_json(url, &[]).await?;
        decode_blob(&blob.content)
    }

    async fn last_commit_date(&self, path: &str) -> GithubResult<String> {
        let commits: Vec<CommitResponse> =
            self.get_json(&self.commits_url(), &[("path", path)]).await?;

        match commits.first() {
            Some(commit) => format_commit_date(&commit.commit.committer.date),
            None => Ok(UNKNOWN_LAST_UPDATED.to_string())
        }
    }
}

/// Decode a contents-API blob body: base64 with line breaks every 60 bytes.
fn decode_blob(content: &str) -> GithubResult<String> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Reformat a commit timestamp from the wire format to the display format.
fn format_commit_date(raw: &str) -> GithubResult<String> {
    let parsed = NaiveDateTime::parse_from_str(raw, COMMIT_DATE_WIRE_FORMAT)?;
    Ok(parsed.format(COMMIT_DATE_DISPLAY_FORMAT).to_string())
}

#[derive(Debug, Deserialize)]
struct BlobResponse {
    content: String
}

#[derive(Debug, Deserialize)]
struct CommitResponse {
    commit: CommitDetail
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    committer: CommitSignature
}

#[derive(Debug, Deserialize)]
struct CommitSignature {
    date: String
}
