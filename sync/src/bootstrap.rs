use crate::error::SyncResult;
use config::Settings;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use github::{EntryKind, RepoTreeClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use vault::whitelist;

/// Builds the whitelist checklist by walking the remote tree.
///
/// Every file becomes an unchecked task line; every directory becomes a
/// heading followed by its own rendered contents, in the order the API
/// returns them. Re-running overwrites the document wholesale, including
/// any boxes a human has checked since.
pub struct WhitelistBootstrap {
    repo: String,
    settings: Settings,
    client: Arc<dyn RepoTreeClient>
}

impl WhitelistBootstrap {
    pub fn new(repo: String, settings: Settings, client: Arc<dyn RepoTreeClient>) -> Self {
        Self {
            repo,
            settings,
            client
        }
    }

    /// Render and persist the checklist. Returns the document path.
    pub async fn run(&self) -> SyncResult<PathBuf> {
        info!(repo = %self.repo, "Building whitelist checklist");

        let mut document = whitelist::document_title(&self.repo);
        self.render_directory("", &mut document).await?;

        whitelist::write_whitelist(&self.settings.whitelist_path, &document)?;
        info!(path = %self.settings.whitelist_path.display(), "Whitelist note created");
        Ok(self.settings.whitelist_path.clone())
    }

    fn render_directory<'a>(
        &'a self,
        path: &'a str,
        document: &'a mut String
    ) -> BoxFuture<'a, SyncResult<()>> {
        async move {
            let entries = self.client.list_directory(path).await?;

            for entry in entries {
                match entry.kind {
                    EntryKind::File => document.push_str(&whitelist::unchecked_line(&entry.path)),
                    EntryKind::Dir => {
                        document.push_str(&whitelist::directory_heading(&entry.name));
                        self.render_directory(&entry.path, document).await?;
                    }
                    EntryKind::Other => {}
                }
            }

            Ok(())
        }
        .boxed()
    }
}
