use anyhow::Result;
use repovault::{output, setup};
use sync::SyncEngine;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup::init_tracing()?;

    let (_config, settings, client) = setup::bootstrap()?;
    let engine = SyncEngine::new(settings.clone(), client);
    let report = engine.run().await?;

    output::success(&format!(
        "Repository sync complete: {} synced, {} skipped",
        report.files_synced, report.files_skipped
    ));
    if report.has_failures() {
        output::warn(&format!(
            "{} file(s) failed; see {} for details",
            report.failures.len(),
            setup::LOG_FILE
        ));
    }
    output::info(&format!("Notes saved under {}", settings.sync_root.display()));
    Ok(())
}
