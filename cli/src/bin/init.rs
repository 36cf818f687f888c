use anyhow::Result;
use repovault::{output, setup};
use sync::WhitelistBootstrap;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup::init_tracing()?;

    let (config, settings, client) = setup::bootstrap()?;
    let bootstrap = WhitelistBootstrap::new(config.github.repo.clone(), settings, client);
    let destination = bootstrap.run().await?;

    output::success(&format!(
        "Whitelist note created at {}",
        destination.display()
    ));
    output::info("Check the files to sync, then run repovault-sync");
    Ok(())
}
