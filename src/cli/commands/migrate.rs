use crate::config::Config;
use crate::db::Store;

/// Connecting a [`Store`] applies every pending migration.
pub async fn cmd_migrate(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_url).await?;
    store.ping().await?;

    println!("Database is up to date.");
    Ok(())
}
