//! User management command handlers

use anyhow::Context;

use crate::api::UserDto;
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_create_user(
    config: &Config,
    email: &str,
    password: &str,
    is_active: bool,
) -> anyhow::Result<()> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        anyhow::bail!("Email and password must not be empty");
    }

    let store = Store::new(&config.general.database_url).await?;
    let user = store
        .users()
        .create(email, password, is_active)
        .await
        .with_context(|| format!("Failed to create user {email}"))?;

    println!("{}", serde_json::to_string_pretty(&UserDto::from(user))?);
    Ok(())
}
