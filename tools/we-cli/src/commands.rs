//! `set` and `get`.

use std::path::PathBuf;

use tracing::info;
use we_03_submission_client::{load_signer, ClientConfig, SubmissionClient};

use crate::cli::{Cli, GetArgs, SetArgs};
use crate::keys::resolve_keyfile;

/// Flags over environment over defaults.
pub fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.url {
        config.base_url = url.clone();
    }
    if let Some(user) = &cli.auth_user {
        config = config.with_auth(user.clone(), cli.auth_password.clone());
    } else if let (Some(auth), Some(password)) = (config.auth.as_mut(), &cli.auth_password) {
        auth.password = Some(password.clone());
    }
    config
}

fn keyfile(cli: &Cli) -> anyhow::Result<PathBuf> {
    resolve_keyfile(cli.keyfile.as_deref(), cli.key_dir.as_deref(), &cli.username)
}

pub async fn set(cli: &Cli, args: &SetArgs) -> anyhow::Result<String> {
    let keyfile = keyfile(cli)?;
    info!(keyfile = %keyfile.display(), "loading signing key");
    let signer = load_signer(&keyfile)?;

    let client = SubmissionClient::new(client_config(cli), Some(Box::new(signer)))?;
    let response = client
        .set(
            &args.name,
            args.list_id.clone(),
            args.list_consumption.clone(),
            args.wait,
        )
        .await?;
    Ok(format!("Response: {}", response))
}

pub async fn get(cli: &Cli, args: &GetArgs) -> anyhow::Result<String> {
    let client = SubmissionClient::new(client_config(cli), None)?;
    let data = client.require(&args.name).await?;
    Ok(format!("Response : {}", String::from_utf8_lossy(&data)))
}
