//! Command execution.

use std::sync::Arc;

use anyhow::{Context, Result};
use esi_application::{ConfigPaths, EsiClient, SettingsStore, sleep};
use esi_domain::{CharacterId, SettingsUpdate};
use esi_infrastructure::{ReqwestHttpClient, TokioFileSystem, resolve_config_paths};
use tracing::debug;

use crate::output::print_json;
use crate::{Cli, Commands, SettingsCommands};

/// Runs the parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    let paths = resolve_config_paths(cli.config);
    debug!(project = %paths.project.display(), "using project config");

    match cli.command {
        Commands::Settings(SettingsCommands::Show) => {
            let store = SettingsStore::new(TokioFileSystem::new(), paths);
            print_json(&store.get_settings().await?)
        }
        Commands::Settings(SettingsCommands::Set {
            route,
            token,
            language,
            project_name,
            create,
        }) => {
            let store = SettingsStore::new(TokioFileSystem::new(), paths);
            let store = store.create_if_missing(create);
            let update = SettingsUpdate {
                route,
                auth_token: token,
                language,
                project_name,
            };
            store.set_settings(update).await?;
            print_json(&store.get_settings().await?)
        }
        Commands::Alliances => print_json(&client(paths)?.alliances().await?),
        Commands::Affiliation { ids } => {
            let ids: Vec<CharacterId> = ids.into_iter().map(CharacterId).collect();
            print_json(&client(paths)?.affiliation(&ids).await?)
        }
        Commands::CorpHistory { id } => {
            print_json(&client(paths)?.corporation_history(CharacterId(id)).await?)
        }
        Commands::Sleep { millis } => {
            sleep(millis).await;
            Ok(())
        }
    }
}

fn client(paths: ConfigPaths) -> Result<EsiClient<TokioFileSystem, ReqwestHttpClient>> {
    let http = ReqwestHttpClient::new().context("failed to create HTTP client")?;
    let store = SettingsStore::new(TokioFileSystem::new(), paths);
    Ok(EsiClient::new(Arc::new(store), Arc::new(http)))
}
