use std::sync::Arc;

use clap::Parser;
use cli::Cli;
use color_eyre::{eyre::eyre, Result};
use tokio::{sync::mpsc, task::JoinSet};
use tracing::{info, warn};

use crate::{
    app::App,
    commandworker::CommandWorker,
    components::remote::Remote,
    config::Config,
    feedworker::FeedWorker,
    vlcclient::VlcClient,
};

mod action;
mod app;
mod cli;
mod commandworker;
mod components;
mod config;
mod errors;
mod feed;
mod feedworker;
mod helper;
mod logging;
mod reconciler;
mod tui;
mod vlcclient;

#[tokio::main]
async fn main() -> Result<()> {
    crate::errors::init()?;

    let args = Cli::parse();
    if let Some(msg) = args.is_valid() {
        return Err(eyre!(msg));
    }
    let paths = args.paths();
    crate::logging::init(&paths.data)?;
    let config = Config::new(paths, args.backend.clone())?;

    let client = VlcClient::new(&config.config.backend_url)
        .map_err(|e| eyre!("Invalid backend address: {}", e))?;
    info!("Using backend at {}", client.base());
    let remote = client.fetch_config().await.map_err(|e| {
        eyre!(
            "Could not read the player configuration from {}: {}",
            client.base(),
            e
        )
    })?;
    info!(
        "Player at {}, maximum volume {}",
        remote.service_host, remote.max_volume
    );
    let system_volume = match client.current_system_volume().await {
        Ok(v) => v,
        Err(e) => {
            warn!("System volume is unknown for now: {}", e);
            None
        }
    };
    let client = Arc::new(client);

    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let mut fw = FeedWorker::new(&client, action_tx.clone());
    let mut cw = CommandWorker::new(client.clone(), action_tx.clone());
    let component = Remote::new(&config, remote, system_volume);
    let mut app = App::new(
        config,
        Box::new(component),
        action_tx,
        action_rx,
        fw.get_tx(),
        cw.get_tx(),
        args.tick_rate,
        args.frame_rate,
    );

    let mut set = JoinSet::new();
    // Start feed worker
    set.spawn(async move { fw.run().await });
    // Start command worker
    set.spawn(async move { cw.run().await });
    // Start app
    set.spawn(async move { app.run().await });

    while let Some(res) = set.join_next().await {
        res??;
    }
    Ok(())
}
