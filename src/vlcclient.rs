pub mod error;
pub mod intent;
pub mod response;

use error::CommandError;
use intent::ControlIntent;
use reqwest::{Client, Method, Url};
use response::{Ack, CommandReply, CurrentSystemVolume, MediaList};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::{
    config::remoteconfig::RemoteConfig,
    feed::{StatusFeed, SystemVolumeFeed},
};

/// Sends player commands. The reply only acknowledges the request; the caller must wait for the
/// status feed to learn what actually happened.
pub trait CommandChannel {
    async fn send(&self, intent: &ControlIntent) -> Result<Ack, CommandError>;
}

/// Same as [`CommandChannel`], but for the OS output volume.
pub trait SystemVolumeChannel {
    async fn set_system_volume(&self, percent: u8) -> Result<Ack, CommandError>;
}

/// HTTP client for the backend sitting in front of VLC.
pub struct VlcClient {
    client: Client,
    base: Url,
}

impl VlcClient {
    pub fn new(base: &str) -> Result<Self, CommandError> {
        let Ok(base) = Url::parse(base) else {
            return Err(CommandError::url(base.to_string()));
        };
        if base.cannot_be_a_base() {
            return Err(CommandError::url(base.to_string()));
        }
        let client = Client::builder().build().map_err(CommandError::request)?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `path` below the base address. A path prefix in the base, as behind a reverse proxy, is
    /// kept.
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let joined = format!("{}/{}", self.base.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<T, CommandError> {
        debug!("{} {}", method, url);
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let res = req.send().await.map_err(CommandError::request)?;
        let status = res.status();
        let text = res.text().await.map_err(CommandError::request)?;
        if !status.is_success() {
            // Error replies still carry a JSON reason most of the time
            let reason = serde_json::from_str::<CommandReply>(&text)
                .ok()
                .and_then(|r| r.error.or(r.message))
                .unwrap_or(text);
            return Err(CommandError::status(status, reason));
        }
        serde_json::from_str(&text).map_err(|e| CommandError::decode(e.to_string()))
    }

    pub async fn fetch_config(&self) -> Result<RemoteConfig, CommandError> {
        let cfg: RemoteConfig = self
            .fetch(Method::GET, self.endpoint("config"), None)
            .await?;
        cfg.validate().map_err(CommandError::decode)
    }

    pub async fn current_system_volume(&self) -> Result<Option<u8>, CommandError> {
        let res: CurrentSystemVolume = self
            .fetch(Method::GET, self.endpoint("current_system_volume"), None)
            .await?;
        Ok(res.system_volume.filter(|v| *v <= 100))
    }

    pub async fn list_media(&self) -> Result<Vec<String>, CommandError> {
        let res: MediaList = self
            .fetch(Method::GET, self.endpoint("list_media"), None)
            .await?;
        match res.error {
            Some(e) => Err(CommandError::rejected(e)),
            None => Ok(res.files),
        }
    }

    pub async fn play_media(&self, file: &str) -> Result<Ack, CommandError> {
        let res: CommandReply = self
            .fetch(
                Method::POST,
                self.endpoint("play_media"),
                Some(json!({ "file": file })),
            )
            .await?;
        res.into_ack()
    }

    pub fn status_feed(&self) -> StatusFeed {
        StatusFeed::new(self.client.clone(), self.endpoint("vlc_status_updates"))
    }

    pub fn system_volume_feed(&self) -> SystemVolumeFeed {
        SystemVolumeFeed::new(self.client.clone(), self.endpoint("system_volume_updates"))
    }
}

impl CommandChannel for VlcClient {
    async fn send(&self, intent: &ControlIntent) -> Result<Ack, CommandError> {
        match intent {
            ControlIntent::SetSystemVolume(p) => self.set_system_volume(*p).await,
            ControlIntent::PlayMedia(file) => self.play_media(file).await,
            ControlIntent::Seek(_)
            | ControlIntent::SetVolume(_)
            | ControlIntent::TogglePlay
            | ControlIntent::ToggleFullscreen => self.player_command(intent).await,
        }
    }
}

impl VlcClient {
    async fn player_command(&self, intent: &ControlIntent) -> Result<Ack, CommandError> {
        let Some((cmd, val)) = intent.player_command() else {
            return Err(CommandError::rejected(format!(
                "`{}` is not a player command",
                intent
            )));
        };
        let mut url = self.endpoint("vlc_command");
        url.query_pairs_mut()
            .append_pair("cmd", cmd)
            .append_pair("val", &val);
        let res: CommandReply = self.fetch(Method::GET, url, None).await?;
        res.into_ack()
    }
}

impl SystemVolumeChannel for VlcClient {
    async fn set_system_volume(&self, percent: u8) -> Result<Ack, CommandError> {
        let mut url = self.endpoint("system_volume");
        url.query_pairs_mut()
            .append_pair("volume", &percent.min(100).to_string());
        let res: CommandReply = self.fetch(Method::GET, url, None).await?;
        res.into_ack()
    }
}
