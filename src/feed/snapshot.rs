use std::{error::Error, fmt::Display};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    feed::FeedPayload,
    helper::scalar::{as_bool, as_f64, as_u32, one_or_many},
};

/// Player state as of one status tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub title: String,
    /// Playback position within the media, in `[0, 1]`
    pub position: f64,
    /// `None` when the player does not know the length (streams, or nothing probed yet)
    pub length: Option<u32>,
    /// Volume in the player's native range, `0..=max_volume`
    pub volume: u32,
    pub playing: bool,
    pub fullscreen: bool,
}

/// What a single status event says about the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Nothing is loaded; the user should be picking a file
    Idle,
    Active(PlayerSnapshot),
}

#[derive(Debug)]
pub enum StatusParseError {
    Json(serde_json::Error),
    NotAnObject,
    Missing(&'static str),
    Invalid(&'static str),
}

impl Error for StatusParseError {}
impl Display for StatusParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusParseError::Json(e) => write!(f, "Invalid JSON: {}", e),
            StatusParseError::NotAnObject => write!(f, "Status payload is not an object"),
            StatusParseError::Missing(field) => write!(f, "Status is missing `{}`", field),
            StatusParseError::Invalid(field) => write!(f, "Status has an invalid `{}`", field),
        }
    }
}

impl PlayerStatus {
    /// Finds `information.category[@name=meta].info[@name=filename]`.
    fn filename(obj: &Map<String, Value>) -> Option<String> {
        let categories = obj.get("information")?.get("category")?;
        let meta = one_or_many(categories)
            .into_iter()
            .find(|c| c.get("@name").and_then(Value::as_str) == Some("meta"))?;
        let info = one_or_many(meta.get("info")?)
            .into_iter()
            .find(|i| i.get("@name").and_then(Value::as_str) == Some("filename"))?;
        info.get("#text")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
    }

    fn required<'a>(
        obj: &'a Map<String, Value>,
        name: &'static str,
    ) -> Result<&'a Value, StatusParseError> {
        obj.get(name).ok_or(StatusParseError::Missing(name))
    }

    pub fn parse(data: &str) -> Result<Self, StatusParseError> {
        let value: Value = serde_json::from_str(data).map_err(StatusParseError::Json)?;
        let Some(obj) = value.as_object() else {
            return Err(StatusParseError::NotAnObject);
        };

        let title = match Self::filename(obj) {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(PlayerStatus::Idle),
        };

        let position = as_f64(Self::required(obj, "position")?)
            .filter(|p| p.is_finite())
            .ok_or(StatusParseError::Invalid("position"))?
            .clamp(0.0, 1.0);
        let volume =
            as_u32(Self::required(obj, "volume")?).ok_or(StatusParseError::Invalid("volume"))?;
        let state = Self::required(obj, "state")?
            .as_str()
            .ok_or(StatusParseError::Invalid("state"))?;
        let fullscreen = match obj.get("fullscreen") {
            Some(v) => as_bool(v).ok_or(StatusParseError::Invalid("fullscreen"))?,
            None => false,
        };
        // VLC reports 0 when it has no idea
        let length = obj.get("length").and_then(as_u32).filter(|l| *l > 0);

        Ok(PlayerStatus::Active(PlayerSnapshot {
            title,
            position,
            length,
            volume,
            playing: state == "playing",
            fullscreen,
        }))
    }
}

impl FeedPayload for PlayerStatus {
    type Error = StatusParseError;

    fn parse(data: &str) -> Result<Self, Self::Error> {
        PlayerStatus::parse(data)
    }
}

/// OS output volume in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemVolume(pub u8);

impl FeedPayload for SystemVolume {
    type Error = String;

    fn parse(data: &str) -> Result<Self, Self::Error> {
        match data.trim().parse::<u8>() {
            Ok(v) if v <= 100 => Ok(SystemVolume(v)),
            _ => Err(format!("Not a volume percentage: {:?}", data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn vlc_status(filename: Option<&str>) -> Value {
        let mut info = vec![json!({"@name": "encoded_by", "#text": "Lavf"})];
        if let Some(f) = filename {
            info.push(json!({"@name": "filename", "#text": f}));
        }
        json!({
            "fullscreen": "false",
            "volume": "256",
            "length": "120",
            "position": "0.5",
            "state": "playing",
            "information": {
                "category": [
                    {"@name": "meta", "info": info},
                    {"@name": "Stream 0", "info": {"@name": "Codec", "#text": "H264"}}
                ]
            }
        })
    }

    #[test]
    fn test_parse_active() {
        let status = PlayerStatus::parse(&vlc_status(Some("movie.mkv")).to_string()).unwrap();
        assert_eq!(
            status,
            PlayerStatus::Active(PlayerSnapshot {
                title: "movie.mkv".to_string(),
                position: 0.5,
                length: Some(120),
                volume: 256,
                playing: true,
                fullscreen: false,
            })
        );
    }

    #[test]
    fn test_parse_single_category_and_numbers() {
        let raw = json!({
            "fullscreen": true,
            "volume": 100,
            "length": 0,
            "position": 0.1,
            "state": "paused",
            "information": {
                "category": {"@name": "meta", "info": {"@name": "filename", "#text": "a.mp3"}}
            }
        });
        let PlayerStatus::Active(s) = PlayerStatus::parse(&raw.to_string()).unwrap() else {
            panic!("Expected an active status");
        };
        assert_eq!(s.title, "a.mp3");
        assert_eq!(s.length, None);
        assert!(!s.playing);
        assert!(s.fullscreen);
    }

    #[test]
    fn test_missing_title_is_idle() {
        let status = PlayerStatus::parse(&vlc_status(None).to_string()).unwrap();
        assert_eq!(status, PlayerStatus::Idle);

        let bare = json!({"volume": "256", "state": "stopped"});
        assert_eq!(
            PlayerStatus::parse(&bare.to_string()).unwrap(),
            PlayerStatus::Idle
        );
        assert_eq!(
            PlayerStatus::parse(&vlc_status(Some("  ")).to_string()).unwrap(),
            PlayerStatus::Idle
        );
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            PlayerStatus::parse("{not json"),
            Err(StatusParseError::Json(_))
        ));
        assert!(matches!(
            PlayerStatus::parse("[1, 2]"),
            Err(StatusParseError::NotAnObject)
        ));
        let mut raw = vlc_status(Some("movie.mkv"));
        raw["volume"] = json!("loud");
        assert!(matches!(
            PlayerStatus::parse(&raw.to_string()),
            Err(StatusParseError::Invalid("volume"))
        ));
        raw.as_object_mut().unwrap().remove("position");
        assert!(matches!(
            PlayerStatus::parse(&raw.to_string()),
            Err(StatusParseError::Missing("position"))
        ));
    }

    #[test]
    fn test_system_volume() {
        assert_eq!(
            <SystemVolume as FeedPayload>::parse(" 42 "),
            Ok(SystemVolume(42))
        );
        assert!(<SystemVolume as FeedPayload>::parse("101").is_err());
        assert!(<SystemVolume as FeedPayload>::parse("None").is_err());
    }
}
