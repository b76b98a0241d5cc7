use serde::Deserialize;

use crate::helper::scalar::deserialize_u32;

/// Settings published by the backend at `/config`. Fetched once at startup and never changed
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    /// Player volume that corresponds to 100% on the volume slider
    #[serde(alias = "MAX_VLC_VOLUME", deserialize_with = "deserialize_u32")]
    pub max_volume: u32,
    /// Address of the player's own HTTP interface, as seen by the backend
    #[serde(alias = "VLC_HOST", default)]
    pub service_host: String,
}

impl RemoteConfig {
    pub fn validate(self) -> Result<Self, String> {
        if self.max_volume == 0 {
            return Err("MAX_VLC_VOLUME must be greater than zero".to_string());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(body: &str) -> Result<RemoteConfig, String> {
        let cfg: RemoteConfig = serde_json::from_str(body).map_err(|e| e.to_string())?;
        cfg.validate()
    }

    #[test]
    fn test_backend_keys() {
        let cfg = parse(
            r#"{"VLC_HOST": "http://10.0.0.5:8080", "MAX_VLC_VOLUME": "512", "REFRESH_RATE": 1}"#,
        )
        .unwrap();
        assert_eq!(
            cfg,
            RemoteConfig {
                max_volume: 512,
                service_host: "http://10.0.0.5:8080".to_string(),
            }
        );
    }

    #[test]
    fn test_numeric_and_missing_host() {
        let cfg = parse(r#"{"MAX_VLC_VOLUME": 320}"#).unwrap();
        assert_eq!(cfg.max_volume, 320);
        assert_eq!(cfg.service_host, "");
    }

    #[test]
    fn test_rejects_bad_volume() {
        assert!(parse(r#"{"MAX_VLC_VOLUME": 0}"#).is_err());
        assert!(parse(r#"{"MAX_VLC_VOLUME": "lots"}"#).is_err());
        assert!(parse(r#"{"VLC_HOST": "x"}"#).is_err());
    }
}
