//! # Context Value Objects
//!
//! The `context` block: the state of the device and of the platform services
//! at the time the request was sent.

use crate::raw;
use crate::session::{Application, User};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// The device that captured the utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: Option<String>,
    /// Interface name -> interface descriptor (usually an empty object).
    pub supported_interfaces: HashMap<String, Value>,
}

impl Device {
    pub fn parse(raw: &Value) -> Self {
        Self {
            device_id: raw::string(raw, "deviceId"),
            supported_interfaces: raw::map(raw, "supportedInterfaces"),
        }
    }

    /// Whether the device declares support for `interface` (e.g. `AudioPlayer`).
    pub fn supports(&self, interface: &str) -> bool {
        self.supported_interfaces.contains_key(interface)
    }
}

/// Platform-level information sent with every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    pub application: Option<Application>,
    pub user: Option<User>,
    pub device: Option<Device>,
    pub api_endpoint: Option<String>,
    pub api_access_token: Option<String>,
}

impl System {
    pub fn parse(raw: &Value) -> Self {
        Self {
            application: raw::nested(raw, "application", Application::parse),
            user: raw::nested(raw, "user", User::parse),
            device: raw::nested(raw, "device", Device::parse),
            api_endpoint: raw::string(raw, "apiEndpoint"),
            api_access_token: raw::string(raw, "apiAccessToken"),
        }
    }
}

/// Activity reported by the audio player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerActivity {
    Idle,
    Paused,
    Playing,
    BufferUnderrun,
    Finished,
    Stopped,
}

impl PlayerActivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerActivity::Idle => "IDLE",
            PlayerActivity::Paused => "PAUSED",
            PlayerActivity::Playing => "PLAYING",
            PlayerActivity::BufferUnderrun => "BUFFER_UNDERRUN",
            PlayerActivity::Finished => "FINISHED",
            PlayerActivity::Stopped => "STOPPED",
        }
    }
}

impl FromStr for PlayerActivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IDLE" => Ok(PlayerActivity::Idle),
            "PAUSED" => Ok(PlayerActivity::Paused),
            "PLAYING" => Ok(PlayerActivity::Playing),
            "BUFFER_UNDERRUN" => Ok(PlayerActivity::BufferUnderrun),
            "FINISHED" => Ok(PlayerActivity::Finished),
            "STOPPED" => Ok(PlayerActivity::Stopped),
            _ => Err(s.to_string()),
        }
    }
}

/// Playback state of the audio player.
///
/// Appears as `context.AudioPlayer` and as `currentPlaybackState` inside
/// `AudioPlayer.PlaybackFailed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerState {
    pub token: Option<String>,
    pub offset_in_milliseconds: Option<i64>,
    pub player_activity: Option<PlayerActivity>,
}

impl AudioPlayerState {
    pub fn parse(raw: &Value) -> Self {
        Self {
            token: raw::string(raw, "token"),
            offset_in_milliseconds: raw::integer(raw, "offsetInMilliseconds"),
            player_activity: raw::string(raw, "playerActivity").and_then(|s| s.parse().ok()),
        }
    }
}

/// The `context` block of a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Context {
    pub system: Option<System>,
    pub audio_player: Option<AudioPlayerState>,
}

impl Context {
    /// Build a context from the raw `context` object. Never fails.
    pub fn parse(raw: &Value) -> Self {
        Self {
            system: raw::nested(raw, "System", System::parse),
            audio_player: raw::nested(raw, "AudioPlayer", AudioPlayerState::parse),
        }
    }
}
