//! AudioPlayer callbacks.
//!
//! Sent by the device's audio player as a stream progresses. These are
//! device-originated progress reports, so they are accepted without the
//! signature headers.

use crate::domain::variant::{ErrorInfo, RequestHeader, RequestKind};
use serde::Serialize;
use serde_json::Value;
use shared_types::{raw, AudioPlayerState};

/// Declares a playback progress event carrying `token` and `offsetInMilliseconds`.
macro_rules! playback_event {
    ($(#[$doc:meta])* $name:ident, $wire:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(flatten)]
            pub header: RequestHeader,
            /// Token of the stream the event refers to.
            pub token: Option<String>,
            pub offset_in_milliseconds: Option<i64>,
        }

        impl RequestKind for $name {
            const TYPE: &'static str = $wire;
            const VALIDATES_SIGNATURE: bool = false;

            fn from_raw(raw: &Value) -> Self {
                Self {
                    header: RequestHeader::parse(raw),
                    token: raw::string(raw, "token"),
                    offset_in_milliseconds: raw::integer(raw, "offsetInMilliseconds"),
                }
            }

            fn header(&self) -> &RequestHeader {
                &self.header
            }
        }
    };
}

playback_event!(
    /// Playback of a stream began.
    PlaybackStartedRequest,
    "AudioPlayer.PlaybackStarted"
);
playback_event!(
    /// The current stream is almost fully buffered; enqueue the next one now.
    PlaybackNearlyFinishedRequest,
    "AudioPlayer.PlaybackNearlyFinished"
);
playback_event!(
    /// The stream played to its end.
    PlaybackFinishedRequest,
    "AudioPlayer.PlaybackFinished"
);
playback_event!(
    /// Playback stopped on a user or skill stop/pause.
    PlaybackStoppedRequest,
    "AudioPlayer.PlaybackStopped"
);

/// `AudioPlayer.PlaybackFailed`: the player could not play a stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackFailedRequest {
    #[serde(flatten)]
    pub header: RequestHeader,
    /// Token of the stream that failed, which may differ from the one playing.
    pub token: Option<String>,
    pub error: Option<ErrorInfo>,
    pub current_playback_state: Option<AudioPlayerState>,
}

impl RequestKind for PlaybackFailedRequest {
    const TYPE: &'static str = "AudioPlayer.PlaybackFailed";
    const VALIDATES_SIGNATURE: bool = false;

    fn from_raw(raw: &Value) -> Self {
        Self {
            header: RequestHeader::parse(raw),
            token: raw::string(raw, "token"),
            error: raw::nested(raw, "error", ErrorInfo::parse),
            current_playback_state: raw::nested(
                raw,
                "currentPlaybackState",
                AudioPlayerState::parse,
            ),
        }
    }

    fn header(&self) -> &RequestHeader {
        &self.header
    }
}
