//! PlaybackController commands.
//!
//! Raised when the user presses a hardware or on-screen media button.
//! They carry no fields beyond the common header.

use crate::domain::variant::{RequestHeader, RequestKind};
use serde::Serialize;
use serde_json::Value;

macro_rules! command_issued {
    ($(#[$doc:meta])* $name:ident, $wire:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
        pub struct $name {
            #[serde(flatten)]
            pub header: RequestHeader,
        }

        impl RequestKind for $name {
            const TYPE: &'static str = $wire;
            const VALIDATES_SIGNATURE: bool = true;

            fn from_raw(raw: &Value) -> Self {
                Self {
                    header: RequestHeader::parse(raw),
                }
            }

            fn header(&self) -> &RequestHeader {
                &self.header
            }
        }
    };
}

command_issued!(
    /// "Next" button.
    NextCommandIssued,
    "PlaybackController.NextCommandIssued"
);
command_issued!(
    /// "Pause" button.
    PauseCommandIssued,
    "PlaybackController.PauseCommandIssued"
);
command_issued!(
    /// "Play" button.
    PlayCommandIssued,
    "PlaybackController.PlayCommandIssued"
);
command_issued!(
    /// "Previous" button.
    PreviousCommandIssued,
    "PlaybackController.PreviousCommandIssued"
);
