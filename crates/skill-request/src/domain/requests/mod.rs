//! # Request Types
//!
//! One record per wire discriminator, grouped by platform interface.

pub mod audio_player;
pub mod display;
pub mod playback_controller;
pub mod standard;
pub mod system;

pub use audio_player::{
    PlaybackFailedRequest, PlaybackFinishedRequest, PlaybackNearlyFinishedRequest,
    PlaybackStartedRequest, PlaybackStoppedRequest,
};
pub use display::ElementSelectedRequest;
pub use playback_controller::{
    NextCommandIssued, PauseCommandIssued, PlayCommandIssued, PreviousCommandIssued,
};
pub use standard::{Intent, IntentRequest, LaunchRequest, SessionEndedRequest, Slot};
pub use system::{ExceptionCause, ExceptionEncounteredRequest};
