//! # Integration Test Flows
//!
//! End-to-end checks that a host service sees the right typed request for
//! each realistic platform payload:
//!
//! 1. **Conversation turns**: Launch, Intent and SessionEnded with full
//!    session and context blocks
//! 2. **Audio events**: AudioPlayer and PlaybackController payloads, with and
//!    without signature headers
//! 3. **Rejections**: every fatal path surfaces as a client error
//! 4. **Telemetry**: the logging bootstrap installs once and only once

#[cfg(test)]
mod tests {
    use std::sync::Once;

    use serde_json::{json, Value};
    use shared_types::PlayerActivity;
    use skill_request::{
        parse_request, ParserConfig, RequestError, RequestParser, RequestParsingApi,
        RequestVariant,
    };
    use skill_telemetry::{init_logging, TelemetryConfig, TelemetryError};

    use crate::fixtures::{self, CERT_URL, SIGNATURE};

    static LOGGING: Once = Once::new();

    /// Install the subscriber once per test binary; later calls are no-ops.
    fn setup_logging() {
        LOGGING.call_once(|| {
            let _ = init_logging(&TelemetryConfig::for_tests());
        });
    }

    // =============================================================================
    // CONVERSATION TURNS
    // =============================================================================

    #[test]
    fn test_launch_then_intent_then_session_end() {
        setup_logging();
        let parser = RequestParser::default();

        let launch = parser.parse(&fixtures::body(fixtures::launch_request()), CERT_URL, SIGNATURE);
        assert!(matches!(
            launch.as_ref().map(|e| e.request()),
            Ok(RequestVariant::Launch(_))
        ));

        let intent = parser.parse(&fixtures::body(fixtures::intent_request()), CERT_URL, SIGNATURE);
        assert!(intent.is_ok());
        let Ok(intent) = intent else { return };
        let Some(request) = intent.request().as_intent() else {
            panic!("expected IntentRequest, got {:?}", intent.request_type());
        };
        assert_eq!(request.intent_name(), Some("GetForecastIntent"));
        assert_eq!(request.slot_value("city"), Some("Porto"));
        assert_eq!(request.slot_value("day"), None);
        assert_eq!(request.dialog_state.as_deref(), Some("COMPLETED"));
        assert_eq!(request.header.locale.as_deref(), Some("en-GB"));
        assert!(request.header.timestamp.is_some());

        let ended = parser.parse(
            &fixtures::body(fixtures::session_ended_request()),
            CERT_URL,
            SIGNATURE,
        );
        match ended.as_ref().map(|e| e.request()) {
            Ok(RequestVariant::SessionEnded(ended)) => {
                assert_eq!(ended.reason.as_deref(), Some("ERROR"));
                assert_eq!(
                    ended.error.as_ref().and_then(|e| e.error_type.as_deref()),
                    Some("INVALID_RESPONSE")
                );
            }
            other => panic!("expected SessionEndedRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_navigation_on_full_payload() {
        setup_logging();
        let envelope = parse_request(&fixtures::body(fixtures::intent_request()), CERT_URL, SIGNATURE);
        assert!(envelope.is_ok());
        let Ok(envelope) = envelope else { return };

        assert_eq!(envelope.version(), Some("1.0"));
        assert_eq!(envelope.application_id(), Some(fixtures::SKILL_ID));
        assert_eq!(
            envelope.user().and_then(|u| u.user_id.as_deref()),
            Some(fixtures::USER_ID)
        );
        let device = envelope.device();
        assert_eq!(
            device.and_then(|d| d.device_id.as_deref()),
            Some(fixtures::DEVICE_ID)
        );
        assert!(device.is_some_and(|d| d.supports("AudioPlayer")));
        assert!(!device.is_some_and(|d| d.supports("VideoApp")));

        let session = envelope.session();
        assert!(session.is_some_and(|s| !s.new));
        assert_eq!(
            session
                .and_then(|s| s.user.as_ref())
                .and_then(|u| u.permissions.as_ref())
                .and_then(|p| p.consent_token.as_deref()),
            Some("consent-token")
        );

        let fallback = json!(null);
        assert_eq!(envelope.session_attribute("lastCity", &fallback), &json!("Lisbon"));
        assert_eq!(envelope.session_attribute("turns", &fallback), &json!(3));
        assert_eq!(envelope.session_attribute("unset", &fallback), &fallback);
    }

    // =============================================================================
    // AUDIO EVENTS
    // =============================================================================

    #[test]
    fn test_audio_player_events_without_signature_headers() {
        setup_logging();
        for request_type in [
            "AudioPlayer.PlaybackStarted",
            "AudioPlayer.PlaybackNearlyFinished",
            "AudioPlayer.PlaybackFinished",
            "AudioPlayer.PlaybackStopped",
        ] {
            let body = fixtures::sessionless_body(fixtures::header_only_request(request_type));
            let envelope = parse_request(&body, "", "");
            assert_eq!(
                envelope.as_ref().map(|e| e.request_type()).ok(),
                Some(request_type)
            );
            assert!(envelope.is_ok_and(|e| e.session().is_none()));
        }
    }

    #[test]
    fn test_playback_failed_carries_player_state() {
        setup_logging();
        let body = fixtures::sessionless_body(fixtures::playback_failed_request());
        let envelope = parse_request(&body, "", "");
        match envelope.as_ref().map(|e| e.request()) {
            Ok(RequestVariant::PlaybackFailed(failed)) => {
                assert_eq!(failed.token.as_deref(), Some("episode-43"));
                assert_eq!(
                    failed.error.as_ref().and_then(|e| e.message.as_deref()),
                    Some("503 from CDN")
                );
                let state = failed.current_playback_state.as_ref();
                assert_eq!(state.and_then(|s| s.offset_in_milliseconds), Some(183000));
                assert_eq!(
                    state.and_then(|s| s.player_activity),
                    Some(PlayerActivity::Playing)
                );
                // Epoch-millisecond timestamps are accepted alongside RFC 3339
                assert!(failed.header.timestamp.is_some());
            }
            other => panic!("expected PlaybackFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_playback_controller_commands_need_signature_headers() {
        setup_logging();
        for request_type in [
            "PlaybackController.NextCommandIssued",
            "PlaybackController.PauseCommandIssued",
            "PlaybackController.PlayCommandIssued",
            "PlaybackController.PreviousCommandIssued",
        ] {
            let body = fixtures::body(fixtures::header_only_request(request_type));
            assert!(matches!(
                parse_request(&body, "", ""),
                Err(RequestError::MissingRequiredHeader { .. })
            ));
            assert_eq!(
                parse_request(&body, CERT_URL, SIGNATURE)
                    .map(|e| e.request().requires_signature_validation())
                    .ok(),
                Some(true)
            );
        }
    }

    #[test]
    fn test_exception_and_display_events() {
        setup_logging();
        let body = fixtures::sessionless_body(fixtures::exception_encountered_request());
        match parse_request(&body, "", "").as_ref().map(|e| e.request()) {
            Ok(RequestVariant::ExceptionEncountered(exception)) => {
                assert_eq!(
                    exception.cause.as_ref().and_then(|c| c.request_id.as_deref()),
                    Some("amzn1.echo-api.request.intent-1")
                );
            }
            other => panic!("expected ExceptionEncountered, got {other:?}"),
        }

        let body = fixtures::body(fixtures::element_selected_request());
        match parse_request(&body, CERT_URL, SIGNATURE)
            .as_ref()
            .map(|e| e.request())
        {
            Ok(RequestVariant::ElementSelected(selected)) => {
                assert_eq!(selected.token.as_deref(), Some("list-item-3"));
            }
            other => panic!("expected ElementSelected, got {other:?}"),
        }
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[test]
    fn test_every_rejection_is_a_client_error() {
        setup_logging();
        let oversized = format!(r#"{{"pad":"{}"}}"#, "x".repeat(200 * 1024));
        let cases: Vec<(String, &str, &str)> = vec![
            ("not json at all".into(), CERT_URL, SIGNATURE),
            ("\"a string root\"".into(), CERT_URL, SIGNATURE),
            (oversized, CERT_URL, SIGNATURE),
            (json!({ "version": "1.0" }).to_string(), CERT_URL, SIGNATURE),
            (
                fixtures::body(json!({ "type": "CanFulfillIntentRequest" })),
                CERT_URL,
                SIGNATURE,
            ),
            (fixtures::body(fixtures::launch_request()), CERT_URL, ""),
        ];

        for (body, cert_url, signature) in cases {
            let result = parse_request(&body, cert_url, signature);
            assert!(
                result.as_ref().err().is_some_and(RequestError::is_client_error),
                "expected rejection, got {:?}",
                result.map(|e| e.request_type())
            );
        }
    }

    #[test]
    fn test_replay_parser_accepts_captured_traffic_without_headers() {
        setup_logging();
        let parser = RequestParser::new(ParserConfig::replay());
        assert!(parser.is_ok());
        let Ok(parser) = parser else { return };

        let body = fixtures::body(fixtures::intent_request());
        let envelope = parser.parse(&body, "", "");
        assert!(envelope.is_ok());
        assert!(envelope.is_ok_and(|e| e.raw_body() == body && e.signature().is_empty()));
    }

    #[test]
    fn test_envelope_serializes_without_raw_inputs() {
        setup_logging();
        let envelope = parse_request(&fixtures::body(fixtures::intent_request()), CERT_URL, SIGNATURE);
        let value = envelope
            .ok()
            .and_then(|e| serde_json::to_value(&e).ok())
            .unwrap_or(Value::Null);

        assert_eq!(value["request"]["type"], json!("IntentRequest"));
        assert_eq!(value["session"]["attributes"]["turns"], json!(3));
        assert!(value.get("signature").is_none());
        assert!(value.get("raw_body").is_none());
    }

    // =============================================================================
    // TELEMETRY
    // =============================================================================

    #[test]
    fn test_second_logging_init_is_rejected() {
        setup_logging();
        assert!(matches!(
            init_logging(&TelemetryConfig::for_tests()),
            Err(TelemetryError::SubscriberInit(_))
        ));
    }
}
