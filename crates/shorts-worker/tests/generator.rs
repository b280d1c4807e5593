//! End-to-end generation tests against mocked collaborators.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::watch;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shorts_acquire::{AcquireConfig, HttpImageFetcher};
use shorts_ai_client::{ArticleScraper, ScraperConfig, ScriptClient, ScriptConfig, SpeechClient, SpeechConfig};
use shorts_models::GenerationPhase;
use shorts_worker::{GeneratorConfig, VideoGenerator};

const ARTICLE_HTML: &str = "<html><body>\
    <p>Researchers unveiled a new chip design that promises large gains.</p>\
    <p>The prototype ran for months in a lab before the announcement was made public.</p>\
    </body></html>";

async fn mount_collaborators(server: &MockServer, images_ok: bool) {
    // Article page.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_HTML))
        .mount(server)
        .await;

    // Script generation.
    let script = json!({
        "script_text": "A tiny chip just rewrote the rules.",
        "visual_prompts": [
            "a glowing microchip close up",
            "an engineer inspecting a silicon wafer"
        ]
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": script.to_string() } }]
        })))
        .mount(server)
        .await;

    // Speech synthesis.
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"MP3DATA".to_vec()))
        .mount(server)
        .await;

    // Word-level transcription.
    Mock::given(method("POST"))
        .and(path("/v1/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "a tiny chip",
            "words": [
                { "word": "a", "start": 0.0, "end": 0.2 },
                { "word": "tiny", "start": 0.2, "end": 0.5 },
                { "word": "chip", "start": 0.5, "end": 0.9 }
            ]
        })))
        .mount(server)
        .await;

    // Image service.
    let image_status = if images_ok { 200 } else { 503 };
    Mock::given(method("GET"))
        .and(path_regex("^/prompt/.*"))
        .respond_with(ResponseTemplate::new(image_status))
        .mount(server)
        .await;
}

fn generator_for(server: &MockServer, config: GeneratorConfig) -> VideoGenerator {
    let base = server.uri();

    let acquire_config = AcquireConfig {
        max_attempts: 2,
        backoff: Duration::from_millis(10),
        scene_pause: Duration::from_millis(5),
        image_base_url: base.clone(),
        ..AcquireConfig::default()
    };

    let script_config = ScriptConfig {
        base_url: base.clone(),
        api_key: "test-key".to_string(),
        models: vec!["model-a".to_string()],
        max_retries: 0,
        ..ScriptConfig::default()
    };

    let speech_config = SpeechConfig {
        base_url: base.clone(),
        api_key: "test-key".to_string(),
        max_retries: 0,
        ..SpeechConfig::default()
    };

    VideoGenerator::new(
        config,
        acquire_config,
        ArticleScraper::new(ScraperConfig::default()).unwrap(),
        ScriptClient::new(script_config).unwrap(),
        SpeechClient::new(speech_config).unwrap(),
        Arc::new(HttpImageFetcher::new(Duration::from_secs(5)).unwrap()),
    )
}

#[tokio::test]
async fn test_generate_produces_complete_plan() {
    let server = MockServer::start().await;
    mount_collaborators(&server, true).await;

    let config = GeneratorConfig {
        scene_count: 3,
        ..GeneratorConfig::default()
    };
    let generator = generator_for(&server, config);
    let mut phases = generator.subscribe_phase();

    let (_cancel_tx, mut cancel) = watch::channel(false);
    let plan = generator.generate(&server.uri(), &mut cancel).await.unwrap();

    assert_eq!(plan.script_text, "A tiny chip just rewrote the rules.");
    assert!(plan.audio_data_url.starts_with("data:audio/mp3;base64,"));
    assert_eq!(plan.scene_count(), 3);
    assert_eq!(plan.timeline.captions().len(), 3);

    // ceil((0.9 + 1.5) * 30) = 72 frames.
    assert_eq!(plan.total_frames(), 72);

    // Ranges tile the whole span, 1:1 with confirmed assets.
    let ranges = plan.timeline.ranges();
    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges[0].start_frame, 0);
    assert_eq!(ranges.last().unwrap().end_frame, 72);
    assert!(plan.timeline.assets().iter().all(|a| !a.placeholder));

    assert_eq!(*phases.borrow_and_update(), GenerationPhase::Ready);
}

#[tokio::test]
async fn test_generate_masks_image_failures_with_placeholders() {
    let server = MockServer::start().await;
    mount_collaborators(&server, false).await;

    let config = GeneratorConfig {
        scene_count: 4,
        ..GeneratorConfig::default()
    };
    let generator = generator_for(&server, config);

    let (_cancel_tx, mut cancel) = watch::channel(false);
    let plan = generator.generate(&server.uri(), &mut cancel).await.unwrap();

    // Image failures never fail the pipeline.
    assert_eq!(plan.scene_count(), 4);
    assert!(plan.timeline.assets().iter().all(|a| a.placeholder));
    assert!(plan
        .timeline
        .assets()
        .iter()
        .all(|a| a.url.starts_with("https://picsum.photos/seed/fallback_")));
}

#[tokio::test]
async fn test_generate_observes_pre_set_cancellation() {
    let server = MockServer::start().await;
    mount_collaborators(&server, true).await;

    let generator = generator_for(&server, GeneratorConfig::default());

    let (cancel_tx, mut cancel) = watch::channel(false);
    cancel_tx.send(true).unwrap();

    let err = generator
        .generate(&server.uri(), &mut cancel)
        .await
        .unwrap_err();
    assert!(err.is_cancellation());
}

#[tokio::test]
async fn test_generate_surfaces_upstream_script_failure() {
    let server = MockServer::start().await;

    // Article resolves but the script service is down.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_HTML))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let generator = generator_for(&server, GeneratorConfig::default());
    let mut phases = generator.subscribe_phase();

    let (_cancel_tx, mut cancel) = watch::channel(false);
    let result = generator.generate(&server.uri(), &mut cancel).await;

    assert!(result.is_err());
    assert_eq!(*phases.borrow_and_update(), GenerationPhase::Failed);
}
