use crate::e2e::helpers;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use helpers::{providers, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_downloadable_audio(ctx: &TestContext) {
    providers::mount_speech(&ctx.providers).await;

    let response = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "Bismillah ir-Rahman ir-Rahim", "language": "ar", "voice_style": "wise" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header(
            "content-disposition",
            "attachment; filename=voice_ar_speed0.85.mp3",
        );
    assert_eq!(response.body_bytes, providers::SPEECH_BYTES);

    let requests = ctx.providers.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["model_id"], "eleven_multilingual_v2");
    assert_eq!(sent["voice_settings"]["stability"], 0.75);
    assert_eq!(sent["voice_settings"]["style"], 0.3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_honor_speed_query(ctx: &TestContext) {
    providers::mount_speech(&ctx.providers).await;

    let response = ctx
        .client
        .post("/api/voice/generate?speed=1.2", &json!({ "text": "Salaam" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK).assert_header(
        "content-disposition",
        "attachment; filename=voice_en_speed1.2.mp3",
    );

    let requests = ctx.providers.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["voice_settings"]["speed"], 1.2);
    assert_eq!(sent["voice_settings"]["stability"], 0.6);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_speed_and_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/voice/generate?speed=2.0", &json!({ "text": "Salaam" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .client
        .post("/api/voice/generate", &json!({ "text": "x".repeat(5001) }))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    assert!(ctx.providers.received_requests().await.unwrap().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_synthesis_failure(ctx: &TestContext) {
    providers::mount_speech_failure(&ctx.providers).await;

    let response = ctx
        .client
        .post("/api/voice/generate", &json!({ "text": "Salaam" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail("Voice generation failed");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_a_spoken_question(ctx: &TestContext) {
    providers::mount_transcription(&ctx.providers, "How can I increase my faith?").await;
    providers::mount_chat_completion(&ctx.providers, "Through remembrance, dear seeker.").await;
    providers::mount_speech(&ctx.providers).await;

    let response = ctx
        .client
        .post_file(
            "/api/voice/chat?language=en&response_speed=0.9",
            "audio",
            "question.m4a",
            b"fake-m4a-audio",
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["user_message"], "How can I increase my faith?");
    assert_eq!(body["ai_response"], "Through remembrance, dear seeker.");
    assert_eq!(body["audio_base64"], STANDARD.encode(providers::SPEECH_BYTES));
    assert_eq!(
        body["download_url"],
        format!("data:audio/mpeg;base64,{}", STANDARD.encode(providers::SPEECH_BYTES))
    );
    assert_eq!(body["speed"], 0.9);
    assert_eq!(body["tokens_used"], 150);
    assert_eq!(body["success"], true);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_voice_chat_when_synthesis_fails(ctx: &TestContext) {
    providers::mount_transcription(&ctx.providers, "private question").await;
    providers::mount_chat_completion(&ctx.providers, "an answer").await;
    providers::mount_speech_failure(&ctx.providers).await;

    let response = ctx
        .client
        .post_file("/api/voice/chat", "audio", "question.mp3", b"fake-mp3-audio")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail("Voice generation failed");
    let raw = String::from_utf8_lossy(&response.body_bytes).to_string();
    assert!(!raw.contains("private question"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_voice_chat_when_generation_degrades(ctx: &TestContext) {
    providers::mount_transcription(&ctx.providers, "hello").await;
    providers::mount_chat_failure(&ctx.providers).await;
    providers::mount_speech(&ctx.providers).await;

    let response = ctx
        .client
        .post_file("/api/voice/chat", "audio", "question.mp3", b"fake-mp3-audio")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail("AI response failed");

    let requests = ctx.providers.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| !r.url.path().contains("text-to-speech")));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_voice_chat_when_transcription_fails(ctx: &TestContext) {
    providers::mount_transcription_failure(&ctx.providers).await;

    let response = ctx
        .client
        .post_file("/api/voice/chat", "audio", "question.ogg", b"not really audio")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail("Transcription failed");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_or_empty_upload(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file("/api/voice/chat", "recording", "question.mp3", b"fake-mp3-audio")
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_detail("Missing 'audio' file");

    let response = ctx
        .client
        .post_file("/api/voice/chat", "audio", "empty.mp3", b"")
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    assert!(ctx.providers.received_requests().await.unwrap().is_empty());
}
