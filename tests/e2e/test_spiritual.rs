use crate::e2e::helpers;

use helpers::{assertions::assert_string_list, providers, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_give_advice_with_recommendations(ctx: &TestContext) {
    providers::mount_chat_completion(&ctx.providers, "Be steadfast, beloved.").await;

    let response = ctx
        .client
        .post(
            "/api/spiritual/advice",
            &json!({ "topic": "laziness in prayer", "user_level": "intermediate" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["advice"], "Be steadfast, beloved.");
    assert_string_list(&body["recommended_zikr"], 3);
    assert_eq!(body["recommended_zikr"][0], "SubhanAllah (33 times)");
    assert_string_list(&body["next_steps"], 3);

    let requests = ctx.providers.received_requests().await.unwrap();
    let sent = String::from_utf8_lossy(&requests[0].body).to_string();
    assert!(sent.contains("laziness in prayer"));
    assert!(sent.contains("intermediate"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_bare_advice_when_generation_fails(ctx: &TestContext) {
    providers::mount_chat_failure(&ctx.providers).await;

    let response = ctx
        .client
        .post("/api/spiritual/advice", &json!({ "topic": "anger" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["advice"], "May Allah guide you on your spiritual journey.");
    assert_string_list(&body["recommended_zikr"], 0);
    assert_string_list(&body["next_steps"], 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_meditation_script(ctx: &TestContext) {
    providers::mount_chat_completion(
        &ctx.providers,
        "Sit comfortably.\n\nBreathe in with Allah.\n\n\nBreathe out with Hu.",
    )
    .await;

    let response = ctx
        .client
        .post(
            "/api/spiritual/meditation",
            &json!({ "goal": "inner peace", "duration_minutes": 10, "language": "hi" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["duration_minutes"], 10);
    assert!(body["audio_url"].is_null());
    assert_eq!(
        body["steps"],
        json!(["Sit comfortably.", "Breathe in with Allah.", "Breathe out with Hu."])
    );
    assert_eq!(body["language"], "hi");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_meditation_duration_out_of_range(ctx: &TestContext) {
    for minutes in [2, 31] {
        let response = ctx
            .client
            .post(
                "/api/spiritual/meditation",
                &json!({ "goal": "focus", "duration_minutes": minutes }),
            )
            .await
            .unwrap();

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_suggest_zikr_for_mood(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/spiritual/zikr-suggestions?mood=Anxious&language=ur")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["mood"], "Anxious");
    assert_eq!(body["zikr_suggestions"][0], "La hawla wa la quwwata illa billah");
    assert_eq!(body["language"], "ur");
    assert_eq!(body["note"], "Recite with full presence and sincerity");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_unknown_mood_to_general(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/spiritual/zikr-suggestions?mood=sleepy")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["mood"], "sleepy");
    assert_eq!(
        body["zikr_suggestions"],
        json!(["SubhanAllah (33 times)", "Alhamdulillah (33 times)", "Allahu Akbar (34 times)"])
    );
    assert_eq!(body["language"], "en");

    let response = ctx.client.get("/api/spiritual/zikr-suggestions").await.unwrap();
    assert_eq!(response.body()["mood"], "general");
}
