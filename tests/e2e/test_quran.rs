use crate::e2e::helpers;

use helpers::{providers, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

const FATIHAH_1: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَـٰنِ ٱلرَّحِيمِ";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_explain_a_verse(ctx: &TestContext) {
    providers::mount_verse(&ctx.providers, "1:1", "X", 131, "Y").await;
    providers::mount_chapter(&ctx.providers, 1, "Al-Fatihah", 7).await;
    providers::mount_chat_completion(&ctx.providers, "A verse of mercy.").await;

    let response = ctx
        .client
        .post(
            "/api/quran/explain",
            &json!({ "surah_number": 1, "ayah_number": 1, "language": "en" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["surah_number"], 1);
    assert_eq!(body["surah_name"], "Al-Fatihah");
    assert_eq!(body["ayah_number"], 1);
    assert_eq!(body["arabic_text"], "X");
    assert_eq!(body["translation"], "Y");
    assert_eq!(body["explanation"], "A verse of mercy.");
    assert_eq!(body["language"], "en");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_to_first_ayah_and_strip_markup(ctx: &TestContext) {
    providers::mount_verse(
        &ctx.providers,
        "112:1",
        "قُلْ هُوَ ٱللَّهُ أَحَدٌ",
        97,
        "کہو، وہ اللہ ہے<sup foot_note=\"1\">1</sup> <i>یکتا</i>",
    )
    .await;
    providers::mount_chapter(&ctx.providers, 112, "Al-Ikhlas", 4).await;
    providers::mount_chat_completion(&ctx.providers, "تشریح").await;

    let response = ctx
        .client
        .post("/api/quran/explain", &json!({ "surah_number": 112, "language": "ur" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["ayah_number"], 1);
    assert_eq!(body["translation"], "کہو، وہ اللہ ہے یکتا");
    assert_eq!(body["language"], "ur");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_leave_translation_empty_for_arabic(ctx: &TestContext) {
    providers::mount_verse(&ctx.providers, "1:1", FATIHAH_1, 0, "unused").await;
    providers::mount_chapter(&ctx.providers, 1, "Al-Fatihah", 7).await;
    providers::mount_chat_completion(&ctx.providers, "شرح").await;

    let response = ctx
        .client
        .post(
            "/api/quran/explain",
            &json!({ "surah_number": 1, "ayah_number": 1, "language": "ar" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["arabic_text"], FATIHAH_1);
    assert_eq!(body["translation"], "");

    let requests = ctx.providers.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| !r.url.query().unwrap_or_default().contains("translations")));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_generic_surah_name(ctx: &TestContext) {
    providers::mount_verse(&ctx.providers, "2:255", FATIHAH_1, 131, "Allah - there is no deity except Him").await;
    providers::mount_chat_completion(&ctx.providers, "Ayat al-Kursi protects.").await;

    let response = ctx
        .client
        .post("/api/quran/explain", &json!({ "surah_number": 2, "ayah_number": 255 }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["surah_name"], "Surah 2");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_verse_when_explanation_fails(ctx: &TestContext) {
    providers::mount_verse(&ctx.providers, "1:1", "X", 131, "Y").await;
    providers::mount_chapter(&ctx.providers, 1, "Al-Fatihah", 7).await;
    providers::mount_chat_failure(&ctx.providers).await;

    let response = ctx
        .client
        .post("/api/quran/explain", &json!({ "surah_number": 1, "ayah_number": 1 }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["arabic_text"], "X");
    assert_eq!(
        body["explanation"],
        "Unable to provide explanation at this moment. Please try again."
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_out_of_range_surah(ctx: &TestContext) {
    for surah in [0, 115] {
        let response = ctx
            .client
            .post("/api/quran/explain", &json!({ "surah_number": surah, "ayah_number": 1 }))
            .await
            .unwrap();

        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_detail("Invalid Surah number (1-114)");
    }

    assert!(ctx.providers.received_requests().await.unwrap().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_missing_verse(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/quran/explain", &json!({ "surah_number": 1, "ayah_number": 99 }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_detail("Verse not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_surah_info(ctx: &TestContext) {
    providers::mount_chapter(&ctx.providers, 1, "Al-Fatihah", 7).await;

    let response = ctx.client.get("/api/quran/surah/1").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name_simple"], "Al-Fatihah");
    assert_eq!(body["verses_count"], 7);
    assert_eq!(body["revelation_place"], "makkah");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_surah_path(ctx: &TestContext) {
    let response = ctx.client.get("/api/quran/surah/200").await.unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx.client.get("/api/quran/surah/first").await.unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    // Valid number, but the provider has no such chapter mounted
    let response = ctx.client.get("/api/quran/surah/3").await.unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_detail("Surah not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_search_verses(ctx: &TestContext) {
    providers::mount_search(
        &ctx.providers,
        "mercy",
        json!([{ "verse_key": "21:107", "text": "And We have not sent you except as a mercy" }]),
    )
    .await;

    let response = ctx.client.get("/api/quran/search?query=mercy").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["query"], "mercy");
    assert_eq!(body["results"][0]["verse_key"], "21:107");

    let requests = ctx.providers.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap_or_default().contains("size=10"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_search_failure(ctx: &TestContext) {
    let response = ctx.client.get("/api/quran/search?query=mercy").await.unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail("Search failed");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_search_query(ctx: &TestContext) {
    let response = ctx.client.get("/api/quran/search").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}
