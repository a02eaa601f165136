use async_openai::config::OpenAIConfig;
use axum::Router;
use murshid_backend::{
    controllers::{
        hadith::HadithController, murshid::MurshidController, prayer::PrayerController,
        quran::QuranController, spiritual::SpiritualController, voice::VoiceController,
    },
    domain::{
        generation::GenerationService, hadith::HadithService, murshid::MurshidService,
        prayer::PrayerService, quran::QuranService, spiritual::SpiritualService,
        voice::VoiceService,
    },
    infrastructure::{
        http::{create_router, Controllers},
        repositories::{
            build_http_client, build_openai_client, AladhanRepository, ElevenLabsTtsRepository, HadithApiRepository,
            OpenAiChatRepository, OpenAiTranscriptionRepository, QuranApiRepository, OPENAI_TIMEOUT,
        },
    },
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub mod api_client;
pub mod assertions;

use api_client::TestClient;

pub const TEST_MODEL: &str = "gpt-4-turbo-preview";
pub const TEST_ELEVENLABS_KEY: &str = "test-elevenlabs-key";

/// A running app whose providers are all served by one mock server.
///
/// Each provider lives under its own path prefix (see `providers`), so tests
/// mount only the upstream calls they care about; anything unmounted answers 404.
pub struct TestContext {
    pub client: TestClient,
    pub providers: MockServer,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let providers = MockServer::start().await;

            let app = create_app_with_mocked_providers(&providers.uri())
                .expect("Failed to create app");

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                providers,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Mock server shuts down on drop
        }
    }
}

fn create_app_with_mocked_providers(providers_uri: &str) -> anyhow::Result<Router> {
    let http_client = build_http_client()?;
    let openai_client = Arc::new(build_openai_client(
        OpenAIConfig::new()
            .with_api_key("test-openai-key")
            .with_api_base(format!("{}{}", providers_uri, providers::OPENAI_PREFIX)),
        OPENAI_TIMEOUT,
    )?);

    // Instantiate repositories
    let chat_repo = Arc::new(OpenAiChatRepository::new(
        openai_client.clone(),
        TEST_MODEL.to_string(),
    ));
    let transcription_repo = Arc::new(OpenAiTranscriptionRepository::new(openai_client));
    let speech_repo = Arc::new(ElevenLabsTtsRepository::new(
        http_client.clone(),
        format!("{}{}", providers_uri, providers::ELEVENLABS_PREFIX),
        TEST_ELEVENLABS_KEY.to_string(),
    ));
    let quran_repo = Arc::new(QuranApiRepository::new(
        http_client.clone(),
        format!("{}{}", providers_uri, providers::QURAN_PREFIX),
    ));
    let hadith_repo = Arc::new(HadithApiRepository::new(
        http_client.clone(),
        format!("{}{}", providers_uri, providers::HADITH_PREFIX),
    ));
    let prayer_repo = Arc::new(AladhanRepository::new(
        http_client,
        format!("{}{}", providers_uri, providers::ALADHAN_PREFIX),
    ));

    // Instantiate services
    let generation_service = Arc::new(GenerationService::new(chat_repo));
    let murshid_service = Arc::new(MurshidService::new(generation_service.clone()));
    let quran_service = Arc::new(QuranService::new(quran_repo, generation_service.clone()));
    let hadith_service = Arc::new(HadithService::new(hadith_repo, generation_service.clone()));
    let spiritual_service = Arc::new(SpiritualService::new(generation_service));
    let voice_service = Arc::new(VoiceService::new(
        speech_repo,
        transcription_repo,
        murshid_service.clone(),
    ));
    let prayer_service = Arc::new(PrayerService::new(prayer_repo));

    // Instantiate controllers
    let controllers = Controllers {
        murshid: Arc::new(MurshidController::new(murshid_service)),
        quran: Arc::new(QuranController::new(quran_service)),
        hadith: Arc::new(HadithController::new(hadith_service)),
        spiritual: Arc::new(SpiritualController::new(spiritual_service)),
        voice: Arc::new(VoiceController::new(voice_service)),
        prayer: Arc::new(PrayerController::new(prayer_service)),
    };

    Ok(create_router(controllers))
}
