use async_openai::config::OpenAIConfig;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use murshid_backend::controllers::{
    hadith::HadithController, murshid::MurshidController, prayer::PrayerController, quran::QuranController,
    spiritual::SpiritualController, voice::VoiceController,
};
use murshid_backend::domain::{
    generation::GenerationService, hadith::HadithService, murshid::MurshidService, prayer::PrayerService,
    quran::QuranService, spiritual::SpiritualService, voice::VoiceService,
};
use murshid_backend::infrastructure::config::{Config, LogFormat, APP_NAME, APP_VERSION};
use murshid_backend::infrastructure::http::{create_router, start_http_server, Controllers};
use murshid_backend::infrastructure::repositories::{
    build_http_client, build_openai_client, AladhanRepository, ElevenLabsTtsRepository, HadithApiRepository,
    OpenAiChatRepository, OpenAiTranscriptionRepository, QuranApiRepository, OPENAI_TIMEOUT,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting {} v{} on {}:{}",
        APP_NAME,
        APP_VERSION,
        config.host,
        config.port
    );
    tracing::debug!(
        free_tier_daily_limit = config.free_tier_daily_limit,
        premium_tier_daily_limit = config.premium_tier_daily_limit,
        "Tier limits loaded (not enforced)"
    );

    // Shared provider clients
    let http_client = build_http_client()?;
    let openai_client = Arc::new(build_openai_client(
        OpenAIConfig::new().with_api_key(config.openai_api_key.clone()),
        OPENAI_TIMEOUT,
    )?);
    tracing::info!(model = %config.openai_model, "OpenAI client initialized");

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject provider clients)
    tracing::info!("Instantiating repositories...");
    let chat_repo = Arc::new(OpenAiChatRepository::new(
        openai_client.clone(),
        config.openai_model.clone(),
    ));
    let transcription_repo = Arc::new(OpenAiTranscriptionRepository::new(openai_client));
    let speech_repo = Arc::new(ElevenLabsTtsRepository::new(
        http_client.clone(),
        config.elevenlabs_api_url.clone(),
        config.elevenlabs_api_key.clone(),
    ));
    let quran_repo = Arc::new(QuranApiRepository::new(
        http_client.clone(),
        config.quran_api_url.clone(),
    ));
    let hadith_repo = Arc::new(HadithApiRepository::new(
        http_client.clone(),
        config.hadith_api_url.clone(),
    ));
    let prayer_repo = Arc::new(AladhanRepository::new(http_client, config.aladhan_api_url.clone()));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
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

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let controllers = Controllers {
        murshid: Arc::new(MurshidController::new(murshid_service)),
        quran: Arc::new(QuranController::new(quran_service)),
        hadith: Arc::new(HadithController::new(hadith_service)),
        spiritual: Arc::new(SpiritualController::new(spiritual_service)),
        voice: Arc::new(VoiceController::new(voice_service)),
        prayer: Arc::new(PrayerController::new(prayer_service)),
    };

    // Start HTTP server with all routes
    start_http_server(&config, create_router(controllers)).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
