pub mod extract;
pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    hadith::HadithController, health, murshid::MurshidController, prayer::PrayerController,
    quran::QuranController, spiritual::SpiritualController, voice::VoiceController,
};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Largest accepted voice-chat upload
pub const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Every controller the router dispatches to
pub struct Controllers {
    pub murshid: Arc<MurshidController>,
    pub quran: Arc<QuranController>,
    pub hadith: Arc<HadithController>,
    pub spiritual: Arc<SpiritualController>,
    pub voice: Arc<VoiceController>,
    pub prayer: Arc<PrayerController>,
}

/// Build the application router with all routes configured
pub fn create_router(controllers: Controllers) -> Router {
    let murshid_routes = Router::new()
        .route("/api/murshid/chat", post(MurshidController::chat))
        .route("/api/murshid/daily-naseehah", get(MurshidController::daily_naseehah))
        .route("/api/murshid/health", get(health::murshid_health))
        .with_state(controllers.murshid);

    let quran_routes = Router::new()
        .route("/api/quran/explain", post(QuranController::explain))
        .route("/api/quran/surah/:surah_number", get(QuranController::surah))
        .route("/api/quran/search", get(QuranController::search))
        .with_state(controllers.quran);

    let hadith_routes = Router::new()
        .route("/api/hadith/explain", post(HadithController::explain))
        .route("/api/hadith/random", get(HadithController::random))
        .route("/api/hadith/collections", get(HadithController::collections))
        .with_state(controllers.hadith);

    let spiritual_routes = Router::new()
        .route("/api/spiritual/advice", post(SpiritualController::advice))
        .route("/api/spiritual/meditation", post(SpiritualController::meditation))
        .route(
            "/api/spiritual/zikr-suggestions",
            get(SpiritualController::zikr_suggestions),
        )
        .with_state(controllers.spiritual);

    // Uploads need more room than the default body limit
    let voice_routes = Router::new()
        .route("/api/voice/generate", post(VoiceController::generate))
        .route(
            "/api/voice/chat",
            post(VoiceController::chat).layer(DefaultBodyLimit::max(MAX_AUDIO_UPLOAD_BYTES)),
        )
        .with_state(controllers.voice);

    let prayer_routes = Router::new()
        .route("/api/prayer/times", get(PrayerController::times))
        .route(
            "/api/prayer/times/coordinates",
            get(PrayerController::times_by_coordinates),
        )
        .route("/api/prayer/qibla", get(PrayerController::qibla))
        .with_state(controllers.prayer);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .merge(murshid_routes)
        .merge(quran_routes)
        .merge(hadith_routes)
        .merge(spiritual_routes)
        .merge(voice_routes)
        .merge(prayer_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind the configured address and serve until shutdown
pub async fn start_http_server(config: &Config, app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
