pub mod aladhan_repository;
pub mod elevenlabs_tts_repository;
pub mod hadith_api_repository;
pub mod http_client;
pub mod openai_chat_repository;
pub mod openai_transcription_repository;
pub mod quran_api_repository;

pub use aladhan_repository::AladhanRepository;
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use hadith_api_repository::HadithApiRepository;
pub use http_client::{build_http_client, build_openai_client, OPENAI_TIMEOUT};
pub use openai_chat_repository::OpenAiChatRepository;
pub use openai_transcription_repository::OpenAiTranscriptionRepository;
pub use quran_api_repository::QuranApiRepository;
