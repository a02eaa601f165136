use serde::Deserialize;
use std::env;

pub const APP_NAME: &str = "Digital Khanqah Al Murshid API";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_format: LogFormat,
    // Provider credentials
    pub openai_api_key: String,
    pub openai_model: String,
    pub elevenlabs_api_key: String,
    // Provider base URLs
    pub quran_api_url: String,
    pub hadith_api_url: String,
    pub aladhan_api_url: String,
    pub elevenlabs_api_url: String,
    // Tier limits (declared, not enforced)
    pub free_tier_daily_limit: u32,
    pub premium_tier_daily_limit: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            debug: env::var("DEBUG")
                .map(|s| parse_flag(&s))
                .unwrap_or(true),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            openai_api_key: env::var("OPENAI_API_KEY")?,
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4-turbo-preview".to_string()),
            elevenlabs_api_key: env::var("ELEVENLABS_API_KEY")?,
            quran_api_url: env::var("QURAN_API_URL")
                .unwrap_or_else(|_| "https://api.quran.com/api/v4".to_string()),
            hadith_api_url: env::var("HADITH_API_URL").unwrap_or_else(|_| {
                "https://cdn.jsdelivr.net/gh/fawazahmed0/hadith-api@1".to_string()
            }),
            aladhan_api_url: env::var("ALADHAN_API_URL")
                .unwrap_or_else(|_| "https://api.aladhan.com/v1".to_string()),
            elevenlabs_api_url: env::var("ELEVENLABS_API_URL")
                .unwrap_or_else(|_| "https://api.elevenlabs.io".to_string()),
            free_tier_daily_limit: env::var("FREE_TIER_DAILY_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            premium_tier_daily_limit: env::var("PREMIUM_TIER_DAILY_LIMIT")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "murshid_backend=debug,tower_http=debug"
        } else {
            "murshid_backend=info,tower_http=info"
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
