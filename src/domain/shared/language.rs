use serde::{Deserialize, Serialize};

/// Response languages offered to seekers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LanguageCode {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "bn")]
    Bengali,
}

impl LanguageCode {
    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Urdu => "ur",
            LanguageCode::Hindi => "hi",
            LanguageCode::Arabic => "ar",
            LanguageCode::Bengali => "bn",
        }
    }

    /// Parse a raw code, falling back to English for anything unknown
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "ur" => LanguageCode::Urdu,
            "hi" => LanguageCode::Hindi,
            "ar" => LanguageCode::Arabic,
            "bn" => LanguageCode::Bengali,
            _ => LanguageCode::English,
        }
    }

    /// Directive appended to every system prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            LanguageCode::English => "Respond in clear, simple English.",
            LanguageCode::Urdu => {
                "Respond in Urdu (اردو میں جواب دیں). Use respectful Islamic terminology."
            }
            LanguageCode::Hindi => {
                "Respond in Hindi (हिंदी में जवाब दें). Use Islamic terms appropriately."
            }
            LanguageCode::Arabic => "Respond in Arabic (أجب بالعربية). Use classical Islamic style.",
            LanguageCode::Bengali => {
                "Respond in Bengali (বাংলায় উত্তর দিন). Use respectful Islamic terms."
            }
        }
    }

    /// quran.com translation resource for this language (0 = Arabic original)
    pub fn translation_id(&self) -> u32 {
        match self {
            LanguageCode::English => 131, // Sahih International
            LanguageCode::Urdu => 97,     // Abul A'ala Maududi
            LanguageCode::Hindi => 122,
            LanguageCode::Arabic => 0,
            LanguageCode::Bengali => 161,
        }
    }

    /// Arabic and Urdu read better with a more formal, less expressive voice
    pub fn prefers_formal_voice(&self) -> bool {
        matches!(self, LanguageCode::Arabic | LanguageCode::Urdu)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `?language=` on GET routes; lenient, unknown codes mean English
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

impl LanguageQuery {
    pub fn language(&self) -> LanguageCode {
        LanguageCode::from_code(self.language.as_deref().unwrap_or_default())
    }
}
