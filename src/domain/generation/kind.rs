use super::prompts::MURSHID_SYSTEM_PROMPT;

const EXPLANATION_UNAVAILABLE: &str =
    "Unable to provide explanation at this moment. Please try again.";

/// What is being generated; fixes the persona, sampling and canned fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Chat,
    QuranExplanation,
    HadithExplanation,
    SpiritualAdvice,
    Meditation,
    DailyNaseehah,
}

impl GenerationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::QuranExplanation => "quran_explanation",
            Self::HadithExplanation => "hadith_explanation",
            Self::SpiritualAdvice => "spiritual_advice",
            Self::Meditation => "meditation",
            Self::DailyNaseehah => "daily_naseehah",
        }
    }

    /// System prompt before the language directive is appended
    pub fn system_preamble(&self) -> &'static str {
        match self {
            Self::Chat | Self::SpiritualAdvice => MURSHID_SYSTEM_PROMPT,
            Self::QuranExplanation => "You are a Sufi Quranic scholar.",
            Self::HadithExplanation => "You are a Hadith scholar with Sufi understanding.",
            Self::Meditation => "You are a Sufi meditation guide.",
            Self::DailyNaseehah => "You are Al Murshid, a Sufi spiritual guide.",
        }
    }

    /// Persona prompts are long and get a blank line before the directive
    pub fn system_prompt(&self, language_instruction: &str) -> String {
        match self {
            Self::Chat | Self::SpiritualAdvice => {
                format!("{}\n\n{}", self.system_preamble(), language_instruction)
            }
            _ => format!("{} {}", self.system_preamble(), language_instruction),
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            Self::Meditation | Self::DailyNaseehah => 0.8,
            _ => 0.7,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            Self::Chat => 800,
            Self::QuranExplanation => 600,
            Self::HadithExplanation => 500,
            Self::SpiritualAdvice => 700,
            Self::Meditation => 1000,
            Self::DailyNaseehah => 300,
        }
    }

    pub fn canned_fallback(&self) -> &'static str {
        match self {
            Self::Chat => {
                "I apologize, dear seeker. I'm having difficulty responding at the moment. Please try again."
            }
            Self::QuranExplanation | Self::HadithExplanation => EXPLANATION_UNAVAILABLE,
            Self::SpiritualAdvice => "May Allah guide you on your spiritual journey.",
            Self::Meditation => "Begin by taking deep breaths and remembering Allah...",
            Self::DailyNaseehah => "Remember Allah in all that you do.",
        }
    }
}

impl std::fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
