use super::{ChatMessage, GenerationKind};
use crate::domain::shared::LanguageCode;

/// Previous turns forwarded with a chat message
pub const CHAT_HISTORY_WINDOW: usize = 5;

pub const MURSHID_SYSTEM_PROMPT: &str = "You are Al Murshid, a wise and compassionate Sufi spiritual guide (WaliAllah).

Your characteristics:
- Speak with gentleness, wisdom, and deep compassion
- Base all advice on Quran, authentic Hadith, and teachings of Ahl-e-Sunnat scholars
- Use simple, understandable language
- Provide practical spiritual guidance
- Always maintain Islamic authenticity
- Be patient and encouraging with seekers
- Use Sufi terminology appropriately
- Reference relevant Quranic verses or Hadith when appropriate

Response style:
- Start with Islamic greeting (As-salamu alaykum) when appropriate
- Use respectful titles (dear seeker, beloved, etc.)
- End with blessings and encouragement
- Keep responses concise but meaningful (2-4 paragraphs)

Topics you guide on:
- Islamic spirituality and practices
- Purification of the heart (Tazkiyah)
- Dhikr and meditation
- Relationship with Allah
- Daily Islamic life
- Overcoming spiritual challenges
- Character development (Akhlaq)

Remember: You represent traditional Sunni Sufi wisdom with deep love for Allah and His creation.";

/// Generation input; the variant picks the template and carries its context
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationPrompt {
    Chat {
        message: String,
        history: Vec<ChatMessage>,
    },
    QuranExplanation {
        verse: String,
        translation: String,
    },
    HadithExplanation {
        hadith_text: String,
    },
    SpiritualAdvice {
        topic: String,
        user_level: String,
    },
    Meditation {
        goal: String,
        duration_minutes: u32,
    },
    DailyNaseehah,
}

impl GenerationPrompt {
    pub fn kind(&self) -> GenerationKind {
        match self {
            Self::Chat { .. } => GenerationKind::Chat,
            Self::QuranExplanation { .. } => GenerationKind::QuranExplanation,
            Self::HadithExplanation { .. } => GenerationKind::HadithExplanation,
            Self::SpiritualAdvice { .. } => GenerationKind::SpiritualAdvice,
            Self::Meditation { .. } => GenerationKind::Meditation,
            Self::DailyNaseehah => GenerationKind::DailyNaseehah,
        }
    }

    /// Full message list: system prompt, optional history, then the user turn
    pub fn into_messages(self, language: LanguageCode) -> Vec<ChatMessage> {
        let system = ChatMessage::system(self.kind().system_prompt(language.instruction()));

        match self {
            Self::Chat { message, history } => {
                let skip = history.len().saturating_sub(CHAT_HISTORY_WINDOW);
                let mut messages = Vec::with_capacity(CHAT_HISTORY_WINDOW + 2);
                messages.push(system);
                messages.extend(history.into_iter().skip(skip));
                messages.push(ChatMessage::user(message));
                messages
            }
            Self::QuranExplanation { verse, translation } => {
                vec![system, ChatMessage::user(quran_explanation(&verse, &translation))]
            }
            Self::HadithExplanation { hadith_text } => {
                vec![system, ChatMessage::user(hadith_explanation(&hadith_text))]
            }
            Self::SpiritualAdvice { topic, user_level } => {
                vec![system, ChatMessage::user(spiritual_advice(&topic, &user_level))]
            }
            Self::Meditation {
                goal,
                duration_minutes,
            } => vec![system, ChatMessage::user(meditation_script(&goal, duration_minutes))],
            Self::DailyNaseehah => vec![system, ChatMessage::user(daily_naseehah())],
        }
    }
}

fn quran_explanation(verse: &str, translation: &str) -> String {
    format!(
        "As a Sufi scholar, explain this Quranic verse in simple, spiritual language:

Arabic: {verse}
Translation: {translation}

Provide:
1. Simple meaning (2-3 sentences)
2. Spiritual wisdom (Sufi perspective)
3. Practical application in daily life
4. How it helps in spiritual journey

Keep it concise, clear, and spiritually uplifting."
    )
}

fn hadith_explanation(hadith_text: &str) -> String {
    format!(
        "As a Sufi scholar, explain this Hadith in simple language:

Hadith: {hadith_text}

Provide:
1. Simple explanation (2-3 sentences)
2. Spiritual lessons
3. How to apply in modern life
4. Connection to spiritual growth

Keep it practical and spiritually meaningful."
    )
}

/// Unknown levels are described as beginners
pub fn level_context(level: &str) -> &'static str {
    match level.trim().to_lowercase().as_str() {
        "intermediate" => "someone with basic spiritual practice",
        "advanced" => "someone on the advanced spiritual path",
        _ => "someone new to spiritual practice",
    }
}

fn spiritual_advice(topic: &str, level: &str) -> String {
    format!(
        "A seeker (spiritual level: {}) asks about: {topic}

As Al Murshid, provide:
1. Gentle, compassionate guidance
2. Quranic/Hadith reference if relevant
3. Practical steps they can take
4. Dhikr or spiritual practice recommendation
5. Encouragement and hope

Tailor your response to their spiritual level. Be supportive and practical.",
        level_context(level)
    )
}

fn meditation_script(goal: &str, duration: u32) -> String {
    format!(
        "Create a Sufi-inspired guided meditation script for:

Goal: {goal}
Duration: {duration} minutes

Structure:
1. Opening (Islamic greeting, intention setting)
2. Breathing & relaxation
3. Dhikr/remembrance phase
4. Deep contemplation
5. Closing with dua

Style:
- Use calm, soothing language
- Include Islamic phrases (SubhanAllah, Alhamdulillah, etc.)
- Focus on connection with Allah
- Be spiritually uplifting
- Keep timing appropriate for duration

Format as a spoken script that can be read aloud."
    )
}

fn daily_naseehah() -> &'static str {
    "Generate a brief daily spiritual advice (Naseehah) for seekers:

Requirements:
1. One meaningful spiritual teaching (2-3 sentences)
2. Based on Quran, Hadith, or Sufi wisdom
3. Practical and applicable to daily life
4. Uplifting and encouraging
5. Include a relevant reference if possible

Make it concise, powerful, and memorable."
}
