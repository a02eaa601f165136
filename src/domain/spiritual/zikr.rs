pub const RECITATION_NOTE: &str = "Recite with full presence and sincerity";

const PEACEFUL: &[&str] = &[
    "SubhanAllah (100 times)",
    "Alhamdulillah (100 times)",
    "La ilaha illallah (100 times)",
];

const ANXIOUS: &[&str] = &[
    "La hawla wa la quwwata illa billah",
    "Hasbunallahu wa ni'mal wakeel (70 times)",
    "Ayatul Kursi (3 times)",
];

const GRATEFUL: &[&str] = &[
    "Alhamdulillah (100 times)",
    "Shukran lillah (continuous)",
    "Surah Al-Fatihah (7 times)",
];

const REPENTANT: &[&str] = &[
    "Astaghfirullah (100 times)",
    "Rabbi la tazarni fardan (11 times)",
    "Durood Sharif (100 times)",
];

/// Tasbih after prayer; also the default recommendation for advice
pub const GENERAL: &[&str] = &[
    "SubhanAllah (33 times)",
    "Alhamdulillah (33 times)",
    "Allahu Akbar (34 times)",
];

/// Zikr for a mood, case-insensitive, "general" for anything unknown
pub fn zikr_for(mood: &str) -> &'static [&'static str] {
    match mood.trim().to_lowercase().as_str() {
        "peaceful" => PEACEFUL,
        "anxious" => ANXIOUS,
        "grateful" => GRATEFUL,
        "repentant" => REPENTANT,
        _ => GENERAL,
    }
}
