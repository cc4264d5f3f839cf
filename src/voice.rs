use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::{self, EngineConfig};
use crate::modes::Mode;
use crate::thread::{generate_thread_with, ThreadBundle, ThreadRequest};
use crate::LengthClass;

const MIN_SAMPLE_LINES: usize = 3;

const STOPWORDS: [&str; 21] = [
    "the", "a", "an", "is", "are", "was", "in", "on", "to", "for", "of", "and", "or", "but", "not",
    "this", "that", "it", "with", "you", "my",
];

const DOMAIN_JARGON: [&str; 12] = [
    "bullish", "alpha", "degen", "based", "growth", "scale", "strategy", "build", "ship", "learn",
    "revenue", "framework",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToneMarker {
    Candid,
    Analytical,
    Energetic,
    Narrative,
    Educational,
    Humorous,
    CtNative,
    Casual,
    Conversational,
}

impl ToneMarker {
    pub fn label(self) -> &'static str {
        match self {
            ToneMarker::Candid => "candid",
            ToneMarker::Analytical => "analytical",
            ToneMarker::Energetic => "energetic",
            ToneMarker::Narrative => "narrative",
            ToneMarker::Educational => "educational",
            ToneMarker::Humorous => "humorous",
            ToneMarker::CtNative => "ct-native",
            ToneMarker::Casual => "casual",
            ToneMarker::Conversational => "conversational",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentenceRhythm {
    ShortPunchy,
    Snappy,
    Balanced,
    LongForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmojiUsage {
    Heavy,
    Moderate,
    Light,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapitalizationStyle {
    CapsHeavy,
    OccasionalCaps,
    Standard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunctuationStyle {
    pub exclamation_rate: f64,
    pub question_rate: f64,
    pub uses_ellipsis: bool,
    pub uses_em_dash: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub tone_markers: Vec<ToneMarker>,
    pub sentence_rhythm: SentenceRhythm,
    pub aggression_level: u8,
    pub emoji_usage: EmojiUsage,
    pub top_emojis: Vec<String>,
    pub punctuation: PunctuationStyle,
    pub capitalization: CapitalizationStyle,
    pub vocabulary_fingerprint: Vec<String>,
    pub signature_phrases: Vec<String>,
    pub avg_line_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceAnalysis {
    pub profile: VoiceProfile,
    pub guessed_mode: Mode,
    pub sample_thread: ThreadBundle,
}

pub fn analyze_voice(sample: &str) -> Option<VoiceAnalysis> {
    let config = config::load_default();
    let mut rng = StdRng::from_entropy();
    analyze_voice_with(sample, &config, &mut rng)
}

pub fn analyze_voice_with(
    sample: &str,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Option<VoiceAnalysis> {
    let lines: Vec<&str> = sample
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < MIN_SAMPLE_LINES {
        return None;
    }

    let all_text = lines.join(" ");
    let lower = all_text.to_lowercase();
    let line_count = lines.len() as f64;
    let avg_len =
        lines.iter().map(|line| line.chars().count()).sum::<usize>() as f64 / line_count;

    let emojis: Vec<char> = all_text.chars().filter(|&ch| is_emoji(ch)).collect();
    let emoji_rate = emojis.len() as f64 / line_count;
    let exclamations = all_text.matches('!').count();
    let questions = all_text.matches('?').count();
    let ellipses = all_text.matches("...").count();
    let em_dashes = all_text.chars().filter(|&ch| ch == '—' || ch == '–').count();
    let caps_words = all_text
        .split_whitespace()
        .map(|word| word.trim_matches(|ch: char| !ch.is_ascii_alphanumeric()))
        .filter(|word| word.len() >= 3 && word.chars().all(|ch| ch.is_ascii_uppercase()))
        .count();

    let words: Vec<&str> = lower
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .collect();

    let mut bigram_counts: HashMap<String, usize> = HashMap::new();
    for pair in words.windows(2) {
        let bigram = format!("{} {}", pair[0], pair[1]);
        *bigram_counts.entry(bigram).or_insert(0) += 1;
    }
    let mut repeated: Vec<(String, usize)> = bigram_counts
        .into_iter()
        .filter(|(_, count)| *count >= 2)
        .collect();
    repeated.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let top_bigrams: Vec<String> = repeated
        .into_iter()
        .take(5)
        .map(|(phrase, _)| phrase)
        .collect();

    let mut word_counts: HashMap<&str, usize> = HashMap::new();
    for word in &words {
        if !STOPWORDS.contains(word) {
            *word_counts.entry(word).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(&str, usize)> = word_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let mut fingerprint: Vec<String> = ranked
        .into_iter()
        .take(10)
        .map(|(word, _)| word.to_string())
        .collect();
    for term in DOMAIN_JARGON {
        if lower.contains(term) {
            fingerprint.push(term.to_string());
        }
    }
    let mut seen = HashSet::new();
    fingerprint.retain(|word| seen.insert(word.clone()));
    fingerprint.truncate(12);

    let mut tone_markers = Vec::new();
    if lower.contains("honestly") || lower.contains("truth") {
        tone_markers.push(ToneMarker::Candid);
    }
    if lower.contains("data") || lower.contains("research") || lower.contains('%') {
        tone_markers.push(ToneMarker::Analytical);
    }
    if exclamations > 3 || caps_words > 3 {
        tone_markers.push(ToneMarker::Energetic);
    }
    if lower.contains("story") || lower.contains("journey") {
        tone_markers.push(ToneMarker::Narrative);
    }
    if lower.contains("learn") || lower.contains("tip") || lower.contains("how to") {
        tone_markers.push(ToneMarker::Educational);
    }
    if lower.contains("lol") || lower.contains("lmao") || lower.contains('💀') {
        tone_markers.push(ToneMarker::Humorous);
    }
    if lower.contains("ser") || lower.contains("anon") || lower.contains("wagmi") {
        tone_markers.push(ToneMarker::CtNative);
    }
    if tone_markers.is_empty() {
        tone_markers.push(ToneMarker::Casual);
        tone_markers.push(ToneMarker::Conversational);
    }

    let mut top_emojis: Vec<String> = Vec::new();
    for ch in &emojis {
        let emoji = ch.to_string();
        if !top_emojis.contains(&emoji) {
            top_emojis.push(emoji);
            if top_emojis.len() == 5 {
                break;
            }
        }
    }

    let signature_phrases = if !top_bigrams.is_empty() {
        top_bigrams
    } else {
        lines
            .iter()
            .filter(|line| {
                let len = line.chars().count();
                len > 10 && len < 50
            })
            .take(3)
            .map(|line| line.to_string())
            .collect()
    };

    let aggression = (exclamations as f64 / line_count * 4.0 + caps_words as f64 * 0.5 + 2.0)
        .round()
        .max(1.0)
        .min(10.0) as u8;

    let profile = VoiceProfile {
        tone_markers,
        sentence_rhythm: if avg_len < 50.0 {
            SentenceRhythm::ShortPunchy
        } else if avg_len < 90.0 {
            SentenceRhythm::Snappy
        } else if avg_len < 140.0 {
            SentenceRhythm::Balanced
        } else {
            SentenceRhythm::LongForm
        },
        aggression_level: aggression,
        emoji_usage: if emoji_rate > 1.0 {
            EmojiUsage::Heavy
        } else if emoji_rate > 0.3 {
            EmojiUsage::Moderate
        } else if emoji_rate > 0.0 {
            EmojiUsage::Light
        } else {
            EmojiUsage::None
        },
        top_emojis,
        punctuation: PunctuationStyle {
            exclamation_rate: round2(exclamations as f64 / line_count),
            question_rate: round2(questions as f64 / line_count),
            uses_ellipsis: ellipses > 1,
            uses_em_dash: em_dashes > 0,
        },
        capitalization: if caps_words as f64 > line_count * 0.5 {
            CapitalizationStyle::CapsHeavy
        } else if caps_words > 2 {
            CapitalizationStyle::OccasionalCaps
        } else {
            CapitalizationStyle::Standard
        },
        vocabulary_fingerprint: fingerprint,
        signature_phrases,
        avg_line_length: avg_len.round() as usize,
    };

    let guessed_mode = guess_mode(&profile);
    let request = ThreadRequest {
        topic: "your niche".to_string(),
        length: LengthClass::Short,
        mode: guessed_mode,
        ..ThreadRequest::default()
    };
    let sample_thread = generate_thread_with(&request, config, rng);

    Some(VoiceAnalysis {
        profile,
        guessed_mode,
        sample_thread,
    })
}

fn guess_mode(profile: &VoiceProfile) -> Mode {
    let markers: Vec<&str> = profile
        .tone_markers
        .iter()
        .map(|marker| marker.label())
        .collect();
    let haystack = format!(
        "{} {}",
        markers.join(" "),
        profile.vocabulary_fingerprint.join(" ")
    );

    let matches_any = |keywords: &[&str]| keywords.iter().any(|keyword| haystack.contains(keyword));
    if matches_any(&["degen", "alpha", "ser", "anon", "wagmi", "bullish"]) {
        Mode::Web3
    } else if matches_any(&["humorous", "lol", "💀"]) {
        Mode::Shitpost
    } else if matches_any(&["revenue", "roi", "pipeline"]) {
        Mode::Business
    } else if matches_any(&["learn", "step", "framework", "beginner"]) {
        Mode::Educational
    } else {
        Mode::Creator
    }
}

fn is_emoji(ch: char) -> bool {
    matches!(
        u32::from(ch),
        0x1F300..=0x1FAFF | 0x2600..=0x26FF | 0x2700..=0x27BF
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
