use serde::{Deserialize, Serialize};

use authority_engine::{
    Article, HookVariation, LengthClass, LinkDigest, Mode, ModeProfile, Mood, Shitpost,
    ThreadBundle, ThreadRequest, VoiceAnalysis,
};

#[derive(Debug, Deserialize)]
pub struct ApiThreadRequest {
    pub topic: Option<String>,
    pub context: Option<String>,
    pub length: Option<String>,
    pub tone: Option<String>,
    pub mode: Option<String>,
    pub digest: Option<LinkDigest>,
    pub request_id: Option<String>,
}

impl ApiThreadRequest {
    pub fn into_request(self) -> (ThreadRequest, Vec<String>) {
        let mut warnings = Vec::new();
        let mode = resolve_mode(self.mode.as_deref(), &mut warnings);
        let length = resolve_length(self.length.as_deref(), &mut warnings);
        let request = ThreadRequest {
            topic: self.topic.unwrap_or_default(),
            context: self.context.unwrap_or_default(),
            length,
            tone: self.tone.unwrap_or_else(|| "auto".to_string()),
            mode,
            digest: self.digest,
        };
        (request, warnings)
    }
}

#[derive(Debug, Serialize)]
pub struct ApiThreadResponse {
    pub request_id: String,
    #[serde(flatten)]
    pub bundle: ThreadBundle,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiHooksRequest {
    pub topic: Option<String>,
    pub mode: Option<String>,
    pub digest: Option<LinkDigest>,
}

#[derive(Debug, Serialize)]
pub struct ApiHooksResponse {
    pub hooks: Vec<HookVariation>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiArticleRequest {
    pub topic: Option<String>,
    pub context: Option<String>,
    pub mode: Option<String>,
    pub digest: Option<LinkDigest>,
}

#[derive(Debug, Serialize)]
pub struct ApiArticleResponse {
    #[serde(flatten)]
    pub article: Article,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiShitpostRequest {
    pub topic: Option<String>,
    pub mood: Option<String>,
    pub degen_level: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct ApiShitpostResponse {
    pub posts: Vec<Shitpost>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiVoiceRequest {
    pub sample: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiVoiceResponse {
    pub analysis: Option<VoiceAnalysis>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiCtasRequest {
    pub topic: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModeEntry {
    pub id: Mode,
    #[serde(flatten)]
    pub profile: &'static ModeProfile,
}

pub fn list_modes() -> Vec<ModeEntry> {
    Mode::ALL
        .iter()
        .map(|&id| ModeEntry {
            id,
            profile: id.profile(),
        })
        .collect()
}

pub fn resolve_mode(value: Option<&str>, warnings: &mut Vec<String>) -> Mode {
    match value {
        None => Mode::Web3,
        Some(raw) if raw.trim().is_empty() => Mode::Web3,
        Some(raw) => match Mode::parse(raw) {
            Some(mode) => mode,
            None => {
                warnings.push(format!("unknown mode '{}', using web3", raw));
                Mode::Web3
            }
        },
    }
}

pub fn resolve_length(value: Option<&str>, warnings: &mut Vec<String>) -> LengthClass {
    match value {
        None => LengthClass::Medium,
        Some(raw) if raw.trim().is_empty() => LengthClass::Medium,
        Some(raw) => match LengthClass::parse(raw) {
            Some(length) => length,
            None => {
                warnings.push(format!("unknown length '{}', using medium", raw));
                LengthClass::Medium
            }
        },
    }
}

pub fn resolve_mood(value: Option<&str>, warnings: &mut Vec<String>) -> Mood {
    match value {
        None => Mood::Chaos,
        Some(raw) if raw.trim().is_empty() => Mood::Chaos,
        Some(raw) => match Mood::parse(raw) {
            Some(mood) => mood,
            None => {
                warnings.push(format!("unknown mood '{}', using chaos", raw));
                Mood::Chaos
            }
        },
    }
}
