pub mod article;
pub mod banks;
pub mod config;
pub mod digest;
pub mod fill;
pub mod hooks;
pub mod modes;
pub mod scoring;
pub mod shitpost;
pub mod thread;
pub mod voice;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use article::{generate_article, generate_article_with, Article, ArticleSection};
pub use banks::hooks::HookCategory;
pub use config::EngineConfig;
pub use digest::LinkDigest;
pub use hooks::{generate_hooks, generate_hooks_with};
pub use modes::{Mode, ModeProfile, Palette};
pub use scoring::{engagement_score, score_hook};
pub use shitpost::{generate_shitposts, generate_shitposts_with, Shitpost};
pub use thread::{
    generate_alternate_ctas, generate_alternate_ctas_with, generate_thread, generate_thread_with,
    regenerate_thread, AlternateCta, HookVariation, ThreadBundle, ThreadRequest,
};
pub use voice::{analyze_voice, analyze_voice_with, VoiceAnalysis, VoiceProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    Hook,
    Context,
    Tension,
    Insight,
    Proof,
    Contrarian,
    Expansion,
    Summary,
    Cta,
}

impl SegmentType {
    pub const ALL: [SegmentType; 9] = [
        SegmentType::Hook,
        SegmentType::Context,
        SegmentType::Tension,
        SegmentType::Insight,
        SegmentType::Proof,
        SegmentType::Contrarian,
        SegmentType::Expansion,
        SegmentType::Summary,
        SegmentType::Cta,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "hook" => Some(SegmentType::Hook),
            "context" => Some(SegmentType::Context),
            "tension" => Some(SegmentType::Tension),
            "insight" => Some(SegmentType::Insight),
            "proof" => Some(SegmentType::Proof),
            "contrarian" => Some(SegmentType::Contrarian),
            "expansion" => Some(SegmentType::Expansion),
            "summary" => Some(SegmentType::Summary),
            "cta" => Some(SegmentType::Cta),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SegmentType::Hook => "hook",
            SegmentType::Context => "context",
            SegmentType::Tension => "tension",
            SegmentType::Insight => "insight",
            SegmentType::Proof => "proof",
            SegmentType::Contrarian => "contrarian",
            SegmentType::Expansion => "expansion",
            SegmentType::Summary => "summary",
            SegmentType::Cta => "cta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthClass {
    Short,
    Medium,
    Long,
}

impl LengthClass {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "short" => Some(LengthClass::Short),
            "medium" => Some(LengthClass::Medium),
            "long" => Some(LengthClass::Long),
            _ => None,
        }
    }

    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or(LengthClass::Medium)
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthClass::Short => "short",
            LengthClass::Medium => "medium",
            LengthClass::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Bullish,
    Bearish,
    Crabbing,
    Chaos,
}

impl Mood {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "bullish" => Some(Mood::Bullish),
            "bearish" => Some(Mood::Bearish),
            "crabbing" => Some(Mood::Crabbing),
            "chaos" => Some(Mood::Chaos),
            _ => None,
        }
    }

    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or(Mood::Chaos)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Bullish => "bullish",
            Mood::Bearish => "bearish",
            Mood::Crabbing => "crabbing",
            Mood::Chaos => "chaos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaCategory {
    Engagement,
    Debate,
    Community,
    Lead,
    Follow,
}

impl CtaCategory {
    pub const ALL: [CtaCategory; 5] = [
        CtaCategory::Engagement,
        CtaCategory::Debate,
        CtaCategory::Community,
        CtaCategory::Lead,
        CtaCategory::Follow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CtaCategory::Engagement => "engagement",
            CtaCategory::Debate => "debate",
            CtaCategory::Community => "community",
            CtaCategory::Lead => "lead",
            CtaCategory::Follow => "follow",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub position: usize,
    #[serde(rename = "type")]
    pub kind: SegmentType,
    pub text: String,
}

pub(crate) fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or("")
}

pub(crate) fn sample<'a, R: Rng>(rng: &mut R, options: &[&'a str], count: usize) -> Vec<&'a str> {
    let mut pool: Vec<&'a str> = options.to_vec();
    pool.shuffle(rng);
    pool.truncate(count.min(pool.len()));
    pool
}

pub(crate) fn clamp_score(value: i32, floor: i32, ceiling: i32) -> i32 {
    value.max(floor).min(ceiling)
}
