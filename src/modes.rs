use serde::{Deserialize, Serialize};

use crate::banks::hooks::HookCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Web3,
    Creator,
    Business,
    Shitpost,
    Educational,
}

#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub bg: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModeProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub tone: &'static str,
    pub colors: Palette,
    pub vocabulary: &'static [&'static str],
    pub hook_styles: &'static [HookCategory],
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Web3,
        Mode::Creator,
        Mode::Business,
        Mode::Shitpost,
        Mode::Educational,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "web3" => Some(Mode::Web3),
            "creator" => Some(Mode::Creator),
            "business" => Some(Mode::Business),
            "shitpost" => Some(Mode::Shitpost),
            "educational" => Some(Mode::Educational),
            _ => None,
        }
    }

    // Unknown personas degrade to the default rather than failing.
    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or(Mode::Web3)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Web3 => "web3",
            Mode::Creator => "creator",
            Mode::Business => "business",
            Mode::Shitpost => "shitpost",
            Mode::Educational => "educational",
        }
    }

    pub fn profile(self) -> &'static ModeProfile {
        match self {
            Mode::Web3 => &WEB3,
            Mode::Creator => &CREATOR,
            Mode::Business => &BUSINESS,
            Mode::Shitpost => &SHITPOST,
            Mode::Educational => &EDUCATIONAL,
        }
    }
}

const WEB3: ModeProfile = ModeProfile {
    name: "Web3",
    icon: "🌐",
    tone: "Alpha-style, conviction-driven, CT-native",
    colors: Palette {
        primary: "#00FF88",
        bg: "#0a0a0f",
        accent: "#6366f1",
    },
    vocabulary: &[
        "alpha",
        "bullish",
        "conviction",
        "narrative",
        "protocol",
        "on-chain",
        "anon",
        "gm",
        "wagmi",
        "ngmi",
        "degen",
    ],
    hook_styles: &[
        HookCategory::Authority,
        HookCategory::Curiosity,
        HookCategory::Data,
        HookCategory::Controversial,
        HookCategory::Story,
        HookCategory::Degen,
    ],
};

const CREATOR: ModeProfile = ModeProfile {
    name: "Creator",
    icon: "🎨",
    tone: "Authentic, story-driven, personal brand",
    colors: Palette {
        primary: "#f59e0b",
        bg: "#18181b",
        accent: "#ec4899",
    },
    vocabulary: &[
        "audience",
        "growth",
        "authentic",
        "journey",
        "community",
        "content",
        "brand",
        "viral",
        "engage",
    ],
    hook_styles: &[
        HookCategory::Authority,
        HookCategory::Curiosity,
        HookCategory::Story,
        HookCategory::Data,
        HookCategory::Controversial,
    ],
};

const BUSINESS: ModeProfile = ModeProfile {
    name: "Business",
    icon: "💼",
    tone: "Professional, data-backed, authoritative",
    colors: Palette {
        primary: "#3b82f6",
        bg: "#1e293b",
        accent: "#10b981",
    },
    vocabulary: &[
        "ROI",
        "strategy",
        "revenue",
        "scaling",
        "framework",
        "metrics",
        "pipeline",
        "stakeholder",
    ],
    hook_styles: &[
        HookCategory::Authority,
        HookCategory::Data,
        HookCategory::Curiosity,
        HookCategory::Story,
    ],
};

const SHITPOST: ModeProfile = ModeProfile {
    name: "Shitpost",
    icon: "💀",
    tone: "Irreverent, degen, viral, unhinged",
    colors: Palette {
        primary: "#ef4444",
        bg: "#000000",
        accent: "#facc15",
    },
    vocabulary: &[
        "ser",
        "anon",
        "wen",
        "rekt",
        "cope",
        "seethe",
        "based",
        "ngmi",
        "probably nothing",
        "this is fine",
    ],
    hook_styles: &[
        HookCategory::Controversial,
        HookCategory::Degen,
        HookCategory::Story,
        HookCategory::Curiosity,
    ],
};

const EDUCATIONAL: ModeProfile = ModeProfile {
    name: "Educational",
    icon: "📚",
    tone: "Clear, structured, instructive",
    colors: Palette {
        primary: "#8b5cf6",
        bg: "#1a1a2e",
        accent: "#06b6d4",
    },
    vocabulary: &[
        "learn",
        "understand",
        "framework",
        "step-by-step",
        "beginner",
        "explained",
        "breakdown",
        "concept",
    ],
    hook_styles: &[
        HookCategory::Curiosity,
        HookCategory::Authority,
        HookCategory::Data,
        HookCategory::Story,
    ],
};
