use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clamp_score;

const INTRIGUE_KEYWORDS: [&str; 5] = ["secret", "hidden", "nobody", "never", "truth"];
const BIG_CLAIMS: [&str; 3] = ["99%", "#1", "top 1%"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookWeights {
    pub base: i32,
    pub line_break: i32,
    pub under_200: i32,
    pub under_140: i32,
    pub question_or_exclamation: i32,
    pub digit: i32,
    pub percent: i32,
    pub big_claim: i32,
    pub intrigue: i32,
    pub colon: i32,
    pub jitter_min: i32,
    pub jitter_max: i32,
    pub floor: i32,
    pub ceiling: i32,
}

impl Default for HookWeights {
    fn default() -> Self {
        Self {
            base: 50,
            line_break: 6,
            under_200: 5,
            under_140: 3,
            question_or_exclamation: 4,
            digit: 5,
            percent: 3,
            big_claim: 4,
            intrigue: 5,
            colon: 2,
            jitter_min: -3,
            jitter_max: 5,
            floor: 30,
            ceiling: 98,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HookScorer {
    weights: HookWeights,
}

impl HookScorer {
    pub fn new(weights: HookWeights) -> Self {
        Self { weights }
    }

    // Deterministic component, before jitter and clamping.
    pub fn structural(&self, text: &str) -> i32 {
        let w = &self.weights;
        let mut score = w.base;

        if text.contains('\n') {
            score += w.line_break;
        }

        let chars = text.chars().count();
        if chars < 200 {
            score += w.under_200;
        }
        if chars < 140 {
            score += w.under_140;
        }

        if text.contains('?') || text.contains('!') {
            score += w.question_or_exclamation;
        }
        if text.chars().any(|ch| ch.is_ascii_digit()) {
            score += w.digit;
        }
        if text.contains('%') {
            score += w.percent;
        }

        let lower = text.to_lowercase();
        if BIG_CLAIMS.iter().any(|claim| lower.contains(claim)) {
            score += w.big_claim;
        }
        if INTRIGUE_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            score += w.intrigue;
        }

        if text.contains(':') {
            score += w.colon;
        }

        score
    }

    pub fn score(&self, text: &str, rng: &mut impl Rng) -> i32 {
        let jitter = rng.gen_range(self.weights.jitter_min..=self.weights.jitter_max);
        clamp_score(
            self.structural(text) + jitter,
            self.weights.floor,
            self.weights.ceiling,
        )
    }
}
