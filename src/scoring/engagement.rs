use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scoring::HookScorer;
use crate::{clamp_score, Segment, SegmentType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementWeights {
    pub base: f64,
    pub hook_share: f64,
    pub per_segment_kind: f64,
    pub kind_bonus_cap: f64,
    pub five_plus: f64,
    pub eight_plus: f64,
    pub closing_cta: f64,
    pub has_context: f64,
    pub has_proof: f64,
    pub has_contrarian: f64,
    pub has_insight: f64,
    pub overlong_penalty: f64,
    pub overlong_chars: usize,
    pub jitter_min: i32,
    pub jitter_max: i32,
    pub floor: i32,
    pub ceiling: i32,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            base: 45.0,
            hook_share: 0.3,
            per_segment_kind: 2.5,
            kind_bonus_cap: 15.0,
            five_plus: 4.0,
            eight_plus: 3.0,
            closing_cta: 5.0,
            has_context: 3.0,
            has_proof: 4.0,
            has_contrarian: 3.0,
            has_insight: 3.0,
            overlong_penalty: 3.0,
            overlong_chars: 280,
            jitter_min: -3,
            jitter_max: 5,
            floor: 30,
            ceiling: 98,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngagementScorer {
    weights: EngagementWeights,
    hook_scorer: HookScorer,
}

impl EngagementScorer {
    pub fn new(weights: EngagementWeights, hook_scorer: HookScorer) -> Self {
        Self {
            weights,
            hook_scorer,
        }
    }

    pub fn score(&self, segments: &[Segment], rng: &mut impl Rng) -> i32 {
        let w = &self.weights;
        let mut score = w.base;

        if let Some(first) = segments.first() {
            score += f64::from(self.hook_scorer.score(&first.text, rng)) * w.hook_share;
        }

        let kinds: HashSet<SegmentType> = segments.iter().map(|segment| segment.kind).collect();
        score += (kinds.len() as f64 * w.per_segment_kind).min(w.kind_bonus_cap);

        if segments.len() >= 5 {
            score += w.five_plus;
        }
        if segments.len() >= 8 {
            score += w.eight_plus;
        }
        if segments.last().map(|segment| segment.kind) == Some(SegmentType::Cta) {
            score += w.closing_cta;
        }

        if kinds.contains(&SegmentType::Context) {
            score += w.has_context;
        }
        if kinds.contains(&SegmentType::Proof) {
            score += w.has_proof;
        }
        if kinds.contains(&SegmentType::Contrarian) {
            score += w.has_contrarian;
        }
        if kinds.contains(&SegmentType::Insight) {
            score += w.has_insight;
        }

        let overlong = segments
            .iter()
            .filter(|segment| segment.text.chars().count() > w.overlong_chars)
            .count();
        score -= overlong as f64 * w.overlong_penalty;

        score += f64::from(rng.gen_range(w.jitter_min..=w.jitter_max));
        clamp_score(score.round() as i32, w.floor, w.ceiling)
    }
}
