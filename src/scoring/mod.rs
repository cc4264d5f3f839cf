mod engagement;
mod hook;

pub use engagement::{EngagementScorer, EngagementWeights};
pub use hook::{HookScorer, HookWeights};

use rand::Rng;

use crate::Segment;

pub fn score_hook(text: &str, rng: &mut impl Rng) -> i32 {
    HookScorer::new(HookWeights::default()).score(text, rng)
}

pub fn engagement_score(segments: &[Segment], rng: &mut impl Rng) -> i32 {
    let hook_scorer = HookScorer::new(HookWeights::default());
    EngagementScorer::new(EngagementWeights::default(), hook_scorer).score(segments, rng)
}
