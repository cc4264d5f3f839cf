use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::banks::hooks::HookCategory;
use crate::banks::{body, ctas, short_tweets};
use crate::config::{self, EngineConfig};
use crate::digest::LinkDigest;
use crate::fill::{fill_template, FillContext};
use crate::modes::Mode;
use crate::scoring::{EngagementScorer, HookScorer};
use crate::{pick, sample, CtaCategory, LengthClass, Segment, SegmentType};

const ARC_SHORT: &[SegmentType] = &[
    SegmentType::Hook,
    SegmentType::Insight,
    SegmentType::Proof,
    SegmentType::Cta,
];

const ARC_MEDIUM: &[SegmentType] = &[
    SegmentType::Hook,
    SegmentType::Context,
    SegmentType::Tension,
    SegmentType::Insight,
    SegmentType::Proof,
    SegmentType::Contrarian,
    SegmentType::Expansion,
    SegmentType::Cta,
];

const ARC_LONG: &[SegmentType] = &[
    SegmentType::Hook,
    SegmentType::Context,
    SegmentType::Tension,
    SegmentType::Insight,
    SegmentType::Proof,
    SegmentType::Contrarian,
    SegmentType::Expansion,
    SegmentType::Tension,
    SegmentType::Insight,
    SegmentType::Proof,
    SegmentType::Summary,
    SegmentType::Cta,
];

const ARC_FILLERS: [SegmentType; 4] = [
    SegmentType::Insight,
    SegmentType::Proof,
    SegmentType::Tension,
    SegmentType::Expansion,
];

fn arc_template(class: LengthClass) -> &'static [SegmentType] {
    match class {
        LengthClass::Short => ARC_SHORT,
        LengthClass::Medium => ARC_MEDIUM,
        LengthClass::Long => ARC_LONG,
    }
}

#[derive(Debug, Clone)]
pub struct ThreadRequest {
    pub topic: String,
    pub context: String,
    pub length: LengthClass,
    pub tone: String,
    pub mode: Mode,
    pub digest: Option<LinkDigest>,
}

impl Default for ThreadRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            context: String::new(),
            length: LengthClass::Medium,
            tone: "auto".to_string(),
            mode: Mode::Web3,
            digest: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookVariation {
    pub category: HookCategory,
    pub text: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternateCta {
    pub category: CtaCategory,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadBundle {
    pub segments: Vec<Segment>,
    pub hook_variations: Vec<HookVariation>,
    pub short_tweets: Vec<String>,
    pub alternate_ctas: Vec<AlternateCta>,
    pub engagement_score: i32,
}

impl ThreadBundle {
    pub fn swap_hook(&mut self, index: usize, config: &EngineConfig, rng: &mut impl Rng) -> bool {
        let text = match self.hook_variations.get(index) {
            Some(variation) => variation.text.clone(),
            None => return false,
        };
        match self.segments.first_mut() {
            Some(first) => first.text = text,
            None => return false,
        }
        self.rescore(config, rng);
        true
    }

    pub fn swap_cta(&mut self, index: usize, config: &EngineConfig, rng: &mut impl Rng) -> bool {
        let text = match self.alternate_ctas.get(index) {
            Some(cta) => cta.text.clone(),
            None => return false,
        };
        match self.segments.last_mut() {
            Some(last) => last.text = text,
            None => return false,
        }
        self.rescore(config, rng);
        true
    }

    fn rescore(&mut self, config: &EngineConfig, rng: &mut impl Rng) {
        let scorer = EngagementScorer::new(
            config.engagement.clone(),
            HookScorer::new(config.hook.clone()),
        );
        self.engagement_score = scorer.score(&self.segments, rng);
    }
}

pub fn generate_thread(request: &ThreadRequest) -> ThreadBundle {
    let config = config::load_default();
    let mut rng = StdRng::from_entropy();
    generate_thread_with(request, &config, &mut rng)
}

pub fn generate_thread_with(
    request: &ThreadRequest,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> ThreadBundle {
    let profile = request.mode.profile();
    let bounds = config.lengths.bounds(request.length);
    let target = rng.gen_range(bounds.min..=bounds.max.max(bounds.min));

    let mut arc: Vec<SegmentType> = arc_template(request.length).to_vec();
    while arc.len() < target {
        let filler = ARC_FILLERS
            .choose(rng)
            .copied()
            .unwrap_or(SegmentType::Insight);
        arc.insert(arc.len() - 1, filler);
    }
    arc.truncate(target);
    if let Some(first) = arc.first_mut() {
        *first = SegmentType::Hook;
    }
    if let Some(last) = arc.last_mut() {
        *last = SegmentType::Cta;
    }

    let ctx = FillContext::with_digest(&request.topic, request.mode, request.digest.as_ref());
    let mut segments = Vec::with_capacity(arc.len());
    for (index, kind) in arc.iter().copied().enumerate() {
        let text = match kind {
            SegmentType::Hook => {
                let category = profile
                    .hook_styles
                    .choose(rng)
                    .copied()
                    .unwrap_or(HookCategory::Curiosity);
                fill_template(pick(rng, category.templates()), &ctx, rng)
            }
            _ => fill_template(pick(rng, body::templates(kind)), &ctx, rng),
        };
        segments.push(Segment {
            position: index + 1,
            kind,
            text,
        });
    }

    let hook_scorer = HookScorer::new(config.hook.clone());
    let mut categories: Vec<HookCategory> = HookCategory::ALL.to_vec();
    categories.shuffle(rng);
    categories.truncate(rng.gen_range(5..=10).min(categories.len()));
    let mut hook_variations = Vec::with_capacity(categories.len());
    for category in categories {
        let text = fill_template(pick(rng, category.templates()), &ctx, rng);
        let score = hook_scorer.score(&text, rng);
        hook_variations.push(HookVariation {
            category,
            text,
            score,
        });
    }
    hook_variations.sort_by(|a, b| b.score.cmp(&a.score));

    let short_tweets: Vec<String> = sample(rng, short_tweets::SHORT_TWEETS, 5)
        .into_iter()
        .map(|template| fill_template(template, &ctx, rng))
        .collect();

    let alternate_ctas = generate_alternate_ctas_with(&request.topic, request.mode, rng);

    let scorer = EngagementScorer::new(config.engagement.clone(), hook_scorer);
    let engagement_score = scorer.score(&segments, rng);

    ThreadBundle {
        segments,
        hook_variations,
        short_tweets,
        alternate_ctas,
        engagement_score,
    }
}

// Re-runs generation with the score nudged upward, for "improve this" flows.
pub fn regenerate_thread(
    request: &ThreadRequest,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> ThreadBundle {
    let mut bundle = generate_thread_with(request, config, rng);
    let boost = rng.gen_range(5..=14);
    bundle.engagement_score = (bundle.engagement_score + boost).min(config.engagement.ceiling);
    bundle
}

pub fn generate_alternate_ctas(topic: &str, mode: Mode) -> Vec<AlternateCta> {
    let mut rng = StdRng::from_entropy();
    generate_alternate_ctas_with(topic, mode, &mut rng)
}

pub fn generate_alternate_ctas_with(
    topic: &str,
    mode: Mode,
    rng: &mut impl Rng,
) -> Vec<AlternateCta> {
    let ctx = FillContext::new(topic, mode);
    CtaCategory::ALL
        .iter()
        .map(|&category| AlternateCta {
            category,
            text: fill_template(pick(rng, ctas::templates(category)), &ctx, rng),
        })
        .collect()
}
