use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::banks::hooks::HookCategory;
use crate::config::{self, EngineConfig};
use crate::digest::LinkDigest;
use crate::fill::{fill_template, FillContext};
use crate::modes::Mode;
use crate::sample;
use crate::scoring::HookScorer;
use crate::thread::HookVariation;

// Degen hooks stay available everywhere, but only web3 and shitpost
// personas get the full helping.
const OFF_PERSONA_DEGEN_CAP: usize = 2;

pub fn generate_hooks(topic: &str, mode: Mode, digest: Option<&LinkDigest>) -> Vec<HookVariation> {
    let config = config::load_default();
    let mut rng = StdRng::from_entropy();
    generate_hooks_with(topic, mode, digest, &config, &mut rng)
}

pub fn generate_hooks_with(
    topic: &str,
    mode: Mode,
    digest: Option<&LinkDigest>,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Vec<HookVariation> {
    let ctx = FillContext::with_digest(topic, mode, digest);
    let scorer = HookScorer::new(config.hook.clone());
    let mut hooks = Vec::new();

    for category in HookCategory::ALL {
        let count = if category == HookCategory::Degen
            && !matches!(mode, Mode::Web3 | Mode::Shitpost)
        {
            OFF_PERSONA_DEGEN_CAP
        } else {
            rng.gen_range(5..=8)
        };

        for template in sample(rng, category.templates(), count) {
            let text = fill_template(template, &ctx, rng);
            let score = scorer.score(&text, rng);
            hooks.push(HookVariation {
                category,
                text,
                score,
            });
        }
    }

    hooks.shuffle(rng);
    hooks
}
