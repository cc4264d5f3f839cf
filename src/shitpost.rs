use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::banks::shitpost::{mood_prefixes, mood_suffixes, BODIES, FORMATS};
use crate::config::{self, EngineConfig};
use crate::{pick, Mood};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shitpost {
    pub format: String,
    pub text: String,
    pub degen_level: u8,
    pub score: i32,
}

pub fn generate_shitposts(topic: &str, mood: Mood, degen_level: u8) -> Vec<Shitpost> {
    let config = config::load_default();
    let mut rng = StdRng::from_entropy();
    generate_shitposts_with(topic, mood, degen_level, &config, &mut rng)
}

pub fn generate_shitposts_with(
    topic: &str,
    mood: Mood,
    degen_level: u8,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Vec<Shitpost> {
    let topic_label = if topic.trim().is_empty() {
        "the market"
    } else {
        topic
    };
    let count = rng.gen_range(
        config.shitpost.min_posts..=config.shitpost.max_posts.max(config.shitpost.min_posts),
    );

    let mut posts = Vec::with_capacity(count);
    for _ in 0..count {
        let format = pick(rng, FORMATS);
        let body = pick(rng, BODIES).replace("{topic}", topic_label);
        let prefix = pick(rng, mood_prefixes(mood));
        let suffix = pick(rng, mood_suffixes(mood));

        let text = if degen_level >= 4 {
            format!("{}\n\n{}\n\n{}\n\n{}", format, body, prefix, suffix)
        } else if degen_level >= 2 {
            format!("{} {}\n\n{}", format, body, prefix)
        } else {
            format!("{} {}", format, body)
        };

        let persona = pick(rng, &["degen", "builder", "founder"]);
        posts.push(Shitpost {
            format: format.split('\n').next().unwrap_or(format).to_string(),
            text: text
                .trim()
                .replace("{type}", persona)
                .replace("{topic}", topic_label),
            degen_level,
            score: rng.gen_range(
                config.shitpost.score_floor
                    ..=config.shitpost.score_ceiling.max(config.shitpost.score_floor),
            ),
        });
    }

    posts.sort_by(|a, b| b.score.cmp(&a.score));
    posts
}
