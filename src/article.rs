use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::banks::short_tweets;
use crate::config::{self, EngineConfig};
use crate::digest::LinkDigest;
use crate::fill::{fill_template, FillContext};
use crate::modes::Mode;
use crate::{pick, sample};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSection {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub intro: String,
    pub sections: Vec<ArticleSection>,
    pub conclusion: String,
    pub excerpts: Vec<String>,
}

pub fn generate_article(
    topic: &str,
    context: &str,
    mode: Mode,
    digest: Option<&LinkDigest>,
) -> Article {
    let config = config::load_default();
    let mut rng = StdRng::from_entropy();
    generate_article_with(topic, context, mode, digest, &config, &mut rng)
}

pub fn generate_article_with(
    topic: &str,
    _context: &str,
    mode: Mode,
    digest: Option<&LinkDigest>,
    _config: &EngineConfig,
    rng: &mut impl Rng,
) -> Article {
    let topic_label = if topic.trim().is_empty() {
        "this space"
    } else {
        topic
    };
    let ctx = FillContext::with_digest(topic, mode, digest);

    let title = match rng.gen_range(0..5) {
        0 => format!(
            "The Complete Guide to {}: What Nobody's Telling You",
            topic_label
        ),
        1 => format!(
            "{} in {}: A Deep Dive",
            topic_label,
            pick(rng, &["2025", "2026"])
        ),
        2 => format!("Why {} Matters More Than Ever", topic_label),
        3 => format!("The {} Playbook: From Theory to Execution", topic_label),
        _ => format!("Demystifying {}: An Evidence-Based Breakdown", topic_label),
    };

    let intro = format!(
        "{}\n\nIn this article, we break down everything you need to know about {} — from fundamentals to advanced strategies. Whether you're just getting started or sharpening your edge, this covers the full picture.\n\n{}",
        point(&ctx, rng),
        topic_label,
        point(&ctx, rng)
    );

    let mut titles = vec![
        format!("The Current State of {}", topic_label),
        format!("Why {} Is at an Inflection Point", topic_label),
        format!("The Framework for Understanding {}", topic_label),
        "Common Mistakes and How to Avoid Them".to_string(),
        format!("The Data Behind {}", topic_label),
        "What the Experts Are Saying".to_string(),
        "Actionable Steps You Can Take Today".to_string(),
        "The Contrarian View".to_string(),
        "Second-Order Effects Nobody's Discussing".to_string(),
    ];
    titles.shuffle(rng);
    titles.truncate(rng.gen_range(3..=5));

    let sections = titles
        .into_iter()
        .map(|title| {
            let body = format!(
                "{}\n\n{}\n\nKey takeaways:\n\n→ {}\n→ {}\n→ {}\n\n{}",
                point(&ctx, rng),
                point(&ctx, rng),
                bullet(&ctx, rng),
                bullet(&ctx, rng),
                bullet(&ctx, rng),
                point(&ctx, rng)
            );
            ArticleSection { title, body }
        })
        .collect();

    let conclusion = format!(
        "{} isn't going away. The question is whether you'll be positioned to take advantage of what's coming.\n\n{}\n\nThe winners will be the ones who combine deep understanding with consistent execution. Start today.",
        topic_label,
        point(&ctx, rng)
    );

    let excerpts = sample(rng, short_tweets::SHORT_TWEETS, 5)
        .into_iter()
        .map(|template| fill_template(template, &ctx, rng))
        .collect();

    Article {
        title,
        intro,
        sections,
        conclusion,
        excerpts,
    }
}

fn point(ctx: &FillContext, rng: &mut impl Rng) -> String {
    fill_template("{modePoint}", ctx, rng)
}

fn bullet(ctx: &FillContext, rng: &mut impl Rng) -> String {
    fill_template("{bullet1}", ctx, rng)
}
