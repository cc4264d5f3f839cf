use rand::seq::SliceRandom;
use rand::Rng;

use crate::banks::mode_content;
use crate::digest::LinkDigest;
use crate::modes::Mode;
use crate::pick;

#[derive(Debug, Clone, Copy)]
pub struct FillContext<'a> {
    pub topic: &'a str,
    pub mode: Mode,
    pub digest: Option<&'a LinkDigest>,
}

impl<'a> FillContext<'a> {
    pub fn new(topic: &'a str, mode: Mode) -> Self {
        Self {
            topic,
            mode,
            digest: None,
        }
    }

    pub fn with_digest(topic: &'a str, mode: Mode, digest: Option<&'a LinkDigest>) -> Self {
        Self {
            topic,
            mode,
            digest,
        }
    }

    fn topic_or(&self, fallback: &'a str) -> &'a str {
        if self.topic.trim().is_empty() {
            fallback
        } else {
            self.topic
        }
    }
}

// Mode-bank content can itself carry placeholders; a second pass resolves those.
const MAX_PASSES: usize = 3;

pub fn fill_template(template: &str, ctx: &FillContext, rng: &mut impl Rng) -> String {
    let mut text = template.to_string();
    for _ in 0..MAX_PASSES {
        let (next, replaced) = substitute_pass(&text, ctx, rng);
        text = next;
        if !replaced {
            break;
        }
    }
    text
}

fn substitute_pass(input: &str, ctx: &FillContext, rng: &mut impl Rng) -> (String, bool) {
    let mut out = String::with_capacity(input.len());
    let mut replaced = false;
    let mut rest = input;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => {
                let token = &tail[1..end];
                match resolve_token(token, ctx, rng) {
                    Some(value) => {
                        out.push_str(&value);
                        replaced = true;
                    }
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    (out, replaced)
}

fn resolve_token(name: &str, ctx: &FillContext, rng: &mut impl Rng) -> Option<String> {
    let value = match name {
        "topic" => ctx.topic_or("this space").to_string(),
        "time" => pick(
            rng,
            &["6 months", "1 year", "2 years", "3 years", "5 years", "10,000 hours"],
        )
        .to_string(),
        "number" => pick(rng, &["50", "100", "200", "500", "1,000", "10,000"]).to_string(),
        "things" => pick(
            rng,
            &["examples", "case studies", "data points", "projects", "accounts", "threads"],
        )
        .to_string(),
        "people" => {
            pick(rng, &["founders", "creators", "builders", "professionals", "people"]).to_string()
        }
        "percentage" => pick(rng, &["73", "82", "87", "91", "95"]).to_string(),
        "year" => pick(rng, &["2024", "2025", "2026"]).to_string(),
        "timeframe" => pick(rng, &["month", "week", "quarter", "year"]).to_string(),
        "event" => pick(
            rng,
            &[
                "lost everything",
                "had a breakthrough",
                "made a critical discovery",
                "changed my entire strategy",
            ],
        )
        .to_string(),
        "modePoint" => mode_point(ctx, rng),
        "bullet1" | "bullet2" | "bullet3" => bullet(ctx, rng),
        "stat1" | "stat2" | "stat3" => stat(ctx, rng),
        "before" => pick(rng, &["struggling", "losing money", "stuck at 0", "invisible"]).to_string(),
        "after" => {
            pick(rng, &["thriving", "profitable", "10x growth", "industry leader"]).to_string()
        }
        "summary" => format!(
            "Master {} by focusing on fundamentals, data, and consistency.",
            ctx.topic_or("this")
        ),
        "mistake" => pick(
            rng,
            &["do everything at once", "follow the crowd", "skip fundamentals", "chase trends"],
        )
        .to_string(),
        "solution" => pick(
            rng,
            &["focus on one thing", "build in public", "master the basics", "think long-term"],
        )
        .to_string(),
        "insight" => insight(ctx, rng),
        "tip" => pick(
            rng,
            &["Start before you're ready", "Consistency beats talent", "Simple scales, complex fails"],
        )
        .to_string(),
        "step1" => pick(
            rng,
            &["Study the top performers", "Identify the gap", "Build your foundation"],
        )
        .to_string(),
        "step2" => pick(
            rng,
            &["Execute relentlessly", "Iterate on feedback", "Double down on what works"],
        )
        .to_string(),
        "step3" => {
            pick(rng, &["Scale what works", "Teach others", "Never stop learning"]).to_string()
        }
        "advice" => pick(
            rng,
            &["Start today", "Be consistent", "Focus on value", "Think long-term"],
        )
        .to_string(),
        "reason" => pick(
            rng,
            &[
                "the market is shifting",
                "early movers win",
                "the data proves it",
                "the opportunity is NOW",
            ],
        )
        .to_string(),
        "type" => pick(rng, &["degen", "builder", "founder", "creator"]).to_string(),
        _ => return None,
    };
    Some(value)
}

fn mode_point(ctx: &FillContext, rng: &mut impl Rng) -> String {
    if let Some(digest) = ctx.digest {
        if let Some(insight) = digest.top_insights.choose(rng) {
            return insight.clone();
        }
    }
    pick(rng, mode_content::points(ctx.mode)).to_string()
}

fn bullet(ctx: &FillContext, rng: &mut impl Rng) -> String {
    if let Some(digest) = ctx.digest {
        if let Some(bullet) = digest.top_bullets.choose(rng) {
            return bullet.clone();
        }
    }
    pick(rng, mode_content::bullets(ctx.mode)).to_string()
}

fn stat(ctx: &FillContext, rng: &mut impl Rng) -> String {
    if let Some(digest) = ctx.digest {
        if let Some(stat) = digest.top_stats.choose(rng) {
            return stat.clone();
        }
    }
    match rng.gen_range(0..5) {
        0 => format!(
            "{}% growth in {} YoY",
            pick(rng, &["73", "82", "87", "91"]),
            ctx.topic_or("engagement")
        ),
        1 => format!(
            "{}x increase in {}",
            pick(rng, &["2.4", "3.7", "5.1", "8.2"]),
            pick(rng, &["adoption", "usage", "ROI"])
        ),
        2 => format!(
            "Top performers spend {} more time on {}",
            pick(rng, &["3x", "5x", "10x"]),
            ctx.topic_or("fundamentals")
        ),
        3 => format!(
            "Only {}% of {} achieve this",
            pick(rng, &["3", "5", "7"]),
            pick(rng, &["people", "teams", "projects"])
        ),
        _ => format!(
            "{} deployed into {} in {}",
            pick(rng, &["$2.1B", "$5.7B", "$14.3B"]),
            ctx.topic_or("this category"),
            pick(rng, &["2024", "2025"])
        ),
    }
}

fn insight(ctx: &FillContext, rng: &mut impl Rng) -> String {
    if rng.gen_range(0..2) == 0 {
        format!(
            "The best approach to {} is the one nobody's willing to try.",
            ctx.topic_or("success")
        )
    } else {
        format!(
            "The winners in {} started before they felt ready.",
            ctx.topic_or("every field")
        )
    }
}
