use rand::rngs::StdRng;
use rand::SeedableRng;

use authority_engine::config::EngineConfig;
use authority_engine::fill::{fill_template, FillContext};
use authority_engine::{
    generate_alternate_ctas_with, generate_hooks_with, generate_shitposts_with,
    generate_thread_with, regenerate_thread, HookCategory, LengthClass, LinkDigest, Mode, Mood,
    SegmentType, ThreadRequest,
};

fn request(topic: &str, length: LengthClass, mode: Mode) -> ThreadRequest {
    ThreadRequest {
        topic: topic.to_string(),
        length,
        mode,
        ..ThreadRequest::default()
    }
}

#[test]
fn thread_respects_arc_invariants() {
    let config = EngineConfig::default();
    for seed in [1u64, 7, 42, 99, 1234] {
        for length in [LengthClass::Short, LengthClass::Medium, LengthClass::Long] {
            let mut rng = StdRng::seed_from_u64(seed);
            let bundle =
                generate_thread_with(&request("retention", length, Mode::Web3), &config, &mut rng);

            let bounds = config.lengths.bounds(length);
            assert!(bundle.segments.len() >= bounds.min);
            assert!(bundle.segments.len() <= bounds.max);
            assert_eq!(bundle.segments[0].kind, SegmentType::Hook);
            assert_eq!(bundle.segments.last().unwrap().kind, SegmentType::Cta);
            assert!(bundle.engagement_score >= 30 && bundle.engagement_score <= 98);

            for (index, segment) in bundle.segments.iter().enumerate() {
                assert_eq!(segment.position, index + 1);
                assert!(!segment.text.is_empty());
            }
        }
    }
}

#[test]
fn short_thread_draws_only_from_short_arc_kinds() {
    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let bundle = generate_thread_with(
        &request("retention", LengthClass::Short, Mode::Web3),
        &config,
        &mut rng,
    );

    assert!(bundle.segments.len() >= 3 && bundle.segments.len() <= 5);
    for segment in &bundle.segments {
        assert!(matches!(
            segment.kind,
            SegmentType::Hook | SegmentType::Insight | SegmentType::Proof | SegmentType::Cta
        ));
    }
}

#[test]
fn hook_variations_are_sorted_by_score() {
    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let bundle = generate_thread_with(
        &request("growth", LengthClass::Medium, Mode::Creator),
        &config,
        &mut rng,
    );

    assert!(bundle.hook_variations.len() >= 5);
    for pair in bundle.hook_variations.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(bundle.short_tweets.len(), 5);
}

#[test]
fn alternate_ctas_cover_every_category_once() {
    let mut rng = StdRng::seed_from_u64(8);
    let ctas = generate_alternate_ctas_with("retention", Mode::Business, &mut rng);

    assert_eq!(ctas.len(), 5);
    for (index, cta) in ctas.iter().enumerate() {
        assert!(!cta.text.contains("{topic}"));
        for other in &ctas[index + 1..] {
            assert_ne!(cta.category, other.category);
        }
    }
}

#[test]
fn degen_hooks_are_capped_for_off_personas() {
    let config = EngineConfig::default();

    let mut rng = StdRng::seed_from_u64(21);
    let creator = generate_hooks_with("growth", Mode::Creator, None, &config, &mut rng);
    let degen_count = creator
        .iter()
        .filter(|hook| hook.category == HookCategory::Degen)
        .count();
    assert!(degen_count <= 2);

    let mut rng = StdRng::seed_from_u64(21);
    let web3 = generate_hooks_with("growth", Mode::Web3, None, &config, &mut rng);
    let degen_count = web3
        .iter()
        .filter(|hook| hook.category == HookCategory::Degen)
        .count();
    assert!(degen_count >= 5);

    for hook in creator.iter().chain(web3.iter()) {
        assert!(hook.score >= 30 && hook.score <= 98);
        assert!(!hook.text.is_empty());
    }
}

#[test]
fn shitposts_at_max_degen_carry_all_four_parts() {
    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(13);
    let posts = generate_shitposts_with("memecoins", Mood::Bearish, 5, &config, &mut rng);

    assert!(posts.len() >= 8 && posts.len() <= 14);
    for pair in posts.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for post in &posts {
        // format + body + prefix + suffix, each separated by a blank line
        assert!(post.text.matches("\n\n").count() >= 3);
        assert!(!post.text.contains("{type}"));
        assert!(!post.text.contains("{topic}"));
        assert_eq!(post.degen_level, 5);
        assert!(post.score >= 40 && post.score <= 95);
    }
}

#[test]
fn shitposts_low_degen_stay_terse() {
    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(14);
    let posts = generate_shitposts_with("memecoins", Mood::Crabbing, 1, &config, &mut rng);

    for post in &posts {
        assert_eq!(post.degen_level, 1);
        assert!(!post.format.is_empty());
        assert!(!post.format.contains('\n'));
    }
}

#[test]
fn swap_hook_replaces_opening_and_rescores() {
    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(17);
    let mut bundle = generate_thread_with(
        &request("retention", LengthClass::Medium, Mode::Web3),
        &config,
        &mut rng,
    );

    let replacement = bundle.hook_variations[0].text.clone();
    assert!(bundle.swap_hook(0, &config, &mut rng));
    assert_eq!(bundle.segments[0].text, replacement);
    assert!(bundle.engagement_score >= 30 && bundle.engagement_score <= 98);

    assert!(!bundle.swap_hook(99, &config, &mut rng));
}

#[test]
fn swap_cta_replaces_closing_and_rescores() {
    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(18);
    let mut bundle = generate_thread_with(
        &request("retention", LengthClass::Medium, Mode::Web3),
        &config,
        &mut rng,
    );

    let replacement = bundle.alternate_ctas[2].text.clone();
    assert!(bundle.swap_cta(2, &config, &mut rng));
    assert_eq!(bundle.segments.last().unwrap().text, replacement);
    assert!(bundle.engagement_score >= 30 && bundle.engagement_score <= 98);
}

#[test]
fn regenerate_boosts_score_within_ceiling() {
    let config = EngineConfig::default();
    for seed in [2u64, 20, 200] {
        let mut rng = StdRng::seed_from_u64(seed);
        let bundle = regenerate_thread(
            &request("retention", LengthClass::Medium, Mode::Web3),
            &config,
            &mut rng,
        );
        assert!(bundle.engagement_score <= 98);
    }
}

#[test]
fn fill_is_deterministic_under_a_fixed_seed() {
    let ctx = FillContext::new("retention", Mode::Web3);
    let template = "After {time} studying {topic}, {number} {things} later:\n\n{modePoint}";

    let mut first_rng = StdRng::seed_from_u64(9);
    let mut second_rng = StdRng::seed_from_u64(9);
    let first = fill_template(template, &ctx, &mut first_rng);
    let second = fill_template(template, &ctx, &mut second_rng);

    assert_eq!(first, second);
    assert!(!first.contains('{'));
}

#[test]
fn unrecognized_tokens_pass_through_verbatim() {
    let ctx = FillContext::new("retention", Mode::Web3);
    let mut rng = StdRng::seed_from_u64(4);
    let filled = fill_template("{nonsense} about {topic}", &ctx, &mut rng);

    assert!(filled.starts_with("{nonsense} about "));
    assert!(!filled.contains("{topic}"));
}

#[test]
fn empty_topic_falls_back_to_neutral_filler() {
    let ctx = FillContext::new("", Mode::Creator);
    let mut rng = StdRng::seed_from_u64(6);
    assert_eq!(fill_template("{topic}", &ctx, &mut rng), "this space");
}

#[test]
fn digest_content_wins_over_mode_banks() {
    let digest = LinkDigest {
        top_insights: vec!["Quarterly revenue doubled after the pricing change.".to_string()],
        top_bullets: vec!["Churn dropped 40% in one quarter.".to_string()],
        top_stats: vec!["$4.2M ARR as of March".to_string()],
        ..LinkDigest::default()
    };
    let ctx = FillContext::with_digest("pricing", Mode::Business, Some(&digest));
    let mut rng = StdRng::seed_from_u64(12);

    assert_eq!(
        fill_template("{modePoint}", &ctx, &mut rng),
        "Quarterly revenue doubled after the pricing change."
    );
    assert_eq!(
        fill_template("{bullet2}", &ctx, &mut rng),
        "Churn dropped 40% in one quarter."
    );
    assert_eq!(
        fill_template("{stat1}", &ctx, &mut rng),
        "$4.2M ARR as of March"
    );
}

#[test]
fn unknown_identifiers_resolve_to_documented_defaults() {
    assert_eq!(Mode::resolve("unknown"), Mode::Web3);
    assert_eq!(LengthClass::resolve("epic"), LengthClass::Medium);
    assert_eq!(Mood::resolve("sideways"), Mood::Chaos);
}
