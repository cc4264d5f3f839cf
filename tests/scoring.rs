use rand::rngs::StdRng;
use rand::SeedableRng;

use authority_engine::scoring::{EngagementScorer, EngagementWeights, HookScorer, HookWeights};
use authority_engine::{score_hook, Segment, SegmentType};

fn segment(kind: SegmentType, text: &str) -> Segment {
    Segment {
        position: 0,
        kind,
        text: text.to_string(),
    }
}

// Jitter and the hook share zeroed out, so segment arithmetic is exact.
fn flat_weights() -> EngagementWeights {
    EngagementWeights {
        hook_share: 0.0,
        jitter_min: 0,
        jitter_max: 0,
        ..EngagementWeights::default()
    }
}

#[test]
fn structural_score_matches_worked_example() {
    let scorer = HookScorer::new(HookWeights::default());
    let text = "I've spent 6 months studying retention.\n\nHere's what 99% of people still get wrong:";

    // 50 base + 6 newline + 5 under 200 + 3 under 140 + 5 digit + 3 percent
    // + 4 big claim + 2 colon
    assert_eq!(scorer.structural(text), 78);

    for seed in 0..50u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let score = scorer.score(text, &mut rng);
        assert!(score >= 75 && score <= 83);
    }
}

#[test]
fn structural_bonuses_are_monotonic() {
    let scorer = HookScorer::new(HookWeights::default());

    let plain = "a plain line with little going on";
    let with_digit = "a plain line with 7 going on";
    let with_percent = "a plain line with 7% going on";
    assert!(scorer.structural(with_digit) >= scorer.structural(plain));
    assert!(scorer.structural(with_percent) >= scorer.structural(with_digit));

    let long = "x".repeat(250);
    let short = "x".repeat(100);
    assert!(scorer.structural(&short) >= scorer.structural(&long));

    let flat = "the flat statement";
    let with_break = "the flat statement\nwith a second line";
    assert!(scorer.structural(with_break) >= scorer.structural(flat));
}

#[test]
fn hook_scores_clamp_to_configured_range() {
    let scorer = HookScorer::new(HookWeights {
        base: 500,
        ..HookWeights::default()
    });
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(scorer.score("anything", &mut rng), 98);

    let scorer = HookScorer::new(HookWeights {
        base: -500,
        ..HookWeights::default()
    });
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(scorer.score("anything", &mut rng), 30);
}

#[test]
fn score_hook_stays_in_range_across_inputs() {
    let samples = [
        "",
        "short",
        "What if everything you know is wrong?\n\nHere's the truth:",
        "UNHINGED ALL CAPS RANT!!!! 99% #1 top 1%",
    ];
    for (index, text) in samples.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(index as u64);
        let score = score_hook(text, &mut rng);
        assert!(score >= 30 && score <= 98);
    }
}

#[test]
fn closing_cta_is_worth_exactly_its_bonus() {
    let scorer = EngagementScorer::new(flat_weights(), HookScorer::new(HookWeights::default()));

    let with_cta = vec![
        segment(SegmentType::Hook, "a plain opening line"),
        segment(SegmentType::Tension, "the middle"),
        segment(SegmentType::Cta, "the close"),
    ];
    let mut without_cta = with_cta.clone();
    without_cta[2] = segment(SegmentType::Summary, "the close");

    let mut rng = StdRng::seed_from_u64(11);
    // base 45 + 3 kinds * 2.5 + closing cta 5
    assert_eq!(scorer.score(&with_cta, &mut rng), 58);
    assert_eq!(scorer.score(&without_cta, &mut rng), 53);
}

#[test]
fn overlong_segments_are_penalized() {
    let scorer = EngagementScorer::new(flat_weights(), HookScorer::new(HookWeights::default()));

    let long_text = "y".repeat(300);
    let trim = vec![
        segment(SegmentType::Hook, "a plain opening line"),
        segment(SegmentType::Insight, "fits fine"),
        segment(SegmentType::Cta, "the close"),
    ];
    let mut bloated = trim.clone();
    bloated[1] = segment(SegmentType::Insight, &long_text);

    let mut rng = StdRng::seed_from_u64(23);
    let trim_score = scorer.score(&trim, &mut rng);
    let bloated_score = scorer.score(&bloated, &mut rng);
    assert_eq!(trim_score - bloated_score, 3);
}

#[test]
fn kind_variety_bonus_caps_out() {
    let scorer = EngagementScorer::new(flat_weights(), HookScorer::new(HookWeights::default()));

    let six_kinds = vec![
        segment(SegmentType::Hook, "a plain opening line"),
        segment(SegmentType::Context, "a"),
        segment(SegmentType::Tension, "b"),
        segment(SegmentType::Insight, "c"),
        segment(SegmentType::Proof, "d"),
        segment(SegmentType::Contrarian, "e"),
    ];
    let mut eight_kinds = six_kinds.clone();
    eight_kinds.push(segment(SegmentType::Expansion, "f"));
    eight_kinds.push(segment(SegmentType::Summary, "g"));

    let mut rng = StdRng::seed_from_u64(31);
    // Six distinct kinds already hit the 15-point variety cap; the two
    // extra kinds only move the score through the length bonus.
    let six_score = scorer.score(&six_kinds, &mut rng);
    let eight_score = scorer.score(&eight_kinds, &mut rng);
    assert_eq!(six_score, 77);
    assert_eq!(eight_score, 80);
}

#[test]
fn engagement_scoring_is_deterministic_under_a_fixed_seed() {
    let scorer = EngagementScorer::new(
        EngagementWeights::default(),
        HookScorer::new(HookWeights::default()),
    );
    let thread = vec![
        segment(SegmentType::Hook, "What nobody tells you about growth:"),
        segment(SegmentType::Insight, "the takeaway"),
        segment(SegmentType::Cta, "repost this"),
    ];

    let mut first_rng = StdRng::seed_from_u64(77);
    let mut second_rng = StdRng::seed_from_u64(77);
    assert_eq!(
        scorer.score(&thread, &mut first_rng),
        scorer.score(&thread, &mut second_rng)
    );
}

#[test]
fn engagement_scores_stay_in_range() {
    let scorer = EngagementScorer::new(
        EngagementWeights::default(),
        HookScorer::new(HookWeights::default()),
    );

    let threads = [
        vec![segment(SegmentType::Hook, "")],
        vec![
            segment(SegmentType::Hook, "What nobody tells you about growth:"),
            segment(SegmentType::Cta, "repost this"),
        ],
    ];
    for (index, thread) in threads.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(index as u64);
        let score = scorer.score(thread, &mut rng);
        assert!(score >= 30 && score <= 98);
    }
}
