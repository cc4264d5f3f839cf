use rand::rngs::StdRng;
use rand::SeedableRng;

use authority_engine::config::EngineConfig;
use authority_engine::voice::{
    CapitalizationStyle, EmojiUsage, SentenceRhythm, ToneMarker,
};
use authority_engine::{analyze_voice_with, Mode, SegmentType};

fn analyze(sample: &str, seed: u64) -> Option<authority_engine::VoiceAnalysis> {
    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    analyze_voice_with(sample, &config, &mut rng)
}

#[test]
fn too_few_lines_yields_no_profile() {
    assert!(analyze("one line", 1).is_none());
    assert!(analyze("one line\n\ntwo line\n\n", 1).is_none());
}

#[test]
fn tone_markers_fall_back_to_casual_conversational() {
    let sample = "just vibes and chill\nkeeping it mellow right now\ngood morning everyone";
    let analysis = analyze(sample, 2).unwrap();
    assert_eq!(
        analysis.profile.tone_markers,
        vec![ToneMarker::Casual, ToneMarker::Conversational]
    );
}

#[test]
fn analytical_voice_is_detected_from_keywords() {
    let sample = "the data backs this up\nour research covered 40 teams\nretention moved 12% in a quarter";
    let analysis = analyze(sample, 3).unwrap();
    assert!(analysis
        .profile
        .tone_markers
        .contains(&ToneMarker::Analytical));
}

#[test]
fn web3_slang_guesses_the_web3_persona() {
    let sample = "gm anon, wagmi\nbullish on the protocol\nthe alpha is on-chain";
    let analysis = analyze(sample, 4).unwrap();

    assert_eq!(analysis.guessed_mode, Mode::Web3);
    assert!(analysis
        .profile
        .tone_markers
        .contains(&ToneMarker::CtNative));

    let thread = &analysis.sample_thread;
    assert!(thread.segments.len() >= 3 && thread.segments.len() <= 5);
    assert_eq!(thread.segments[0].kind, SegmentType::Hook);
    assert_eq!(thread.segments.last().unwrap().kind, SegmentType::Cta);
}

#[test]
fn heavy_emoji_usage_is_bucketed() {
    let sample = "to the moon 🚀🔥\nno brakes 🚀🚀\nwhat a day 🔥🔥";
    let analysis = analyze(sample, 5).unwrap();

    assert_eq!(analysis.profile.emoji_usage, EmojiUsage::Heavy);
    assert!(analysis.profile.top_emojis.len() <= 5);
    assert!(analysis.profile.top_emojis.contains(&"🚀".to_string()));
}

#[test]
fn repeated_bigrams_become_signature_phrases() {
    let sample = "ship daily or fall behind\nship daily without excuses\nship daily and compound";
    let analysis = analyze(sample, 6).unwrap();
    assert!(analysis
        .profile
        .signature_phrases
        .contains(&"ship daily".to_string()));
}

#[test]
fn short_lines_read_as_short_punchy_rhythm() {
    let sample = "less is more\nkeep it tight\ncut the fluff";
    let analysis = analyze(sample, 7).unwrap();
    assert_eq!(analysis.profile.sentence_rhythm, SentenceRhythm::ShortPunchy);
}

#[test]
fn caps_and_exclamations_read_as_energetic() {
    let sample = "THIS IS HUGE!!!\nABSOLUTELY MASSIVE MOVE!!!\nWAKE UP EVERYONE!!!";
    let analysis = analyze(sample, 8).unwrap();

    assert!(analysis
        .profile
        .tone_markers
        .contains(&ToneMarker::Energetic));
    assert_eq!(analysis.profile.aggression_level, 10);
    assert_eq!(analysis.profile.capitalization, CapitalizationStyle::CapsHeavy);
    assert!((analysis.profile.punctuation.exclamation_rate - 3.0).abs() < 1e-9);
}

#[test]
fn vocabulary_fingerprint_is_bounded_and_deduplicated() {
    let sample = "growth growth growth strategy\nrevenue framework revenue pipeline\nscale the strategy and ship";
    let analysis = analyze(sample, 9).unwrap();

    let fingerprint = &analysis.profile.vocabulary_fingerprint;
    assert!(fingerprint.len() <= 12);
    let mut deduped = fingerprint.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), fingerprint.len());
}
