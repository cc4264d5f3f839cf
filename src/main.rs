mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use authority_engine::config::EngineConfig;
use authority_engine::scoring::HookScorer;
use authority_engine::{
    analyze_voice_with, generate_alternate_ctas_with, generate_article_with, generate_hooks_with,
    generate_shitposts_with, generate_thread_with, LengthClass, LinkDigest, Mode, Mood,
    ThreadRequest,
};

#[derive(Parser)]
#[command(name = "authority-engine", about = "Template-driven social content engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Thread(ThreadArgs),
    Hooks(HooksArgs),
    Article(ArticleArgs),
    Shitposts(ShitpostArgs),
    Voice(VoiceArgs),
    Ctas(CtasArgs),
    Score(ScoreArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct ThreadArgs {
    #[arg(long, default_value = "")]
    topic: String,
    #[arg(long, default_value = "")]
    context: String,
    #[arg(long, default_value = "medium")]
    length: String,
    #[arg(long, default_value = "auto")]
    tone: String,
    #[arg(long, default_value = "web3")]
    mode: String,
    #[arg(long)]
    digest: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

impl Default for ThreadArgs {
    fn default() -> Self {
        Self {
            topic: String::new(),
            context: String::new(),
            length: "medium".to_string(),
            tone: "auto".to_string(),
            mode: "web3".to_string(),
            digest: None,
            json: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct HooksArgs {
    #[arg(long, default_value = "")]
    topic: String,
    #[arg(long, default_value = "web3")]
    mode: String,
    #[arg(long)]
    digest: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ArticleArgs {
    #[arg(long, default_value = "")]
    topic: String,
    #[arg(long, default_value = "")]
    context: String,
    #[arg(long, default_value = "web3")]
    mode: String,
    #[arg(long)]
    digest: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ShitpostArgs {
    #[arg(long, default_value = "")]
    topic: String,
    #[arg(long, default_value = "chaos")]
    mood: String,
    #[arg(long, default_value_t = 3)]
    degen_level: u8,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct VoiceArgs {
    #[arg(long)]
    file: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct CtasArgs {
    #[arg(long, default_value = "")]
    topic: String,
    #[arg(long, default_value = "web3")]
    mode: String,
}

#[derive(Args, Debug, Clone)]
struct ScoreArgs {
    #[arg(long)]
    text: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "webapp")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Thread(ThreadArgs::default()));

    match command {
        Command::Thread(args) => run_thread(args),
        Command::Hooks(args) => run_hooks(args),
        Command::Article(args) => run_article(args),
        Command::Shitposts(args) => run_shitposts(args),
        Command::Voice(args) => run_voice(args),
        Command::Ctas(args) => run_ctas(args),
        Command::Score(args) => run_score(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_thread(args: ThreadArgs) -> Result<(), String> {
    let config = load_config()?;
    let digest = load_digest(args.digest.as_deref())?;
    let request = ThreadRequest {
        topic: args.topic,
        context: args.context,
        length: LengthClass::resolve(&args.length),
        tone: args.tone,
        mode: Mode::resolve(&args.mode),
        digest,
    };

    let mut rng = StdRng::from_entropy();
    let bundle = generate_thread_with(&request, &config, &mut rng);

    if args.json {
        println!("{}", to_json(&bundle)?);
        return Ok(());
    }

    println!(
        "Engagement score: {} ({} tweets, {} mode)",
        bundle.engagement_score,
        bundle.segments.len(),
        request.mode.profile().name
    );
    for segment in &bundle.segments {
        println!(
            "\n{}/{} [{}]\n{}",
            segment.position,
            bundle.segments.len(),
            segment.kind.label(),
            segment.text
        );
    }

    println!("\nTop hook variations:");
    for variation in bundle.hook_variations.iter().take(3) {
        println!(
            "- [{} | {}] {}",
            variation.category.label(),
            variation.score,
            first_line(&variation.text)
        );
    }

    println!("\nAlternate CTAs:");
    for cta in &bundle.alternate_ctas {
        println!("- [{}] {}", cta.category.label(), first_line(&cta.text));
    }

    println!("\nStandalone short tweets:");
    for tweet in &bundle.short_tweets {
        println!("- {}", first_line(tweet));
    }

    Ok(())
}

fn run_hooks(args: HooksArgs) -> Result<(), String> {
    let config = load_config()?;
    let digest = load_digest(args.digest.as_deref())?;
    let mode = Mode::resolve(&args.mode);

    let mut rng = StdRng::from_entropy();
    let hooks = generate_hooks_with(&args.topic, mode, digest.as_ref(), &config, &mut rng);

    if args.json {
        println!("{}", to_json(&hooks)?);
        return Ok(());
    }

    println!("{} hooks generated:", hooks.len());
    for hook in &hooks {
        println!(
            "\n[{} | {}]\n{}",
            hook.category.label(),
            hook.score,
            hook.text
        );
    }
    Ok(())
}

fn run_article(args: ArticleArgs) -> Result<(), String> {
    let config = load_config()?;
    let digest = load_digest(args.digest.as_deref())?;
    let mode = Mode::resolve(&args.mode);

    let mut rng = StdRng::from_entropy();
    let article = generate_article_with(
        &args.topic,
        &args.context,
        mode,
        digest.as_ref(),
        &config,
        &mut rng,
    );

    if args.json {
        println!("{}", to_json(&article)?);
        return Ok(());
    }

    println!("# {}\n\n{}", article.title, article.intro);
    for section in &article.sections {
        println!("\n## {}\n\n{}", section.title, section.body);
    }
    println!("\n## Conclusion\n\n{}", article.conclusion);
    println!("\nTweet-sized excerpts:");
    for excerpt in &article.excerpts {
        println!("- {}", first_line(excerpt));
    }
    Ok(())
}

fn run_shitposts(args: ShitpostArgs) -> Result<(), String> {
    let config = load_config()?;
    let mood = Mood::resolve(&args.mood);
    let degen_level = args.degen_level.max(1).min(5);

    let mut rng = StdRng::from_entropy();
    let posts = generate_shitposts_with(&args.topic, mood, degen_level, &config, &mut rng);

    if args.json {
        println!("{}", to_json(&posts)?);
        return Ok(());
    }

    println!(
        "{} posts ({} mood, degen level {}):",
        posts.len(),
        mood.label(),
        degen_level
    );
    for post in &posts {
        println!("\n[score {}]\n{}", post.score, post.text);
    }
    Ok(())
}

fn run_voice(args: VoiceArgs) -> Result<(), String> {
    let config = load_config()?;
    let sample = match args.file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|err| format!("failed to read sample file: {}", err))?,
        None => read_stdin()?,
    };

    let mut rng = StdRng::from_entropy();
    let analysis = match analyze_voice_with(&sample, &config, &mut rng) {
        Some(analysis) => analysis,
        None => {
            println!("Need at least 3 non-empty lines of sample text to analyze a voice.");
            return Ok(());
        }
    };

    if args.json {
        println!("{}", to_json(&analysis)?);
        return Ok(());
    }

    let profile = &analysis.profile;
    let markers: Vec<&str> = profile
        .tone_markers
        .iter()
        .map(|marker| marker.label())
        .collect();
    println!("Tone markers: {}", markers.join(", "));
    println!("Rhythm: {:?} (avg line {} chars)", profile.sentence_rhythm, profile.avg_line_length);
    println!("Aggression: {}/10", profile.aggression_level);
    println!(
        "Emoji usage: {:?} {}",
        profile.emoji_usage,
        profile.top_emojis.join(" ")
    );
    println!("Vocabulary: {}", profile.vocabulary_fingerprint.join(", "));
    println!("Signature phrases: {}", profile.signature_phrases.join(" | "));
    println!("Guessed persona: {}", analysis.guessed_mode.profile().name);

    println!("\nSample thread in this voice:");
    for segment in &analysis.sample_thread.segments {
        println!(
            "\n{}/{} [{}]\n{}",
            segment.position,
            analysis.sample_thread.segments.len(),
            segment.kind.label(),
            segment.text
        );
    }
    Ok(())
}

fn run_ctas(args: CtasArgs) -> Result<(), String> {
    let mode = Mode::resolve(&args.mode);
    let mut rng = StdRng::from_entropy();
    let ctas = generate_alternate_ctas_with(&args.topic, mode, &mut rng);
    for cta in &ctas {
        println!("[{}]\n{}\n", cta.category.label(), cta.text);
    }
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), String> {
    let config = load_config()?;
    let text = match args.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => read_stdin()?,
    };

    let scorer = HookScorer::new(config.hook.clone());
    let mut rng = StdRng::from_entropy();
    println!(
        "Hook score: {} (structural {})",
        scorer.score(&text, &mut rng),
        scorer.structural(&text)
    );
    Ok(())
}

fn load_config() -> Result<EngineConfig, String> {
    EngineConfig::load(None).map(|(config, _)| config)
}

fn load_digest(path: Option<&Path>) -> Result<Option<LinkDigest>, String> {
    match path {
        None => Ok(None),
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .map_err(|err| format!("failed to read digest: {}", err))?;
            let digest = serde_json::from_str(&data)
                .map_err(|err| format!("failed to parse digest: {}", err))?;
            Ok(Some(digest))
        }
    }
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing input: pass an argument or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|err| format!("failed to serialize: {}", err))
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
