use crate::modes::Mode;

pub fn points(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Web3 => WEB3_POINTS,
        Mode::Creator => CREATOR_POINTS,
        Mode::Business => BUSINESS_POINTS,
        Mode::Shitpost => SHITPOST_POINTS,
        Mode::Educational => EDUCATIONAL_POINTS,
    }
}

pub fn bullets(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Web3 => WEB3_BULLETS,
        Mode::Creator => CREATOR_BULLETS,
        Mode::Business => BUSINESS_BULLETS,
        Mode::Shitpost => SHITPOST_BULLETS,
        Mode::Educational => EDUCATIONAL_BULLETS,
    }
}

const WEB3_POINTS: &[&str] = &[
    "On-chain data shows a {percentage}% spike in smart contract deployments. The builders never stopped — they just went quiet.",
    "TVL is a vanity metric. The real signal? Active addresses and transaction volume. That's where the alpha hides.",
    "The narrative cycle is predictable: accumulation → early alpha → CT picks it up → mainstream → exit liquidity. Know where you are.",
    "Protocol revenue > token price. If the protocol makes money, the token will follow. Stop chasing pumps, start reading dashboards.",
    "Every cycle, the same pattern: infrastructure gets built in the bear, applications explode in the bull. We're at the inflection point.",
    "The teams shipping in silence right now will be the ones everyone's copying in 6 months. Watch the GitHub commits, not the tweets.",
    "Tokenomics tell you the game theory. If you can't read a vesting schedule, you're the exit liquidity.",
    "L2s aren't competing with each other. They're competing with TradFi. When fees hit $0.001, the floodgates open.",
    "The smart money is watching wallet flows, not price charts. On-chain analytics separate the signal from the noise.",
    "Composability is the moat that TradFi can't replicate. Permissionless money legos compound in ways nobody can predict.",
];

const CREATOR_POINTS: &[&str] = &[
    "Your first 1,000 followers don't come from going viral. They come from being consistent when nobody's watching.",
    "The algorithm doesn't reward perfection. It rewards engagement. Write something people can't help but respond to.",
    "Content is leverage. One thread that resonates can do more for your brand than 6 months of generic posting.",
    "The creators winning right now aren't the most talented. They're the most consistent. Talent is common. Discipline is rare.",
    "Your audience doesn't want polished content. They want authentic content. The imperfections are what make it human.",
    "Distribution > creation. The best content in the world means nothing if nobody sees it. Master the algorithm first.",
    "Niching down feels scary. But the narrower your focus, the stronger your signal. Generic content drowns in noise.",
    "The fastest way to grow: find someone 10x your size and add value to their conversations. Borrowed audience is still audience.",
    "Every piece of content should do one of three things: educate, entertain, or inspire. If it does two, it goes viral.",
    "Stop optimizing for likes. Start optimizing for saves and shares. That's where real growth compounds.",
];

const BUSINESS_POINTS: &[&str] = &[
    "The ROI on thought leadership isn't measured in likes — it's measured in pipeline. Every thread is a top-of-funnel asset.",
    "B2B buyers consume 13 pieces of content before making a purchase decision. The question is: are they consuming yours?",
    "The companies winning on social have one thing in common: their executives are visible, opinionated, and consistent.",
    "Frameworks scale. Opinions don't. Package your expertise into repeatable frameworks and watch your authority compound.",
    "Revenue follows attention. If your competitors are more visible than you, they're winning deals you'll never even know about.",
    "The most underrated metric in B2B: share of voice. Who's dominating the conversation in your category? It should be you.",
    "Case studies are the most persuasive content format in B2B. Real results, real numbers, real companies. Everything else is theory.",
    "The cost of NOT building a personal brand in {year}: lost deals, missed partnerships, and talent that chooses your competitor.",
    "Data-backed content outperforms opinion-based content by 3.2x in B2B. Lead with numbers, follow with narrative.",
    "Your content strategy should mirror your sales funnel: awareness → consideration → decision. Map every piece to a stage.",
];

const SHITPOST_POINTS: &[&str] = &[
    "ser, the vibes are immaculate and the portfolio is in shambles. This is the way.",
    "Imagine explaining your investment thesis to a financial advisor and it's just \"the meme was funny\"",
    "Portfolio allocation: 40% hopium, 30% copium, 20% ramen budget, 10% actual research",
    "Just told my therapist about my trading strategy and she started crying",
    "\"Do your own research\" — me, buying a token because someone on CT used 🔥 emoji",
    "The market giveth and the market taketh away. Mostly taketh.",
    "My financial advisor asked me to diversify so I bought 15 different memecoins",
    "Bullish indicator: when your uber driver asks about your bags, it's time to sell. Bearish indicator: when they already sold.",
    "Day 247 of \"this is the bottom.\" Narrator: it was not the bottom.",
    "The charts are forming a pattern known in technical analysis as \"I have no idea what I'm doing\"",
];

const EDUCATIONAL_POINTS: &[&str] = &[
    "Let's start with the basics. {topic} is fundamentally about solving one problem: reducing friction between intent and outcome.",
    "Think of {topic} like building with LEGO. Each concept snaps onto the last. Miss one, and the structure collapses.",
    "The simplest way to understand {topic}: imagine you had to explain it to a 12-year-old. Strip away the jargon. What remains is truth.",
    "There are 3 levels of understanding {topic}: beginner (you know what), intermediate (you know how), expert (you know why).",
    "The #1 mistake beginners make with {topic}: trying to learn everything at once. Focus on one concept until it clicks.",
    "Here's a mental model that makes {topic} 10x easier to understand: think of it as a game with rules, players, and incentives.",
    "Most tutorials on {topic} teach you WHAT to do. I'm going to teach you WHY it works. Understanding principles > memorizing steps.",
    "Step 1 of mastering {topic}: forget everything you think you know. Beginner's mind is your biggest advantage.",
    "The best framework for learning {topic}: Input → Process → Output → Feedback → Iterate. That's it. Everything else is a variation.",
    "Common misconception about {topic}: it's complicated. Reality: it's complex but learnable. There's a difference.",
];

const WEB3_BULLETS: &[&str] = &[
    "Smart money is accumulating. On-chain data confirms it.",
    "Protocol revenue is up {percentage}% QoQ while price is flat.",
    "Developer activity hitting ATH on key infrastructure.",
    "Wallet creation rates accelerating across L2s.",
    "Institutional capital flowing in through regulated on-ramps.",
    "Cross-chain bridges processing record volume.",
    "DeFi TVL recovering faster than previous cycles.",
];

const CREATOR_BULLETS: &[&str] = &[
    "Consistency compounds. 90 days of daily posting changes everything.",
    "The best hooks share one trait: they create a curiosity gap.",
    "Repurposing > creating from scratch. One idea, 10 formats.",
    "Engagement rate matters more than follower count.",
    "Newsletter subscribers convert 40x better than social followers.",
    "Collaborations accelerate growth faster than any algorithm hack.",
    "Your voice is your unfair advantage. Nobody can replicate authenticity.",
];

const BUSINESS_BULLETS: &[&str] = &[
    "Companies with executive thought leadership close 38% faster.",
    "Content-led growth reduces CAC by 62% on average.",
    "B2B social selling generates 5x more pipeline than cold outreach.",
    "Thought leadership content increases pricing power by 27%.",
    "Data-driven threads get 3.2x more saves than opinion threads.",
    "LinkedIn + X combo outperforms any single-channel strategy.",
    "Consistent posting for 6 months increases inbound leads by 182%.",
];

const SHITPOST_BULLETS: &[&str] = &[
    "My portfolio looking like a Jackson Pollock painting rn",
    "wen lambo → wen break even → wen ramen",
    "bullish on copium, it's the only asset that never runs out",
    "\"I'm in it for the tech\" 🤡",
    "This is gentlemen. (it is not gentlemen.)",
    "Zoom out. *zooms out* oh no that's worse.",
    "TA stands for \"Totally Arbitrary\" and you can't convince me otherwise",
];

const EDUCATIONAL_BULLETS: &[&str] = &[
    "Start with WHY before diving into HOW.",
    "Use analogies to anchor new concepts to familiar ones.",
    "Break complex topics into 3–5 digestible sub-concepts.",
    "Provide examples for every abstract principle.",
    "Test understanding by explaining it back in your own words.",
    "Spaced repetition beats cramming every single time.",
    "Real mastery = ability to teach it to someone else.",
];
