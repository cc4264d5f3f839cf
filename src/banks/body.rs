use crate::SegmentType;

pub fn templates(kind: SegmentType) -> &'static [&'static str] {
    match kind {
        SegmentType::Context => CONTEXT,
        SegmentType::Tension => TENSION,
        SegmentType::Insight => INSIGHT,
        SegmentType::Proof => PROOF,
        SegmentType::Contrarian => CONTRARIAN,
        SegmentType::Expansion => EXPANSION,
        SegmentType::Summary => SUMMARY,
        SegmentType::Cta => CTA,
        // Openers come from the hook banks; tension doubles as the fallback pool.
        SegmentType::Hook => TENSION,
    }
}

const CONTEXT: &[&str] = &[
    "First, some context:\n\n{topic} isn't new. But the game has fundamentally changed.\n\nHere's what shifted:",
    "To understand why this matters, you need the background:\n\n{modePoint}\n\nThis sets the stage for everything that follows.",
    "Let me set the scene.\n\n{modePoint}\n\nMost people skip this. That's why they get it wrong.",
    "Quick context before we dive in:\n\n{modePoint}\n\nKeep this in mind — it's the foundation.",
    "Why now? Why does {topic} matter today?\n\n{modePoint}\n\nThe timing is everything.",
];

const TENSION: &[&str] = &[
    "Here's the thing most people miss:\n\n{modePoint}\n\nThis alone changes everything about how you should approach it.",
    "Let's break this down:\n\n→ {bullet1}\n→ {bullet2}\n→ {bullet3}\n\nEach one compounds on the last.",
    "Most people stop here. But the real insight goes deeper:\n\n{modePoint}",
    "This is where it gets interesting.\n\n{modePoint}\n\nAnd it only gets wilder from here...",
    "The problem nobody wants to address:\n\n{modePoint}\n\nUntil we fix this, nothing else matters.",
    "Here's where 90% of {people} go wrong:\n\n{modePoint}\n\nThe top 10% do the exact opposite.",
];

const INSIGHT: &[&str] = &[
    "Here's where the magic happens:\n\n{modePoint}\n\nOnce you internalize this, your entire approach shifts.",
    "The key insight that ties everything together:\n\n{modePoint}\n\nThis is what separates the top 1%.",
    "Here's the part nobody tells you:\n\n{modePoint}\n\nNow you know what most people never will.",
    "The non-obvious truth:\n\n{modePoint}\n\nRead that again. Let it sink in.",
    "This is the insight that changed my entire perspective on {topic}:\n\n{modePoint}\n\nIt seems simple. It's anything but.",
];

const PROOF: &[&str] = &[
    "The proof is in the numbers:\n\n📊 {stat1}\n📈 {stat2}\n🎯 {stat3}\n\nThe trend is undeniable.",
    "Don't take my word for it. Look at the data:\n\n{modePoint}\n\nThe evidence speaks for itself.",
    "Here's a real example:\n\n{modePoint}\n\nThis isn't theory. This is what actually happened.",
    "I tested this myself:\n\n→ Before: {before}\n→ After: {after}\n\nThe difference was night and day.",
    "Case study:\n\n{modePoint}\n\nThe results speak louder than any theory ever could.",
    "Receipts:\n\n📊 {stat1}\n📈 {stat2}\n🎯 {stat3}\n\nStill think this is just hype?",
];

const CONTRARIAN: &[&str] = &[
    "Now here's where I'll lose some of you.\n\nThe conventional wisdom on {topic} is dead wrong.\n\n{modePoint}",
    "Controversial take:\n\n{modePoint}\n\nI know this goes against the narrative. But the data supports it.",
    "Most experts won't say this, but:\n\n{modePoint}\n\nThe crowd is wrong. Again.",
    "Here's the uncomfortable truth that nobody in {topic} wants to hear:\n\n{modePoint}\n\nDisagree? Show me your data.",
    "I used to believe the opposite. Then I saw the evidence:\n\n{modePoint}\n\nSometimes the minority is right.",
];

const EXPANSION: &[&str] = &[
    "Let's go deeper.\n\nThe second-order effects of this are massive:\n\n→ {bullet1}\n→ {bullet2}\n→ {bullet3}",
    "But wait — there's more.\n\nThe implications extend far beyond {topic}:\n\n{modePoint}",
    "Zooming out:\n\n{modePoint}\n\nThis is bigger than most people realize.",
    "The ripple effects:\n\n{modePoint}\n\nWe're only seeing the beginning.",
    "Here's what happens next:\n\n→ {bullet1}\n→ {bullet2}\n→ {bullet3}\n\nConnect the dots.",
];

const SUMMARY: &[&str] = &[
    "Let me tie it all together:\n\n{modePoint}\n\nThat's the full picture.",
    "TL;DR for the impatient:\n\n→ {bullet1}\n→ {bullet2}\n→ {bullet3}\n\nNow you know more than 99%.",
    "The bottom line:\n\n{modePoint}\n\nEverything else is noise.",
    "To recap what matters:\n\n{modePoint}\n\nBookmark this. Come back to it.",
];

const CTA: &[&str] = &[
    "If you found this valuable:\n\n♻️ Repost to help others discover this\n🔖 Bookmark for reference\n➡️ Follow me for more breakdowns",
    "TL;DR:\n\n{summary}\n\nIf this resonated, repost it. Someone in your network needs to see this.",
    "That's the full breakdown.\n\nRepost if you found value here.\nFollow for daily threads like this.\n\n🔖 Save this. You'll want to come back to it.",
    "Found this useful?\n\n→ Repost to share with your audience\n→ Follow for more deep dives\n→ Drop a 🔥 if you want part 2",
    "This took me {time} to research and write.\n\nIf it saved you even 5 minutes, a repost goes a long way.\n\nMore threads like this → follow me.",
    "That's a wrap. 🧵\n\nIf you made it this far, two things:\n\n1. You're already ahead of 99%\n2. Hit follow — I drop threads like this daily",
    "Agree? Disagree?\n\nDrop your take below. I read every reply.\n\n♻️ Repost if someone in your circle needs this.\n➡️ Follow for the next breakdown.",
    "Want the full strategy, not just the thread?\n\nDM me \"{topic}\" and I'll send you the deep-dive.\n\nMeanwhile — repost this for others ♻️",
];
