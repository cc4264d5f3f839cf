use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookCategory {
    Authority,
    Curiosity,
    Data,
    Controversial,
    Story,
    Degen,
}

impl HookCategory {
    pub const ALL: [HookCategory; 6] = [
        HookCategory::Authority,
        HookCategory::Curiosity,
        HookCategory::Data,
        HookCategory::Controversial,
        HookCategory::Story,
        HookCategory::Degen,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "authority" => Some(HookCategory::Authority),
            "curiosity" => Some(HookCategory::Curiosity),
            "data" => Some(HookCategory::Data),
            "controversial" => Some(HookCategory::Controversial),
            "story" => Some(HookCategory::Story),
            "degen" => Some(HookCategory::Degen),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HookCategory::Authority => "authority",
            HookCategory::Curiosity => "curiosity",
            HookCategory::Data => "data",
            HookCategory::Controversial => "controversial",
            HookCategory::Story => "story",
            HookCategory::Degen => "degen",
        }
    }

    pub fn templates(self) -> &'static [&'static str] {
        match self {
            HookCategory::Authority => AUTHORITY,
            HookCategory::Curiosity => CURIOSITY,
            HookCategory::Data => DATA,
            HookCategory::Controversial => CONTROVERSIAL,
            HookCategory::Story => STORY,
            HookCategory::Degen => DEGEN,
        }
    }
}

const AUTHORITY: &[&str] = &[
    "I've spent {time} studying {topic}.\n\nHere's what 99% of people still get wrong:",
    "After {time} in the {topic} space, I've identified the #1 mistake everyone makes.\n\nIt's not what you think:",
    "I've built {number} {things} in the last year.\n\nHere's everything I've learned about {topic}:",
    "Most people will never understand {topic}.\n\nAfter {time} of research, here's the truth:",
    "I've helped {number}+ {people} with {topic}.\n\nHere's the framework that works every time:",
    "The top 1% of {people} all do this one thing differently.\n\nAfter studying {number}+ cases of {topic}:",
    "I spent {time} interviewing the best minds in {topic}.\n\nThe one thing they all agree on will surprise you:",
    "After {number} failures and {time} of iteration on {topic}—\n\nI finally cracked the code. Here's the full breakdown:",
    "Nobody taught me {topic}. I learned it the hard way over {time}.\n\nSave yourself the mistakes. Read this:",
    "{number}+ hours researching {topic} so you don't have to.\n\nThe definitive guide, in one thread:",
    "I went from zero to expert in {topic} in {time}.\n\nHere's the exact roadmap I followed:",
];

const CURIOSITY: &[&str] = &[
    "There's a hidden pattern in every successful {topic}.\n\nOnce you see it, you can't unsee it:",
    "Nobody's talking about this, but {topic} is about to change everything.\n\nLet me explain:",
    "I discovered something about {topic} that made me rethink everything.\n\nThis thread will do the same for you:",
    "What if everything you know about {topic} is wrong?\n\nHere's what the data actually shows:",
    "99% of people overlook this about {topic}.\n\nThe remaining 1% are printing money:",
    "The biggest secret in {topic} is hiding in plain sight.\n\nHere it is:",
    "Something strange is happening in {topic} right now.\n\nMost people won't notice until it's too late:",
    "I just realized why most people fail at {topic}.\n\nIt has nothing to do with skill or intelligence:",
    "There's a reason the smartest people in {topic} aren't sharing this publicly.\n\nI'm about to:",
    "The next 12 months in {topic} will be unlike anything we've seen.\n\nHere's exactly what's coming:",
    "Everyone is asking the wrong question about {topic}.\n\nThe right question changes everything:",
];

const DATA: &[&str] = &[
    "I analyzed {number}+ {things} to find the {topic} formula.\n\nHere are the numbers:",
    "{percentage}% of {things} fail at {topic}.\n\nThe data shows exactly why — and how to fix it:",
    "We tracked {number} {things} over {time}.\n\nThe results about {topic} will shock you:",
    "The numbers don't lie.\n\n{topic} in {year}: a data breakdown 📊",
    "I ran the numbers on {topic}.\n\n{number} data points. {time} of research.\n\nHere's what I found:",
    "New data just dropped on {topic}.\n\n{number}+ {things} analyzed. {percentage}% showed the same pattern:",
    "I built a spreadsheet tracking every major move in {topic}.\n\n{number} entries later, the trend is undeniable:",
    "{percentage}% of {people} ignore this metric in {topic}.\n\nBut it's the one that predicts everything:",
    "The correlation between {topic} success and this one variable is {percentage}%.\n\nHere's what the data reveals:",
    "Quant breakdown:\n\n{number}+ {things}. {time} of data. One clear conclusion about {topic}:",
];

const CONTROVERSIAL: &[&str] = &[
    "Unpopular opinion: {topic} is completely broken.\n\nHere's why nobody wants to admit it:",
    "Everyone's celebrating {topic}.\n\nBut nobody's talking about the elephant in the room:",
    "Hot take: {topic} is overrated.\n\nBefore you @ me, hear me out:",
    "I'm about to make a lot of enemies with this thread about {topic}.\n\nBut someone needs to say it:",
    "{topic} is a scam. There, I said it.\n\nHere's the proof:",
    "Stop pretending {topic} is fine.\n\nIt's not. Here's what's really happening:",
    "The uncomfortable truth about {topic} that your favorite influencer won't tell you:",
    "I'm going to get cancelled for saying this about {topic}.\n\nBut I don't care. The truth matters more:",
    "The {topic} narrative is built on a lie.\n\nI have receipts:",
    "Everyone praising {topic} right now is going to look very foolish in 6 months.\n\nHere's why:",
    "The emperor has no clothes.\n\n{topic} is not what they told you. A thread:",
];

const STORY: &[&str] = &[
    "Last {timeframe}, I {event}.\n\nIt completely changed how I think about {topic}.\n\nHere's the full story:",
    "2 years ago, I had $0 and no clue about {topic}.\n\nToday, everything is different.\n\nHere's exactly what happened:",
    "I almost quit {topic} last year.\n\nThen one conversation changed everything:",
    "This is the story nobody knows about {topic}.\n\nI've been waiting to share it:",
    "In {year}, I made the biggest mistake of my life with {topic}.\n\nHere's what I learned:",
    "A stranger DM'd me about {topic} last {timeframe}.\n\nWhat they told me changed my entire strategy:",
    "3 AM. Couldn't sleep. Opened my laptop.\n\nWhat I found about {topic} that night changed everything:",
    "I was laughed at for believing in {topic}.\n\nFast forward to today — nobody's laughing anymore:",
    "The day I almost lost everything because of {topic}.\n\nA thread I've never shared publicly:",
    "From broke to breakthrough:\n\nHow {topic} transformed my entire life in {time}. 🧵",
];

const DEGEN: &[&str] = &[
    "Anon, I found the next massive play in {topic}.\n\nNFA but read this thread:",
    "gm to everyone who's been sleeping on {topic}.\n\nWake up. This is the alpha:",
    "The {topic} meta just shifted.\n\nIf you're not paying attention, you're ngmi:",
    "ser, {topic} is about to go parabolic.\n\nHere's why the smart money is already positioning:",
    "Faded {topic}? You're about to regret it.\n\nLet me show you what's coming:",
    "wagmi if you understand {topic}.\n\nngmi if you don't. Simple as.",
    "Just found a {topic} alpha leak that nobody's talking about.\n\nAnon... you need to see this:",
    "The {topic} chart is giving me 2021 vibes.\n\nIf you know, you know. Thread:",
    "CT is sleeping on {topic}.\n\nWhen they wake up, the entry won't be this good.\n\nDeep dive:",
    "ape in or cope later.\n\n{topic} thesis in 10 tweets. NFA:",
];
