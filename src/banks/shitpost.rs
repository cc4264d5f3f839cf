use crate::Mood;

pub const FORMATS: &[&str] = &[
    "Nobody:\nAbsolutely nobody:\nMe:",
    "POV:",
    "That feeling when",
    "Narrator:",
    "Breaking:",
    "*record scratch* *freeze frame*",
    "Roses are red,\nViolets are blue,",
    "Day 1 of",
    "Therapist:",
    "Babe wake up,",
    "Me vs the guy she told me not to worry about:",
    "How it started → How it's going:",
    "Plot twist:",
    "Interviewer:",
    "My portfolio:\nMy financial advisor:",
    "Main character moment:",
    "Real ones know:",
    "\"Don't worry, it's a stablecoin\"",
    "Expectation vs Reality:",
    "5 stages of grief, {topic} edition:",
    "If {topic} was a text message:",
    "Google search history:",
    "{topic} alignment chart:",
    "The four horsemen of {topic}:",
    "Tell me you're a {type} without telling me you're a {type}:",
];

pub const BODIES: &[&str] = &[
    "Me explaining {topic} to my family at dinner 💀",
    "{topic} really said \"trust me bro\" and we all believed it",
    "Imagine explaining {topic} to someone from 2019. They'd call the cops.",
    "How it started vs how it's going with {topic}",
    "{topic} is either going to make us rich or give us great stories for therapy",
    "\"I'm in it for the tech\" — me, crying, looking at {topic}",
    "The {topic} doesn't care about your feelings.\n\nAnd neither does mine.",
    "wen {topic}? Best I can do is more volatility.",
    "Therapist: {topic} can't hurt you.\n{topic}:",
    "{topic} speedrun any% 💀 new world record",
    "Me: I'll be responsible with {topic}\nAlso me: *apes entire portfolio*",
    "Breaking: local man discovers {topic}, becomes insufferable at parties",
    "The {topic} experience™:\n1. Excitement\n2. Confusion\n3. Denial\n4. Acceptance\n5. \"I'm never doing this again\"\n6. *does it again*",
    "{topic} said 📈 then said 📉 then said 📈 and honestly same",
    "My risk tolerance vs my net worth after {topic}: 📐↗️ vs 📐↘️",
];

pub fn mood_prefixes(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Bullish => &[
            "We're all gonna make it.",
            "Number only goes up.",
            "LFG 🚀",
            "The vibes have never been better.",
        ],
        Mood::Bearish => &[
            "Pain.",
            "This is fine. 🔥",
            "We deserve this.",
            "My portfolio rn: 📉💀",
            "HODL they said.",
        ],
        Mood::Crabbing => &[
            "Day 47 of nothing happening.",
            "*checks portfolio* *closes app*",
            "Even the charts fell asleep.",
        ],
        Mood::Chaos => &[
            "WHAT IS HAPPENING",
            "SER WHAT",
            "THIS TIMELINE THO",
            "EVERYBODY STAY CALM",
        ],
    }
}

pub fn mood_suffixes(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Bullish => &["🚀", "WAGMI", "bullish af"],
        Mood::Bearish => &["💀", "F in chat", "🪦"],
        Mood::Crabbing => &["😐", "zzzz"],
        Mood::Chaos => &["🔥🔥🔥", "😱", "AAAAAAA"],
    }
}
