use crate::CtaCategory;

pub fn templates(category: CtaCategory) -> &'static [&'static str] {
    match category {
        CtaCategory::Engagement => ENGAGEMENT,
        CtaCategory::Debate => DEBATE,
        CtaCategory::Community => COMMUNITY,
        CtaCategory::Lead => LEAD,
        CtaCategory::Follow => FOLLOW,
    }
}

const ENGAGEMENT: &[&str] = &[
    "What's your take on {topic}? Drop it below 👇\n\nBest reply gets a repost.",
    "Agree or disagree? Quote this with your perspective on {topic}.",
];

const DEBATE: &[&str] = &[
    "I might be wrong about {topic}. Change my mind.\n\nBest counter-argument gets pinned.",
    "{topic} — bullish or bearish? Pick a side and defend it.",
];

const COMMUNITY: &[&str] = &[
    "Who else is deep in the {topic} rabbit hole?\n\nFollow + repost = I follow back everyone interested.",
    "Building a thread series on {topic}.\n\nRepost if you want part 2.",
];

const LEAD: &[&str] = &[
    "I wrote a full breakdown on {topic} (10x deeper than this thread).\n\nDM me \"ALPHA\" and I'll send it.",
    "Want the complete {topic} playbook?\n\nRepost + follow, DM me for the extended guide.",
];

const FOLLOW: &[&str] = &[
    "I share threads like this about {topic} every week.\n\n→ Follow to never miss one\n♻️ Repost to help your network",
    "This is 1 of 7 threads I'm dropping this week on {topic}.\n\nFollow for the rest. 🔖 Bookmark this one.",
];
