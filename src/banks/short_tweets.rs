pub const SHORT_TWEETS: &[&str] = &[
    "The biggest mistake in {topic}: trying to {mistake}.\n\nDo {solution} instead.",
    "{topic} in {year}:\n\n→ {bullet1}\n→ {bullet2}\n→ {bullet3}\n\nThe future is already here.",
    "Hot take: If you're not investing in {topic}, you're falling behind.\n\nHere's why:",
    "One sentence that changed how I think about {topic}:\n\n\"{insight}\"",
    "{topic} cheat code: {tip}\n\nYou're welcome.",
    "The {topic} playbook is simple:\n\n1. {step1}\n2. {step2}\n3. {step3}\n\nStop overcomplicating it.",
    "Why {topic} matters more than ever:\n\nBecause {reason}.\n\nAnd it's only getting started.",
    "If I could only give one piece of advice about {topic}:\n\n{advice}\n\nThat's it. That's the tweet.",
    "The gap between those who understand {topic} and those who don't is growing exponentially.\n\nWhich side are you on?",
    "{topic} truth bomb:\n\n{insight}\n\nSave this tweet.",
    "Everyone wants to talk about {topic}.\n\nNobody wants to put in the work.\n\nThat's your edge.",
    "Underrated {topic} strategy:\n\n{tip}\n\nBookmark this. Thank me later.",
    "The next 90 days will define who wins and who loses in {topic}.\n\nAre you positioned?",
    "{topic} simplified:\n\n1. {step1}\n2. {step2}\n3. {step3}\n\nComplexity is the enemy of execution.",
    "Most people treat {topic} like a sprint.\n\nThe winners treat it like a marathon.\n\nPlay long-term games.",
    "{percentage}% of people will scroll past this.\n\nThe {topic}-literate ones will bookmark it.",
    "Stop asking \"is {topic} dead?\"\n\nStart asking \"what's being built while everyone's distracted?\"",
    "Harsh truth about {topic}:\n\n{insight}\n\nNot what you wanted to hear. But what you needed to.",
    "2 types of people in {topic}:\n\n1. Those who wait for permission\n2. Those who just build\n\nBe #2.",
    "My {topic} stack for {year}:\n\n→ {step1}\n→ {step2}\n→ {step3}\n\nSimple. Effective. Compounding.",
];
