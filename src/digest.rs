use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkDigest {
    pub title: String,
    pub top_headings: Vec<String>,
    pub top_insights: Vec<String>,
    pub top_stats: Vec<String>,
    pub top_quotes: Vec<String>,
    pub top_bullets: Vec<String>,
    pub summary: String,
    pub author: String,
    pub source_url: String,
}
