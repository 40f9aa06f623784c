use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Skills {
    pub fn category(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Tools => &self.tools,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub github: String,
    pub live: String,
}

impl Project {
    pub fn uses(&self, tech: &str) -> bool {
        self.tech.iter().any(|t| t == tech)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub slug: String,
    /// Ordered as written; duplicates carry no meaning.
    #[serde(default)]
    pub topics: Vec<String>,
}

impl BlogPost {
    pub fn shared_topics(&self, other: &BlogPost) -> usize {
        self.topics
            .iter()
            .filter(|topic| other.topics.contains(topic))
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bio {
    pub introduction: String,
    #[serde(default)]
    pub details: Vec<String>,
    /// Answer given when a visitor asks about experience or background.
    pub experience: String,
    pub resume_link: String,
}

/// The site's static content. Built once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    pub bio: Bio,
}
