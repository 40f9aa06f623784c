use crate::catalog::ContentCatalog;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub const FALLBACK_RESPONSE: &str = "I can tell you about my skills, projects, blog posts, and technical experience. What specific aspect would you like to know more about?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Skills,
    Projects,
    Blog,
    Experience,
    About,
    React,
}

/// A topic, the lowercase substrings that select it, and the answer it renders.
pub struct Rule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
    pub respond: fn(&ContentCatalog) -> String,
}

impl Rule {
    fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|trigger| normalized.contains(trigger))
    }
}

/// Evaluated top to bottom; the first match answers. A question mentioning both
/// "react" and "project" is a projects question.
pub const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Skills,
        triggers: &["skill", "technology", "tech stack"],
        respond: skills_response,
    },
    Rule {
        topic: Topic::Projects,
        triggers: &["project", "work", "portfolio"],
        respond: projects_response,
    },
    Rule {
        topic: Topic::Blog,
        triggers: &["blog", "article", "write"],
        respond: blog_response,
    },
    Rule {
        topic: Topic::Experience,
        triggers: &["experience", "background"],
        respond: experience_response,
    },
    Rule {
        topic: Topic::About,
        triggers: &["about you", "who are you", "introduction"],
        respond: about_response,
    },
    Rule {
        topic: Topic::React,
        triggers: &["react"],
        respond: react_response,
    },
];

fn skills_response(catalog: &ContentCatalog) -> String {
    format!(
        "I specialize in various technologies across the stack. For frontend development, I work with {}. On the backend, I'm proficient in {}. I also use tools like {} in my development workflow.",
        catalog.skills.frontend.join(", "),
        catalog.skills.backend.join(", "),
        catalog.skills.tools.join(", ")
    )
}

fn projects_response(catalog: &ContentCatalog) -> String {
    let projects = catalog
        .projects
        .iter()
        .map(|p| format!("{} ({})", p.title, p.tech.join(", ")))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "I've worked on several significant projects including: {}. Would you like to know more about any specific project?",
        projects
    )
}

fn blog_response(catalog: &ContentCatalog) -> String {
    let titles = catalog
        .posts
        .iter()
        .map(|p| p.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "I write about various technical topics including {}. My recent articles cover {}. Which topic interests you the most?",
        catalog.blog_topics().join(", "),
        titles
    )
}

fn experience_response(catalog: &ContentCatalog) -> String {
    catalog.bio.experience.clone()
}

fn about_response(catalog: &ContentCatalog) -> String {
    let mut parts = Vec::with_capacity(catalog.bio.details.len() + 1);
    parts.push(catalog.bio.introduction.as_str());
    parts.extend(catalog.bio.details.iter().map(String::as_str));
    parts.join(" ")
}

fn react_response(catalog: &ContentCatalog) -> String {
    let titles = catalog
        .projects_using("React")
        .map(|p| p.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "I have extensive experience with React and Next.js, using them in projects like {}. I also write about React development in my blog, covering topics like optimization and best practices.",
        titles
    )
}

/// Topic of the first rule whose trigger occurs in the query, if any.
pub fn classify(query: &str) -> Option<Topic> {
    let normalized = query.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.topic)
}

pub fn generate_response(catalog: &ContentCatalog, query: &str) -> String {
    let normalized = query.to_lowercase();
    match RULES.iter().find(|rule| rule.matches(&normalized)) {
        Some(rule) => {
            debug!("Chat query matched topic {:?}", rule.topic);
            (rule.respond)(catalog)
        }
        None => {
            debug!("Chat query matched no topic, using fallback");
            FALLBACK_RESPONSE.to_string()
        }
    }
}

/// Answers chat questions from a shared catalog.
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    catalog: Arc<ContentCatalog>,
}

impl ResponseGenerator {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self { catalog }
    }

    pub fn generate_response(&self, query: &str) -> String {
        generate_response(&self.catalog, query)
    }

    pub fn classify(&self, query: &str) -> Option<Topic> {
        classify(query)
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> ResponseGenerator {
        ResponseGenerator::new(Arc::new(ContentCatalog::builtin()))
    }

    #[test]
    fn test_skills_response_lists_every_frontend_skill() {
        let generator = generator();
        for query in ["What are your skills?", "Which TECHNOLOGY do you use", "your tech stack"] {
            let response = generator.generate_response(query);
            for skill in &generator.catalog().skills.frontend {
                assert!(response.contains(skill), "{} missing from {}", skill, response);
            }
        }
    }

    #[test]
    fn test_skills_response_text() {
        let response = generator().generate_response("skills");
        assert_eq!(
            response,
            "I specialize in various technologies across the stack. For frontend development, I work with React/Next.js, TypeScript, Tailwind CSS, SCSS. On the backend, I'm proficient in Node.js, Express, PHP. I also use tools like Git, Firebase, Recharts, Zustand, Stripe, Framer Motion, AI in my development workflow."
        );
    }

    #[test]
    fn test_fallback_for_empty_and_unknown() {
        let generator = generator();
        assert_eq!(generator.generate_response(""), FALLBACK_RESPONSE);
        assert_eq!(generator.generate_response("xyzzy"), FALLBACK_RESPONSE);
        assert_eq!(generator.classify("xyzzy"), None);
    }

    #[test]
    fn test_deterministic() {
        let generator = generator();
        let query = "Tell me about your projects.";
        assert_eq!(
            generator.generate_response(query),
            generator.generate_response(query)
        );
    }

    #[test]
    fn test_priority_order_is_first_match() {
        let generator = generator();
        let query = "tell me about your react project skills";
        assert_eq!(generator.classify(query), Some(Topic::Skills));
        assert_eq!(
            generator.generate_response(query),
            generator.generate_response("skills")
        );

        assert_eq!(generator.classify("react projects"), Some(Topic::Projects));
        assert_eq!(generator.classify("Do you write about React?"), Some(Topic::Blog));
        assert_eq!(generator.classify("I love React"), Some(Topic::React));
    }

    #[test]
    fn test_projects_response_format() {
        let response = generator().generate_response("show me your portfolio");
        assert!(response.starts_with("I've worked on several significant projects including: Personal Budget Tracker (React, TypeScript, Tailwind CSS, Firebase, Recharts, React Hook Form, Currency.js), Modern Dashboard ("));
        assert!(response.ends_with(". Would you like to know more about any specific project?"));
    }

    #[test]
    fn test_blog_response_deduplicates_topics() {
        let response = generator().generate_response("What is your blog about?");
        assert_eq!(
            response,
            "I write about various technical topics including AI, ChatGPT, React, Web Development, Trends, Technology, Performance, Optimization. My recent articles cover Building an AI-Powered Chat Assistant, The Future of Web Development, Optimizing React Applications. Which topic interests you the most?"
        );
    }

    #[test]
    fn test_experience_and_about() {
        let generator = generator();
        let catalog = generator.catalog();
        assert_eq!(
            generator.generate_response("Can you share your experience?"),
            catalog.bio.experience
        );

        let about = generator.generate_response("Who are you?");
        assert!(about.starts_with(&catalog.bio.introduction));
        assert!(about.ends_with(&catalog.bio.details[1]));
        assert_eq!(
            about,
            format!(
                "{} {} {}",
                catalog.bio.introduction, catalog.bio.details[0], catalog.bio.details[1]
            )
        );
    }

    #[test]
    fn test_react_lists_only_react_projects() {
        let response = generator().generate_response("react?");
        assert!(response.contains(
            "in projects like Personal Budget Tracker, ModernStore - React E-commerce Platform, Siphome Smart Home System."
        ));
        assert!(!response.contains("Modern Dashboard"));
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let topics: Vec<_> = RULES.iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            vec![
                Topic::Skills,
                Topic::Projects,
                Topic::Blog,
                Topic::Experience,
                Topic::About,
                Topic::React,
            ]
        );
    }
}
