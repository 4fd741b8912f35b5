//! Project showcase descriptors.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// One project's showcase content.
///
/// Descriptors are plain data: defined once as a literal list, iterated by
/// the showcase renderer, never mutated. The `slug` becomes the output
/// filename stem and must be filesystem-safe; no other validation is
/// performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    /// Technology tags, rendered as a row of chips in order
    pub tech: Vec<String>,
    /// Feature highlights, one bulleted line each in order
    pub highlights: Vec<String>,
    /// Accent color used for the strip, glow, name and SOLUTION label
    pub accent: Rgb,
    pub pain: String,
    pub solution: String,
    pub result: String,
}

/// The literal showcase list
pub fn showcase_projects() -> Vec<ProjectDescriptor> {
    vec![
        ProjectDescriptor {
            slug: "infohunter".to_string(),
            name: "InfoHunter".to_string(),
            tagline: "AI-Powered Social Media Monitor".to_string(),
            tech: vec![
                "Python".to_string(),
                "FastAPI".to_string(),
                "MySQL".to_string(),
                "Docker".to_string(),
            ],
            highlights: vec![
                "3-stage decoupled architecture".to_string(),
                "AG-UI protocol".to_string(),
                "Multi-platform support".to_string(),
            ],
            accent: (76, 110, 245),
            pain: "Social media scattered, manual tracking inefficient".to_string(),
            solution: "Auto-crawl + AI analysis + smart push".to_string(),
            result: "Zero info loss, 90% time saved".to_string(),
        },
        ProjectDescriptor {
            slug: "TrendRadar".to_string(),
            name: "TrendRadar".to_string(),
            tagline: "Real-time Trend Aggregation System v6.0".to_string(),
            tech: vec![
                "Python".to_string(),
                "SQLite".to_string(),
                "LiteLLM".to_string(),
                "Docker".to_string(),
            ],
            highlights: vec![
                "11+ platform aggregation".to_string(),
                "AI analysis & summary".to_string(),
                "Multi-channel push".to_string(),
                "MCP integration".to_string(),
            ],
            accent: (255, 146, 43),
            pain: "Trends scattered across 11+ platforms".to_string(),
            solution: "Auto aggregation + AI analysis + multi-push".to_string(),
            result: "Production v6.0, zero-delay awareness".to_string(),
        },
        ProjectDescriptor {
            slug: "truthsocial-trump-monitor".to_string(),
            name: "TruthSocial Monitor".to_string(),
            tagline: "Trump Social Media Intelligence".to_string(),
            tech: vec![
                "Python".to_string(),
                "FastAPI".to_string(),
                "MySQL".to_string(),
                "Docker".to_string(),
            ],
            highlights: vec![
                "Real-time Trump post alerts".to_string(),
                "AI macro-economic analysis".to_string(),
                "Auto daily/weekly reports".to_string(),
            ],
            accent: (81, 207, 102),
            pain: "Trump posts impact markets instantly".to_string(),
            solution: "AI real-time monitoring + macro analysis".to_string(),
            result: "Second-level push, auto market impact analysis".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_three_projects() {
        assert_eq!(showcase_projects().len(), 3);
    }

    #[test]
    fn slugs_are_filesystem_safe() {
        for project in showcase_projects() {
            assert!(!project.slug.is_empty());
            assert!(project
                .slug
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }
}
