//! The closed enumeration of content categories.

use crate::{NarrativeFlow, StoryBeat};
use serde::{Deserialize, Serialize};

const NEW_TOOL_INTRO_FLOW: &[StoryBeat] = &[
    StoryBeat::new("SCROLL HOOK", "Stop scrolling! Attention grabber"),
    StoryBeat::new("USER PROBLEM", "What problem does this solve?"),
    StoryBeat::new("TOOL INTRODUCTION", "Introduce the tool"),
    StoryBeat::new("UNIQUE DIFFERENTIATOR", "What makes it special?"),
    StoryBeat::new("REAL USE CASE", "Show it in action"),
    StoryBeat::new("WHY IT MATTERS NOW", "Urgency"),
    StoryBeat::new("CALL TO ACTION", "Tell the viewer what to do next"),
];

const TOOL_TUTORIAL_FLOW: &[StoryBeat] = &[
    StoryBeat::new("HOOK", "Compelling opening"),
    StoryBeat::new("PROBLEM STATEMENT", "Challenge to solve"),
    StoryBeat::new("TOOL OVERVIEW", "Brief introduction"),
    StoryBeat::new("STEP 1, 2, 3", "Action steps"),
    StoryBeat::new("PRO TIPS", "Expert advice"),
    StoryBeat::new("COMMON MISTAKES", "What to avoid"),
    StoryBeat::new("FINAL RESULT", "What they'll achieve"),
    StoryBeat::new("CTA", "Call to action"),
];

const TRENDING_MODEL_FLOW: &[StoryBeat] = &[
    StoryBeat::new("BREAKING HOOK", "News-style opening"),
    StoryBeat::new("MODEL INTRODUCTION", "Name and overview"),
    StoryBeat::new("KEY INNOVATION", "What's new?"),
    StoryBeat::new("PERFORMANCE INSIGHT", "How well it works"),
    StoryBeat::new("REAL WORLD APPLICATIONS", "Practical uses"),
    StoryBeat::new("TARGET USERS", "Who should use this"),
    StoryBeat::new("FUTURE IMPACT", "Long-term meaning"),
    StoryBeat::new("CTA", "Call to action"),
];

const TRENDING_NEWS_FLOW: &[StoryBeat] = &[
    StoryBeat::new("VIRAL HOOK", "Trending news angle"),
    StoryBeat::new("WHAT HAPPENED", "The news/event"),
    StoryBeat::new("WHY IT IS TRENDING", "Why people care"),
    StoryBeat::new("SIMPLIFIED EXPLANATION", "Break it down"),
    StoryBeat::new("INDUSTRY IMPACT", "Broader implications"),
    StoryBeat::new("EXPERT INSIGHT", "Analysis"),
    StoryBeat::new("CTA", "Call to action"),
];

const GITHUB_REPO_FLOW: &[StoryBeat] = &[
    StoryBeat::new("HOOK", "Developer-focused opening"),
    StoryBeat::new("REPOSITORY OVERVIEW", "What is it?"),
    StoryBeat::new("CORE FEATURES", "Key capabilities"),
    StoryBeat::new("WHY DEVELOPERS LIKE IT", "Benefits"),
    StoryBeat::new("USE CASE EXAMPLE", "Practical example"),
    StoryBeat::new("TREND SIGNALS", "Stars, adoption"),
    StoryBeat::new("CTA", "Call to action"),
];

const ENGAGEMENT_FLOW: &[StoryBeat] = &[
    StoryBeat::new("RELATABLE HOOK", "Connect with audience"),
    StoryBeat::new("QUICK INSIGHT", "The main tip"),
    StoryBeat::new("SIMPLE EXAMPLE", "Show how it works"),
    StoryBeat::new("AUDIENCE QUESTION", "Engage them"),
    StoryBeat::new("MICRO TAKEAWAY", "Key learning"),
    StoryBeat::new("CTA", "Call to action"),
];

/// Content archetypes, each with its own narrative flow.
///
/// The enumeration is closed: every operation on a category is an
/// exhaustive match, and unrecognized identifiers resolve to the
/// fallback category ([`ContentCategory::NewToolIntro`]) rather than
/// surfacing as free-form strings.
///
/// The serialized identifiers are stable and match the values stored in
/// the `category` column of `content_history`.
///
/// # Examples
///
/// ```
/// use hypecast_core::ContentCategory;
/// use std::str::FromStr;
///
/// assert_eq!(ContentCategory::TrendingAiModel.as_str(), "trending_ai_model");
/// assert_eq!(
///     ContentCategory::from_str("github_open_source_repo").unwrap(),
///     ContentCategory::GithubOpenSourceRepo,
/// );
/// assert_eq!(ContentCategory::from_identifier("nonsense"), ContentCategory::NewToolIntro);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentCategory {
    /// Introducing newly released tools
    NewToolIntro,
    /// Step-by-step guides and tutorials
    ToolDetailedTutorial,
    /// Coverage of trending AI models and capabilities
    TrendingAiModel,
    /// Latest AI news and trending discussions
    AiTrendingNews,
    /// GitHub repos and open-source projects
    GithubOpenSourceRepo,
    /// Casual tips and audience interaction content
    InstagramEngagementContent,
}

impl ContentCategory {
    /// Number of categories in the enumeration.
    pub const COUNT: usize = 6;

    /// The fallback category used when classification or parsing
    /// produces no recognized value.
    pub const FALLBACK: Self = Self::NewToolIntro;

    /// Stable snake_case identifier, e.g. `"trending_ai_model"`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Resolve an identifier, falling back to [`Self::FALLBACK`] for
    /// anything outside the enumeration.
    pub fn from_identifier(s: &str) -> Self {
        s.trim().parse().unwrap_or(Self::FALLBACK)
    }

    /// Human-readable name shown in listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NewToolIntro => "New Tool Introduction",
            Self::ToolDetailedTutorial => "Detailed Tutorial",
            Self::TrendingAiModel => "Trending AI Model",
            Self::AiTrendingNews => "AI News",
            Self::GithubOpenSourceRepo => "Open Source Repository",
            Self::InstagramEngagementContent => "Engagement Content",
        }
    }

    /// One-line description of the archetype.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NewToolIntro => "Introducing newly released AI tools",
            Self::ToolDetailedTutorial => "Step-by-step guides and tutorials",
            Self::TrendingAiModel => "Coverage of trending AI models and capabilities",
            Self::AiTrendingNews => "Latest AI news and trending discussions",
            Self::GithubOpenSourceRepo => "GitHub repos and open-source projects",
            Self::InstagramEngagementContent => "Casual tips and audience interaction content",
        }
    }

    /// The ordered story beats used to parameterize this category's prompt.
    pub fn narrative_flow(&self) -> NarrativeFlow {
        match self {
            Self::NewToolIntro => NarrativeFlow::new(NEW_TOOL_INTRO_FLOW),
            Self::ToolDetailedTutorial => NarrativeFlow::new(TOOL_TUTORIAL_FLOW),
            Self::TrendingAiModel => NarrativeFlow::new(TRENDING_MODEL_FLOW),
            Self::AiTrendingNews => NarrativeFlow::new(TRENDING_NEWS_FLOW),
            Self::GithubOpenSourceRepo => NarrativeFlow::new(GITHUB_REPO_FLOW),
            Self::InstagramEngagementContent => NarrativeFlow::new(ENGAGEMENT_FLOW),
        }
    }

    /// Alternative call-to-action phrasings for this category.
    pub fn cta_options(&self) -> [&'static str; 3] {
        match self {
            Self::NewToolIntro => [
                "Try it yourself - link in bio!",
                "Click the link to get started for free",
                "Join 10,000+ creators already using this",
            ],
            Self::ToolDetailedTutorial => [
                "Follow for more step-by-step guides",
                "Save this tutorial for when you need it",
                "Comment 'GUIDE' for the full PDF version",
            ],
            Self::TrendingAiModel => [
                "Follow for daily AI model updates",
                "Share this with your AI community",
                "Comment your thoughts below!",
            ],
            Self::AiTrendingNews => [
                "Follow for breaking AI news",
                "Turn on notifications to stay updated",
                "Share your take in the comments",
            ],
            Self::GithubOpenSourceRepo => [
                "Star the repo if you find it useful",
                "Follow for more open-source discoveries",
                "Comment if you've tried this!",
            ],
            Self::InstagramEngagementContent => [
                "Save this tip for later!",
                "Try it and tag me in your results",
                "Follow for daily quick tips",
            ],
        }
    }

    /// Category-specific hashtags appended to the shared base set.
    pub fn hashtag_set(&self) -> &'static [&'static str] {
        match self {
            Self::NewToolIntro => &["#AITools", "#ProductLaunch", "#TechNews", "#NewTech"],
            Self::ToolDetailedTutorial => &["#Tutorial", "#HowTo", "#LearnAI", "#TechTutorial"],
            Self::TrendingAiModel => {
                &["#AIModel", "#MachineLearning", "#DeepLearning", "#AIResearch"]
            }
            Self::AiTrendingNews => &["#AINews", "#TechNews", "#TrendingNow", "#BreakingNews"],
            Self::GithubOpenSourceRepo => &["#OpenSource", "#GitHub", "#Coding", "#Developer"],
            Self::InstagramEngagementContent => {
                &["#TechTips", "#QuickTip", "#LifeHack", "#Productivity"]
            }
        }
    }
}

impl Default for ContentCategory {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn identifiers_round_trip() {
        for category in ContentCategory::iter() {
            assert_eq!(ContentCategory::from_identifier(category.as_str()), category);
        }
    }

    #[test]
    fn unknown_identifier_falls_back() {
        assert_eq!(
            ContentCategory::from_identifier("definitely_not_a_category"),
            ContentCategory::FALLBACK
        );
        assert_eq!(ContentCategory::from_identifier(""), ContentCategory::FALLBACK);
    }

    #[test]
    fn enumeration_order_is_stable() {
        let order: Vec<_> = ContentCategory::iter().collect();
        assert_eq!(order.len(), ContentCategory::COUNT);
        assert_eq!(order[0], ContentCategory::NewToolIntro);
        assert_eq!(order[5], ContentCategory::InstagramEngagementContent);
    }

    #[test]
    fn every_flow_ends_with_a_cta_beat() {
        for category in ContentCategory::iter() {
            let flow = category.narrative_flow();
            let last = flow.beats.last().expect("flow has beats");
            assert!(last.name.contains("CTA") || last.name.contains("CALL TO ACTION"));
        }
    }

    #[test]
    fn serde_uses_snake_case_identifiers() {
        let json = serde_json::to_string(&ContentCategory::AiTrendingNews).unwrap();
        assert_eq!(json, "\"ai_trending_news\"");
        let back: ContentCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContentCategory::AiTrendingNews);
    }
}
