//! Offline template-based generation.
//!
//! Deterministic generation path used when no completion service is
//! configured. A keyword classifier picks the category, a per-category
//! template produces the master storyline, and the platform variants
//! are derived from the storyline text.

use crate::parser::DEFAULT_HASHTAGS;
use hypecast_core::{ContentCategory, GeneratedContent};

/// Decoration characters stripped from storyline lines before they are
/// reused in platform adaptations. One shared constant so the stripped
/// set cannot diverge between call sites.
const DECORATION_CHARS: &[char] = &[
    '🔥', '💡', '🚀', '✨', '🎯', '💎', '📢', '❌', '📋', '⚡', '🚫', '✅', '🚨', '🤖', '📊', '🌍',
    '👥', '🔮', '📰', '🧠', '🏢', '💬', '⭐', '📦', '🔑', '💻', '📈', '❓', '📝',
];

/// Marker prefix for context footnotes that are excluded from adaptations.
const CONTEXT_LINE_PREFIX: char = '📝';

const BASE_HASHTAGS: [&str; 4] = ["#AI", "#ArtificialIntelligence", "#Tech", "#Innovation"];
const MAX_HASHTAGS: usize = 12;
const MAX_TOPIC_HASHTAGS: usize = 3;
const TWEET_LIMIT: usize = 280;
const FALLBACK_HOOK: &str = "This is going to change everything.";

fn strip_decorations(line: &str) -> String {
    line.replace(DECORATION_CHARS, "").trim().to_string()
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(limit.saturating_sub(3)).collect();
        format!("{}...", prefix)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Template-based content generator.
///
/// # Examples
///
/// ```
/// use hypecast_narrative::TemplateGenerator;
///
/// let record = TemplateGenerator::new().generate("How to learn Rust step by step", None);
/// assert!(!record.twitter_thread.is_empty());
/// assert!(!record.hashtags.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// Creates a new template generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate a full record from a topic without any external service.
    pub fn generate(&self, topic: &str, context: Option<&str>) -> GeneratedContent {
        let category = Self::classify(topic, context);
        let master_storyline = Self::storyline(topic, context, category);

        let youtube_script = Self::adapt_for_youtube(&master_storyline);
        let instagram_script = Self::adapt_for_instagram(&master_storyline);
        let twitter_thread = Self::adapt_for_twitter(&master_storyline);
        let caption = Self::caption(&master_storyline);
        let cta = category.cta_options().iter().map(|s| s.to_string()).collect();
        let hashtags = Self::hashtags(topic, category);

        GeneratedContent {
            topic: topic.to_string(),
            category,
            master_storyline,
            youtube_script,
            instagram_script,
            twitter_thread,
            caption,
            cta,
            hashtags,
            id: None,
            created_at: None,
        }
    }

    /// Keyword-rule topic classifier. Unmatched topics fall back to
    /// [`ContentCategory::FALLBACK`].
    pub fn classify(topic: &str, context: Option<&str>) -> ContentCategory {
        let combined = format!(
            "{} {}",
            topic.to_lowercase(),
            context.unwrap_or_default().to_lowercase()
        );
        let any = |words: &[&str]| words.iter().any(|w| combined.contains(w));

        if any(&["new", "just released", "launched", "introducing", "announcement"])
            && any(&["tool", "app", "platform", "software"])
        {
            return ContentCategory::NewToolIntro;
        }
        if any(&["how to", "tutorial", "guide", "step by step", "learn"]) {
            return ContentCategory::ToolDetailedTutorial;
        }
        if any(&["model", "gpt", "llm", "ai model", "neural network"]) {
            return ContentCategory::TrendingAiModel;
        }
        if any(&["news", "breaking", "trending", "latest", "update"]) {
            return ContentCategory::AiTrendingNews;
        }
        if any(&["github", "open source", "repository", "repo", "code"]) {
            return ContentCategory::GithubOpenSourceRepo;
        }
        if any(&["tip", "trick", "quick", "simple", "easy"]) {
            return ContentCategory::InstagramEngagementContent;
        }

        ContentCategory::FALLBACK
    }

    fn storyline(topic: &str, context: Option<&str>, category: ContentCategory) -> String {
        let body = match category {
            ContentCategory::NewToolIntro => format!(
                "🔥 VIRAL HOOK:\nStop scrolling! This new AI tool is about to change everything.\n\n\
💡 THE PROBLEM:\nContent creators are spending hours on tasks that should take minutes. The old tools are slow, expensive, and complicated.\n\n\
🚀 THE SOLUTION:\n{topic} just dropped, and it's a game-changer.\n\n\
✨ KEY DIFFERENTIATOR:\nUnlike other tools, this one actually understands context and delivers professional results in seconds, not hours.\n\n\
🎯 REAL-WORLD EXAMPLE:\nImagine creating a full week's worth of social media content in under 5 minutes. That's exactly what this does.\n\n\
💎 QUICK BENEFITS:\nSave 10+ hours per week with professional quality output, no learning curve, and affordable pricing.\n\n\
📢 CALL TO ACTION:\nTry it yourself and see the difference. Link in bio!"
            ),
            ContentCategory::ToolDetailedTutorial => format!(
                "🎯 STRONG HOOK:\nWant to master {topic}? Here's the exact step-by-step process.\n\n\
❌ THE PROBLEM:\nMost tutorials are either too vague or too complicated. You need a clear, actionable guide.\n\n\
📋 STEP-BY-STEP WORKFLOW:\nStep 1: Set up your environment before you start. Step 2: Configure the settings that work best. Step 3: Execute the process in order. Step 4: Optimize your results.\n\n\
⚡ KEY TIPS:\nAlways start with default settings, test one change at a time, and save your successful configurations.\n\n\
🚫 MISTAKES TO AVOID:\nDon't rush the setup phase, never skip the testing step, and avoid changing multiple settings at once.\n\n\
✅ FINAL OUTCOME:\nYou'll have a repeatable system that delivers consistent, professional results every time."
            ),
            ContentCategory::TrendingAiModel => format!(
                "🚨 BREAKING:\n{topic} is breaking the internet right now. Here's why.\n\n\
🤖 MODEL OVERVIEW:\nThis isn't just another AI model. It's a fundamental shift in what's possible.\n\n\
💡 UNIQUE INNOVATION:\nThe breakthrough? It can understand context at a level we've never seen before. This changes everything.\n\n\
📊 PERFORMANCE INSIGHTS:\nEarly tests show it outperforms previous models by 40% on complex tasks. The results speak for themselves.\n\n\
🌍 REAL-WORLD APPLICATIONS:\nContent creators generate ideas faster, developers debug code in seconds, businesses automate support, students learn complex topics easily.\n\n\
👥 WHO SHOULD USE THIS:\nAnyone working with AI, content, or data. Seriously, this is for everyone.\n\n\
🔮 FUTURE IMPACT:\nThis is just the beginning. Expect this technology to reshape entire industries in the next 12 months."
            ),
            ContentCategory::AiTrendingNews => format!(
                "⚡ BREAKING NEWS:\n{topic} - and the AI community is going wild.\n\n\
📰 WHAT HAPPENED:\nIn the last 24 hours, a major development has shifted the entire AI landscape.\n\n\
🔥 WHY IT'S TRENDING:\nThis isn't just hype. Real experts are calling this a pivotal moment for the industry.\n\n\
🧠 SIMPLIFIED EXPLANATION:\nThink of it this way: What used to take specialized teams months can now be done by anyone in minutes.\n\n\
🏢 INDUSTRY IMPACT:\nTech companies are scrambling to adapt, investors are paying close attention, and developers are already building on it.\n\n\
💬 EXPERT INSIGHT:\nIndustry leaders are saying this could be as significant as the launch of ChatGPT. That's not an exaggeration."
            ),
            ContentCategory::GithubOpenSourceRepo => format!(
                "⭐ GITHUB ALERT:\n{topic} just hit trending, and developers are losing their minds.\n\n\
📦 REPO OVERVIEW:\nThis open-source project solves a problem that's been plaguing developers for years.\n\n\
🔑 CORE FEATURES:\nLightning-fast performance, zero configuration, works with any tech stack, active community support, comprehensive documentation.\n\n\
💻 WHY DEVELOPERS CARE:\nIt cuts development time in half while improving code quality. That's the dream combo.\n\n\
🎯 EXAMPLE USE CASE:\nInstead of writing 500 lines of boilerplate code, you import this library and you're done in 5 lines.\n\n\
📈 GROWTH SIGNALS:\nThousands of stars in the first week, hundreds of contributors, and major companies adopting it already."
            ),
            ContentCategory::InstagramEngagementContent => format!(
                "💡 QUICK TIP:\n{topic} - this simple trick will save you hours.\n\n\
🎯 THE INSIGHT:\nMost people overcomplicate this. The solution is actually super simple.\n\n\
✨ HERE'S THE EXAMPLE:\nInstead of doing it the hard way, just do this one thing differently. Watch what happens.\n\n\
❓ QUESTION FOR YOU:\nHave you tried this approach? Drop a comment and let me know your experience!\n\n\
🔥 WHY IT WORKS:\nIt's all about working smarter, not harder. This is the shortcut the pros use."
            ),
        };

        match context {
            Some(ctx) if !ctx.is_empty() => format!("{body}\n\n📝 CONTEXT: {ctx}"),
            _ => body,
        }
    }

    fn extract_hook(storyline: &str) -> String {
        storyline
            .lines()
            .map(strip_decorations)
            .find(|line| line.chars().count() > 20 && !line.ends_with(':'))
            .unwrap_or_else(|| FALLBACK_HOOK.to_string())
    }

    /// Content lines usable for adaptations: non-empty, not context
    /// footnotes, decorations stripped.
    fn main_points(storyline: &str) -> Vec<String> {
        storyline
            .lines()
            .filter(|line| !line.trim_start().starts_with(CONTEXT_LINE_PREFIX))
            .map(strip_decorations)
            .filter(|line| !line.is_empty())
            .collect()
    }

    fn adapt_for_youtube(storyline: &str) -> String {
        let hook = Self::extract_hook(storyline);
        let mut script = vec![
            "[OPENING - 0:00]".to_string(),
            format!("Hey! {}", hook),
            String::new(),
            "[MAIN CONTENT - 0:05]".to_string(),
        ];

        for point in Self::main_points(storyline)
            .into_iter()
            .skip(2)
            .filter(|p| p.chars().count() > 10)
            .take(5)
        {
            script.push(point);
        }

        script.push(String::new());
        script.push("[CLOSING - 0:50]".to_string());
        script.push("That's it! Follow for more AI tips.".to_string());
        script.push("Comment below if you have questions!".to_string());

        script.join("\n")
    }

    fn adapt_for_instagram(storyline: &str) -> String {
        let hook = Self::extract_hook(storyline);
        let mut script = vec!["HOOK:".to_string(), hook, String::new()];

        for point in Self::main_points(storyline)
            .into_iter()
            .skip(2)
            .filter(|p| p.chars().count() > 10)
            .take(4)
        {
            // Keep the punchy head of labeled lines.
            let head = point.split(':').next().unwrap_or(&point);
            script.push(format!("→ {}", truncate_chars(head, 80)));
        }

        script.push(String::new());
        script.push("Save this!".to_string());
        script.push("Follow for daily AI tips".to_string());

        script.join("\n")
    }

    fn adapt_for_twitter(storyline: &str) -> Vec<String> {
        let hook = Self::extract_hook(storyline);
        let mut tweets = vec![format!("{}\n\nA thread 🧵", hook)];

        let sections: Vec<Vec<String>> = Self::main_points(storyline)
            .into_iter()
            .filter(|line| line.chars().count() > 15)
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|chunk| chunk.to_vec())
            .collect();

        for (i, section) in sections.into_iter().take(5).enumerate() {
            let content = truncate_chars(&section.join("\n"), TWEET_LIMIT);
            tweets.push(format!("{}/ {}", i + 2, content));
        }

        tweets.push(format!(
            "{}/ Found this helpful?\n\nFollow me for daily AI insights, RT the first tweet to share, and reply with your thoughts!",
            tweets.len() + 1
        ));

        tweets
    }

    fn caption(storyline: &str) -> String {
        let hook = Self::extract_hook(storyline);
        let mut parts = vec![hook, String::new(), "Here's what you need to know:".to_string()];

        for point in Self::main_points(storyline)
            .into_iter()
            .filter(|line| line.chars().count() > 20 && line.contains(':'))
            .take(3)
        {
            let head = point.split(':').next().unwrap_or(&point);
            parts.push(format!("✓ {}", head));
        }

        parts.push(String::new());
        parts.push("What do you think? Comment below!".to_string());
        parts.push("Save this for later and share with someone who needs it.".to_string());

        parts.join("\n")
    }

    fn hashtags(topic: &str, category: ContentCategory) -> Vec<String> {
        let mut tags: Vec<String> = BASE_HASHTAGS.iter().map(|s| s.to_string()).collect();
        tags.extend(category.hashtag_set().iter().map(|s| s.to_string()));
        tags.extend(
            topic
                .to_lowercase()
                .split_whitespace()
                .filter(|word| word.chars().count() > 4)
                .take(MAX_TOPIC_HASHTAGS)
                .map(|word| format!("#{}", capitalize(word))),
        );

        let mut seen = std::collections::HashSet::new();
        tags.retain(|t| seen.insert(t.clone()));
        tags.truncate(MAX_HASHTAGS);

        if tags.is_empty() {
            tags = DEFAULT_HASHTAGS.iter().map(|s| s.to_string()).collect();
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_matches_keyword_rules() {
        let cases = [
            ("Introducing a new AI tool", ContentCategory::NewToolIntro),
            ("How to deploy with Docker", ContentCategory::ToolDetailedTutorial),
            ("GPT-5 benchmark results", ContentCategory::TrendingAiModel),
            ("Breaking AI regulation", ContentCategory::AiTrendingNews),
            ("Awesome github repository", ContentCategory::GithubOpenSourceRepo),
            ("One quick productivity tip", ContentCategory::InstagramEngagementContent),
            ("something unrelated", ContentCategory::FALLBACK),
        ];
        for (topic, expected) in cases {
            assert_eq!(TemplateGenerator::classify(topic, None), expected, "{topic}");
        }
    }

    #[test]
    fn context_participates_in_classification() {
        let category = TemplateGenerator::classify("Shiny thing", Some("full tutorial guide"));
        assert_eq!(category, ContentCategory::ToolDetailedTutorial);
    }

    #[test]
    fn generated_record_satisfies_invariants() {
        let record = TemplateGenerator::new().generate("Quantum widgets", Some("extra context"));
        assert!(!record.master_storyline.is_empty());
        assert!(!record.youtube_script.is_empty());
        assert!(!record.instagram_script.is_empty());
        assert!(!record.caption.is_empty());
        assert!(!record.twitter_thread.is_empty());
        assert_eq!(record.cta.len(), 3);
        assert!(!record.hashtags.is_empty());
        assert!(record.hashtags.len() <= MAX_HASHTAGS);
    }

    #[test]
    fn first_tweet_is_the_hook() {
        let record = TemplateGenerator::new().generate("Quantum widgets", None);
        assert!(record.twitter_thread[0].contains("A thread"));
    }

    #[test]
    fn tweets_fit_the_limit() {
        let record = TemplateGenerator::new().generate("Quantum widgets", None);
        // Numbered body tweets are clamped; hook and CTA are template-bounded.
        for tweet in &record.twitter_thread[1..record.twitter_thread.len() - 1] {
            assert!(tweet.chars().count() <= TWEET_LIMIT + 3);
        }
    }

    #[test]
    fn hashtags_are_unique_and_capped() {
        let record = TemplateGenerator::new().generate(
            "artificial intelligence artificial intelligence artificial",
            None,
        );
        let unique: std::collections::HashSet<_> = record.hashtags.iter().collect();
        assert_eq!(unique.len(), record.hashtags.len());
        assert!(record.hashtags.len() <= MAX_HASHTAGS);
    }

    #[test]
    fn decoration_stripping_removes_emoji_markers() {
        assert_eq!(strip_decorations("🔥 VIRAL HOOK:"), "VIRAL HOOK:");
        assert_eq!(strip_decorations("plain text"), "plain text");
    }

    #[test]
    fn context_lines_are_excluded_from_adaptations() {
        let record = TemplateGenerator::new().generate("Quantum widgets", Some("secret context"));
        assert!(record.master_storyline.contains("secret context"));
        assert!(!record.youtube_script.contains("secret context"));
    }
}
