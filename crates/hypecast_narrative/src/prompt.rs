//! Prompt assembly for single-shot and per-category generation.

use hypecast_core::ContentCategory;

/// Placeholder used when neither search enrichment nor user context is
/// available for a fan-out batch.
const NO_CONTEXT_PLACEHOLDER: &str = "No specific context provided.";

/// Merge search enrichment and user-supplied context into the shared
/// context block.
///
/// The result is resolved once per generation call and reused verbatim
/// for every request in a fan-out batch, so all outputs are grounded in
/// the same facts.
///
/// # Examples
///
/// ```
/// use hypecast_narrative::resolve_context;
///
/// let ctx = resolve_context(Some("facts".to_string()), Some("script"));
/// assert!(ctx.contains("REAL-TIME SEARCH FACTS:\nfacts"));
/// assert!(ctx.contains("USER UPLOADED SOURCE:\nscript"));
/// assert!(resolve_context(None, None).is_empty());
/// ```
pub fn resolve_context(search_context: Option<String>, user_context: Option<&str>) -> String {
    let mut full_context = String::new();

    if let Some(search) = search_context.filter(|s| !s.is_empty()) {
        full_context.push_str(&format!("REAL-TIME SEARCH FACTS:\n{}\n\n", search));
    }

    if let Some(user) = user_context.filter(|s| !s.is_empty()) {
        full_context.push_str(&format!("USER UPLOADED SOURCE:\n{}", user));
    }

    full_context
}

/// Build the single-shot prompt requesting all eight output sections.
pub fn build_single_prompt(topic: &str, context: &str) -> String {
    let context_block = if context.is_empty() {
        String::new()
    } else {
        format!("CONTEXT/SOURCE MATERIAL: {}\n\n", context)
    };

    format!(
        "Generate viral multi-platform content for: {topic}\n\n\
{context_block}\
INSTRUCTIONS:\n\
1. Analyze the Topic and Context (if provided).\n\
2. If a script/content is provided in Context, EXTRACT its key messages but REWRITE them to fit the framework below.\n\
3. DO NOT just summarize. You must TRANSFORM the content into the requested format.\n\
4. Ensure the content is viral, engaging, and follows the \"Hook -> Value -> CTA\" principle.\n\n\
OUTPUT FORMAT (YOU MUST GENERATE ALL SECTIONS):\n\n\
CATEGORY: [one of: new_tool_intro, tool_detailed_tutorial, trending_ai_model, ai_trending_news, github_open_source_repo, instagram_engagement_content]\n\n\
MASTER_STORYLINE:\n\
[Write 200-300 words. If source script provided, map its points to the framework nodes. If no script, generate creative content.]\n\
[Follow the framework flow for the category EXACTLY.]\n\n\
YOUTUBE_SCRIPT:\n\
[0:00] Hook - Grab attention\n\
[0:05] Main point 1\n\
[0:15] Main point 2\n\
[0:25] Main point 3\n\
[0:35] Main point 4\n\
[0:50] CTA - Call to action\n\n\
INSTAGRAM_SCRIPT:\n\
HOOK: [Attention grabber]\n\
-> [Point 1]\n\
-> [Point 2]\n\
-> [Point 3]\n\
-> [Point 4]\n\
Save this for later!\n\n\
TWITTER_THREAD:\n\
Tweet 1: [Hook + \"A thread\"]\n\
---\n\
Tweet 2: [First key point]\n\
---\n\
Tweet 3: [Second key point]\n\
---\n\
Tweet 4: [Third key point]\n\
---\n\
Tweet 5: [Fourth key point]\n\
---\n\
Tweet 6: [CTA - Follow for more]\n\n\
CAPTION:\n\
[Hook line]\n\n\
Here's what you need to know:\n\
- [Key point 1]\n\
- [Key point 2]\n\
- [Key point 3]\n\n\
What do you think? Comment below!\n\n\
CTA:\n\
[CTA option 1]\n\
---\n\
[CTA option 2]\n\
---\n\
[CTA option 3]\n\n\
HASHTAGS:\n\
#AI #Tech #Innovation #TechNews #Viral #Trending #MustKnow #Technology #Future #Digital #ContentCreator #SocialMedia\n\n\
IMPORTANT: Generate ALL sections above. Make content specific to the topic \"{topic}\". Be detailed and engaging!"
    )
}

/// Build the per-category prompt used by the fan-out orchestrator.
///
/// The prompt is parameterized by the topic, the category identifier,
/// and the category's narrative flow (its ordered story beats).
pub fn build_category_prompt(topic: &str, category: ContentCategory, context: &str) -> String {
    let context = if context.is_empty() {
        NO_CONTEXT_PLACEHOLDER
    } else {
        context
    };
    let category_id = category.as_str();
    let flow = category.narrative_flow();

    format!(
        "Generate viral content for: {topic}\n\n\
CONTEXT/SOURCE MATERIAL: {context}\n\n\
INSTRUCTIONS:\n\
1. Analyze the Topic and Context.\n\
2. If source script is provided, EXTRACT key points and REWRITE them into the {category_id} framework.\n\
3. STRICTLY follow the node-based structure below.\n\
4. Do not just summarize. Transform the content to be viral and platform-specific.\n\n\
CATEGORY: {category_id}\n\n\
STORY FLOW (Follow EXACTLY):\n\
{flow}\n\n\
Generate content following this EXACT flow:\n\n\
MASTER_STORYLINE:\n\
[Write 150-200 words. Map source content to the flow above. Be creative but accurate.]\n\n\
YOUTUBE_SCRIPT:\n\
[0:00] Hook\n\
[0:10] Point 1\n\
[0:20] Point 2\n\
[0:30] Point 3\n\
[0:50] CTA\n\n\
INSTAGRAM_SCRIPT:\n\
[Hook]\n\
-> [Point 1]\n\
-> [Point 2]\n\
-> [Point 3]\n\
Save this!\n\n\
TWITTER_THREAD:\n\
Tweet 1: [Hook + \"A thread\"]\n\
---\n\
Tweet 2: [Point 1]\n\
---\n\
Tweet 3: [Point 2]\n\
---\n\
Tweet 4: [Point 3]\n\
---\n\
Tweet 5: [CTA]\n\n\
CAPTION:\n\
[Hook]\n\
- [Point 1]\n\
- [Point 2]\n\
- [Point 3]\n\
Comment below!\n\n\
Make it specific to \"{topic}\" following the {category_id} flow."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_resolution_prefixes_search_facts() {
        let ctx = resolve_context(Some("fact block".to_string()), Some("user script"));
        let search_pos = ctx.find("REAL-TIME SEARCH FACTS:").unwrap();
        let user_pos = ctx.find("USER UPLOADED SOURCE:").unwrap();
        assert!(search_pos < user_pos);
    }

    #[test]
    fn empty_search_is_omitted() {
        let ctx = resolve_context(Some(String::new()), Some("user script"));
        assert!(!ctx.contains("REAL-TIME SEARCH FACTS:"));
        assert!(ctx.contains("user script"));
    }

    #[test]
    fn category_prompt_embeds_flow_and_identifier() {
        let prompt = build_category_prompt(
            "New debugging tool",
            ContentCategory::ToolDetailedTutorial,
            "",
        );
        assert!(prompt.contains("tool_detailed_tutorial"));
        assert!(prompt.contains("1. HOOK - Compelling opening"));
        assert!(prompt.contains(NO_CONTEXT_PLACEHOLDER));
    }

    #[test]
    fn single_prompt_requests_every_section() {
        let prompt = build_single_prompt("topic", "");
        for marker in [
            "CATEGORY:",
            "MASTER_STORYLINE:",
            "YOUTUBE_SCRIPT:",
            "INSTAGRAM_SCRIPT:",
            "TWITTER_THREAD:",
            "CAPTION:",
            "CTA:",
            "HASHTAGS:",
        ] {
            assert!(prompt.contains(marker), "missing {marker}");
        }
    }
}
