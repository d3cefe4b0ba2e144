//! Marker-based parsing of completion responses.
//!
//! Completion models are asked to emit eight labeled sections, but the
//! output format is not contractually guaranteed: sections may be
//! partial, reordered, or absent entirely. The parser is therefore a
//! total function — every input, including the empty string, produces a
//! fully populated record via a two-rung fallback ladder (per-field
//! defaults, then a whole-response fallback when no marker was found).

use hypecast_core::{ContentCategory, GeneratedContent};

/// Default call-to-action phrasings used when the response omitted the
/// `CTA:` section.
pub const DEFAULT_CTAS: [&str; 3] = [
    "Follow for more!",
    "Share this post!",
    "Comment your thoughts!",
];

/// Default hashtags used when the response omitted the `HASHTAGS:` section.
pub const DEFAULT_HASHTAGS: [&str; 3] = ["#AI", "#Tech", "#Innovation"];

/// Delimiter between thread posts and between CTA alternatives.
const SEGMENT_DELIMITER: &str = "---";

const STORYLINE_FALLBACK_CHARS: usize = 500;
const YOUTUBE_FALLBACK_CHARS: usize = 500;
const INSTAGRAM_FALLBACK_CHARS: usize = 300;
const CAPTION_FALLBACK_CHARS: usize = 200;
const TWEET_FALLBACK_CHARS: usize = 280;

/// The recognized section markers, matched case-sensitively at the
/// start of a trimmed line and followed by a colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Category,
    MasterStoryline,
    YoutubeScript,
    InstagramScript,
    TwitterThread,
    Caption,
    Cta,
    Hashtags,
}

const SECTION_MARKERS: [(&str, Section); 8] = [
    ("CATEGORY:", Section::Category),
    ("MASTER_STORYLINE:", Section::MasterStoryline),
    ("YOUTUBE_SCRIPT:", Section::YoutubeScript),
    ("INSTAGRAM_SCRIPT:", Section::InstagramScript),
    ("TWITTER_THREAD:", Section::TwitterThread),
    ("CAPTION:", Section::Caption),
    ("CTA:", Section::Cta),
    ("HASHTAGS:", Section::Hashtags),
];

fn match_marker(line: &str) -> Option<(Section, &str)> {
    SECTION_MARKERS
        .iter()
        .find_map(|(marker, section)| line.strip_prefix(marker).map(|rest| (*section, rest)))
}

/// First `n` characters of `text`, on char boundaries.
fn char_prefix(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// Join buffered lines with blank-line separators and trim.
fn join_paragraphs(lines: &[&str]) -> String {
    lines.join("\n\n").trim().to_string()
}

/// Split section text on the `---` delimiter, trimming each segment and
/// dropping segments that are empty after trimming.
fn split_segments(lines: &[&str]) -> Vec<String> {
    lines
        .join("\n")
        .split(SEGMENT_DELIMITER)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Keep whitespace-separated tokens that start with `#`, in order.
fn collect_hashtags(lines: &[&str]) -> Vec<String> {
    lines
        .join(" ")
        .split_whitespace()
        .filter(|token| token.starts_with('#'))
        .map(|token| token.to_string())
        .collect()
}

fn dedup_preserving_order(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter().filter(|t| seen.insert(t.clone())).collect()
}

#[derive(Default)]
struct SectionAccumulator {
    category: Option<ContentCategory>,
    master_storyline: String,
    youtube_script: String,
    instagram_script: String,
    twitter_thread: Vec<String>,
    caption: String,
    cta: Vec<String>,
    hashtags: Vec<String>,
}

impl SectionAccumulator {
    fn flush(&mut self, section: Section, buffer: &[&str]) {
        match section {
            Section::Category => {
                let raw = join_paragraphs(buffer);
                if !raw.is_empty() {
                    // Unknown identifiers resolve to the fallback category.
                    self.category = Some(ContentCategory::from_identifier(&raw));
                }
            }
            Section::MasterStoryline => self.master_storyline = join_paragraphs(buffer),
            Section::YoutubeScript => self.youtube_script = join_paragraphs(buffer),
            Section::InstagramScript => self.instagram_script = join_paragraphs(buffer),
            Section::TwitterThread => self.twitter_thread = split_segments(buffer),
            Section::Caption => self.caption = join_paragraphs(buffer),
            Section::Cta => self.cta = split_segments(buffer),
            Section::Hashtags => self.hashtags = collect_hashtags(buffer),
        }
    }
}

/// Parse a completion response into a fully populated record.
///
/// Total function of its inputs: there is no error outcome. When the
/// text contains no recognized marker at all, structured parsing is
/// abandoned and the whole response backs every field (silently — the
/// caller cannot distinguish the fallback from a sparse but marked
/// response).
///
/// `category_hint` is used when the response carries no parseable
/// `CATEGORY:` section. Fan-out callers overwrite the parsed category
/// with the one they requested regardless; see
/// [`crate::FanoutGenerator`].
///
/// # Examples
///
/// ```
/// use hypecast_core::ContentCategory;
/// use hypecast_narrative::parse_response;
///
/// let raw = "MASTER_STORYLINE:\nHello world\n\nHASHTAGS:\n#AI #Tech";
/// let record = parse_response(raw, "my topic", ContentCategory::FALLBACK);
/// assert_eq!(record.master_storyline, "Hello world");
/// assert_eq!(record.hashtags, vec!["#AI", "#Tech"]);
/// assert!(!record.twitter_thread.is_empty());
/// ```
pub fn parse_response(
    raw_text: &str,
    topic: &str,
    category_hint: ContentCategory,
) -> GeneratedContent {
    let mut acc = SectionAccumulator::default();
    let mut current: Option<Section> = None;
    let mut buffer: Vec<&str> = Vec::new();
    let mut found_marker = false;

    for line in raw_text.lines() {
        let trimmed = line.trim();
        if let Some((section, rest)) = match_marker(trimmed) {
            if let Some(previous) = current {
                acc.flush(previous, &buffer);
            }
            current = Some(section);
            buffer.clear();
            let rest = rest.trim();
            if !rest.is_empty() {
                buffer.push(rest);
            }
            found_marker = true;
        } else if current.is_some() && !trimmed.is_empty() {
            buffer.push(trimmed);
        }
    }
    if let Some(previous) = current {
        acc.flush(previous, &buffer);
    }

    if !found_marker {
        return whole_response_fallback(raw_text, topic, category_hint);
    }

    finalize(acc, raw_text, topic, category_hint)
}

fn finalize(
    acc: SectionAccumulator,
    raw_text: &str,
    topic: &str,
    category_hint: ContentCategory,
) -> GeneratedContent {
    let master_storyline = if acc.master_storyline.is_empty() {
        char_prefix(raw_text, STORYLINE_FALLBACK_CHARS)
    } else {
        acc.master_storyline
    };

    let twitter_thread = if acc.twitter_thread.is_empty() {
        vec![char_prefix(raw_text, TWEET_FALLBACK_CHARS)]
    } else {
        acc.twitter_thread
    };

    let cta = if acc.cta.is_empty() {
        DEFAULT_CTAS.iter().map(|s| s.to_string()).collect()
    } else {
        acc.cta
    };

    let hashtags = if acc.hashtags.is_empty() {
        DEFAULT_HASHTAGS.iter().map(|s| s.to_string()).collect()
    } else {
        dedup_preserving_order(acc.hashtags)
    };

    GeneratedContent {
        topic: topic.to_string(),
        category: acc.category.unwrap_or(category_hint),
        master_storyline,
        youtube_script: acc.youtube_script,
        instagram_script: acc.instagram_script,
        twitter_thread,
        caption: acc.caption,
        cta,
        hashtags,
        id: None,
        created_at: None,
    }
}

/// Fallback for responses with no recognized section markers: the whole
/// response backs every field via fixed-length prefixes.
fn whole_response_fallback(
    raw_text: &str,
    topic: &str,
    category_hint: ContentCategory,
) -> GeneratedContent {
    GeneratedContent {
        topic: topic.to_string(),
        category: category_hint,
        master_storyline: raw_text.to_string(),
        youtube_script: char_prefix(raw_text, YOUTUBE_FALLBACK_CHARS),
        instagram_script: char_prefix(raw_text, INSTAGRAM_FALLBACK_CHARS),
        twitter_thread: vec![char_prefix(raw_text, TWEET_FALLBACK_CHARS)],
        caption: char_prefix(raw_text, CAPTION_FALLBACK_CHARS),
        cta: DEFAULT_CTAS.iter().map(|s| s.to_string()).collect(),
        hashtags: DEFAULT_HASHTAGS.iter().map(|s| s.to_string()).collect(),
        id: None,
        created_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_response_round_trips() {
        let raw = "CATEGORY: trending_ai_model\n\n\
            MASTER_STORYLINE:\nThe storyline text.\n\n\
            YOUTUBE_SCRIPT:\n[0:00] Hook\n\n\
            INSTAGRAM_SCRIPT:\nHOOK line\n\n\
            TWITTER_THREAD:\nTweet one\n---\nTweet two\n\n\
            CAPTION:\nThe caption.\n\n\
            CTA:\nDo this\n---\nDo that\n\n\
            HASHTAGS:\n#One #Two";

        let record = parse_response(raw, "topic", ContentCategory::FALLBACK);
        assert_eq!(record.category, ContentCategory::TrendingAiModel);
        assert_eq!(record.master_storyline, "The storyline text.");
        assert_eq!(record.youtube_script, "[0:00] Hook");
        assert_eq!(record.instagram_script, "HOOK line");
        assert_eq!(record.twitter_thread, vec!["Tweet one", "Tweet two"]);
        assert_eq!(record.caption, "The caption.");
        assert_eq!(record.cta, vec!["Do this", "Do that"]);
        assert_eq!(record.hashtags, vec!["#One", "#Two"]);
    }

    #[test]
    fn spec_scenario_partial_sections() {
        let raw = "CATEGORY: trending_ai_model\n\nMASTER_STORYLINE:\nHello world\n\nHASHTAGS:\n#AI #Tech";
        let record = parse_response(raw, "topic", ContentCategory::FALLBACK);

        assert_eq!(record.category, ContentCategory::TrendingAiModel);
        assert_eq!(record.master_storyline, "Hello world");
        assert_eq!(record.hashtags, vec!["#AI", "#Tech"]);
        assert!(!record.twitter_thread.is_empty());
        assert_eq!(record.cta.len(), DEFAULT_CTAS.len());
    }

    #[test]
    fn zero_markers_falls_back_to_whole_response() {
        let raw = "Just a plain model reply with no sections at all.";
        let record = parse_response(raw, "topic", ContentCategory::FALLBACK);

        assert_eq!(record.master_storyline, raw);
        assert_eq!(record.youtube_script, raw);
        assert_eq!(record.twitter_thread, vec![raw.to_string()]);
        assert!(!record.cta.is_empty());
        assert!(!record.hashtags.is_empty());
    }

    #[test]
    fn empty_input_still_populates_sequences() {
        let record = parse_response("", "topic", ContentCategory::FALLBACK);
        assert_eq!(record.topic, "topic");
        assert_eq!(record.category, ContentCategory::FALLBACK);
        assert_eq!(record.twitter_thread.len(), 1);
        assert_eq!(record.cta.len(), 3);
        assert_eq!(record.hashtags.len(), 3);
    }

    #[test]
    fn delimiter_split_drops_blank_segments() {
        let raw = "TWITTER_THREAD:\nA\n---\n\nB\n---\nC";
        let record = parse_response(raw, "topic", ContentCategory::FALLBACK);
        assert_eq!(record.twitter_thread, vec!["A", "B", "C"]);
    }

    #[test]
    fn unknown_category_resolves_to_fallback() {
        let raw = "CATEGORY: totally_made_up\n\nMASTER_STORYLINE:\nText";
        let record = parse_response(raw, "topic", ContentCategory::AiTrendingNews);
        assert_eq!(record.category, ContentCategory::FALLBACK);
    }

    #[test]
    fn missing_category_uses_hint() {
        let raw = "MASTER_STORYLINE:\nText";
        let record = parse_response(raw, "topic", ContentCategory::GithubOpenSourceRepo);
        assert_eq!(record.category, ContentCategory::GithubOpenSourceRepo);
    }

    #[test]
    fn hashtags_are_deduplicated_in_the_final_record() {
        let raw = "HASHTAGS:\n#AI #Tech #AI #Tech #Rust";
        let record = parse_response(raw, "topic", ContentCategory::FALLBACK);
        assert_eq!(record.hashtags, vec!["#AI", "#Tech", "#Rust"]);
    }

    #[test]
    fn marker_matching_is_case_sensitive() {
        let raw = "category: trending_ai_model\nmaster_storyline:\nlowercase markers";
        let record = parse_response(raw, "topic", ContentCategory::FALLBACK);
        // No markers recognized: whole-response fallback.
        assert_eq!(record.master_storyline, raw);
    }

    #[test]
    fn storyline_fallback_is_char_boundary_safe() {
        let raw = format!("MASTER_STORYLINE:\n\nYOUTUBE_SCRIPT:\nx\n{}", "é".repeat(600));
        let record = parse_response(&raw, "topic", ContentCategory::FALLBACK);
        // Storyline section was empty, so the raw-prefix default applies.
        assert_eq!(record.master_storyline.chars().count(), 500);
    }

    #[test]
    fn inline_section_content_on_marker_line_is_kept() {
        let raw = "CAPTION: Short inline caption";
        let record = parse_response(raw, "topic", ContentCategory::FALLBACK);
        assert_eq!(record.caption, "Short inline caption");
    }

    #[test]
    fn topic_is_always_carried_through() {
        for raw in ["", "no markers", "CAPTION:\nhello"] {
            let record = parse_response(raw, "the topic", ContentCategory::FALLBACK);
            assert_eq!(record.topic, "the topic");
        }
    }
}
