//! Narrative flows: the ordered story beats behind each content category.

use serde::Serialize;

/// A single named story beat within a narrative flow.
///
/// # Examples
///
/// ```
/// use hypecast_core::StoryBeat;
///
/// let beat = StoryBeat::new("SCROLL HOOK", "Stop scrolling! Attention grabber");
/// assert_eq!(format!("{beat}"), "SCROLL HOOK - Stop scrolling! Attention grabber");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StoryBeat {
    /// Short beat name, e.g. "SCROLL HOOK"
    pub name: &'static str,
    /// One-line description of what the beat should accomplish
    pub summary: &'static str,
}

impl StoryBeat {
    /// Create a new story beat.
    pub const fn new(name: &'static str, summary: &'static str) -> Self {
        Self { name, summary }
    }
}

impl std::fmt::Display for StoryBeat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.summary)
    }
}

/// An ordered list of story beats specific to one content category.
///
/// The display form is the numbered list injected verbatim into
/// category-specific prompts:
///
/// ```
/// use hypecast_core::{NarrativeFlow, StoryBeat};
///
/// const BEATS: &[StoryBeat] = &[
///     StoryBeat::new("HOOK", "Compelling opening"),
///     StoryBeat::new("CTA", "Call to action"),
/// ];
///
/// let flow = NarrativeFlow::new(BEATS);
/// assert_eq!(format!("{flow}"), "1. HOOK - Compelling opening\n2. CTA - Call to action");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NarrativeFlow {
    /// Beats in narration order
    pub beats: &'static [StoryBeat],
}

impl NarrativeFlow {
    /// Create a flow from a static slice of beats.
    pub const fn new(beats: &'static [StoryBeat]) -> Self {
        Self { beats }
    }

    /// Number of beats in the flow.
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    /// Whether the flow has no beats. Always false for the built-in flows.
    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }
}

impl std::fmt::Display for NarrativeFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, beat) in self.beats.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, beat)?;
        }
        Ok(())
    }
}
