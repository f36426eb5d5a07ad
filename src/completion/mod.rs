//! Completion resolver
//!
//! Given the text before the cursor on the current line, decides which
//! tags can be inserted and produces one candidate per tag plus one per
//! tag snippet, in registry order.
//!
//! - Text ending in the opener lists every tag.
//! - Otherwise the text after the last opener is a partial label and
//!   only tags whose label starts with it are listed.
//! - No opener at all means nothing applies.

mod insert;

use std::ops::Range;

use tracing::{debug, trace};

use crate::config::Config;
use crate::tags::{all_tags, Tag};

pub use insert::{insert_text, plain_text, retarget, FINAL_STOP};

/// What a candidate expands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// The tag itself, composed from its shape
    Tag,
    /// One of the tag's canned snippets
    Snippet,
}

/// One selectable completion entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    /// Text shown in the completion list
    pub label: String,
    /// Short description (tag or snippet name)
    pub description: String,
    /// Text to insert, in snippet syntax
    pub insert_text: String,
    /// Sorts candidates back into registry order
    pub sort_key: String,
    pub kind: CandidateKind,
}

impl CompletionCandidate {
    /// Insertion text with all snippet markers resolved to plain text
    pub fn plain_insert_text(&self) -> String {
        plain_text(&self.insert_text)
    }
}

/// Candidates for a single tag: primary first, then snippets in order
fn tag_candidates(
    tag: &Tag,
    config: &Config,
    first_ordinal: usize,
    key_width: usize,
) -> Vec<CompletionCandidate> {
    let mut items = Vec::with_capacity(1 + tag.snippets.len());

    items.push(CompletionCandidate {
        label: tag.label.to_string(),
        description: tag.name.to_string(),
        insert_text: insert_text(tag, config),
        sort_key: sort_key(first_ordinal, key_width),
        kind: CandidateKind::Tag,
    });

    for (offset, snippet) in tag.snippets.iter().enumerate() {
        items.push(CompletionCandidate {
            label: snippet.trigger.to_string(),
            description: snippet.name.to_string(),
            insert_text: retarget(snippet.body, config),
            sort_key: sort_key(first_ordinal + 1 + offset, key_width),
            kind: CandidateKind::Snippet,
        });
    }

    items
}

/// Zero-padded so keys compare like the ordinals they encode
fn sort_key(ordinal: usize, width: usize) -> String {
    format!("{:0width$}", ordinal)
}

/// Digits needed for the largest ordinal, at least four
fn key_width(total: usize) -> usize {
    total.saturating_sub(1).to_string().len().max(4)
}

/// Resolves completion requests against a tag registry.
///
/// Holds no per-request state; `resolve` only reads the precomputed
/// candidate list, so one resolver can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Resolver {
    tags: &'static [Tag],
    config: Config,
    /// Every candidate, in registry order
    candidates: Vec<CompletionCandidate>,
    /// Slice of `candidates` belonging to each tag
    ranges: Vec<Range<usize>>,
}

impl Resolver {
    /// Create a resolver, precomputing the full candidate list
    pub fn new(tags: &'static [Tag], config: Config) -> Self {
        let total: usize = tags.iter().map(|tag| 1 + tag.snippets.len()).sum();
        let width = key_width(total);
        let mut candidates = Vec::with_capacity(total);
        let mut ranges = Vec::with_capacity(tags.len());

        for tag in tags {
            let start = candidates.len();
            candidates.extend(tag_candidates(tag, &config, start, width));
            ranges.push(start..candidates.len());
        }

        debug!(
            tags = tags.len(),
            candidates = candidates.len(),
            "built completion list"
        );

        Self {
            tags,
            config,
            candidates,
            ranges,
        }
    }

    /// The configuration this resolver was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The full candidate list, as offered right after the opener
    pub fn all_candidates(&self) -> &[CompletionCandidate] {
        &self.candidates
    }

    /// Candidates applicable at a cursor preceded by `text_before_cursor`
    pub fn resolve(&self, text_before_cursor: &str) -> Vec<CompletionCandidate> {
        let opener = self.config.trigger;

        if text_before_cursor.ends_with(opener) {
            trace!(count = self.candidates.len(), "fresh tag completion");
            return self.candidates.clone();
        }

        let Some(open_at) = text_before_cursor.rfind(opener) else {
            trace!("no tag opener before cursor");
            return Vec::new();
        };

        let partial = &text_before_cursor[open_at + opener.len_utf8()..];
        let matches: Vec<CompletionCandidate> = self
            .tags
            .iter()
            .zip(&self.ranges)
            .filter(|(tag, _)| tag.label.starts_with(partial))
            .flat_map(|(_, range)| self.candidates[range.clone()].iter().cloned())
            .collect();

        trace!(partial, count = matches.len(), "partial tag completion");
        matches
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(all_tags(), Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{find_tag, Layout, Snippet};
    use pretty_assertions::assert_eq;

    fn labels(candidates: &[CompletionCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.label.as_str()).collect()
    }

    fn expected_total(tags: &[Tag]) -> usize {
        tags.iter().map(|tag| 1 + tag.snippets.len()).sum()
    }

    #[test]
    fn test_fresh_completion_lists_everything() {
        let resolver = Resolver::default();
        let items = resolver.resolve("[");

        assert_eq!(items.len(), expected_total(all_tags()));
        assert_eq!(items.len(), 23 + 3 + 6 + 2);

        let primaries: Vec<&str> = items
            .iter()
            .filter(|c| c.kind == CandidateKind::Tag)
            .map(|c| c.label.as_str())
            .collect();
        let registry: Vec<&str> = all_tags().iter().map(|tag| tag.label).collect();
        assert_eq!(primaries, registry);
    }

    #[test]
    fn test_fresh_completion_after_text() {
        let resolver = Resolver::default();
        assert_eq!(resolver.resolve("some [b]text[/b] and ["), resolver.resolve("["));
    }

    #[test]
    fn test_no_context() {
        let resolver = Resolver::default();
        assert!(resolver.resolve("").is_empty());
        assert!(resolver.resolve("plain text with no bracket").is_empty());
        assert!(resolver.resolve("closing only ]").is_empty());
    }

    #[test]
    fn test_partial_label_filters() {
        let resolver = Resolver::default();

        let items = resolver.resolve("[si");
        assert_eq!(
            labels(&items),
            vec!["size", "size1", "size2", "size3", "size4", "size5", "size6"]
        );

        let items = resolver.resolve("text [s");
        let primaries: Vec<&str> = items
            .iter()
            .filter(|c| c.kind == CandidateKind::Tag)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(primaries, vec!["size", "spoiler", "s", "sup", "sub"]);
    }

    #[test]
    fn test_partial_label_matches_prefix_property() {
        let resolver = Resolver::default();
        for partial in ["", "a", "b", "c", "co", "t", "hr", "x", "*", "@", "S", "img="] {
            let text = format!("[{partial}");
            let items = resolver.resolve(&text);
            let got: Vec<&str> = items
                .iter()
                .filter(|c| c.kind == CandidateKind::Tag)
                .map(|c| c.label.as_str())
                .collect();
            let want: Vec<&str> = all_tags()
                .iter()
                .filter(|tag| tag.label.starts_with(partial))
                .map(|tag| tag.label)
                .collect();
            assert_eq!(got, want, "partial {:?}", partial);
        }
    }

    #[test]
    fn test_partial_is_case_sensitive() {
        let resolver = Resolver::default();
        assert!(resolver.resolve("[B").is_empty());
        assert!(resolver.resolve("[Size").is_empty());
    }

    #[test]
    fn test_only_last_opener_counts() {
        let resolver = Resolver::default();
        let items = resolver.resolve("[quote] see [hr");
        assert_eq!(labels(&items), vec!["hr"]);

        // Past a completed tag nothing matches
        assert!(resolver.resolve("[b]bold").is_empty());
        assert!(resolver.resolve("[b]bold[/").is_empty());
    }

    #[test]
    fn test_composition() {
        let resolver = Resolver::default();

        let hr = &resolver.resolve("[hr")[0];
        assert_eq!(hr.label, "hr");
        assert_eq!(hr.description, "divider");
        assert_eq!(hr.insert_text, "hr]");

        let size = &resolver.resolve("[si")[0];
        assert_eq!(size.label, "size");
        assert_eq!(size.description, "fontSize");
        assert_eq!(size.insert_text, "size=${1:value}]$0[/size]");
        assert_eq!(size.kind, CandidateKind::Tag);
    }

    #[test]
    fn test_snippets_follow_primary() {
        let resolver = Resolver::default();
        let items = resolver.resolve("[list");

        assert_eq!(labels(&items), vec!["list", "orderedlist", "bulletlist"]);
        assert_eq!(items[0].kind, CandidateKind::Tag);
        assert_eq!(items[1].kind, CandidateKind::Snippet);
        assert_eq!(items[1].description, "Ordered List");
        assert_eq!(items[1].insert_text, "list=1]\n[*]$0\n[/list]");
        assert_eq!(items[2].description, "Bullet List");
        assert_eq!(items[2].insert_text, "list]\n[*]$0\n[/list]");
    }

    #[test]
    fn test_snippets_surface_on_fresh_completion() {
        let resolver = Resolver::default();
        let items = resolver.resolve("[");
        let align = find_tag("align").unwrap();

        let start = items.iter().position(|c| c.label == "align").unwrap();
        let following = &items[start + 1..start + 1 + align.snippets.len()];
        for (item, snippet) in following.iter().zip(align.snippets) {
            assert_eq!(item.label, snippet.trigger);
            assert_eq!(item.description, snippet.name);
            assert_eq!(item.insert_text, snippet.body);
        }
    }

    #[test]
    fn test_sort_keys_follow_registry_order() {
        let resolver = Resolver::default();
        let items = resolver.resolve("[");
        let mut sorted = items.clone();
        sorted.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
        assert_eq!(items, sorted);

        // Filtering keeps the keys from the full list
        let full = items.iter().find(|c| c.label == "sub").unwrap();
        let partial = resolver.resolve("[su");
        let filtered = partial.iter().find(|c| c.label == "sub").unwrap();
        assert_eq!(full.sort_key, filtered.sort_key);
    }

    #[test]
    fn test_sort_keys_widen_for_large_registries() {
        assert_eq!(key_width(0), 4);
        assert_eq!(key_width(10_000), 4);
        assert_eq!(key_width(10_001), 5);

        let bold = *find_tag("b").unwrap();
        let tags: &'static [Tag] = Vec::leak(vec![bold; 10_001]);
        let resolver = Resolver::new(tags, Config::default());

        let items = resolver.all_candidates();
        assert_eq!(items[0].sort_key, "00000");
        assert_eq!(items[10_000].sort_key, "10000");
        assert!(items.windows(2).all(|pair| pair[0].sort_key < pair[1].sort_key));
    }

    #[test]
    fn test_idempotent() {
        let resolver = Resolver::default();
        for text in ["", "[", "[a", "x [co", "[[", "]["] {
            assert_eq!(resolver.resolve(text), resolver.resolve(text));
        }
    }

    #[test]
    fn test_odd_input_never_panics() {
        let resolver = Resolver::default();
        assert_eq!(resolver.resolve("[[").len(), resolver.resolve("[").len());
        assert!(resolver.resolve("[ü").is_empty());
        assert!(!resolver.resolve("日本語[").is_empty());
        assert_eq!(labels(&resolver.resolve("日本語[@")), vec!["@"]);
    }

    #[test]
    fn test_custom_registry_and_delimiters() {
        static TAGS: [Tag; 2] = [
            Tag {
                name: "note",
                label: "note",
                attribute: None,
                self_closing: false,
                layout: Layout::Block,
                snippets: &[Snippet {
                    name: "Todo Note",
                    trigger: "notetodo",
                    body: "note]TODO: $0[/note]",
                }],
            },
            Tag {
                name: "br",
                label: "br",
                attribute: None,
                self_closing: true,
                layout: Layout::Inline,
                snippets: &[],
            },
        ];
        let config = Config {
            trigger: '<',
            closer: '>',
            ..Config::default()
        };
        let resolver = Resolver::new(&TAGS, config);

        let items = resolver.resolve("<");
        assert_eq!(items.len(), expected_total(&TAGS));
        assert_eq!(items[0].insert_text, "note>$0</note>");
        assert_eq!(items[1].insert_text, "note>TODO: $0</note>");
        assert_eq!(items[2].insert_text, "br>");

        assert!(resolver.resolve("[").is_empty());
        assert_eq!(labels(&resolver.resolve("<n")), vec!["note", "notetodo"]);
    }

    #[test]
    fn test_plain_insert_text() {
        let resolver = Resolver::default();
        let img = &resolver.resolve("[img")[0];
        assert_eq!(img.plain_insert_text(), "img=width,height][/img]");
    }
}
