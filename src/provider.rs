//! Host editor integration
//!
//! The host owns documents and cursor positions; this module turns a
//! completion request from the host into a call to the resolver.
//! Columns are counted in UTF-16 code units, as editor hosts do.

use tracing::trace;

use crate::completion::{CompletionCandidate, Resolver};
use crate::config::Config;

/// Cursor position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based line
    pub line: u32,
    /// Zero-based column in UTF-16 code units
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Read access to a host document
pub trait TextDocument {
    /// Language identifier of the document
    fn language_id(&self) -> &str;

    /// Text of one line, without its line terminator
    fn line_text(&self, line: u32) -> Option<&str>;
}

/// A document held as a plain string
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    language_id: &'a str,
    text: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(language_id: &'a str, text: &'a str) -> Self {
        Self { language_id, text }
    }
}

impl TextDocument for Document<'_> {
    fn language_id(&self) -> &str {
        self.language_id
    }

    fn line_text(&self, line: u32) -> Option<&str> {
        self.text.lines().nth(line as usize)
    }
}

/// Text on `line` before a UTF-16 column.
///
/// A column past the end of the line yields the whole line; one that
/// lands inside a surrogate pair stops before that character.
pub fn text_before_cursor(line: &str, character: u32) -> &str {
    let limit = character as usize;
    let mut units = 0;

    for (idx, ch) in line.char_indices() {
        units += ch.len_utf16();
        if units > limit {
            return &line[..idx];
        }
    }

    line
}

/// What the host needs to register the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Only documents of this language are served
    pub language_id: String,
    /// Typing any of these opens the completion list
    pub trigger_characters: Vec<char>,
}

/// Completion provider for a host editor
#[derive(Debug, Clone, Default)]
pub struct CompletionProvider {
    resolver: Resolver,
}

impl CompletionProvider {
    /// Provider backed by the built-in tags and the given settings
    pub fn new(config: Config) -> Self {
        Self::with_resolver(Resolver::new(crate::tags::all_tags(), config))
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Registration details for the host
    pub fn registration(&self) -> Registration {
        let config = self.resolver.config();
        Registration {
            language_id: config.language_id.clone(),
            trigger_characters: vec![config.trigger],
        }
    }

    /// Completion candidates at `position` in `document`
    pub fn provide(
        &self,
        document: &dyn TextDocument,
        position: Position,
    ) -> Vec<CompletionCandidate> {
        if document.language_id() != self.resolver.config().language_id {
            trace!(language = document.language_id(), "not our language");
            return Vec::new();
        }

        let Some(line) = document.line_text(position.line) else {
            trace!(line = position.line, "line out of range");
            return Vec::new();
        };

        self.resolver
            .resolve(text_before_cursor(line, position.character))
    }
}
