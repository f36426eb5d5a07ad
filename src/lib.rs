//! bbcode-complete - tag completion for BBCode documents
//!
//! A fixed registry of BBCode tags plus a resolver that, given the text
//! before the cursor, lists what can be inserted there. Host editors
//! plug in through [`CompletionProvider`].
//!
//! ```
//! use bbcode_complete::Resolver;
//!
//! let resolver = Resolver::default();
//! let items = resolver.resolve("[hr");
//! assert_eq!(items[0].insert_text, "hr]");
//! ```

pub mod completion;
pub mod config;
pub mod error;
pub mod provider;
pub mod tags;

pub use completion::{CandidateKind, CompletionCandidate, Resolver};
pub use config::Config;
pub use error::{CompleteError, Result};
pub use provider::{
    text_before_cursor, CompletionProvider, Document, Position, Registration, TextDocument,
};
pub use tags::{all_tags, find_tag, Tag};
