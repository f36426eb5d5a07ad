//! Tag registry
//!
//! The registry is a fixed, ordered catalog of BBCode tags and the
//! rules for their attributes. It is built at compile time and never
//! changes at runtime.

mod builtin;
mod color;
mod definition;
pub mod validators;

use std::collections::HashSet;

use crate::error::{CompleteError, Result};

pub use builtin::all_tags;
pub use color::{is_color, is_named_color};
pub use definition::{Attribute, AttributeCheck, Layout, Snippet, Tag, TagShape, Validator};

/// Look up a built-in tag by its label
pub fn find_tag(label: &str) -> Option<&'static Tag> {
    all_tags().iter().find(|tag| tag.label == label)
}

/// Check the authoring invariants of a tag list.
///
/// Labels must be unique, snippet triggers unique within their tag, and
/// attribute templates non-empty. Returns the first violation found.
pub fn audit(tags: &[Tag]) -> Result<()> {
    let mut labels = HashSet::new();

    for tag in tags {
        if !labels.insert(tag.label) {
            return Err(CompleteError::DuplicateLabel(tag.label.to_string()));
        }

        if tag.attribute.is_some_and(|attr| attr.template.is_empty()) {
            return Err(CompleteError::EmptyTemplate(tag.label.to_string()));
        }

        let mut triggers = HashSet::new();
        for snippet in tag.snippets {
            if !triggers.insert(snippet.trigger) {
                return Err(CompleteError::DuplicateTrigger {
                    tag: tag.label.to_string(),
                    trigger: snippet.trigger.to_string(),
                });
            }
        }
    }

    Ok(())
}
