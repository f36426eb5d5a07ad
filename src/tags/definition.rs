//! Tag definitions
//!
//! This module provides the Tag, Attribute and Snippet records that make
//! up the registry. All of them are plain `'static` data so the whole
//! catalog can live in a `static` slice.

use std::fmt;

/// Attribute value predicate
pub type Validator = fn(&str) -> bool;

/// Rules for the optional `=value` part of a tag
#[derive(Clone, Copy)]
pub struct Attribute {
    /// Whether the tag is invalid without this attribute
    pub required: bool,
    /// Placeholder text inserted for the value (never empty)
    pub template: &'static str,
    /// Value check; `None` accepts any non-empty string
    pub validator: Option<Validator>,
}

impl Attribute {
    /// Check a raw attribute value against this rule
    pub fn accepts(&self, value: &str) -> bool {
        match self.validator {
            Some(validate) => validate(value),
            None => !value.is_empty(),
        }
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("required", &self.required)
            .field("template", &self.template)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// A canned expansion bound to its own trigger text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    /// Display name
    pub name: &'static str,
    /// Text the user types to invoke it
    pub trigger: &'static str,
    /// Full insertion text, snippet syntax included
    pub body: &'static str,
}

/// How a tag is laid out when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Inline,
    Block,
}

/// The four insertion shapes a tag can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    /// `[b]...[/b]`
    Paired,
    /// `[hr]`
    SelfClosing,
    /// `[size=3]...[/size]`
    PairedWithAttribute,
    /// `[tag=value]` with no closing form
    SelfClosingWithAttribute,
}

/// Outcome of checking an attribute usage against a tag's rule.
///
/// Purely advisory: completion never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCheck {
    Valid,
    /// Required attribute was not given
    Missing,
    /// The validator refused the value
    Rejected,
    /// The tag takes no attribute but one was given
    Unexpected,
}

/// One markup element definition
#[derive(Debug, Clone, Copy)]
pub struct Tag {
    /// Readable tag name
    pub name: &'static str,
    /// Token typed after the opener; unique across the registry
    pub label: &'static str,
    /// Optional attribute rule
    pub attribute: Option<Attribute>,
    /// Whether the tag never gets a closing counterpart
    pub self_closing: bool,
    /// Rendering layout (metadata only)
    pub layout: Layout,
    /// Tag related snippets, in display order
    pub snippets: &'static [Snippet],
}

impl Tag {
    /// Insertion shape of this tag
    pub fn shape(&self) -> TagShape {
        match (self.attribute.is_some(), self.self_closing) {
            (false, false) => TagShape::Paired,
            (false, true) => TagShape::SelfClosing,
            (true, false) => TagShape::PairedWithAttribute,
            (true, true) => TagShape::SelfClosingWithAttribute,
        }
    }

    /// Check an attribute usage (`None` when the tag was written bare)
    pub fn check_attribute(&self, value: Option<&str>) -> AttributeCheck {
        match (&self.attribute, value) {
            (None, None) => AttributeCheck::Valid,
            (None, Some(_)) => AttributeCheck::Unexpected,
            (Some(attr), None) if attr.required => AttributeCheck::Missing,
            (Some(_), None) => AttributeCheck::Valid,
            (Some(attr), Some(v)) if attr.accepts(v) => AttributeCheck::Valid,
            (Some(_), Some(_)) => AttributeCheck::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_ok(value: &str) -> bool {
        value == "ok"
    }

    fn tag(attribute: Option<Attribute>, self_closing: bool) -> Tag {
        Tag {
            name: "test",
            label: "t",
            attribute,
            self_closing,
            layout: Layout::Inline,
            snippets: &[],
        }
    }

    const CHECKED: Attribute = Attribute {
        required: true,
        template: "${1:value}",
        validator: Some(only_ok),
    };

    const FREE: Attribute = Attribute {
        required: false,
        template: "${1:value}",
        validator: None,
    };

    #[test]
    fn test_shapes() {
        assert_eq!(tag(None, false).shape(), TagShape::Paired);
        assert_eq!(tag(None, true).shape(), TagShape::SelfClosing);
        assert_eq!(tag(Some(FREE), false).shape(), TagShape::PairedWithAttribute);
        assert_eq!(tag(Some(FREE), true).shape(), TagShape::SelfClosingWithAttribute);
    }

    #[test]
    fn test_attribute_accepts() {
        assert!(CHECKED.accepts("ok"));
        assert!(!CHECKED.accepts("nope"));

        // No validator: any non-empty string
        assert!(FREE.accepts("anything at all"));
        assert!(!FREE.accepts(""));
    }

    #[test]
    fn test_check_attribute() {
        let bare = tag(None, false);
        assert_eq!(bare.check_attribute(None), AttributeCheck::Valid);
        assert_eq!(bare.check_attribute(Some("x")), AttributeCheck::Unexpected);

        let required = tag(Some(CHECKED), false);
        assert_eq!(required.check_attribute(None), AttributeCheck::Missing);
        assert_eq!(required.check_attribute(Some("ok")), AttributeCheck::Valid);
        assert_eq!(required.check_attribute(Some("bad")), AttributeCheck::Rejected);

        let optional = tag(Some(FREE), false);
        assert_eq!(optional.check_attribute(None), AttributeCheck::Valid);
        assert_eq!(optional.check_attribute(Some("")), AttributeCheck::Rejected);
    }

    #[test]
    fn test_attribute_debug_hides_fn_pointer() {
        let text = format!("{:?}", CHECKED);
        assert!(text.contains("validator: true"));
    }
}
