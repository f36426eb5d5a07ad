//! Inline text formatting tags

use crate::tags::color::is_color;
use crate::tags::definition::{Attribute, Layout, Snippet, Tag};
use crate::tags::validators::font_size;

const fn plain(name: &'static str, label: &'static str) -> Tag {
    Tag {
        name,
        label,
        attribute: None,
        self_closing: false,
        layout: Layout::Inline,
        snippets: &[],
    }
}

const COLOR_VALUE: Attribute = Attribute {
    required: true,
    template: "${1:value}",
    validator: Some(is_color),
};

pub(super) const BOLD: Tag = plain("bold", "b");
pub(super) const ITALIC: Tag = plain("italic", "i");
pub(super) const UNDERLINE: Tag = plain("underline", "u");
pub(super) const STRIKETHROUGH: Tag = plain("strikethrough", "s");
pub(super) const SUPERSCRIPT: Tag = plain("superscript", "sup");
pub(super) const SUBSCRIPT: Tag = plain("subscript", "sub");

pub(super) const BACKGROUND_COLOR: Tag = Tag {
    attribute: Some(COLOR_VALUE),
    ..plain("backgroundColor", "backcolor")
};

pub(super) const TEXT_COLOR: Tag = Tag {
    attribute: Some(COLOR_VALUE),
    ..plain("textColor", "color")
};

pub(super) const FONT_SIZE: Tag = Tag {
    attribute: Some(Attribute {
        required: true,
        template: "${1:value}",
        validator: Some(font_size),
    }),
    snippets: &[
        Snippet { name: "Size 1", trigger: "size1", body: "size=1]$0[/size]" },
        Snippet { name: "Size 2", trigger: "size2", body: "size=2]$0[/size]" },
        Snippet { name: "Size 3", trigger: "size3", body: "size=3]$0[/size]" },
        Snippet { name: "Size 4", trigger: "size4", body: "size=4]$0[/size]" },
        Snippet { name: "Size 5", trigger: "size5", body: "size=5]$0[/size]" },
        Snippet { name: "Size 6", trigger: "size6", body: "size=6]$0[/size]" },
    ],
    ..plain("fontSize", "size")
};
