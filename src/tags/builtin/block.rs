//! Block-level tags

use crate::tags::definition::{Attribute, Layout, Snippet, Tag};
use crate::tags::validators::{alignment, list_style};

const fn block(name: &'static str, label: &'static str) -> Tag {
    Tag {
        name,
        label,
        attribute: None,
        self_closing: false,
        layout: Layout::Block,
        snippets: &[],
    }
}

pub(super) const ALIGN: Tag = Tag {
    attribute: Some(Attribute {
        required: false,
        template: "${1:mode}",
        validator: Some(alignment),
    }),
    snippets: &[
        Snippet { name: "Align Left", trigger: "alignleft", body: "align=left]$0[/align]" },
        Snippet { name: "Align Center", trigger: "aligncenter", body: "align=center]$0[/align]" },
        Snippet { name: "Align Right", trigger: "alignright", body: "align=right]$0[/align]" },
    ],
    ..block("align", "align")
};

pub(super) const CODE_BLOCK: Tag = block("codeBlock", "code");
pub(super) const QUOTE_BLOCK: Tag = block("quoteBlock", "quote");

pub(super) const DIVIDER: Tag = Tag {
    self_closing: true,
    ..block("divider", "hr")
};

// Free-form values, nothing to validate.
pub(super) const FREE_AREA: Tag = Tag {
    attribute: Some(Attribute {
        required: false,
        template: "${1:price}",
        validator: None,
    }),
    ..block("freeArea", "free")
};

pub(super) const HIDE_AREA: Tag = Tag {
    attribute: Some(Attribute {
        required: false,
        template: "${1:points}",
        validator: None,
    }),
    ..block("hideArea", "hide")
};

pub(super) const SPOILER: Tag = Tag {
    attribute: Some(Attribute {
        required: true,
        template: "${1:summary}",
        validator: None,
    }),
    ..block("spoiler", "spoiler")
};

pub(super) const LIST: Tag = Tag {
    attribute: Some(Attribute {
        required: false,
        template: "1",
        validator: Some(list_style),
    }),
    snippets: &[
        Snippet { name: "Ordered List", trigger: "orderedlist", body: "list=1]\n[*]$0\n[/list]" },
        Snippet { name: "Bullet List", trigger: "bulletlist", body: "list]\n[*]$0\n[/list]" },
    ],
    ..block("list", "list")
};

pub(super) const LIST_ITEM: Tag = Tag {
    self_closing: true,
    ..block("listItem", "*")
};
