//! Images and mentions

use crate::tags::definition::{Attribute, Layout, Tag};
use crate::tags::validators::image_size;

pub(super) const IMAGE: Tag = Tag {
    name: "image",
    label: "img",
    attribute: Some(Attribute {
        required: true,
        template: "${1:width},${2:height}",
        validator: Some(image_size),
    }),
    self_closing: false,
    layout: Layout::Inline,
    snippets: &[],
};

pub(super) const USER_MENTION: Tag = Tag {
    name: "userMention",
    label: "@",
    attribute: None,
    self_closing: false,
    layout: Layout::Inline,
    snippets: &[],
};
