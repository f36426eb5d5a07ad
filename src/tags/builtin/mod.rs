//! Built-in tag catalog
//!
//! Tags are grouped by what they format; the registry order below is
//! the canonical order completions are listed in.

mod block;
mod inline;
mod media;
mod table;

use super::definition::Tag;

static ALL_TAGS: [Tag; 23] = [
    block::ALIGN,
    inline::BACKGROUND_COLOR,
    inline::BOLD,
    block::CODE_BLOCK,
    inline::TEXT_COLOR,
    block::DIVIDER,
    inline::FONT_SIZE,
    block::FREE_AREA,
    block::HIDE_AREA,
    media::IMAGE,
    inline::ITALIC,
    block::LIST,
    block::LIST_ITEM,
    block::QUOTE_BLOCK,
    block::SPOILER,
    inline::STRIKETHROUGH,
    inline::SUPERSCRIPT,
    inline::SUBSCRIPT,
    table::TABLE,
    table::TABLE_ROW,
    table::TABLE_DATA,
    inline::UNDERLINE,
    media::USER_MENTION,
];

/// Get all built-in tag definitions
pub fn all_tags() -> &'static [Tag] {
    &ALL_TAGS
}
