//! Table tags

use crate::tags::definition::{Layout, Tag};

const fn cell(name: &'static str, label: &'static str) -> Tag {
    Tag {
        name,
        label,
        attribute: None,
        self_closing: false,
        layout: Layout::Inline,
        snippets: &[],
    }
}

pub(super) const TABLE: Tag = cell("table", "table");
pub(super) const TABLE_ROW: Tag = cell("tableRow", "tr");
pub(super) const TABLE_DATA: Tag = cell("tableData", "td");
