//! Insertion text composition
//!
//! Builds the snippet-syntax text a candidate inserts, and downgrades it
//! to plain text for hosts without a snippet engine.
//!
//! Snippet syntax: `${1:value}` / `$1` are tab stops, `$0` is where the
//! cursor rests once all stops are done.

use crate::config::Config;
use crate::tags::{Tag, TagShape};

/// Final cursor stop
pub const FINAL_STOP: &str = "$0";

/// Insertion text for a tag's primary candidate.
///
/// The opener has already been typed, so the text starts at the label.
pub fn insert_text(tag: &Tag, config: &Config) -> String {
    let label = tag.label;
    let close = config.closer;
    let open = config.trigger;
    let template = tag.attribute.map(|attr| attr.template).unwrap_or_default();

    match tag.shape() {
        TagShape::Paired => format!("{label}{close}{FINAL_STOP}{open}/{label}{close}"),
        TagShape::SelfClosing => format!("{label}{close}"),
        TagShape::PairedWithAttribute => {
            format!("{label}={template}{close}{FINAL_STOP}{open}/{label}{close}")
        }
        TagShape::SelfClosingWithAttribute => format!("{label}={template}{close}"),
    }
}

/// Rewrite a snippet body written with `[`/`]` to the configured delimiters
pub fn retarget(body: &str, config: &Config) -> String {
    body.chars()
        .map(|ch| match ch {
            '[' => config.trigger,
            ']' => config.closer,
            other => other,
        })
        .collect()
}

/// Downgrade snippet syntax to the literal text it stands for.
///
/// `${1:value}` becomes `value`, bare stops (`$0`, `$1`, `${2}`) vanish,
/// and `\x` becomes `x`. Placeholders may nest.
pub fn plain_text(snippet: &str) -> String {
    let mut out = String::with_capacity(snippet.len());
    let mut chars = snippet.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '$' => match chars.peek().copied() {
                Some('{') => {
                    chars.next();
                    let mut depth = 1;
                    let mut content = String::new();
                    for inner in chars.by_ref() {
                        match inner {
                            '{' => depth += 1,
                            '}' => {
                                depth -= 1;
                                if depth == 0 {
                                    break;
                                }
                            }
                            _ => {}
                        }
                        content.push(inner);
                    }
                    let rest = content.trim_start_matches(|c: char| c.is_ascii_digit());
                    if let Some(default) = rest.strip_prefix(':') {
                        out.push_str(&plain_text(default));
                    }
                }
                Some(d) if d.is_ascii_digit() => {
                    while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                        chars.next();
                    }
                }
                _ => out.push('$'),
            },
            other => out.push(other),
        }
    }

    out
}
