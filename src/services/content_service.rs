//! Line-oriented formatter for post content.
//!
//! Each input line becomes exactly one block: `## ` and `### ` prefixes mark
//! headings, blank lines mark breaks, everything else is a paragraph. There is
//! no inline markup and adjacent paragraph lines are never merged.

use std::str::Split;

use crate::types::Block;
use crate::utils::escape_html;

/// Lazy block iterator over a content string.
///
/// Cloning yields an independent iterator from the same position, so a
/// sequence can be replayed without re-reading the source.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    lines: Split<'a, char>,
}

/// Classify `content` into blocks, one per line
pub fn blocks(content: &str) -> Blocks<'_> {
    Blocks { lines: content.split('\n') }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(classify)
    }
}

fn classify(line: &str) -> Block<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if let Some(text) = line.strip_prefix("## ") {
        Block::Heading2(text)
    } else if let Some(text) = line.strip_prefix("### ") {
        Block::Heading3(text)
    } else if line.trim().is_empty() {
        Block::Break
    } else {
        Block::Paragraph(line)
    }
}

/// Render post content to HTML
pub fn render_content(content: &str) -> String {
    let mut html = String::with_capacity(content.len() * 2);
    for block in blocks(content) {
        match block {
            Block::Heading2(text) => html.push_str(&format!("<h2>{}</h2>", escape_html(text))),
            Block::Heading3(text) => html.push_str(&format!("<h3>{}</h3>", escape_html(text))),
            Block::Break => html.push_str("<br>"),
            Block::Paragraph(text) => html.push_str(&format!("<p>{}</p>", escape_html(text))),
        }
    }
    html
}
