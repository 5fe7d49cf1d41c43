// src/scanner/markdown.rs
// =============================================================================
// This module extracts link and image occurrences from markdown text.
//
// We use the `pulldown-cmark` crate which:
// - Parses markdown into events (heading, paragraph, link, etc.)
// - Follows the CommonMark specification
// - Can report the byte range of each event, which is how we recover the
//   source line number and the raw matched text
//
// Only the inline forms count as matches:
//
//     [click here](some-file.md)
//     ![here's an image](../images/pic.png)
//
// Reference-style links, autolinks and bare URLs are not matches.
//
// Rust concepts:
// - Iterators: The parser yields (event, byte range) pairs one at a time
// - Pattern matching: To pick out link and image events
// - Vec as a stack: Links can nest (an image inside a link), so a single
//   Option isn't enough to track what's currently open
// =============================================================================

use pulldown_cmark::{Event, LinkType, Parser, Tag};
use std::ops::Range;

// One occurrence of a link or image in a markdown file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// The display text between the square brackets
    pub text: String,
    /// The target between the parentheses, exactly as written
    pub target: String,
    /// 1-based line number where the match opens
    pub line: usize,
    /// The raw matched source text, brackets and parens included
    pub raw: String,
}

// Extracts all inline links and images from markdown text
//
// Parameters:
//   contents: the markdown text to parse (borrowed as &str)
//
// Returns: Vec<LinkMatch>, one per occurrence, in roughly source order
//
// Example input:
//   "See [the guide](docs/guide.md) for details."
//
// Example output:
//   one LinkMatch with text "the guide", target "docs/guide.md", line 1
pub fn find_links(contents: &str) -> Vec<LinkMatch> {
    let mut matches = Vec::new();

    // Stack of elements we're currently inside: (target, byte range,
    // display text accumulated so far). pulldown-cmark produces
    // Start(Link) .. Text .. End(Link), and a link can contain an image,
    // so the innermost open element sits on top.
    let mut open: Vec<(String, Range<usize>, String)> = Vec::new();

    // into_offset_iter() pairs every event with the byte range it came
    // from; for a Start event the range spans the whole element.
    for (event, range) in Parser::new(contents).into_offset_iter() {
        match event {
            Event::Start(Tag::Link(LinkType::Inline, dest, _))
            | Event::Start(Tag::Image(LinkType::Inline, dest, _)) => {
                open.push((dest.to_string(), range, String::new()));
            }

            // Text inside the innermost open element becomes its display
            // text. Text outside any link is ignored.
            Event::Text(text) => {
                if let Some((_, _, buffer)) = open.last_mut() {
                    buffer.push_str(&text);
                }
            }

            Event::End(Tag::Link(LinkType::Inline, ..))
            | Event::End(Tag::Image(LinkType::Inline, ..)) => {
                if let Some((target, range, text)) = open.pop() {
                    matches.push(LinkMatch {
                        text,
                        target,
                        line: line_of(contents, range.start),
                        raw: contents[range].to_string(),
                    });
                }
            }

            _ => {}
        }
    }

    matches
}

// Converts a byte offset into a 1-based line number
fn line_of(contents: &str, offset: usize) -> usize {
    contents[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
