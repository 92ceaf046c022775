//! Markdown prose extraction.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping, so nested code blocks, entities, and reference links come out
//! right. Each prose block becomes its own paragraph for scoring.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Extract prose paragraphs from markdown.
///
/// Removes:
/// - YAML frontmatter
/// - Code blocks (fenced and indented) and inline code
/// - HTML
/// - Headings (section titles are not prose)
/// - Tables
/// - Image alt text
///
/// Keeps, one paragraph each:
/// - Body paragraphs
/// - Blockquote paragraphs
/// - List items (tight or loose)
///
/// Link text and emphasised text are kept without their markers.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn prose_paragraphs(text: &str) -> Vec<String> {
    // pulldown-cmark doesn't know about frontmatter
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                current.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                current.push(' ');
            }

            // Block boundaries close the paragraph being collected. A nested
            // list starting inside an item closes the item's own text first.
            Event::End(TagEnd::Paragraph | TagEnd::Item) | Event::Start(Tag::List(_))
                if skip_depth == 0 =>
            {
                flush(&mut current, &mut paragraphs);
            }

            _ => {}
        }
    }
    flush(&mut current, &mut paragraphs);

    paragraphs
}

fn flush(current: &mut String, paragraphs: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
    current.clear();
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    // Skip past the closing `---` and its newline
    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
