//! Markdown to prose.
//!
//! Scoring raw markdown inflates word counts with code, URLs, and table
//! cells, so `.md` input is reduced to the sentences a reader would read.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown down to plain prose.
///
/// Drops frontmatter, headings, code (blocks and inline), tables, images,
/// and raw HTML. Keeps paragraph, list, blockquote, link, and emphasis text.
/// Each block ends with a newline so terminal punctuation at the end of a
/// paragraph still reads as a sentence break.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;

    let mut prose = String::with_capacity(text.len() / 2);
    let mut hidden: usize = 0;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(
                Tag::CodeBlock(_)
                | Tag::Heading { .. }
                | Tag::MetadataBlock(_)
                | Tag::Table(_)
                | Tag::Image { .. },
            ) => hidden += 1,
            Event::End(
                TagEnd::CodeBlock
                | TagEnd::Heading(_)
                | TagEnd::MetadataBlock(_)
                | TagEnd::Table
                | TagEnd::Image,
            ) => hidden = hidden.saturating_sub(1),

            Event::Text(t) if hidden == 0 => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak if hidden == 0 => prose.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item) if hidden == 0 => prose.push('\n'),

            _ => {}
        }
    }

    prose
}
