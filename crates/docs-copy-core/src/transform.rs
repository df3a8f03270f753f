//! Text rewrites applied to gomarkdoc output before it is published as MDX.

use docs_copy_config::Frontmatter;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::line::split_lines;

// MDX rejects raw HTML comments, and gomarkdoc emits them around every symbol.
static HTML_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("html comment pattern compiles"));

const INDEX_HEADING: &str = "## Index";
const SECTION_PREFIX: &str = "## ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub comments_removed: usize,
    pub index_sections_removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub content: String,
    pub stats: TransformStats,
}

/// Removes every `<!-- ... -->` span, delimiters included.
///
/// Matching is non-greedy and crosses line breaks. An opening `<!--` that is
/// never closed is left in place. Returns the rewritten text and the number
/// of comments removed.
pub fn strip_html_comments(input: &str) -> (String, usize) {
    let removed = HTML_COMMENT.find_iter(input).count();
    if removed == 0 {
        return (input.to_string(), 0);
    }
    (HTML_COMMENT.replace_all(input, "").into_owned(), removed)
}

/// Drops every `## Index` section.
///
/// A section starts at a line that is exactly `## Index` and runs up to, not
/// including, the next line starting with `## `. Without such a line the
/// section runs to the end of the input.
pub fn remove_index_section(input: &str) -> (String, usize) {
    let lines = split_lines(input);
    let mut output = String::with_capacity(input.len());
    let mut kept_from = 0usize;
    let mut removed = 0usize;
    let mut idx = 0usize;

    while idx < lines.len() {
        if lines[idx].text != INDEX_HEADING {
            idx += 1;
            continue;
        }

        output.push_str(&input[kept_from..lines[idx].start]);
        removed += 1;

        let next_heading = lines[idx + 1..]
            .iter()
            .position(|line| line.text.starts_with(SECTION_PREFIX))
            .map(|offset| idx + 1 + offset);

        match next_heading {
            Some(next_idx) => {
                kept_from = lines[next_idx].start;
                idx = next_idx;
            }
            None => {
                kept_from = input.len();
                idx = lines.len();
            }
        }
    }

    output.push_str(&input[kept_from..]);
    (output, removed)
}

/// Runs the full rewrite: comments, index section, then the frontmatter prefix.
pub fn transform(input: &str, frontmatter: &Frontmatter) -> Transformed {
    let (without_comments, comments_removed) = strip_html_comments(input);
    let (body, index_sections_removed) = remove_index_section(&without_comments);

    let mut content = frontmatter.render();
    content.push_str(&body);

    Transformed {
        content,
        stats: TransformStats {
            comments_removed,
            index_sections_removed,
        },
    }
}
