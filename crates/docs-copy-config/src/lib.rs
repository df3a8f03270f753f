//! Copy layout and frontmatter for the copy-docs tool.
//!
//! Where the generated reference lives under the SDK root, where it lands
//! under the docs root, and the frontmatter injected into the published page
//! are fixed values held in an immutable [`CopyConfig`].

use std::path::PathBuf;

/// Location of the gomarkdoc output, relative to the SDK root.
pub const DEFAULT_SOURCE: &str = "build/docs/fishaudio.md";

/// Location of the published page, relative to the docs root.
pub const DEFAULT_DESTINATION: &str = "api-reference/sdk/go/api-reference.mdx";

pub const DEFAULT_TITLE: &str = "API Reference";
pub const DEFAULT_DESCRIPTION: &str = "Complete reference for Fish Audio Go SDK";
pub const DEFAULT_ICON: &str = "book";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyConfig {
    /// Source file, relative to the SDK root.
    pub source: PathBuf,
    /// Destination file, relative to the docs root.
    pub destination: PathBuf,
    pub frontmatter: Frontmatter,
}

impl Default for CopyConfig {
    fn default() -> Self {
        CopyConfig {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            frontmatter: Frontmatter::default(),
        }
    }
}

/// Metadata header consumed by the docs site renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl Default for Frontmatter {
    fn default() -> Self {
        Frontmatter {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

impl Frontmatter {
    /// Renders the `---` delimited block, terminated by a blank line.
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: {}\ndescription: {}\nicon: {}\n---\n\n",
            quote_scalar(&self.title),
            quote_scalar(&self.description),
            quote_scalar(&self.icon),
        )
    }
}

fn quote_scalar(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
