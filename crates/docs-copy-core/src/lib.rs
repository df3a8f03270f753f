pub mod copy;
pub mod error;
pub mod fs;
pub mod line;
pub mod transform;

pub use copy::{copy_docs, CopyOutcome, CopyRequest, COMPLETION_MESSAGE};
pub use docs_copy_config::{CopyConfig, Frontmatter};
pub use error::{CopyError, CopyResult, ExitCode};
pub use transform::{
    remove_index_section, strip_html_comments, transform, TransformStats, Transformed,
};
