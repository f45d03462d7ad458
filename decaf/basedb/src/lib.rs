//! Source files, line information and the diagnostic reporting framework.

pub mod diagnostics;
mod line_index;
mod source;


pub use line_index::{Line, LineCol, LineIndex};
pub use source::{FileId, SourceFile, SourceFiles};
