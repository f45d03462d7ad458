use std::ops::{Index, Range};
use std::sync::Arc;

use codespan_reporting::files::{Error, Files};
use stdx::{impl_debug_display, impl_idx_from};
use text_size::TextSize;
use typed_index_collections::TiVec;

use crate::{Line, LineIndex};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct FileId(u32);
impl_idx_from!(FileId(u32));
impl_debug_display!(file@FileId => "file{}", file.0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub text: Arc<str>,
    pub line_index: LineIndex,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<Arc<str>>) -> SourceFile {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        SourceFile { name: name.into(), text, line_index }
    }

    pub fn line(&self, offset: TextSize) -> Line {
        self.line_index.line(offset)
    }
}

/// All source files known to a compilation.
#[derive(Debug, Default, Clone)]
pub struct SourceFiles {
    files: TiVec<FileId, SourceFile>,
}

impl SourceFiles {
    pub fn new() -> SourceFiles {
        SourceFiles::default()
    }

    pub fn add(&mut self, name: impl Into<String>, text: impl Into<Arc<str>>) -> FileId {
        self.files.push_and_get_key(SourceFile::new(name, text))
    }

    pub fn get(&self, file: FileId) -> Option<&SourceFile> {
        self.files.get(file)
    }
}

impl Index<FileId> for SourceFiles {
    type Output = SourceFile;

    fn index(&self, file: FileId) -> &SourceFile {
        &self.files[file]
    }
}

impl<'a> Files<'a> for SourceFiles {
    type FileId = FileId;

    type Name = &'a str;

    type Source = &'a str;

    fn name(&'a self, id: FileId) -> Result<&'a str, Error> {
        self.get(id).map(|file| file.name.as_str()).ok_or(Error::FileMissing)
    }

    fn source(&'a self, id: FileId) -> Result<&'a str, Error> {
        self.get(id).map(|file| &*file.text).ok_or(Error::FileMissing)
    }

    fn line_index(&'a self, id: FileId, byte_index: usize) -> Result<usize, Error> {
        let file = self.get(id).ok_or(Error::FileMissing)?;
        let offset = u32::try_from(byte_index)
            .map_err(|_| Error::IndexTooLarge { given: byte_index, max: file.text.len() })?;
        Ok(file.line(offset.into()).into())
    }

    fn line_range(&'a self, id: FileId, line_index: usize) -> Result<Range<usize>, Error> {
        let file = self.get(id).ok_or(Error::FileMissing)?;
        let range = file.line_index.line_range(line_index.into()).ok_or(Error::LineTooLarge {
            given: line_index,
            max: file.line_index.line_count() - 1,
        })?;
        Ok(range.into())
    }
}
