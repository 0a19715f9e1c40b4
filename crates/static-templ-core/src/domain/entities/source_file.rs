use std::path::{Path, PathBuf};

use crate::domain::value_objects::FileRole;

/// A scanned file and the role it plays in generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub role: FileRole,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let role = FileRole::classify(&path);
        Self { path, role }
    }
}

/// Scanned files partitioned by role.
///
/// Every input path lands in exactly one list, so the four lengths always
/// sum to [`GroupedFiles::total`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedFiles {
    pub generated: Vec<PathBuf>,
    pub definitions: Vec<PathBuf>,
    pub go_sources: Vec<PathBuf>,
    pub other: Vec<PathBuf>,
}

impl GroupedFiles {
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut grouped = Self::default();
        for path in paths {
            grouped.push(SourceFile::new(path));
        }
        grouped
    }

    pub fn push(&mut self, file: SourceFile) {
        let bucket = match file.role {
            FileRole::GeneratedComponentSource => &mut self.generated,
            FileRole::ComponentDefinitionSource => &mut self.definitions,
            FileRole::CompiledOrOtherGoSource => &mut self.go_sources,
            FileRole::Other => &mut self.other,
        };
        bucket.push(file.path);
    }

    pub fn with_role(&self, role: FileRole) -> &[PathBuf] {
        match role {
            FileRole::GeneratedComponentSource => &self.generated,
            FileRole::ComponentDefinitionSource => &self.definitions,
            FileRole::CompiledOrOtherGoSource => &self.go_sources,
            FileRole::Other => &self.other,
        }
    }

    pub fn total(&self) -> usize {
        self.generated.len() + self.definitions.len() + self.go_sources.len() + self.other.len()
    }

    /// Role of `path` if it is part of this scan.
    pub fn role_of(&self, path: &Path) -> Option<FileRole> {
        [
            FileRole::GeneratedComponentSource,
            FileRole::ComponentDefinitionSource,
            FileRole::CompiledOrOtherGoSource,
            FileRole::Other,
        ]
        .into_iter()
        .find(|role| self.with_role(*role).iter().any(|p| p == path))
    }
}
