//! File Scanner - walks the input tree and groups files by role.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{GroupedFiles, SourceFile},
    error::StaticTemplResult,
};

pub struct FileScanner<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileScanner<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Walk `root` recursively and classify every file.
    ///
    /// An empty tree is not an error here; discovery decides whether there is
    /// anything to render.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> StaticTemplResult<GroupedFiles> {
        let mut grouped = GroupedFiles::default();

        for path in self.filesystem.walk_files(root)? {
            let file = SourceFile::new(path);
            debug!(path = %file.path.display(), role = %file.role, "Classified");
            grouped.push(file);
        }

        info!(
            total = grouped.total(),
            generated = grouped.generated.len(),
            definitions = grouped.definitions.len(),
            go_sources = grouped.go_sources.len(),
            other = grouped.other.len(),
            "Scan complete"
        );
        Ok(grouped)
    }
}
