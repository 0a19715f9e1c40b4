//! Component Discoverer - finds render entry points in generated sources.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DeclarationExtractor, Filesystem},
    },
    domain::{Candidate, DomainError},
    error::{StaticTemplError, StaticTemplResult},
};

pub struct ComponentDiscoverer<'a> {
    filesystem: &'a dyn Filesystem,
    extractor: &'a dyn DeclarationExtractor,
}

impl<'a> ComponentDiscoverer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, extractor: &'a dyn DeclarationExtractor) -> Self {
        Self {
            filesystem,
            extractor,
        }
    }

    /// Parse every generated source and collect its render entry points.
    ///
    /// The first unreadable or unparsable file aborts discovery. Finding no
    /// candidate at all is `DomainError::NoCandidates`.
    #[instrument(skip_all, fields(files = files.len()))]
    pub fn discover(&self, files: &[PathBuf]) -> StaticTemplResult<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for path in files {
            let found = self.discover_file(path)?;
            debug!(path = %path.display(), count = found.len(), "Components found");
            candidates.extend(found);
        }

        if candidates.is_empty() {
            return Err(DomainError::NoCandidates {
                searched: files.len(),
            }
            .into());
        }

        info!(count = candidates.len(), "Discovery complete");
        Ok(candidates)
    }

    fn discover_file(&self, path: &Path) -> StaticTemplResult<Vec<Candidate>> {
        let source = self
            .filesystem
            .read_to_string(path)
            .map_err(|e| discovery_error(path, e))?;
        let parsed = self
            .extractor
            .extract(path, &source)
            .map_err(|e| discovery_error(path, e))?;
        Ok(Candidate::from_parsed(path, &parsed))
    }
}

fn discovery_error(path: &Path, error: StaticTemplError) -> StaticTemplError {
    match error {
        already @ StaticTemplError::Application(ApplicationError::Discovery { .. }) => already,
        other => ApplicationError::Discovery {
            path: path.to_path_buf(),
            reason: other.to_string(),
        }
        .into(),
    }
}
