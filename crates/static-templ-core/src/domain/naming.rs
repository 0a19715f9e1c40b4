//! Output file naming.
//!
//! A file with a single component names its page after the file
//! (`about_us_templ.go` → `about-us.html`); a file with several components
//! names each page after the component (`FirstPost` → `first-post.html`).

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::{
    entities::{candidate::Candidate, manifest::OutputLayout},
    error::DomainError,
    slug::slugify,
};

/// Extension of every rendered page.
pub const OUTPUT_EXTENSION: &str = "html";

pub struct NameResolver;

impl NameResolver {
    /// The unslugified name a candidate's page is derived from.
    pub fn base_name(candidate: &Candidate) -> String {
        if candidate.sole_in_file {
            candidate.owner_stem()
        } else {
            candidate.entry_name.clone()
        }
    }

    /// `<slug>.html` for one candidate.
    pub fn output_name_for(candidate: &Candidate) -> Result<String, DomainError> {
        let base = Self::base_name(candidate);
        let slug = slugify(&base);
        if slug.is_empty() {
            return Err(DomainError::EmptySlug { source_name: base });
        }
        Ok(format!("{slug}.{OUTPUT_EXTENSION}"))
    }

    /// Assign an output name to every candidate.
    ///
    /// Candidates are sorted by owner file and entry name first so names and
    /// collision reports do not depend on scan order. Two candidates landing
    /// on the same `(directory, name)` pair is an error, never an overwrite.
    pub fn resolve(candidates: &mut [Candidate], layout: &OutputLayout) -> Result<(), DomainError> {
        candidates.sort_by(|a, b| {
            a.owner_file
                .cmp(&b.owner_file)
                .then_with(|| a.entry_name.cmp(&b.entry_name))
        });

        let mut claimed: HashMap<(PathBuf, String), String> = HashMap::new();

        for candidate in candidates.iter_mut() {
            let output_name = Self::output_name_for(candidate)?;
            let directory = layout.output_dir(candidate.owner_dir())?;
            let owner = candidate.to_string();

            if let Some(first) = claimed.insert((directory.clone(), output_name.clone()), owner.clone()) {
                return Err(DomainError::NameCollision {
                    directory: directory.display().to_string(),
                    output_name,
                    first,
                    second: owner,
                });
            }

            debug!(component = %candidate.qualified_name(), output = %output_name, "Output name assigned");
            candidate.output_name = Some(output_name);
        }

        Ok(())
    }
}
