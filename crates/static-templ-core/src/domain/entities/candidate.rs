use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{entities::declaration::ParsedSource, value_objects::GENERATED_COMPONENT_SUFFIX};

/// A discovered render entry point.
///
/// Invariant: `entry_name` names an exported, zero-parameter, top-level
/// function in `owner_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub owner_file: PathBuf,
    pub package: String,
    pub entry_name: String,
    /// Assigned by [`crate::domain::NameResolver`].
    pub output_name: Option<String>,
    pub sole_in_file: bool,
}

impl Candidate {
    /// Every render entry point in one parsed file.
    pub fn from_parsed(owner_file: &Path, parsed: &ParsedSource) -> Vec<Self> {
        let entries: Vec<_> = parsed.entry_points().collect();
        let sole = entries.len() == 1;

        entries
            .into_iter()
            .map(|decl| Self {
                owner_file: owner_file.to_path_buf(),
                package: parsed.package.clone(),
                entry_name: decl.identifier.clone(),
                output_name: None,
                sole_in_file: sole,
            })
            .collect()
    }

    /// Directory holding the owner file.
    pub fn owner_dir(&self) -> &Path {
        self.owner_file.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Owner file name with the generated-source suffix stripped,
    /// e.g. `about_us_templ.go` → `about_us`.
    pub fn owner_stem(&self) -> String {
        let name = self
            .owner_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match name.strip_suffix(GENERATED_COMPONENT_SUFFIX) {
            Some(stem) => stem.to_string(),
            None => name,
        }
    }

    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    /// `package.Entry`, as written in Go.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.entry_name)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.entry_name, self.owner_file.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::declaration::Declaration;

    fn parsed(names: &[(&str, usize)]) -> ParsedSource {
        ParsedSource {
            package: "pages".into(),
            declarations: names
                .iter()
                .enumerate()
                .map(|(i, (name, params))| Declaration::function(*name, *params, i + 1))
                .collect(),
        }
    }

    #[test]
    fn single_entry_point_is_sole() {
        let found = Candidate::from_parsed(
            Path::new("web/pages/index_templ.go"),
            &parsed(&[("Index", 0), ("helper", 0), ("Card", 1)]),
        );
        assert_eq!(found.len(), 1);
        assert!(found[0].sole_in_file);
        assert_eq!(found[0].entry_name, "Index");
        assert_eq!(found[0].package, "pages");
    }

    #[test]
    fn several_entry_points_are_not_sole() {
        let found = Candidate::from_parsed(
            Path::new("web/pages/blog_templ.go"),
            &parsed(&[("First", 0), ("Second", 0)]),
        );
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|c| !c.sole_in_file));
    }

    #[test]
    fn only_unexported_or_parameterised_yields_nothing() {
        let found = Candidate::from_parsed(
            Path::new("web/pages/parts_templ.go"),
            &parsed(&[("card", 0), ("Button", 2), ("Layout", 1)]),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn owner_stem_strips_generated_suffix() {
        let c = Candidate::from_parsed(
            Path::new("web/pages/about_us_templ.go"),
            &parsed(&[("About", 0)]),
        )
        .remove(0);
        assert_eq!(c.owner_stem(), "about_us");
        assert_eq!(c.owner_dir(), Path::new("web/pages"));
        assert_eq!(c.qualified_name(), "pages.About");
    }
}
