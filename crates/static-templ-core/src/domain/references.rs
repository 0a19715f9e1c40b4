//! Import references the driver program needs.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::{
    entities::{
        candidate::Candidate,
        common::{relative_to, to_slash},
    },
    error::DomainError,
    value_objects::ModulePath,
};

/// Unique module-qualified import paths, one per directory that holds at
/// least one candidate.
///
/// Kept sorted so its content and iteration order never depend on the order
/// candidates were discovered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet(BTreeSet<String>);

impl ReferenceSet {
    pub fn insert(&mut self, reference: String) -> bool {
        self.0.insert(reference)
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.0.contains(reference)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Position of `reference` in sorted order; stable for a given set.
    pub fn index_of(&self, reference: &str) -> Option<usize> {
        self.0.iter().position(|r| r == reference)
    }
}

impl FromIterator<String> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub struct ReferenceResolver;

impl ReferenceResolver {
    /// `<module>/<owner dir relative to project root>` for one candidate.
    pub fn reference_for(
        candidate: &Candidate,
        module: &ModulePath,
        project_root: &Path,
    ) -> Result<String, DomainError> {
        let relative = relative_to(candidate.owner_dir(), project_root)?;
        let relative = to_slash(&relative);
        if relative.is_empty() {
            Ok(module.to_string())
        } else {
            Ok(format!("{module}/{relative}"))
        }
    }

    pub fn resolve(
        candidates: &[Candidate],
        module: &ModulePath,
        project_root: &Path,
    ) -> Result<ReferenceSet, DomainError> {
        candidates
            .iter()
            .map(|c| Self::reference_for(c, module, project_root))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn candidate(owner: &str, entry: &str) -> Candidate {
        Candidate {
            owner_file: PathBuf::from(owner),
            package: "pages".into(),
            entry_name: entry.into(),
            output_name: None,
            sole_in_file: false,
        }
    }

    fn module() -> ModulePath {
        ModulePath::parse("github.com/user/site").unwrap()
    }

    #[test]
    fn one_reference_per_directory() {
        let candidates = [
            candidate("web/pages/index_templ.go", "Index"),
            candidate("web/pages/about_templ.go", "About"),
            candidate("web/blog/post_templ.go", "Post"),
        ];
        let refs = ReferenceResolver::resolve(&candidates, &module(), Path::new(".")).unwrap();

        assert_eq!(
            refs.iter().collect::<Vec<_>>(),
            ["github.com/user/site/web/blog", "github.com/user/site/web/pages"]
        );
    }

    #[test]
    fn order_independent() {
        let candidates = vec![
            candidate("web/a/x_templ.go", "X"),
            candidate("web/b/y_templ.go", "Y"),
            candidate("web/a/z_templ.go", "Z"),
            candidate("web/c/w_templ.go", "W"),
        ];
        let forward = ReferenceResolver::resolve(&candidates, &module(), Path::new(".")).unwrap();

        let mut permuted = candidates.clone();
        permuted.rotate_left(2);
        permuted.swap(0, 3);
        let backward = ReferenceResolver::resolve(&permuted, &module(), Path::new(".")).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn relative_to_absolute_project_root() {
        let c = candidate("/home/me/site/web/pages/index_templ.go", "Index");
        assert_eq!(
            ReferenceResolver::reference_for(&c, &module(), Path::new("/home/me/site")).unwrap(),
            "github.com/user/site/web/pages"
        );
    }

    #[test]
    fn component_at_project_root_uses_module_itself() {
        let c = candidate("/site/index_templ.go", "Index");
        assert_eq!(
            ReferenceResolver::reference_for(&c, &module(), Path::new("/site")).unwrap(),
            "github.com/user/site"
        );
    }

    #[test]
    fn owner_outside_project_is_error() {
        let c = candidate("/elsewhere/index_templ.go", "Index");
        assert!(matches!(
            ReferenceResolver::reference_for(&c, &module(), Path::new("/site")),
            Err(DomainError::OutsideRoot { .. })
        ));
    }

    #[test]
    fn index_of_is_sorted_position() {
        let refs: ReferenceSet = ["b".to_string(), "a".to_string()].into_iter().collect();
        assert_eq!(refs.index_of("a"), Some(0));
        assert_eq!(refs.index_of("b"), Some(1));
        assert_eq!(refs.index_of("c"), None);
    }
}
