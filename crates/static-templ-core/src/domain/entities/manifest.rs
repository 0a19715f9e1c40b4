use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{
        candidate::Candidate,
        common::{normalize, relative_to},
    },
    error::DomainError,
    naming::NameResolver,
    references::{ReferenceResolver, ReferenceSet},
    value_objects::{Mode, ModulePath},
};

/// Where rendered pages and staged assets go for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub mode: Mode,
    pub input_root: PathBuf,
    pub output_root: PathBuf,
}

impl OutputLayout {
    pub fn new(mode: Mode, input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Input and output root are the same directory.
    pub fn roots_coincide(&self) -> bool {
        normalize(&self.input_root) == normalize(&self.output_root)
    }

    /// Input root is the output root or lives below it.
    pub fn input_within_output(&self) -> bool {
        normalize(&self.input_root).starts_with(normalize(&self.output_root))
    }

    /// `path` lies under the output root, e.g. pages left by an earlier run
    /// when the output root is nested in the input root.
    pub fn is_output(&self, path: &Path) -> bool {
        normalize(path).starts_with(normalize(&self.output_root))
    }

    /// Bundle mode wipes the output root first, unless that would wipe the
    /// input as well.
    pub fn clears_output_root(&self) -> bool {
        self.mode == Mode::Bundle && !self.input_within_output()
    }

    /// Bundle mode copies non-component files next to the rendered pages.
    pub fn stages_assets(&self) -> bool {
        self.mode == Mode::Bundle && !self.roots_coincide()
    }

    /// Mirror of `input_path` under the output root.
    pub fn mirror(&self, input_path: &Path) -> Result<PathBuf, DomainError> {
        let relative = relative_to(input_path, &self.input_root)?;
        Ok(normalize(&self.output_root).join(relative))
    }

    /// Directory that receives the page rendered from a file in `owner_dir`.
    pub fn output_dir(&self, owner_dir: &Path) -> Result<PathBuf, DomainError> {
        match self.mode {
            Mode::Inline => Ok(normalize(owner_dir)),
            Mode::Bundle => self.mirror(owner_dir),
        }
    }

    /// Full output path of a named candidate.
    pub fn output_path(&self, candidate: &Candidate) -> Result<PathBuf, DomainError> {
        let name = candidate
            .output_name()
            .ok_or_else(|| DomainError::UnresolvedName {
                entry: candidate.qualified_name(),
            })?;
        Ok(self.output_dir(candidate.owner_dir())?.join(name))
    }
}

/// One component call the driver program will make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRender {
    pub candidate: Candidate,
    /// Import path of the package that declares the component.
    pub import_path: String,
    /// Position of `import_path` in the manifest's references.
    pub import_index: usize,
    pub output_path: PathBuf,
}

/// Everything the driver emitter needs, resolved and validated.
///
/// Built fresh for each run and consumed right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationManifest {
    pub renders: Vec<PlannedRender>,
    pub references: ReferenceSet,
    pub layout: OutputLayout,
}

impl GenerationManifest {
    /// Name every candidate, resolve its import and its output path.
    pub fn build(
        mut candidates: Vec<Candidate>,
        module: &ModulePath,
        project_root: &Path,
        layout: OutputLayout,
    ) -> Result<Self, DomainError> {
        NameResolver::resolve(&mut candidates, &layout)?;
        let references = ReferenceResolver::resolve(&candidates, module, project_root)?;

        let renders = candidates
            .into_iter()
            .map(|candidate| {
                let import_path = ReferenceResolver::reference_for(&candidate, module, project_root)?;
                let import_index = references.index_of(&import_path).ok_or_else(|| {
                    DomainError::UnresolvedImport {
                        entry: candidate.qualified_name(),
                        import: import_path.clone(),
                    }
                })?;
                let output_path = layout.output_path(&candidate)?;
                Ok(PlannedRender {
                    candidate,
                    import_path,
                    import_index,
                    output_path,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self {
            renders,
            references,
            layout,
        })
    }

    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.renders.iter().map(|r| &r.candidate)
    }

    pub fn mode(&self) -> Mode {
        self.layout.mode
    }
}
