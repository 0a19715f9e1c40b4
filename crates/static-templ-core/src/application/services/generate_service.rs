//! Generate Service - main application orchestrator.
//!
//! Runs one generation end to end:
//! 1. Optionally format and recompile component sources (external tools)
//! 2. Scan the input tree and discover render entry points
//! 3. Resolve output names and import references
//! 4. Stage assets (bundle mode)
//! 5. Emit the driver program, execute it, clean up
//!
//! Every error is tagged with the [`Stage`] it aborted and ends the run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ComponentDiscoverer, FileScanner,
        ports::{
            DeclarationExtractor, DriverEmitter, Filesystem, ModuleDescriptor, ProcessRunner,
            ProcessSpec,
        },
    },
    domain::{Candidate, GenerationManifest, GroupedFiles, Mode, ModulePath, OutputLayout},
    error::{AtStage, Stage, StaticTemplError, StaticTemplResult},
};

/// An external command with its leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn spec(&self, current_dir: &Path) -> ProcessSpec {
        ProcessSpec::new(&self.program, current_dir).args(self.args.iter().cloned())
    }
}

/// Inputs for one generation run.
///
/// Paths are expected to be absolute; `scratch_dir` is relative to
/// `project_root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub project_root: PathBuf,
    pub scratch_dir: PathBuf,
    pub mode: Mode,
    pub run_formatter: bool,
    pub run_compiler: bool,
    /// Keep the scratch directory and its driver program.
    pub debug: bool,
    /// Stop after resolution; touch nothing and run nothing.
    pub dry_run: bool,
    /// Invoked with the input root appended.
    pub formatter: ToolCommand,
    pub compiler: ToolCommand,
    /// Invoked with the driver path appended.
    pub driver: ToolCommand,
}

impl GenerateOptions {
    pub fn new(
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            project_root: project_root.into(),
            scratch_dir: PathBuf::from("temp"),
            mode: Mode::default(),
            run_formatter: false,
            run_compiler: false,
            debug: false,
            dry_run: false,
            formatter: ToolCommand::new("templ", ["fmt"]),
            compiler: ToolCommand::new("templ", ["generate"]),
            driver: ToolCommand::new("go", ["run"]),
        }
    }

    pub fn scratch_path(&self) -> PathBuf {
        self.project_root.join(&self.scratch_dir)
    }

    fn layout(&self) -> OutputLayout {
        OutputLayout::new(self.mode, &self.input_root, &self.output_root)
    }
}

/// One page the run produced (or would produce, for a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub component: String,
    pub owner_file: PathBuf,
    pub output_path: PathBuf,
}

/// What a generation run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub mode: Mode,
    pub renders: Vec<RenderSummary>,
    /// Destinations of copied assets (planned destinations for a dry run).
    pub copied_assets: Vec<PathBuf>,
    /// Set when the driver program was kept on disk.
    pub driver_path: Option<PathBuf>,
    pub dry_run: bool,
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    extractor: Box<dyn DeclarationExtractor>,
    modules: Box<dyn ModuleDescriptor>,
    emitter: Box<dyn DriverEmitter>,
    runner: Box<dyn ProcessRunner>,
}

impl GenerateService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        extractor: Box<dyn DeclarationExtractor>,
        modules: Box<dyn ModuleDescriptor>,
        emitter: Box<dyn DriverEmitter>,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            filesystem,
            extractor,
            modules,
            emitter,
            runner,
        }
    }

    #[instrument(
        skip_all,
        fields(
            mode = %options.mode,
            input = %options.input_root.display(),
            output = %options.output_root.display()
        )
    )]
    pub fn generate(&self, options: &GenerateOptions) -> StaticTemplResult<GenerationReport> {
        if options.run_formatter {
            info!("Formatting component definitions");
            let spec = options
                .formatter
                .spec(&options.project_root)
                .arg(options.input_root.display().to_string());
            self.run_tool(&spec).at_stage(Stage::Format)?;
        }

        if options.run_compiler {
            info!("Regenerating component sources");
            let spec = options.compiler.spec(&options.project_root);
            self.run_tool(&spec).at_stage(Stage::Recompile)?;
        }

        let files = FileScanner::new(self.filesystem.as_ref())
            .scan(&options.input_root)
            .at_stage(Stage::Scan)?;

        let candidates = ComponentDiscoverer::new(self.filesystem.as_ref(), self.extractor.as_ref())
            .discover(&files.generated)
            .at_stage(Stage::Discover)?;

        let manifest = self.resolve(candidates, options).at_stage(Stage::Resolve)?;
        info!(
            pages = manifest.renders.len(),
            packages = manifest.references.len(),
            "Resolved"
        );

        if options.dry_run {
            let planned = planned_assets(&manifest.layout, &files).at_stage(Stage::Assets)?;
            info!("Dry run, nothing written");
            return Ok(report(&manifest, planned.into_iter().map(|(_, to)| to).collect(), None, true));
        }

        let copied = self
            .stage_assets(&manifest.layout, &files)
            .at_stage(Stage::Assets)?;

        let executed = self
            .emit(&manifest, options)
            .at_stage(Stage::Emit)
            .and_then(|driver| {
                self.execute(&driver, options)
                    .at_stage(Stage::Execute)
                    .map(|()| driver)
            });
        let cleaned = self.cleanup(options).at_stage(Stage::Cleanup);

        let driver = match (executed, cleaned) {
            (Ok(driver), Ok(())) => driver,
            (Ok(_), Err(e)) => return Err(e),
            (Err(e), cleaned) => {
                if let Err(cleanup) = cleaned {
                    warn!(error = %cleanup, "Cleanup after failure also failed");
                }
                return Err(e);
            }
        };

        info!(pages = manifest.renders.len(), "Generation complete");
        let retained = options.debug.then_some(driver);
        Ok(report(&manifest, copied, retained, false))
    }

    // -------------------------------------------------------------------------
    // Stages
    // -------------------------------------------------------------------------

    fn resolve(
        &self,
        candidates: Vec<Candidate>,
        options: &GenerateOptions,
    ) -> StaticTemplResult<GenerationManifest> {
        let raw = self.modules.module_path(&options.project_root)?;
        let module = ModulePath::parse(&raw)?;
        debug!(module = %module, "Module path");

        Ok(GenerationManifest::build(
            candidates,
            &module,
            &options.project_root,
            options.layout(),
        )?)
    }

    /// Clear the output root and mirror every non-component file into it.
    fn stage_assets(
        &self,
        layout: &OutputLayout,
        files: &GroupedFiles,
    ) -> StaticTemplResult<Vec<PathBuf>> {
        if !layout.stages_assets() {
            return Ok(Vec::new());
        }

        let planned = planned_assets(layout, files)?;

        if layout.clears_output_root() && self.filesystem.exists(&layout.output_root) {
            info!(path = %layout.output_root.display(), "Clearing output root");
            self.filesystem.remove_dir_all(&layout.output_root)?;
        }
        self.filesystem.create_dir_all(&layout.output_root)?;

        let mut copied = Vec::with_capacity(planned.len());
        for (from, to) in planned {
            if let Some(parent) = to.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.copy_file(&from, &to)?;
            debug!(from = %from.display(), to = %to.display(), "Asset copied");
            copied.push(to);
        }

        info!(count = copied.len(), "Assets staged");
        Ok(copied)
    }

    fn emit(&self, manifest: &GenerationManifest, options: &GenerateOptions) -> StaticTemplResult<PathBuf> {
        let scratch = options.scratch_path();
        let driver = scratch.join(self.emitter.file_name());

        self.filesystem.create_dir_all(&scratch)?;
        self.filesystem
            .write_file(&driver, &self.emitter.emit(manifest))?;

        debug!(path = %driver.display(), "Driver written");
        Ok(driver)
    }

    fn execute(&self, driver: &Path, options: &GenerateOptions) -> StaticTemplResult<()> {
        let spec = options
            .driver
            .spec(&options.project_root)
            .arg(driver.display().to_string());
        info!(command = %spec.command_line(), "Rendering pages");
        self.run_tool(&spec)
    }

    fn cleanup(&self, options: &GenerateOptions) -> StaticTemplResult<()> {
        let scratch = options.scratch_path();
        if options.debug {
            info!(path = %scratch.display(), "Keeping scratch directory");
            return Ok(());
        }
        if self.filesystem.exists(&scratch) {
            self.filesystem.remove_dir_all(&scratch)?;
            debug!(path = %scratch.display(), "Scratch directory removed");
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_tool(&self, spec: &ProcessSpec) -> StaticTemplResult<()> {
        debug!(command = %spec.command_line(), cwd = %spec.current_dir.display(), "Running");
        let output = self.runner.run(spec)?;

        if output.success() {
            return Ok(());
        }

        Err(StaticTemplError::from(ApplicationError::ExternalTool {
            tool: spec.command_line(),
            code: output.status_code,
            output: output.combined(),
        }))
    }
}

/// `(source, destination)` for every asset bundle mode would copy.
///
/// Files already under the output root are skipped; they are output of an
/// earlier run when the output root is nested in the input root.
fn planned_assets(
    layout: &OutputLayout,
    files: &GroupedFiles,
) -> StaticTemplResult<Vec<(PathBuf, PathBuf)>> {
    if !layout.stages_assets() {
        return Ok(Vec::new());
    }

    files
        .other
        .iter()
        .filter(|path| !layout.is_output(path))
        .map(|path| Ok((path.clone(), layout.mirror(path)?)))
        .collect()
}

fn report(
    manifest: &GenerationManifest,
    copied_assets: Vec<PathBuf>,
    driver_path: Option<PathBuf>,
    dry_run: bool,
) -> GenerationReport {
    GenerationReport {
        mode: manifest.mode(),
        renders: manifest
            .renders
            .iter()
            .map(|r| RenderSummary {
                component: r.candidate.qualified_name(),
                owner_file: r.candidate.owner_file.clone(),
                output_path: r.output_path.clone(),
            })
            .collect(),
        copied_assets,
        driver_path,
        dry_run,
    }
}
