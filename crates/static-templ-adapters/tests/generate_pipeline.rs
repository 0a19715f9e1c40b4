//! End-to-end generation against a real directory tree.
//!
//! Everything but the Go toolchain is real: the driver program is written to
//! disk by the production emitter, and a stand-in runner "executes" it by
//! reading its render calls back and writing each page.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use static_templ_adapters::{
    GoDeclarationExtractor, GoDriverEmitter, GoModFile, LocalFilesystem, MemoryFilesystem,
};
use static_templ_core::{
    application::ports::{ModuleDescriptor, ProcessOutput, ProcessRunner, ProcessSpec},
    prelude::*,
};
use tempfile::TempDir;

/// Interprets `render(ctx, cN.Name(), "path")` lines of the driver.
#[derive(Clone, Default)]
struct DriverInterpreter {
    fail: bool,
    seen: Arc<Mutex<Vec<ProcessSpec>>>,
}

impl ProcessRunner for DriverInterpreter {
    fn run(&self, spec: &ProcessSpec) -> StaticTemplResult<ProcessOutput> {
        self.seen.lock().unwrap().push(spec.clone());

        if self.fail {
            return Ok(ProcessOutput {
                status_code: Some(1),
                stdout: String::new(),
                stderr: "render /x: boom".into(),
            });
        }

        let driver = PathBuf::from(spec.args.last().unwrap());
        let source = fs::read_to_string(&driver).unwrap();
        for line in source.lines().map(str::trim) {
            let Some(call) = line.strip_prefix("render(ctx, ") else {
                continue;
            };
            let (component, rest) = call.split_once("(), ").unwrap();
            let out = rest.trim_end_matches(')').trim_matches('"');
            let name = component.split('.').nth(1).unwrap();
            fs::create_dir_all(Path::new(out).parent().unwrap()).unwrap();
            fs::write(out, format!("<h1>{name}</h1>")).unwrap();
        }

        Ok(ProcessOutput {
            status_code: Some(0),
            ..Default::default()
        })
    }
}

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        let project = Self {
            dir: TempDir::new().unwrap(),
        };
        project.file("go.mod", "module example.com/site\n\ngo 1.22\n");
        project
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    fn file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn options(&self) -> GenerateOptions {
        GenerateOptions::new(self.path("web"), self.path("dist"), self.root())
    }
}

fn service(runner: DriverInterpreter) -> GenerateService {
    GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GoDeclarationExtractor::new()),
        Box::new(GoModFile::new()),
        Box::new(GoDriverEmitter::new()),
        Box::new(runner),
    )
}

const INDEX: &str = "// Code generated by templ - DO NOT EDIT.

package pages

import \"github.com/a-h/templ\"

func Index() templ.Component {
	return templ.ComponentFunc(func(ctx context.Context, w io.Writer) error {
		_, err := io.WriteString(w, \"<h1>{ }</h1>\")
		return err
	})
}

func card(title string) templ.Component {
	return nil
}
";

const BLOG: &str = "package blog

func FirstPost() templ.Component { return nil }

func SecondPost() templ.Component { return nil }

func Layout(title string) templ.Component { return nil }
";

#[test]
fn bundle_mode_end_to_end() {
    let project = Project::new();
    project.file("web/pages/index_templ.go", INDEX);
    project.file("web/pages/index.templ", "package pages\n\ntempl Index() {}\n");
    project.file("web/pages/style.css", "h1 { color: red }");
    project.file("dist/stale.html", "old");

    let runner = DriverInterpreter::default();
    let report = service(runner.clone()).generate(&project.options()).unwrap();

    assert_eq!(
        fs::read_to_string(project.path("dist/pages/index.html")).unwrap(),
        "<h1>Index</h1>"
    );
    assert_eq!(
        fs::read_to_string(project.path("dist/pages/style.css")).unwrap(),
        "h1 { color: red }"
    );
    assert!(!project.path("dist/stale.html").exists());
    assert!(!project.path("dist/pages/index.templ").exists());
    assert!(!project.path("temp").exists());

    let seen = runner.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].program, "go");
    assert_eq!(seen[0].current_dir, project.root());
    assert_eq!(
        seen[0].args,
        [
            "run".to_string(),
            project
                .path("temp/templ_static_generate_script.go")
                .display()
                .to_string(),
        ]
    );

    assert_eq!(report.renders.len(), 1);
    assert_eq!(report.copied_assets, [project.path("dist/pages/style.css")]);
    assert_eq!(report.driver_path, None);
}

#[test]
fn inline_mode_writes_next_to_sources() {
    let project = Project::new();
    project.file("web/blog/posts_templ.go", BLOG);
    project.file("web/blog/banner.png", "png");

    let mut options = project.options();
    options.mode = Mode::Inline;
    service(DriverInterpreter::default())
        .generate(&options)
        .unwrap();

    assert_eq!(
        fs::read_to_string(project.path("web/blog/first-post.html")).unwrap(),
        "<h1>FirstPost</h1>"
    );
    assert!(project.path("web/blog/second-post.html").exists());
    assert!(!project.path("web/blog/layout.html").exists());
    assert!(!project.path("dist").exists());
}

#[test]
fn zero_candidates_leave_output_untouched() {
    let project = Project::new();
    project.file("web/pages/parts_templ.go", "package pages\n\nfunc card() {}\n");
    project.file("web/pages/style.css", "");
    project.file("dist/keep.html", "keep");

    let runner = DriverInterpreter::default();
    let err = service(runner.clone())
        .generate(&project.options())
        .unwrap_err();

    assert_eq!(err.stage(), Some(Stage::Discover));
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert_eq!(
        fs::read_to_string(project.path("dist/keep.html")).unwrap(),
        "keep"
    );
    assert!(!project.path("dist/pages").exists());
    assert!(runner.seen.lock().unwrap().is_empty());
}

#[test]
fn syntax_error_aborts_discovery() {
    let project = Project::new();
    project.file("web/pages/index_templ.go", INDEX);
    project.file("web/pages/broken_templ.go", "package pages\n\nfunc Broken() {\n");

    let err = service(DriverInterpreter::default())
        .generate(&project.options())
        .unwrap_err();

    assert_eq!(err.stage(), Some(Stage::Discover));
    let message = err.to_string();
    assert!(message.contains("broken_templ.go"), "{message}");
    assert!(message.contains("syntax error at"), "{message}");
}

#[test]
fn debug_keeps_the_driver() {
    let project = Project::new();
    project.file("web/pages/index_templ.go", INDEX);

    let mut options = project.options();
    options.debug = true;
    let report = service(DriverInterpreter::default())
        .generate(&options)
        .unwrap();

    let driver = project.path("temp/templ_static_generate_script.go");
    assert_eq!(report.driver_path.as_deref(), Some(driver.as_path()));
    let source = fs::read_to_string(driver).unwrap();
    assert!(source.contains("c0 \"example.com/site/web/pages\""));
}

#[test]
fn failing_driver_is_reported_and_cleaned_up() {
    let project = Project::new();
    project.file("web/pages/index_templ.go", INDEX);

    let runner = DriverInterpreter {
        fail: true,
        ..Default::default()
    };
    let err = service(runner).generate(&project.options()).unwrap_err();

    assert_eq!(err.stage(), Some(Stage::Execute));
    assert!(err.to_string().contains("boom"));
    assert!(!project.path("temp").exists());
}

#[test]
fn missing_go_mod_fails_resolution() {
    let project = Project::new();
    fs::remove_file(project.path("go.mod")).unwrap();
    project.file("web/pages/index_templ.go", INDEX);

    let err = service(DriverInterpreter::default())
        .generate(&project.options())
        .unwrap_err();

    assert_eq!(err.stage(), Some(Stage::Resolve));
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

struct FixedModule;

impl ModuleDescriptor for FixedModule {
    fn module_path(&self, _: &Path) -> StaticTemplResult<String> {
        Ok("example.com/site".into())
    }
}

#[test]
fn staging_in_memory() {
    let fs = MemoryFilesystem::new()
        .with_file("/site/web/pages/index_templ.go", INDEX)
        .with_file("/site/web/pages/img/logo.svg", "<svg/>")
        .with_file("/site/dist/old.html", "old");

    let service = GenerateService::new(
        Box::new(fs.clone()),
        Box::new(GoDeclarationExtractor::new()),
        Box::new(FixedModule),
        Box::new(GoDriverEmitter::new()),
        Box::new(NoopRunner),
    );
    let report = service
        .generate(&GenerateOptions::new("/site/web", "/site/dist", "/site"))
        .unwrap();

    assert_eq!(
        fs.read_file(Path::new("/site/dist/pages/img/logo.svg")).as_deref(),
        Some("<svg/>")
    );
    assert_eq!(fs.read_file(Path::new("/site/dist/old.html")), None);
    assert!(!fs.exists(Path::new("/site/temp")));
    assert_eq!(
        report.renders[0].output_path,
        PathBuf::from("/site/dist/pages/index.html")
    );
}

struct NoopRunner;

impl ProcessRunner for NoopRunner {
    fn run(&self, _: &ProcessSpec) -> StaticTemplResult<ProcessOutput> {
        Ok(ProcessOutput {
            status_code: Some(0),
            ..Default::default()
        })
    }
}
