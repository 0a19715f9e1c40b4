//! Go driver program generation.

use static_templ_core::{application::ports::DriverEmitter, domain::GenerationManifest};

use crate::driver::{CodeBuilder, DRIVER_FILE_NAME, TEMPL_MODULE, TEMPL_VERSION};

/// Imports every driver needs, before the component packages.
const STD_IMPORTS: &[&str] = &["context", "io", "log", "os", "path/filepath"];

/// Emits a `package main` program that renders every planned component to
/// its output path.
///
/// Component packages are imported under aliases `c0`, `c1`, ... in sorted
/// import-path order, so two directories with the same package name never
/// clash. The program only needs the standard library besides them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoDriverEmitter;

impl GoDriverEmitter {
    pub fn new() -> Self {
        Self
    }

    pub fn alias(index: usize) -> String {
        format!("c{index}")
    }
}

impl DriverEmitter for GoDriverEmitter {
    fn emit(&self, manifest: &GenerationManifest) -> String {
        let mut b = CodeBuilder::new();

        b.push_line("// Code generated by static-templ. DO NOT EDIT.")
            .push_line(&format!(
                "// Renders {} component(s) with {TEMPL_MODULE} v{TEMPL_VERSION}.",
                manifest.renders.len()
            ))
            .push_blank()
            .push_line("package main")
            .push_blank();

        b.push_block("import (", ")", |b| {
            for import in STD_IMPORTS {
                b.push_line(&go_string(import));
            }
            if !manifest.references.is_empty() {
                b.push_blank();
            }
            for (index, reference) in manifest.references.iter().enumerate() {
                b.push_line(&format!("{} {}", Self::alias(index), go_string(reference)));
            }
        });
        b.push_blank();

        b.push_block("type component interface {", "}", |b| {
            b.push_line("Render(ctx context.Context, w io.Writer) error");
        });
        b.push_blank();

        b.push_block("func main() {", "}", |b| {
            b.push_line("ctx := context.Background()");
            for render in &manifest.renders {
                b.push_line(&format!(
                    "render(ctx, {}.{}(), {})",
                    Self::alias(render.import_index),
                    render.candidate.entry_name,
                    go_string(&render.output_path.to_string_lossy()),
                ));
            }
        });
        b.push_blank();

        b.push_block("func render(ctx context.Context, c component, out string) {", "}", |b| {
            b.push_block(
                "if err := os.MkdirAll(filepath.Dir(out), 0o755); err != nil {",
                "}",
                |b| {
                    b.push_line(r#"log.Fatalf("create directory for %s: %v", out, err)"#);
                },
            );
            b.push_line("f, err := os.Create(out)");
            b.push_block("if err != nil {", "}", |b| {
                b.push_line(r#"log.Fatalf("create %s: %v", out, err)"#);
            });
            b.push_block("if err := c.Render(ctx, f); err != nil {", "}", |b| {
                b.push_line("f.Close()");
                b.push_line(r#"log.Fatalf("render %s: %v", out, err)"#);
            });
            b.push_block("if err := f.Close(); err != nil {", "}", |b| {
                b.push_line(r#"log.Fatalf("close %s: %v", out, err)"#);
            });
        });

        b.build()
    }

    fn file_name(&self) -> &'static str {
        DRIVER_FILE_NAME
    }
}

/// Go interpreted string literal for `value`.
pub fn go_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
