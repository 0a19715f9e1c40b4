//! Top-level declaration parser for Go source files.
//!
//! The file is parsed with the tree-sitter Go grammar. Any `ERROR` or
//! `MISSING` node anywhere in the tree fails the parse, as does a top-level
//! item that is not a declaration. Only then are the top-level `func`,
//! `type`, `var` and `const` declarations read off the tree.

use static_templ_core::domain::{Declaration, DeclarationKind, ParsedSource};
use thiserror::Error;
use tree_sitter::{Node, Parser};

/// Why a Go file could not be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// 1-based position of the first problem in the file.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Go grammar could not be loaded: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("Go parser returned no tree")]
    NoTree,
}

impl ParseError {
    fn at(node: Node<'_>, message: impl Into<String>) -> Self {
        let point = node.start_position();
        Self::Syntax {
            line: point.row + 1,
            column: point.column + 1,
            message: message.into(),
        }
    }
}

/// Parse `source` into its package name and top-level declarations.
pub fn parse(source: &str) -> Result<ParsedSource, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();

    if root.has_error() {
        let node = first_error(root).unwrap_or(root);
        return Err(ParseError::at(node, describe_error(node, source)));
    }

    let mut package = None;
    let mut declarations = Vec::new();
    let mut cursor = root.walk();

    for item in root.named_children(&mut cursor) {
        match item.kind() {
            "comment" => continue,
            "package_clause" if package.is_none() => {
                let name = first_named_of_kind(item, "package_identifier")
                    .ok_or_else(|| ParseError::at(item, "expected package name"))?;
                package = Some(text(name, source));
                continue;
            }
            _ if package.is_none() => {
                return Err(ParseError::at(item, "expected 'package' clause"));
            }
            "import_declaration" => {}
            "function_declaration" => {
                declarations.push(func_decl(item, DeclarationKind::Function, source)?);
            }
            "method_declaration" => {
                declarations.push(func_decl(item, DeclarationKind::Method, source)?);
            }
            "type_declaration" => spec_names(
                item,
                &["type_spec", "type_alias"],
                DeclarationKind::Type,
                source,
                &mut declarations,
            ),
            "var_declaration" | "const_declaration" => spec_names(
                item,
                &["var_spec", "const_spec"],
                DeclarationKind::Value,
                source,
                &mut declarations,
            ),
            _ => {
                return Err(ParseError::at(
                    item,
                    "non-declaration statement outside function body",
                ));
            }
        }
    }

    let package =
        package.ok_or_else(|| ParseError::at(root, "expected 'package', found end of file"))?;

    Ok(ParsedSource {
        package,
        declarations,
    })
}

/// `func [receiver] Name [type params] (params) ...`.
fn func_decl(node: Node<'_>, kind: DeclarationKind, source: &str) -> Result<Declaration, ParseError> {
    let name = node
        .child_by_field_name("name")
        .ok_or_else(|| ParseError::at(node, "expected function name"))?;
    let identifier = text(name, source);
    let parameters = node.child_by_field_name("parameters").ok_or_else(|| {
        ParseError::at(name, format!("expected parameter list for {identifier}"))
    })?;

    Ok(Declaration::function(
        identifier,
        count_parameters(parameters),
        name.start_position().row + 1,
    )
    .with_kind(kind))
}

/// Value parameters in a `parameter_list`. `(a, b int)` and `(int, string)`
/// both count two; a variadic parameter counts one.
fn count_parameters(list: Node<'_>) -> usize {
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .map(|param| match param.kind() {
            "parameter_declaration" => {
                let mut names = param.walk();
                param.children_by_field_name("name", &mut names).count().max(1)
            }
            "variadic_parameter_declaration" => 1,
            _ => 0,
        })
        .sum()
}

/// Every name bound by the specs under a `type`, `var` or `const`
/// declaration, grouped or not. Spec values are not searched, so a var
/// initialised with a func literal does not leak its locals.
fn spec_names(
    node: Node<'_>,
    spec_kinds: &[&str],
    kind: DeclarationKind,
    source: &str,
    out: &mut Vec<Declaration>,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if spec_kinds.contains(&child.kind()) {
            let mut names = child.walk();
            for name in child.children_by_field_name("name", &mut names) {
                out.push(
                    Declaration::function(text(name, source), 0, name.start_position().row + 1)
                        .with_kind(kind),
                );
            }
        } else {
            spec_names(child, spec_kinds, kind, source, out);
        }
    }
}

/// Leftmost `ERROR` or `MISSING` node under `node`.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

fn describe_error(node: Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("missing {:?}", node.kind());
    }
    let snippet = node
        .utf8_text(source.as_bytes())
        .unwrap_or_default()
        .split_whitespace()
        .next()
        .unwrap_or_default();
    if snippet.is_empty() {
        "unexpected end of file".to_owned()
    } else {
        format!("unexpected {snippet:?}")
    }
}

fn text(node: Node<'_>, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or_default()
        .to_owned()
}

fn first_named_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|child| child.kind() == kind);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(source: &str) -> Vec<(String, DeclarationKind, usize)> {
        parse(source)
            .unwrap()
            .declarations
            .into_iter()
            .map(|d| (d.identifier, d.kind, d.parameter_count))
            .collect()
    }

    fn func(name: &str, params: usize) -> (String, DeclarationKind, usize) {
        (name.into(), DeclarationKind::Function, params)
    }

    fn syntax_error(source: &str) -> (usize, usize, String) {
        match parse(source) {
            Err(ParseError::Syntax {
                line,
                column,
                message,
            }) => (line, column, message),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    const GENERATED: &str = r#"// Code generated by templ - DO NOT EDIT.

package pages

//lint:file-ignore SA4006 This context is only used if a nested component is present.

import "github.com/a-h/templ"
import templruntime "github.com/a-h/templ/runtime"

func Index() templ.Component {
	return templruntime.GeneratedTemplate(func(templ_7745c5c3_Input templruntime.GeneratedComponentInput) (templ_7745c5c3_Err error) {
		templ_7745c5c3_W, ctx := templ_7745c5c3_Input.Writer, templ_7745c5c3_Input.Context
		if templ_7745c5c3_CtxErr := ctx.Err(); templ_7745c5c3_CtxErr != nil {
			return templ_7745c5c3_CtxErr
		}
		templ_7745c5c3_Buffer, templ_7745c5c3_IsBuffer := templruntime.GetBuffer(templ_7745c5c3_W)
		if !templ_7745c5c3_IsBuffer {
			defer func() {
				templ_7745c5c3_BufErr := templruntime.ReleaseBuffer(templ_7745c5c3_Buffer)
				if templ_7745c5c3_Err == nil {
					templ_7745c5c3_Err = templ_7745c5c3_BufErr
				}
			}()
		}
		ctx = templ.InitializeContext(ctx)
		templ_7745c5c3_Err = templruntime.WriteString(templ_7745c5c3_Buffer, 1, "<h1>Hello</h1>")
		if templ_7745c5c3_Err != nil {
			return templ_7745c5c3_Err
		}
		return nil
	})
}

func card(title string) templ.Component {
	return nil
}

var _ = templruntime.GeneratedTemplate
"#;

    #[test]
    fn generated_templ_file() {
        let parsed = parse(GENERATED).unwrap();
        assert_eq!(parsed.package, "pages");
        assert_eq!(
            decls(GENERATED),
            [
                func("Index", 0),
                func("card", 1),
                ("_".into(), DeclarationKind::Value, 0),
            ]
        );
        let entries: Vec<_> = parsed.entry_points().map(|d| d.identifier.as_str()).collect();
        assert_eq!(entries, ["Index"]);
    }

    #[test]
    fn nested_funcs_are_not_top_level() {
        let source = "package p\nfunc Outer() {\n\tf := func() {}\n\tfunc() {}()\n\t_ = f\n}\n";
        assert_eq!(decls(source), [func("Outer", 0)]);
    }

    #[test]
    fn parameter_counting() {
        let source = "package p
func A() {}
func B(a int) {}
func C(a, b int) {}
func D(int, string) {}
func E(fn func(int, int) error, m map[string][]int) {}
func F(xs ...string) {}
func G(
	a int,
	b int,
) {}
";
        assert_eq!(
            decls(source),
            [
                func("A", 0),
                func("B", 1),
                func("C", 2),
                func("D", 2),
                func("E", 2),
                func("F", 1),
                func("G", 2),
            ]
        );
    }

    #[test]
    fn methods_and_generics() {
        let source = "package p
func (p *Page) Render() {}
func Map[T any, U any]() {}
func Pair[K comparable, V any](k K, v V) {}
";
        assert_eq!(
            decls(source),
            [
                ("Render".into(), DeclarationKind::Method, 0),
                func("Map", 0),
                func("Pair", 2),
            ]
        );
    }

    #[test]
    fn grouped_declarations_are_listed() {
        let source = "package p
type Page struct{ Title string }
var (
	A = 1
	B, C = 2, 3
)
var D = func() int { var hidden = 4; return hidden }()
func Index() {}
";
        assert_eq!(
            decls(source),
            [
                ("Page".into(), DeclarationKind::Type, 0),
                ("A".into(), DeclarationKind::Value, 0),
                ("B".into(), DeclarationKind::Value, 0),
                ("C".into(), DeclarationKind::Value, 0),
                ("D".into(), DeclarationKind::Value, 0),
                func("Index", 0),
            ]
        );
    }

    #[test]
    fn result_types_do_not_matter() {
        let source = "package p\nfunc A() (string, error) { return \"\", nil }\nfunc B() {}\n";
        assert_eq!(decls(source), [func("A", 0), func("B", 0)]);
    }

    #[test]
    fn records_declaration_line() {
        let parsed = parse("package p\n\n// doc\nfunc Index() {}\n").unwrap();
        assert_eq!(parsed.declarations[0].line, 4);
    }

    #[test]
    fn missing_package_clause() {
        let (_, _, message) = syntax_error("func Index() {}");
        assert_eq!(message, "expected 'package' clause");
        assert!(parse("").is_err());
        assert!(parse("// only a comment\n").is_err());
    }

    #[test]
    fn unbalanced_brackets() {
        syntax_error("package p\nfunc Index() {\n");
        syntax_error("package p\nfunc Index() { ) }\n");
        syntax_error("package p\n}\n");
    }

    #[test]
    fn malformed_func_headers() {
        syntax_error("package p\nfunc () {}\n");
        syntax_error("package p\nfunc Index {}\n");
        syntax_error("package p\nfunc Index(a int {}\n");
    }

    #[test]
    fn stray_expression_does_not_hide_the_next_func() {
        syntax_error("package p\n1 + + \nfunc Index() {}\n");
    }

    #[test]
    fn broken_function_body() {
        syntax_error("package p\nfunc Index() templ.Component { return := := +++ }\n");
    }

    #[test]
    fn empty_import() {
        syntax_error("package p\nimport \nfunc Index() {}\n");
    }

    #[test]
    fn top_level_statements_are_rejected() {
        let (line, column, message) = syntax_error("package p\nrender()\nfunc Index() {}\n");
        assert_eq!((line, column), (2, 1));
        assert_eq!(message, "non-declaration statement outside function body");
    }

    #[test]
    fn grouped_imports_are_accepted() {
        let source = "package p\n\nimport (\n\t\"fmt\"\n\tt \"github.com/a-h/templ\"\n)\n\nfunc Index() {}\n";
        assert_eq!(decls(source), [func("Index", 0)]);
    }
}
