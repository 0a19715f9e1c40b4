//! `static-templ version`: tool version and the templ release it targets.

use serde::Serialize;

use static_templ_adapters::{TEMPL_MODULE, TEMPL_VERSION};

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    templ_module: &'static str,
    templ_version: &'static str,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            templ_module: TEMPL_MODULE,
            templ_version: TEMPL_VERSION,
        }
    }

    fn line(&self) -> String {
        format!(
            "Version: {} (built with {}@v{})",
            self.version, self.templ_module, self.templ_version
        )
    }
}

pub fn execute(output: &OutputManager) -> CliResult<()> {
    let info = VersionInfo::current();
    match output.format() {
        OutputFormat::Json => output.json(&info)?,
        _ => output.print(&info.line())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_names_templ_release() {
        let line = VersionInfo::current().line();
        assert!(line.starts_with(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
        assert!(line.ends_with("(built with github.com/a-h/templ@v0.2.793)"));
    }

    #[test]
    fn json_fields() {
        let value = serde_json::to_value(VersionInfo::current()).unwrap();
        assert_eq!(value["templ_module"], "github.com/a-h/templ");
        assert_eq!(value["templ_version"], "0.2.793");
    }
}
