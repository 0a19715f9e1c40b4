use super::DomainError;
use std::path::{Component, Path, PathBuf};

/// Lexically normalise a path: drop `.` components and fold `..` into the
/// preceding normal component where one exists.
///
/// No filesystem access; symlinks are not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// `path` relative to `root`, both normalised first.
///
/// Fails with [`DomainError::OutsideRoot`] when `path` does not live under
/// `root`. An identical path yields an empty relative path.
pub fn relative_to(path: &Path, root: &Path) -> Result<PathBuf, DomainError> {
    let path = normalize(path);
    let root = normalize(root);
    path.strip_prefix(&root)
        .map(Path::to_path_buf)
        .map_err(|_| DomainError::OutsideRoot {
            path: path.display().to_string(),
            root: root.display().to_string(),
        })
}

/// Join the components of a relative path with `/`, whatever the platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
