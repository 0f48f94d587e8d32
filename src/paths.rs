/*!
 * Display paths relative to the project roots
 */

use std::path::{Component, Path, PathBuf};

/// Maps absolute locators to project-relative display paths
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    roots: Vec<PathBuf>,
}

impl PathResolver {
    /// Create a resolver for the given project roots
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Relative display path for `locator`
    ///
    /// With several roots the root's folder name is prepended, so files
    /// from different roots stay distinguishable. Locators outside every
    /// root are shown as absolute paths.
    pub fn to_relative_path(&self, locator: &Path) -> String {
        let multi_root = self.roots.len() > 1;

        for root in &self.roots {
            let Ok(relative) = locator.strip_prefix(root) else {
                continue;
            };

            let root_name = root
                .file_name()
                .map(|name| name.to_string_lossy().to_string());

            let relative = join_components(relative);
            return match (relative.is_empty(), multi_root, root_name) {
                (true, _, Some(name)) => name,
                (false, true, Some(name)) => format!("{}/{}", name, relative),
                (true, _, None) => locator.to_string_lossy().to_string(),
                (false, _, _) => relative,
            };
        }

        locator.to_string_lossy().to_string()
    }
}

/// Make `path` absolute against `base` and resolve `.` and `..` lexically
///
/// The filesystem is not consulted, so entries deleted since they were
/// selected still get a stable locator.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Render a relative path with `/` separators on every platform
fn join_components(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
