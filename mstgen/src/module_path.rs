//! Module references that point at local files.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use tracing::{debug, warn};

/// Rewrite `reference` so a file written to `output` can import it.
///
/// References that name an existing file or directory become relative to
/// the output directory (or to `output` itself when it is a directory),
/// lose their extension and gain a `./` prefix. Anything else, such as a
/// package name, is returned unchanged.
pub fn resolve_module_reference(reference: &str, output: &Path) -> io::Result<String> {
    let module = std::path::absolute(reference)?;
    if !(module.is_file() || module.is_dir()) {
        if looks_like_path(reference) {
            warn!(reference, "module reference looks like a path but does not exist");
        }
        return Ok(reference.to_string());
    }

    let resolved = relative_module_reference(&module, output)?;
    debug!(reference, resolved = %resolved, "rewrote module reference");
    Ok(resolved)
}

/// The import specifier for `module` as seen from a file written to
/// `output`. Neither path has to exist yet.
pub fn relative_module_reference(module: &Path, output: &Path) -> io::Result<String> {
    let module = std::path::absolute(module)?;
    let output = std::path::absolute(output)?;
    let out_dir = if output.is_dir() {
        output
    } else {
        output
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"))
    };

    let mut relative = relative_path(&out_dir, &module);
    if module.extension().is_some() {
        relative.set_extension("");
    }

    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Ok(if joined.is_empty() {
        ".".to_string()
    } else if joined.starts_with('.') {
        joined
    } else {
        format!("./{}", joined)
    })
}

fn looks_like_path(reference: &str) -> bool {
    reference.starts_with('.') || reference.starts_with('/') || reference.contains('\\')
}

/// Path from directory `from` to `to`; both absolute.
fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn path_str(path: &Path) -> String {
        path.display().to_string()
    }

    #[test]
    fn test_package_name_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("models.ts");
        assert_eq!(
            resolve_module_reference("mobx-state-tree", &out).unwrap(),
            "mobx-state-tree"
        );
    }

    #[test]
    fn test_missing_file_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ts");
        let out = dir.path().join("models.ts");
        assert_eq!(
            resolve_module_reference(&path_str(&missing), &out).unwrap(),
            path_str(&missing)
        );
    }

    #[test]
    fn test_sibling_file() {
        let dir = tempfile::tempdir().unwrap();
        let types = dir.path().join("types.ts");
        fs::write(&types, "").unwrap();
        let out = dir.path().join("models.ts");
        assert_eq!(
            resolve_module_reference(&path_str(&types), &out).unwrap(),
            "./types"
        );
    }

    #[test]
    fn test_file_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let types = dir.path().join("types.ts");
        fs::write(&types, "").unwrap();
        let models = dir.path().join("models");
        fs::create_dir(&models).unwrap();

        // An existing directory is the output directory itself
        assert_eq!(
            resolve_module_reference(&path_str(&types), &models).unwrap(),
            "../types"
        );
        assert_eq!(
            resolve_module_reference(&path_str(&types), &models.join("out.ts")).unwrap(),
            "../types"
        );
    }

    #[test]
    fn test_directory_module() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = dir.path().join("runtime");
        fs::create_dir(&runtime).unwrap();
        let out = dir.path().join("models.ts");
        assert_eq!(
            resolve_module_reference(&path_str(&runtime), &out).unwrap(),
            "./runtime"
        );
    }

    #[test]
    fn test_relative_reference_to_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = dir.path().join("rt").join("types.ts");
        let out = dir.path().join("models.ts");
        assert!(!runtime.exists());
        assert_eq!(relative_module_reference(&runtime, &out).unwrap(), "./rt/types");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/a/b/c"), Path::new("/a/d/e.ts")),
            PathBuf::from("../../d/e.ts")
        );
        assert_eq!(
            relative_path(Path::new("/a"), Path::new("/a/b")),
            PathBuf::from("b")
        );
    }
}
