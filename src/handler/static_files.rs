//! Static file serving module
//!
//! Resolves request paths against the configured root directory, enforces
//! path confinement, and loads file content with its MIME type.

use crate::config::FilesConfig;
use crate::http::mime;
use crate::logger;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Request-level serving error.
///
/// Every variant is answered as `404 Not Found` on the wire; the
/// distinction drives logging and keeps traversal attempts visible.
#[derive(Debug)]
pub enum ServeError {
    /// No file exists at the resolved path
    NotFound,
    /// Resolved path escapes the root directory
    Forbidden,
    /// The file exists but could not be read
    Io(std::io::Error),
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::Forbidden => write!(f, "path escapes root directory"),
            Self::Io(err) => write!(f, "read failed: {err}"),
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Load the file addressed by `request_path` from the configured root.
///
/// Directory requests are answered with the first configured index file
/// that exists; a directory without one is treated as absent.
pub async fn load(
    files: &FilesConfig,
    request_path: &str,
) -> Result<(Vec<u8>, &'static str), ServeError> {
    let file_path = resolve(files, request_path)?;

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return Err(ServeError::Io(e));
        }
    };

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));

    Ok((content, content_type))
}

/// Resolve a request path to a confined filesystem path.
fn resolve(files: &FilesConfig, request_path: &str) -> Result<PathBuf, ServeError> {
    // Remove leading slash and strip traversal segments up front
    let clean_path = request_path.trim_start_matches('/').replace("..", "");

    let mut file_path = Path::new(&files.root).join(clean_path);

    let root_canonical = match Path::new(&files.root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Root directory not found or inaccessible '{}': {e}",
                files.root
            ));
            return Err(ServeError::NotFound);
        }
    };

    // Directory requests fall back to the configured index files
    if file_path.is_dir() {
        let Some(index_path) = files
            .index
            .iter()
            .map(|index| file_path.join(index))
            .find(|p| p.is_file())
        else {
            return Err(ServeError::NotFound);
        };
        file_path = index_path;
    }

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return Err(ServeError::NotFound);
    };

    // Confinement: the canonical path must stay under the canonical root,
    // which also blocks symlinks pointing outside the tree
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            file_path_canonical.display()
        ));
        return Err(ServeError::Forbidden);
    }

    Ok(file_path_canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn files_config(root: &Path) -> FilesConfig {
        FilesConfig {
            root: root.to_string_lossy().into_owned(),
            index: vec!["index.html".to_string(), "index.htm".to_string()],
        }
    }

    #[tokio::test]
    async fn serves_file_bytes_exactly() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("hello.txt"), b"Hello, world!").unwrap();
        let files = files_config(dir.path());

        let (content, content_type) = load(&files, "/hello.txt").await.unwrap();
        assert_eq!(content, b"Hello, world!");
        assert_eq!(content_type, "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn wasm_modules_get_wasm_content_type() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("module.wasm"), b"\0asm\x01\0\0\0").unwrap();
        let files = files_config(dir.path());

        let (_, content_type) = load(&files, "/module.wasm").await.unwrap();
        assert_eq!(content_type, "application/wasm");
    }

    #[tokio::test]
    async fn nested_paths_resolve_under_root() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("js")).unwrap();
        std::fs::write(dir.path().join("js/app.mjs"), b"export {};").unwrap();
        let files = files_config(dir.path());

        let (content, content_type) = load(&files, "/js/app.mjs").await.unwrap();
        assert_eq!(content, b"export {};");
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let files = files_config(dir.path());

        assert!(matches!(
            load(&files, "/missing.file").await,
            Err(ServeError::NotFound)
        ));
    }

    #[tokio::test]
    async fn traversal_cannot_escape_root() {
        let parent = tempdir().unwrap();
        let root = parent.path().join("www");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(parent.path().join("secret.txt"), b"NOPE").unwrap();
        let files = files_config(&root);

        // Whatever the exact variant, content outside the root never leaks
        assert!(load(&files, "/../secret.txt").await.is_err());
        assert!(load(&files, "/../../secret.txt").await.is_err());
        assert!(load(&files, "/..%2Fsecret.txt").await.is_err());
    }

    #[tokio::test]
    async fn directory_request_serves_index_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"<html></html>").unwrap();
        let files = files_config(dir.path());

        let (content, content_type) = load(&files, "/").await.unwrap();
        assert_eq!(content, b"<html></html>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn directory_without_index_is_not_found() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("empty")).unwrap();
        let files = files_config(dir.path());

        assert!(matches!(
            load(&files, "/empty").await,
            Err(ServeError::NotFound)
        ));
    }
}
