use crate::domain::errors::LibraryError;
use crate::domain::models::Book;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Reads the library file. A missing file is an empty library.
pub fn load(path: &Path) -> Result<Vec<Book>, LibraryError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no library file, starting empty");
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let books: Vec<Book> = serde_json::from_str(&raw).map_err(|source| LibraryError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = books.len(), "loaded library");
    Ok(books)
}

/// Replaces the library file with `books`: write a sibling temp file, then rename.
pub fn save(path: &Path, books: &[Book]) -> Result<(), LibraryError> {
    let io_err = |source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let body = serde_json::to_string_pretty(books).map_err(LibraryError::Encode)?;
    let tmp = tmp_path(path);
    std::fs::write(&tmp, body).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;
    tracing::info!(path = %path.display(), count = books.len(), "saved library");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("library"));
    name.push(".tmp");
    path.with_file_name(name)
}
