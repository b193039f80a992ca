//! Loading the catalog from its JSON data file.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Catalog;

/// File name of the catalog, looked up next to the running executable.
pub const CATALOG_FILE_NAME: &str = "videojuegos.json";

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while reading the catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog file {} is not valid JSON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Catalog {
    /// Parse a catalog from the contents of a `{ "productos": [...] }` document.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load the catalog from `path`, reporting every failure to the caller.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CatalogError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::from_json_str(&contents).map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the catalog from `path`, degrading to an empty catalog on failure.
    ///
    /// A missing or malformed file is logged and never surfaced; the chatbot
    /// keeps running and simply recognizes no games.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(games = catalog.len(), "catalog loaded");
                catalog
            }
            Err(e) => {
                tracing::error!("{e}");
                Self::empty()
            }
        }
    }

    /// Fixed location of the catalog file: next to the running executable.
    ///
    /// Falls back to the working directory when the executable path cannot be
    /// resolved. Never derived from request input.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(CATALOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ZELDA_JSON: &str = r#"{
        "productos": [
            { "nombre": "Zelda", "descripcion": "Adventure game", "precio": 60, "puntuacion": 4.5 },
            { "nombre": "Tetris", "descripcion": "Puzzle game", "precio": 9.99, "puntuacion": 4.0 }
        ]
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_temp(ZELDA_JSON);
        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].name, "Zelda");
        assert_eq!(catalog.products()[1].price, 9.99);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CATALOG_FILE_NAME);

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert!(err.to_string().contains(CATALOG_FILE_NAME));
    }

    #[test]
    fn test_load_malformed_file() {
        let file = write_temp("{ \"productos\": [ ");
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn test_load_missing_products_key() {
        let file = write_temp(r#"{ "juegos": [] }"#);
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Catalog::load_or_empty(dir.path().join("missing.json")).is_empty());

        let file = write_temp("not json at all");
        assert!(Catalog::load_or_empty(file.path()).is_empty());

        let file = write_temp(ZELDA_JSON);
        assert_eq!(Catalog::load_or_empty(file.path()).len(), 2);
    }

    #[test]
    fn test_default_path_file_name() {
        let path = Catalog::default_path();
        assert_eq!(path.file_name().unwrap(), CATALOG_FILE_NAME);
    }
}
