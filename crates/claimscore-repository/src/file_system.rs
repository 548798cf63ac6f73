//! File system based repository implementation

use async_trait::async_trait;
use claimscore_core::{ExpectedSchema, ModelArtifact, ScalerArtifact};
use path_absolutize::Absolutize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{error::RepositoryError, traits::*, ArtifactPaths, RepositoryResult};

/// Artifact encodings recognized by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(Format::Json),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// File system based repository
///
/// Loads artifacts from a model directory. File names default to
/// `model.json`, `scaler.json` and `expected_columns.json`.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    /// Root path of the model directory
    root_path: PathBuf,
    /// Artifact file names under the root
    paths: ArtifactPaths,
}

impl FileSystemRepository {
    /// Create a new file system repository
    ///
    /// # Example
    /// ```no_run
    /// use claimscore_repository::FileSystemRepository;
    ///
    /// let repo = FileSystemRepository::new("models/claim_denial").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        Self::with_paths(root_path, ArtifactPaths::default())
    }

    /// Create a repository with custom artifact file names
    pub fn with_paths<P: AsRef<Path>>(root_path: P, paths: ArtifactPaths) -> RepositoryResult<Self> {
        let path = root_path.as_ref();

        if !path.is_dir() {
            return Err(RepositoryError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        let abs_path = path
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        Ok(Self {
            root_path: abs_path,
            paths,
        })
    }

    /// Root directory of the repository
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// Read and decode one artifact file
    async fn read_artifact<T: DeserializeOwned>(&self, file: &str) -> RepositoryResult<(T, PathBuf)> {
        let path = self.root_path.join(file);
        let format = Format::from_path(&path).ok_or_else(|| RepositoryError::UnsupportedFormat {
            path: path.display().to_string(),
        })?;

        if !fs::try_exists(&path).await? {
            return Err(RepositoryError::NotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&path).await?;
        let artifact = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Yaml => serde_yaml::from_str(&content)?,
        };

        tracing::info!("Loaded artifact {}", path.display());
        Ok((artifact, path))
    }
}

#[async_trait]
impl ArtifactRepository for FileSystemRepository {
    async fn load_model(&self) -> RepositoryResult<ModelArtifact> {
        let (model, path) = self.read_artifact::<ModelArtifact>(&self.paths.model).await?;
        model
            .validate()
            .map_err(|source| RepositoryError::InvalidArtifact {
                path: path.display().to_string(),
                source,
            })?;
        Ok(model)
    }

    async fn load_scaler(&self) -> RepositoryResult<ScalerArtifact> {
        let (scaler, path) = self
            .read_artifact::<ScalerArtifact>(&self.paths.scaler)
            .await?;
        scaler
            .validate()
            .map_err(|source| RepositoryError::InvalidArtifact {
                path: path.display().to_string(),
                source,
            })?;
        Ok(scaler)
    }

    async fn load_schema(&self) -> RepositoryResult<ExpectedSchema> {
        // Column names are checked while deserializing
        let (schema, _) = self.read_artifact::<ExpectedSchema>(&self.paths.schema).await?;
        Ok(schema)
    }
}
