//! Artifact repository for the claimscore engine
//!
//! The scorer needs three fitted artifacts: the classifier, the numeric
//! scaler and the expected column list. This crate loads them from a storage
//! backend behind the [`ArtifactRepository`] trait.
//!
//! # Quick Start
//!
//! ```no_run
//! use claimscore_repository::{ArtifactRepository, FileSystemRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = FileSystemRepository::new("models/claim_denial")?;
//!
//!     let bundle = repo.load_all().await?;
//!     println!("Schema has {} columns", bundle.schema.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Artifacts are JSON or YAML; the format follows the file extension.

pub mod config;
pub mod error;
pub mod file_system;
pub mod traits;

pub use config::ArtifactPaths;
pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileSystemRepository;
pub use traits::{ArtifactBundle, ArtifactRepository};
