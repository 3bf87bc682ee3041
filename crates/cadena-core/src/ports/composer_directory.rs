use async_trait::async_trait;

use crate::domain::directory::{ComposerCandidate, NewComposer};

/// Error de cualquiera de los directorios (compositores o editoriales).
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
  #[error("invalid query: {0}")]
  InvalidQuery(String),

  #[error("rejected by directory: {0}")]
  Rejected(String),

  #[error("transport error: {0}")]
  Transport(String),
}

/// Port del directorio de compositores de una cuenta.
///
/// El adapter ya está ligado a la cuenta; el núcleo sólo lo usa para
/// resolver un `composer_id`, nunca para decidir nada del cálculo.
#[async_trait]
pub trait ComposerDirectory: Send + Sync {
  async fn search(&self, query: &str) -> Result<Vec<ComposerCandidate>, DirectoryError>;
  async fn create(&self, composer: NewComposer) -> Result<ComposerCandidate, DirectoryError>;
}
