use async_trait::async_trait;

use crate::domain::directory::{NewPublisher, PublisherCandidate};
use crate::ports::composer_directory::DirectoryError;

/// Port del directorio de editoriales de una cuenta.
#[async_trait]
pub trait PublisherDirectory: Send + Sync {
  async fn list(&self) -> Result<Vec<PublisherCandidate>, DirectoryError>;
  async fn create(&self, publisher: NewPublisher) -> Result<PublisherCandidate, DirectoryError>;
}
