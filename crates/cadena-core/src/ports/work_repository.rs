use async_trait::async_trait;

use crate::domain::ids::WorkId;
use crate::domain::work_rights::WorkRightsUpdate;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("work not found: {0}")]
  NotFound(WorkId),
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port de persistencia de obras.
///
/// `update_work_rights` es una única escritura atómica: o se guardan las
/// filas y el árbol juntos, o no se guarda nada.
#[async_trait]
pub trait WorkRepository: Send + Sync {
  async fn update_work_rights(&self, work_id: WorkId, update: &WorkRightsUpdate) -> Result<(), RepoError>;
}
