use tracing::{debug, error, info, warn};

use crate::domain::directory::{ComposerCandidate, NewComposer, NewPublisher, PublisherCandidate};
use crate::domain::ids::WorkId;
use crate::domain::work_rights::{ComposerShareRow, WorkRightsUpdate};
use crate::domain::writer::{OwnershipMode, WriterEntry};
use crate::errors::{CoreError, ValidationError};
use crate::ports::{ComposerDirectory, DirectoryError, PublisherDirectory, WorkRepository};
use crate::services::rights_chain_builder::RightsChainBuilder;

/// Nombres iguales salvo espacios y mayúsculas, también fuera de ASCII
/// (`"ÁNGEL MUÑOZ"` y `"Ángel Muñoz"` son el mismo compositor).
fn same_name(candidate: &str, wanted: &str) -> bool {
  candidate.trim().to_lowercase() == wanted.trim().to_lowercase()
}

/// Orquesta la resolución de compositores/editoriales y el guardado de los
/// derechos de una obra.
///
/// Nunca modifica la lista de autores que recibe: si el guardado falla, la
/// sesión del editor queda intacta para corregir y reintentar.
pub struct WorkRightsService<C, P, R>
where
  C: ComposerDirectory,
  P: PublisherDirectory,
  R: WorkRepository,
{
  composers: C,
  publishers: P,
  works: R,
  builder: RightsChainBuilder,
  require_writers: bool,
}

impl<C, P, R> WorkRightsService<C, P, R>
where
  C: ComposerDirectory,
  P: PublisherDirectory,
  R: WorkRepository,
{
  pub fn new(composers: C, publishers: P, works: R, builder: RightsChainBuilder) -> Self {
    Self { composers, publishers, works, builder, require_writers: false }
  }

  /// Si se activa, guardar una obra sin autores es un error de validación.
  pub fn require_writers(mut self, required: bool) -> Self {
    self.require_writers = required;
    self
  }

  pub fn builder(&self) -> &RightsChainBuilder {
    &self.builder
  }

  // -------- Directorios --------

  /// Busca un compositor por nombre y, si no existe, lo crea.
  ///
  /// Se reutiliza el primer candidato cuyo nombre coincida sin distinguir
  /// mayúsculas; una coincidencia parcial de la búsqueda no basta.
  pub async fn resolve_composer(&self, name: &str) -> Result<ComposerCandidate, CoreError> {
    let name = name.trim();
    if name.is_empty() {
      return Err(DirectoryError::InvalidQuery("composer name is empty".into()).into());
    }

    let candidates = self.composers.search(name).await?;
    if let Some(found) = candidates.into_iter().find(|c| same_name(&c.name, name)) {
      debug!(composer_id = %found.id, "composer resolved from directory");
      return Ok(found);
    }

    let created = self.composers.create(NewComposer::named(name)).await?;
    info!(composer_id = %created.id, "composer created in directory");
    Ok(created)
  }

  /// Igual que [`Self::resolve_composer`] pero sobre la lista de editoriales.
  pub async fn resolve_publisher(&self, name: &str) -> Result<PublisherCandidate, CoreError> {
    let name = name.trim();
    if name.is_empty() {
      return Err(DirectoryError::InvalidQuery("publisher name is empty".into()).into());
    }

    let publishers = self.publishers.list().await?;
    if let Some(found) = publishers.into_iter().find(|p| same_name(&p.name, name)) {
      return Ok(found);
    }

    let created = self.publishers.create(NewPublisher { name: name.to_string() }).await?;
    info!(publisher_id = %created.id, "publisher created in directory");
    Ok(created)
  }

  // -------- Guardado --------

  /// Valida la lista y construye el cuerpo de la petición de guardado.
  pub fn prepare(&self, writers: &[WriterEntry], mode: OwnershipMode) -> Result<WorkRightsUpdate, CoreError> {
    if self.require_writers && writers.is_empty() {
      return Err(ValidationError::NoWriters.into());
    }

    let report = self.builder.validator().validate_for_mode(writers, mode);
    debug!(total = report.total_share, valid = report.valid, "writer shares checked");
    report.into_result()?;

    let composers: Vec<ComposerShareRow> = writers.iter().filter_map(ComposerShareRow::from_writer).collect();
    let rights_chain = self.builder.generate(writers, mode);

    Ok(WorkRightsUpdate { composers, rights_chain })
  }

  /// Valida, construye y envía filas + cadena en una única escritura.
  pub async fn save(
    &self,
    work_id: WorkId,
    writers: &[WriterEntry],
    mode: OwnershipMode,
  ) -> Result<WorkRightsUpdate, CoreError> {
    let update = self.prepare(writers, mode).inspect_err(|e| {
      warn!(%work_id, error = %e, "work rights rejected before save");
    })?;

    if let Err(e) = self.works.update_work_rights(work_id, &update).await {
      error!(%work_id, error = %e, "work rights save failed");
      return Err(e.into());
    }

    info!(%work_id, composers = update.composers.len(), "work rights saved");
    Ok(update)
  }
}
