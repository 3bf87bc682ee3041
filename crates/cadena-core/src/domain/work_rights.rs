use serde::{Deserialize, Serialize};

use crate::domain::ids::ComposerId;
use crate::domain::rights_chain::RightsChain;
use crate::domain::writer::WriterEntry;
use crate::domain::writer_role::WriterRole;

/// Fila de la tabla intermedia obra↔compositor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerShareRow {
  pub composer_id: ComposerId,
  pub role: WriterRole,
  pub share: f64,
  pub mechanical_ownership: f64,
  pub performance_ownership: f64,
  pub mechanical_collection: f64,
  pub performance_collection: f64,
}

impl ComposerShareRow {
  /// Convierte un autor en fila persistible. Devuelve `None` si no está vinculado.
  pub fn from_writer(writer: &WriterEntry) -> Option<Self> {
    let composer_id = writer.composer_id?;

    Some(Self {
      composer_id,
      role: writer.role.clone(),
      share: writer.share,
      mechanical_ownership: writer.mechanical_ownership,
      performance_ownership: writer.performance_ownership,
      mechanical_collection: writer.mechanical_collection,
      performance_collection: writer.performance_collection,
    })
  }
}

/// Cuerpo de la única petición de guardado de derechos de una obra.
///
/// Las filas y el árbol viajan juntos para que nunca puedan divergir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRightsUpdate {
  pub composers: Vec<ComposerShareRow>,
  pub rights_chain: RightsChain,
}

impl WorkRightsUpdate {
  /// Representación JSON plana, lista para enviar a la API.
  pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(self)
  }
}
