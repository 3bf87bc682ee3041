use serde::{Deserialize, Serialize};

use crate::domain::directory::ComposerCandidate;
use crate::domain::ids::{ComposerId, PublisherId, WriterId};
use crate::domain::writer_role::WriterRole;

/// Modo de edición de porcentajes.
///
/// - `Simple`: un único `share` por autor.
/// - `Advanced`: cuatro campos independientes de propiedad/cobro mecánico y
///   de ejecución pública.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipMode {
  #[default]
  Simple,
  Advanced,
}

/// Un autor asociado a una obra durante la sesión de edición.
///
/// Es una estructura plana y transitoria: al guardar se convierte en filas
/// de la tabla intermedia obra↔compositor, y el árbol de derechos se
/// recalcula desde cero a partir de la lista completa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterEntry {
  pub id: WriterId,

  /// Compositor del directorio. `None` mientras el autor no esté vinculado.
  pub composer_id: Option<ComposerId>,

  pub role: WriterRole,

  /// Porcentaje (0–100) usado en modo simple.
  pub share: f64,

  /// Si los derechos del autor los administra la editorial del sistema.
  pub is_controlled: bool,

  /// Editorial explícita. Sólo tiene sentido cuando `is_controlled`.
  pub publisher_id: Option<PublisherId>,

  // --- Modo avanzado (0–100) ---
  pub mechanical_ownership: f64,
  pub performance_ownership: f64,
  pub mechanical_collection: f64,
  pub performance_collection: f64,
}

impl WriterEntry {
  /// Entrada nueva, sin vincular, sin control y con todos los porcentajes a cero.
  pub fn new(role: WriterRole) -> Self {
    Self {
      id: WriterId::new(),
      composer_id: None,
      role,
      share: 0.0,
      is_controlled: false,
      publisher_id: None,
      mechanical_ownership: 0.0,
      performance_ownership: 0.0,
      mechanical_collection: 0.0,
      performance_collection: 0.0,
    }
  }

  /// `true` si el autor ya está resuelto a un compositor del directorio.
  pub fn is_linked(&self) -> bool {
    self.composer_id.is_some()
  }

  /// Copia del autor vinculada a un compositor del directorio.
  ///
  /// Hereda el flag `controlled` del compositor; si deja de estar
  /// controlado, se descarta su editorial explícita.
  pub fn linked_to(&self, candidate: &ComposerCandidate) -> WriterEntry {
    let mut next = self.clone();
    next.composer_id = Some(candidate.id);
    next.is_controlled = candidate.controlled;
    if !next.is_controlled {
      next.publisher_id = None;
    }
    next
  }

  /// Porcentaje de propiedad que cuenta para el modo dado.
  pub fn ownership(&self, mode: OwnershipMode) -> f64 {
    match mode {
      OwnershipMode::Simple => self.share,
      OwnershipMode::Advanced => self.mechanical_ownership,
    }
  }
}
