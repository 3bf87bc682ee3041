//! Sincronización entre el modo simple y el avanzado.
//!
//! La sincronización va en un solo sentido: `share` → `mechanical_ownership`.
//! Editar cualquiera de los cuatro campos avanzados nunca modifica `share`,
//! y `share` nunca se copia a los campos de ejecución pública.

use crate::domain::writer::WriterEntry;

/// Aplica una edición de `share` y la refleja en la propiedad mecánica.
pub fn on_share_edited(writer: &WriterEntry, new_share: f64) -> WriterEntry {
  let mut next = writer.clone();
  next.share = new_share;
  next.mechanical_ownership = new_share;
  next
}

/// Prepara la lista para pasar de modo simple a avanzado.
///
/// Es la misma regla de [`on_share_edited`] aplicada a todos los autores.
pub fn enter_advanced_mode(writers: &[WriterEntry]) -> Vec<WriterEntry> {
  writers.iter().map(|w| on_share_edited(w, w.share)).collect()
}
