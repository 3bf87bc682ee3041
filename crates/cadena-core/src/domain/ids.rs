use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declara un identificador opaco respaldado por un UUID v4.
///
/// Todos los IDs del dominio comparten la misma forma: se serializan como el
/// UUID en texto y se convierten libremente desde/hacia `Uuid`.
macro_rules! uuid_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct $name(Uuid);

    impl $name {
      /// Genera un nuevo identificador único.
      pub fn new() -> Self {
        $name(Uuid::new_v4())
      }

      /// Construye el identificador a partir de un `Uuid` existente.
      pub fn from_uuid(u: Uuid) -> Self {
        $name(u)
      }

      /// Devuelve el `Uuid` interno.
      pub fn as_uuid(&self) -> Uuid {
        self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<Uuid> for $name {
      fn from(u: Uuid) -> Self {
        $name(u)
      }
    }

    impl From<$name> for Uuid {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

uuid_id!(
  /// Identificador de una obra (work) registrada.
  WorkId
);

uuid_id!(
  /// Identificador estable de una entrada de autor dentro de una obra.
  ///
  /// Se asigna al crear la entrada en la sesión de edición y se conserva
  /// cuando la fila se persiste.
  WriterId
);

uuid_id!(
  /// Identificador de un compositor en el directorio de la cuenta.
  ComposerId
);

uuid_id!(
  /// Identificador de una editorial (publisher) en el directorio de la cuenta.
  PublisherId
);
