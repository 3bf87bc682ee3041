use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Etiqueta usada cuando el código de rol no está en la tabla.
pub const FALLBACK_ROLE_LABEL: &str = "Composer/Author";

/// Rol de un autor respecto a una obra.
///
/// Los códigos siguen la tabla de roles de autor de CWR (`C`, `A`, `CA`…).
/// Los códigos desconocidos no se rechazan: se conservan en
/// [`WriterRole::Other`] para que se persistan tal cual, y se etiquetan con
/// [`FALLBACK_ROLE_LABEL`] al construir la cadena de derechos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WriterRole {
  /// Compositor de la música.
  Composer,
  /// Autor de la letra.
  Author,
  /// Compositor y autor a la vez.
  #[default]
  ComposerAuthor,
  Arranger,
  Adaptor,
  Translator,
  SubArranger,
  SubAuthor,
  /// Código no reconocido, guardado sin normalizar.
  Other(String),
}

impl WriterRole {
  /// Roles conocidos, en el orden en que los presenta el editor.
  pub const KNOWN: [WriterRole; 8] = [
    WriterRole::Composer,
    WriterRole::Author,
    WriterRole::ComposerAuthor,
    WriterRole::Arranger,
    WriterRole::Adaptor,
    WriterRole::Translator,
    WriterRole::SubArranger,
    WriterRole::SubAuthor,
  ];

  /// Código corto con el que se persiste el rol.
  pub fn code(&self) -> &str {
    match self {
      WriterRole::Composer => "C",
      WriterRole::Author => "A",
      WriterRole::ComposerAuthor => "CA",
      WriterRole::Arranger => "AR",
      WriterRole::Adaptor => "AD",
      WriterRole::Translator => "TR",
      WriterRole::SubArranger => "SA",
      WriterRole::SubAuthor => "SR",
      WriterRole::Other(code) => code,
    }
  }

  /// Etiqueta legible que aparece como `category` en los nodos de compositor.
  pub fn label(&self) -> &'static str {
    match self {
      WriterRole::Composer => "Composer",
      WriterRole::Author => "Author/Lyricist",
      WriterRole::ComposerAuthor => "Composer/Author",
      WriterRole::Arranger => "Arranger",
      WriterRole::Adaptor => "Adaptor",
      WriterRole::Translator => "Translator",
      WriterRole::SubArranger => "Sub-Arranger",
      WriterRole::SubAuthor => "Sub-Author",
      WriterRole::Other(_) => FALLBACK_ROLE_LABEL,
    }
  }

  /// Busca un código en la tabla. Tolera espacios y minúsculas.
  pub fn from_code(code: &str) -> Option<Self> {
    let normalized = code.trim().to_uppercase();
    Self::KNOWN.into_iter().find(|role| role.code() == normalized)
  }

  /// Etiqueta para un código arbitrario, con el valor por defecto si no existe.
  pub fn label_for_code(code: &str) -> &'static str {
    Self::from_code(code).map(|role| role.label()).unwrap_or(FALLBACK_ROLE_LABEL)
  }

  pub fn is_known(&self) -> bool {
    !matches!(self, WriterRole::Other(_))
  }
}

impl FromStr for WriterRole {
  type Err = std::convert::Infallible;

  /// Parsear nunca falla: lo que no está en la tabla acaba en `Other`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::from_code(s).unwrap_or_else(|| WriterRole::Other(s.to_string())))
  }
}

impl From<String> for WriterRole {
  fn from(code: String) -> Self {
    Self::from_code(&code).unwrap_or(WriterRole::Other(code))
  }
}

impl From<WriterRole> for String {
  fn from(role: WriterRole) -> Self {
    match role {
      WriterRole::Other(code) => code,
      known => known.code().to_string(),
    }
  }
}

impl fmt::Display for WriterRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}
