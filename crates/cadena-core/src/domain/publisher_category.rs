use serde::{Deserialize, Serialize};
use std::fmt;

/// Papel de una editorial dentro de la cadena de derechos.
///
/// Se serializa con la etiqueta completa (`"Original Publisher"`), que es
/// como la esperan los registros externos en el campo `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublisherCategory {
  #[serde(rename = "Original Publisher")]
  OriginalPublisher,
  #[serde(rename = "Administrator")]
  Administrator,
  #[serde(rename = "Sub-Publisher")]
  SubPublisher,
  #[serde(rename = "Income Participant")]
  IncomeParticipant,
}

impl PublisherCategory {
  /// Código CWR del tipo de editorial.
  pub fn code(&self) -> &'static str {
    match self {
      PublisherCategory::OriginalPublisher => "E",
      PublisherCategory::Administrator => "AM",
      PublisherCategory::SubPublisher => "SE",
      PublisherCategory::IncomeParticipant => "PA",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      PublisherCategory::OriginalPublisher => "Original Publisher",
      PublisherCategory::Administrator => "Administrator",
      PublisherCategory::SubPublisher => "Sub-Publisher",
      PublisherCategory::IncomeParticipant => "Income Participant",
    }
  }

  pub fn from_code(code: &str) -> Option<Self> {
    match code.trim().to_uppercase().as_str() {
      "E" => Some(PublisherCategory::OriginalPublisher),
      "AM" => Some(PublisherCategory::Administrator),
      "SE" => Some(PublisherCategory::SubPublisher),
      "PA" => Some(PublisherCategory::IncomeParticipant),
      _ => None,
    }
  }
}

impl fmt::Display for PublisherCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}
