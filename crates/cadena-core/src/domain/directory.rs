use serde::{Deserialize, Serialize};

use crate::domain::ids::{ComposerId, PublisherId};

/// Compositor tal como lo devuelve el directorio de la cuenta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerCandidate {
  pub id: ComposerId,
  pub name: String,
  /// Código CAE/IPI del autor en su sociedad de gestión.
  pub cae: Option<String>,
  /// Sociedad de ejecución pública principal (ASCAP, PRS, GEMA…).
  pub main_pro: Option<String>,
  /// Si la editorial del sistema administra a este compositor.
  pub controlled: bool,
}

/// Datos para dar de alta un compositor en el directorio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComposer {
  pub name: String,
  pub cae: Option<String>,
  pub main_pro: Option<String>,
  pub controlled: bool,
}

impl NewComposer {
  pub fn named(name: impl Into<String>) -> Self {
    Self { name: name.into(), cae: None, main_pro: None, controlled: false }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherCandidate {
  pub id: PublisherId,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPublisher {
  pub name: String,
}
