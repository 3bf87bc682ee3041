use serde::{Deserialize, Serialize};

use crate::domain::ids::{ComposerId, PublisherId};
use crate::domain::publisher_category::PublisherCategory;

/// La cadena de derechos completa de una obra.
///
/// Siempre contiene exactamente un territorio (`"World"`); se guarda como un
/// único blob JSON junto a la obra y se reemplaza entero en cada guardado.
pub type RightsChain = Vec<TerritoryNode>;

/// Raíz del árbol: agrupa todos los nodos de un territorio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritoryNode {
  pub territory: String,
  pub children: Vec<RightsChainNode>,
}

/// Hijo directo de un territorio.
///
/// Sin etiqueta en JSON: cada variante se distingue por su campo de
/// identidad (`publisherId` o `composerId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RightsChainNode {
  Publisher(PublisherNode),
  Composer(ComposerNode),
}

/// Editorial que administra a un autor controlado.
///
/// La editorial no posee derechos propios (propiedad 0/0); sólo cobra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherNode {
  pub publisher_id: PublisherId,
  pub category: PublisherCategory,
  pub controlled: bool,
  pub mechanical_ownership: f64,
  pub performance_ownership: f64,
  pub mechanical_collection: f64,
  pub performance_collection: f64,
  /// Exactamente un compositor por editorial.
  pub children: [ComposerNode; 1],
}

/// Hoja del árbol: la participación de un autor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerNode {
  pub composer_id: ComposerId,
  /// Etiqueta del rol (`"Composer"`, `"Author/Lyricist"`…).
  pub category: String,
  pub controlled: bool,
  pub mechanical_ownership: f64,
  pub performance_ownership: f64,
  pub mechanical_collection: f64,
  pub performance_collection: f64,
}

impl RightsChainNode {
  /// El compositor de este nodo, esté o no envuelto en una editorial.
  pub fn composer(&self) -> &ComposerNode {
    match self {
      RightsChainNode::Publisher(publisher) => &publisher.children[0],
      RightsChainNode::Composer(composer) => composer,
    }
  }

  pub fn is_controlled(&self) -> bool {
    matches!(self, RightsChainNode::Publisher(_))
  }
}

impl From<PublisherNode> for RightsChainNode {
  fn from(node: PublisherNode) -> Self {
    RightsChainNode::Publisher(node)
  }
}

impl From<ComposerNode> for RightsChainNode {
  fn from(node: ComposerNode) -> Self {
    RightsChainNode::Composer(node)
  }
}
