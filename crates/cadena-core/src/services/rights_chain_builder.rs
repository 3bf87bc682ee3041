use tracing::{debug, warn};

use crate::domain::ids::{ComposerId, PublisherId};
use crate::domain::publisher_category::PublisherCategory;
use crate::domain::rights_chain::{ComposerNode, PublisherNode, RightsChain, RightsChainNode, TerritoryNode};
use crate::domain::writer::{OwnershipMode, WriterEntry};
use crate::errors::ValidationError;
use crate::services::share_validator::ShareValidator;

/// Único territorio que se emite: no hay reparto por países.
pub const WORLD_TERRITORY: &str = "World";

/// Parte del cobro de ejecución pública que va a la editorial.
/// El resto lo cobra el autor a través de su sociedad (PRO).
pub const PUBLISHER_PERFORMANCE_SPLIT: f64 = 0.5;

/// Construye la cadena de derechos a partir de la lista plana de autores.
///
/// Es una transformación pura y determinista: mismas entradas, mismo árbol.
/// No hay modo incremental; cada llamada recalcula la cadena entera.
#[derive(Debug, Clone)]
pub struct RightsChainBuilder {
  default_publisher_id: PublisherId,
  validator: ShareValidator,
}

impl RightsChainBuilder {
  /// `default_publisher_id` se usa para los autores controlados que no
  /// tienen editorial propia.
  pub fn new(default_publisher_id: PublisherId) -> Self {
    Self { default_publisher_id, validator: ShareValidator::default() }
  }

  /// Validador usado por [`RightsChainBuilder::generate_checked`].
  pub fn with_validator(mut self, validator: ShareValidator) -> Self {
    self.validator = validator;
    self
  }

  pub fn default_publisher_id(&self) -> PublisherId {
    self.default_publisher_id
  }

  pub fn validator(&self) -> &ShareValidator {
    &self.validator
  }

  /// Genera la cadena sin validar los porcentajes.
  ///
  /// Los autores sin `composer_id` se excluyen en silencio. Una entrada
  /// que no suma 100 produce un árbol bien formado pero numéricamente
  /// incoherente; validar es cosa de quien llama.
  pub fn generate(&self, writers: &[WriterEntry], mode: OwnershipMode) -> RightsChain {
    let children: Vec<RightsChainNode> = writers
      .iter()
      .filter_map(|writer| writer.composer_id.map(|composer_id| self.node_for(composer_id, writer, mode)))
      .collect();

    let skipped = writers.iter().filter(|w| !w.is_linked()).count();
    if skipped > 0 {
      warn!(skipped, "writers without a linked composer left out of the rights chain");
    }
    debug!(nodes = children.len(), ?mode, "rights chain generated");

    vec![TerritoryNode { territory: WORLD_TERRITORY.to_string(), children }]
  }

  /// Como [`RightsChainBuilder::generate`], pero rechaza listas que no cuadran.
  pub fn generate_checked(
    &self,
    writers: &[WriterEntry],
    mode: OwnershipMode,
  ) -> Result<RightsChain, ValidationError> {
    self.validator.validate_for_mode(writers, mode).into_result()?;
    Ok(self.generate(writers, mode))
  }

  fn node_for(&self, composer_id: ComposerId, writer: &WriterEntry, mode: OwnershipMode) -> RightsChainNode {
    let ownership = writer.ownership(mode);
    let category = writer.role.label().to_string();

    if !writer.is_controlled {
      // El autor no controlado conserva propiedad y cobro de toda su parte.
      return ComposerNode {
        composer_id,
        category,
        controlled: false,
        mechanical_ownership: ownership,
        performance_ownership: ownership,
        mechanical_collection: ownership,
        performance_collection: ownership,
      }
      .into();
    }

    let performance_share = ownership * PUBLISHER_PERFORMANCE_SPLIT;
    let composer = ComposerNode {
      composer_id,
      category,
      controlled: true,
      mechanical_ownership: ownership,
      performance_ownership: ownership,
      mechanical_collection: 0.0,
      performance_collection: performance_share,
    };

    PublisherNode {
      publisher_id: writer.publisher_id.unwrap_or(self.default_publisher_id),
      category: PublisherCategory::OriginalPublisher,
      controlled: true,
      mechanical_ownership: 0.0,
      performance_ownership: 0.0,
      mechanical_collection: ownership,
      performance_collection: performance_share,
      children: [composer],
    }
    .into()
  }
}
