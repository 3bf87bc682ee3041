use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::{ConfigBackend, TomlConfigBackend};
use crate::paths::ConfigError;

const SECTION: &str = "rights";

/// Margen máximo: los porcentajes deben cuadrar con 100 a menos de un céntimo.
pub const MAX_SHARE_TOLERANCE: f64 = 0.01;

/// Sección `[rights]` de `cadena.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RightsConfig {
  /// Editorial para los autores controlados sin editorial propia.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_publisher_id: Option<Uuid>,

  /// Margen admitido al comprobar que los porcentajes suman 100.
  /// Sólo puede estrecharse: `(0, 0.01]`.
  #[serde(default = "default_share_tolerance")]
  pub share_tolerance: f64,

  /// Rechazar el guardado de obras sin ningún autor.
  #[serde(default)]
  pub require_writers: bool,
}

fn default_share_tolerance() -> f64 {
  MAX_SHARE_TOLERANCE
}

impl Default for RightsConfig {
  fn default() -> Self {
    RightsConfig { default_publisher_id: None, share_tolerance: default_share_tolerance(), require_writers: false }
  }
}

impl RightsConfig {
  /// Carga la sección desde el backend global y la vuelve a escribir para
  /// que los valores por defecto queden visibles en el archivo.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(crate::config_backend()?)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    self.save_to(crate::config_backend()?)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default(SECTION)?;
    cfg.check()?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save_to(&self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    self.check()?;
    backend.save_section(SECTION, self)
  }

  /// Rechaza márgenes que relajarían la regla del 100% (o `NaN`).
  pub fn check(&self) -> Result<(), ConfigError> {
    let tolerance = self.share_tolerance;
    if tolerance > 0.0 && tolerance <= MAX_SHARE_TOLERANCE {
      Ok(())
    } else {
      Err(ConfigError::Other(format!(
        "share_tolerance in [{SECTION}] must be in (0, {MAX_SHARE_TOLERANCE}], got {tolerance}"
      )))
    }
  }

  /// La editorial por defecto es obligatoria para construir cadenas.
  pub fn require_default_publisher(&self) -> Result<Uuid, ConfigError> {
    self
      .default_publisher_id
      .ok_or_else(|| ConfigError::Other(format!("missing default_publisher_id in [{SECTION}]")))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::paths::CadenaPaths;
  use std::fs;
  use tempfile::tempdir;

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(CadenaPaths::at(dir).unwrap())
  }

  #[test]
  fn first_load_writes_defaults() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let cfg = RightsConfig::load_from(&backend).unwrap();
    assert_eq!(cfg, RightsConfig::default());
    assert!(cfg.require_default_publisher().is_err());

    let text = fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(text.contains("[rights]"));
    assert!(text.contains("share_tolerance"));
  }

  #[test]
  fn publisher_id_survives_save_and_load() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let publisher = Uuid::parse_str("0b6a7f0e-3d2c-4f4e-9a51-7c1f2b3d4e5f").unwrap();

    let cfg = RightsConfig { default_publisher_id: Some(publisher), require_writers: true, ..Default::default() };
    cfg.save_to(&backend).unwrap();

    let loaded = RightsConfig::load_from(&backend).unwrap();
    assert_eq!(loaded.require_default_publisher().unwrap(), publisher);
    assert!(loaded.require_writers);
  }

  #[test]
  fn loose_or_invalid_tolerance_is_rejected_at_load() {
    for bad in ["5.5", "0.0", "-1.0", "nan"] {
      let tmp = tempdir().unwrap();
      let backend = backend_in(tmp.path());
      fs::write(backend.paths().config_file(), format!("[rights]\nshare_tolerance = {bad}\n")).unwrap();

      assert!(
        matches!(RightsConfig::load_from(&backend), Err(ConfigError::Other(_))),
        "share_tolerance = {bad} accepted"
      );
    }
  }

  #[test]
  fn tighter_tolerance_is_accepted_and_loose_one_is_not_saved() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let strict = RightsConfig { share_tolerance: 0.001, ..Default::default() };
    strict.save_to(&backend).unwrap();
    assert_eq!(RightsConfig::load_from(&backend).unwrap().share_tolerance, 0.001);

    let loose = RightsConfig { share_tolerance: 2.0, ..Default::default() };
    assert!(loose.save_to(&backend).is_err());
    assert_eq!(RightsConfig::load_from(&backend).unwrap().share_tolerance, 0.001);
  }

  #[test]
  fn partial_section_fills_in_defaults() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    fs::write(
      backend.paths().config_file(),
      "[rights]\ndefault_publisher_id = \"0b6a7f0e-3d2c-4f4e-9a51-7c1f2b3d4e5f\"\n",
    )
    .unwrap();

    let cfg = RightsConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.share_tolerance, 0.01);
    assert!(!cfg.require_writers);
    assert!(cfg.default_publisher_id.is_some());
  }
}
