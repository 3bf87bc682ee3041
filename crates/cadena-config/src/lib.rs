mod backend;
mod io;
mod paths;
mod rights;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use paths::{CadenaPaths, ConfigError};
pub use rights::{MAX_SHARE_TOLERANCE, RightsConfig};

use once_cell::sync::OnceCell;

static PATHS: OnceCell<CadenaPaths> = OnceCell::new();
static CONFIG_BACKEND: OnceCell<TomlConfigBackend> = OnceCell::new();

/// Rutas del proceso (portable vía `CADENA_BASE_DIR` o las del sistema).
pub fn paths() -> Result<&'static CadenaPaths, ConfigError> {
  PATHS.get_or_try_init(CadenaPaths::detect)
}

/// Backend de configuración compartido por todo el proceso.
pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  CONFIG_BACKEND.get_or_try_init(|| Ok(TomlConfigBackend::new(paths()?.clone())))
}
