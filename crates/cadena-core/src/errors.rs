use thiserror::Error;

use crate::ports::{DirectoryError, RepoError};

/// Fallo de validación local, detectado antes de construir o enviar nada.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
  #[error("shares total {total}%, {remaining}% left to reconcile")]
  Unbalanced { total: f64, remaining: f64 },

  #[error("at least one writer is required")]
  NoWriters,

  #[error("share tolerance {0} must be greater than 0 and at most 0.01")]
  InvalidTolerance(f64),
}

/// Error genérico del núcleo.
///
/// Las capas superiores deberían mapear este error a un mensaje para el
/// usuario; ninguno es fatal para el proceso.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("directory error: {0}")]
  Directory(#[from] DirectoryError),

  #[error("repository error: {0}")]
  Repository(#[from] RepoError),
}
