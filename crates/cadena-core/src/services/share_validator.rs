use serde::Serialize;
use std::fmt;

use crate::domain::writer::{OwnershipMode, WriterEntry};
use crate::errors::ValidationError;

/// Diferencia máxima admitida entre la suma de porcentajes y 100.
pub const SHARE_TOLERANCE: f64 = 0.01;

/// Resultado de comprobar que los porcentajes de una obra suman 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareReport {
  pub valid: bool,
  pub total_share: f64,
  /// `100 - total_share`. Negativo cuando se ha repartido de más.
  pub remaining: f64,
}

impl ShareReport {
  pub fn into_result(self) -> Result<Self, ValidationError> {
    if self.valid {
      Ok(self)
    } else {
      Err(ValidationError::Unbalanced { total: self.total_share, remaining: self.remaining })
    }
  }
}

impl fmt::Display for ShareReport {
  /// Diagnóstico corto para el editor: `balanced`, `13% remaining`, `5% over`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.valid {
      f.write_str("balanced")
    } else if self.remaining > 0.0 {
      write!(f, "{}% remaining", format_percent(self.remaining))
    } else {
      write!(f, "{}% over", format_percent(-self.remaining))
    }
  }
}

/// Como mucho dos decimales, sin ceros de cola (`13`, `0.5`, `33.34`).
fn format_percent(value: f64) -> String {
  let fixed = format!("{value:.2}");
  fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Comprueba que los porcentajes de una lista de autores cuadran.
///
/// Es puro y nunca falla; quien llama decide qué hacer con el informe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareValidator {
  tolerance: f64,
}

impl Default for ShareValidator {
  fn default() -> Self {
    Self { tolerance: SHARE_TOLERANCE }
  }
}

impl ShareValidator {
  /// Validador más estricto que el por defecto.
  ///
  /// El margen sólo puede estrecharse: debe estar en `(0, SHARE_TOLERANCE]`.
  /// `NaN`, cero, negativos o valores mayores se rechazan.
  pub fn with_tolerance(tolerance: f64) -> Result<Self, ValidationError> {
    if tolerance > 0.0 && tolerance <= SHARE_TOLERANCE {
      Ok(Self { tolerance })
    } else {
      Err(ValidationError::InvalidTolerance(tolerance))
    }
  }

  pub fn tolerance(&self) -> f64 {
    self.tolerance
  }

  /// Valida la suma de `share` (modo simple).
  pub fn validate(&self, writers: &[WriterEntry]) -> ShareReport {
    self.validate_for_mode(writers, OwnershipMode::Simple)
  }

  /// Valida la suma de la propiedad que cuenta en `mode`.
  ///
  /// Los autores sin vincular también suman: el total refleja lo que el
  /// usuario ve en el editor, aunque luego no aparezcan en la cadena.
  pub fn validate_for_mode(&self, writers: &[WriterEntry], mode: OwnershipMode) -> ShareReport {
    if writers.is_empty() {
      return ShareReport { valid: true, total_share: 0.0, remaining: 0.0 };
    }

    let total_share: f64 = writers.iter().map(|w| w.ownership(mode)).sum();
    let remaining = 100.0 - total_share;

    ShareReport { valid: (total_share - 100.0).abs() < self.tolerance, total_share, remaining }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::writer_role::WriterRole;

  fn writers_with(shares: &[f64]) -> Vec<WriterEntry> {
    shares
      .iter()
      .map(|&share| {
        let mut w = WriterEntry::new(WriterRole::Composer);
        w.share = share;
        w
      })
      .collect()
  }

  #[test]
  fn empty_list_is_vacuously_valid() {
    let report = ShareValidator::default().validate(&[]);
    assert!(report.valid);
    assert_eq!(report.total_share, 0.0);
    assert_eq!(report.to_string(), "balanced");
  }

  #[test]
  fn shares_summing_to_100_are_valid() {
    let report = ShareValidator::default().validate(&writers_with(&[50.0, 25.0, 25.0]));
    assert!(report.valid);
    assert_eq!(report.total_share, 100.0);
    assert_eq!(report.remaining, 0.0);
  }

  #[test]
  fn tolerance_is_strictly_below_one_cent() {
    let validator = ShareValidator::default();
    assert!(validator.validate(&writers_with(&[33.33, 33.33, 33.335])).valid);
    assert!(!validator.validate(&writers_with(&[33.33, 33.33, 33.32])).valid);
  }

  #[test]
  fn under_allocation_reports_exact_remaining() {
    let report = ShareValidator::default().validate(&writers_with(&[60.0, 27.0]));
    assert!(!report.valid);
    assert_eq!(report.remaining, 100.0 - 87.0);
    assert_eq!(report.to_string(), "13% remaining");
  }

  #[test]
  fn over_allocation_is_reported_as_over() {
    let report = ShareValidator::default().validate(&writers_with(&[60.0, 45.5]));
    assert!(!report.valid);
    assert_eq!(report.to_string(), "5.5% over");
    assert_eq!(
      report.into_result(),
      Err(ValidationError::Unbalanced { total: 105.5, remaining: 100.0 - 105.5 })
    );
  }

  #[test]
  fn advanced_mode_sums_mechanical_ownership() {
    let mut writers = writers_with(&[10.0, 10.0]);
    writers[0].mechanical_ownership = 70.0;
    writers[1].mechanical_ownership = 30.0;

    let validator = ShareValidator::default();
    assert!(!validator.validate(&writers).valid);
    assert!(validator.validate_for_mode(&writers, OwnershipMode::Advanced).valid);
  }

  #[test]
  fn tolerance_can_only_be_tightened() {
    assert!(ShareValidator::with_tolerance(0.01).is_ok());
    assert_eq!(ShareValidator::with_tolerance(0.001).unwrap().tolerance(), 0.001);

    for bad in [5.5, 0.0100001, 0.0, -1.0, f64::NAN, f64::INFINITY] {
      assert!(
        matches!(ShareValidator::with_tolerance(bad), Err(ValidationError::InvalidTolerance(_))),
        "tolerance {bad} accepted"
      );
    }
  }

  #[test]
  fn tighter_tolerance_rejects_what_default_accepts() {
    let writers = writers_with(&[50.0, 49.995]);
    assert!(ShareValidator::default().validate(&writers).valid);
    assert!(!ShareValidator::with_tolerance(0.001).unwrap().validate(&writers).valid);
  }

  #[test]
  fn unlinked_writers_still_count() {
    let writers = writers_with(&[100.0]);
    assert!(writers[0].composer_id.is_none());
    assert!(ShareValidator::default().validate(&writers).valid);
  }
}
