use crate::domain::writer::{OwnershipMode, WriterEntry};

fn round_cents(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// Reparto equitativo de 100 entre `n` autores, truncado a dos decimales.
///
/// El resto que deja el truncado va al primer autor, así que la suma es
/// siempre 100.00. Para tres autores: `[33.34, 33.33, 33.33]`.
pub fn equal_shares(n: usize) -> Vec<f64> {
  if n == 0 {
    return Vec::new();
  }

  let count = n as f64;
  let equal_share = (100.0 / count * 100.0).floor() / 100.0;
  let remainder = round_cents(100.0 - equal_share * count);

  let mut shares = vec![equal_share; n];
  shares[0] = round_cents(equal_share + remainder);
  shares
}

/// Devuelve una copia de `writers` con el 100% repartido a partes iguales.
///
/// En modo avanzado el mismo valor se copia a la propiedad mecánica y de
/// ejecución; los campos de cobro no se tocan. La entrada no se modifica.
pub fn split_equally(writers: &[WriterEntry], mode: OwnershipMode) -> Vec<WriterEntry> {
  let shares = equal_shares(writers.len());

  writers
    .iter()
    .zip(shares)
    .map(|(writer, share)| {
      let mut next = writer.clone();
      next.share = share;
      if mode == OwnershipMode::Advanced {
        next.mechanical_ownership = share;
        next.performance_ownership = share;
      }
      next
    })
    .collect()
}
