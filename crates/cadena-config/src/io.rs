use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Reemplaza `path` con `contents` de forma atómica.
///
/// El temporal se crea con nombre único en el mismo directorio, de modo que
/// dos guardados simultáneos nunca comparten fichero intermedio y el
/// `rename` final no cruza sistemas de ficheros.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let parent = match path.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir,
    _ => Path::new("."),
  };

  let mut tmp = NamedTempFile::new_in(parent)?;
  tmp.write_all(contents.as_bytes())?;
  tmp.as_file().sync_all()?;
  tmp.persist(path).map_err(|e| e.error)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> =
      fs::read_dir(dir).unwrap().map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
    names.sort();
    names
  }

  #[test]
  fn overwrites_and_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cadena.toml");

    atomic_write_str(&path, "a = 1\n").unwrap();
    atomic_write_str(&path, "a = 2\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a = 2\n");
    assert_eq!(entries(dir.path()), vec!["cadena.toml".to_string()]);
  }

  #[test]
  fn concurrent_saves_never_mix_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cadena.toml");
    let bodies: Vec<String> = (0..8).map(|i| format!("[rights]\nshare_tolerance = 0.00{i}\n").repeat(64)).collect();

    std::thread::scope(|scope| {
      for body in &bodies {
        let path = &path;
        scope.spawn(move || {
          for _ in 0..10 {
            atomic_write_str(path, body).unwrap();
          }
        });
      }
    });

    let last = fs::read_to_string(&path).unwrap();
    assert!(bodies.contains(&last), "torn write: {last:?}");
    assert_eq!(entries(dir.path()), vec!["cadena.toml".to_string()]);
  }
}
