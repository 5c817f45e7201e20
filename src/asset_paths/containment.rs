use std::io;
use std::path::Path;

/// Check that `candidate` resolves to a location inside `base`.
///
/// Both paths are canonicalised first, so `..` segments and symlinks pointing outside the
/// base directory are rejected. Either path must exist for canonicalisation to succeed.
pub fn is_contained(base: &Path, candidate: &Path) -> io::Result<bool> {
  let base = base.canonicalize()?;
  let candidate = candidate.canonicalize()?;
  Ok(candidate.starts_with(&base))
}
