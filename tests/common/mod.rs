#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Reads `root/relative` as text.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Lays out the three-file tree used by the end-to-end scenario:
///
/// - `Assets/A.cs` containing `x`
/// - `Assets/Fungus/Thirdparty/CSVParser/B.cs` containing `y`
/// - `Assets/C.txt` containing `z`
pub fn create_scenario_tree(base: &Path) -> Result<()> {
  write_file(base, "Assets/A.cs", "x")?;
  write_file(base, "Assets/Fungus/Thirdparty/CSVParser/B.cs", "y")?;
  write_file(base, "Assets/C.txt", "z")?;
  Ok(())
}

/// Exclusion prefix for `relative` under an absolute `base`, in the
/// `/`-separated form the exclusion filter compares against.
pub fn prefix_under(base: &Path, relative: &str) -> String {
  format!("{}/{}", base.to_string_lossy().replace('\\', "/"), relative)
}

/// Sets the permission bits of `path`.
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(path, fs::Permissions::from_mode(mode))
    .with_context(|| format!("Failed to chmod {}", path.display()))
}

/// Changes the mode of a path and puts the old one back on drop, so the
/// temp dir can still be removed.
#[cfg(unix)]
pub struct ModeGuard {
  path: PathBuf,
  restore: u32,
}

#[cfg(unix)]
impl ModeGuard {
  pub fn set(path: &Path, mode: u32, restore: u32) -> Result<Self> {
    set_mode(path, mode)?;
    Ok(Self {
      path: path.to_path_buf(),
      restore,
    })
  }
}

#[cfg(unix)]
impl Drop for ModeGuard {
  fn drop(&mut self) {
    let _ = set_mode(&self.path, self.restore);
  }
}

/// Whether a directory locked with mode `0o000` really is unreadable.
/// Root and some sandboxes ignore permission bits.
#[cfg(unix)]
pub fn dir_is_locked(path: &Path) -> bool {
  fs::read_dir(path).is_err()
}

/// Whether a file set to mode `0o444` really refuses writes.
#[cfg(unix)]
pub fn file_is_read_only(path: &Path) -> bool {
  fs::OpenOptions::new().write(true).open(path).is_err()
}
