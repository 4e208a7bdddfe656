//! Key files on disk
//!
//! A key file is the base name chosen by the caller with `.priv` or `.pub`
//! appended. Contents are written exactly as the key codec produces them, with
//! no header, trailing newline or permissions metadata.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CryptoResult;

/// Extension appended to private key files
pub const PRIVATE_KEY_SUFFIX: &str = ".priv";

/// Extension appended to public key files
pub const PUBLIC_KEY_SUFFIX: &str = ".pub";

/// `base` with `suffix` appended to its final component
///
/// The suffix is appended, not substituted, so `keys/alice.v2` becomes
/// `keys/alice.v2.priv`.
pub fn key_file_path(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Write `contents` to `base` + `suffix`, replacing any existing file
pub fn write_key_file(base: &Path, suffix: &str, contents: &[u8]) -> CryptoResult<PathBuf> {
    let path = key_file_path(base, suffix);
    fs::write(&path, contents)?;
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}

/// Read a key file in full
pub fn read_key_file(path: &Path) -> CryptoResult<Vec<u8>> {
    let contents = fs::read(path)?;
    log::debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

/// Base name for the public key belonging to a private key file
///
/// Every `.priv` in the path text is removed, so `alice.priv` gives `alice`
/// and the public key lands in `alice.pub`.
pub fn public_key_path_for(private_key_path: &Path) -> PathBuf {
    let text = private_key_path.to_string_lossy();
    PathBuf::from(text.replace(PRIVATE_KEY_SUFFIX, ""))
}
