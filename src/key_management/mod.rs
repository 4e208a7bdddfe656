/*!
 * Key file import and export
 *
 * Helpers that move exported key material between providers and the
 * filesystem.
 */

pub mod storage;

pub use storage::key_file_path;
pub use storage::public_key_path_for;
pub use storage::read_key_file;
pub use storage::write_key_file;
pub use storage::PRIVATE_KEY_SUFFIX;
pub use storage::PUBLIC_KEY_SUFFIX;
