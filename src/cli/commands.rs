//! Command handlers
//!
//! Each handler parses its key type, drives a `CryptoProvider` and writes its
//! result to `out`. Output carries no trailing newline except for `verify`
//! and `uuid`.

use std::io::Write;
use std::path::Path;

use crate::cli::args::Commands;
use crate::error::CryptoResult;
use crate::key_management::public_key_path_for;
use crate::provider::{CryptoProvider, KeyRole};
use crate::variant::KeyVariant;

/// Printed by `verify` for a matching signature
pub const VALID_SIGNATURE_MESSAGE: &str = "This signature is valid!";

/// Printed by `verify` for a signature that does not match
pub const INVALID_SIGNATURE_MESSAGE: &str = "This signature is invalid!";

/// Run one command, writing its standard output to `out`
pub fn execute(command: &Commands, out: &mut dyn Write) -> CryptoResult<()> {
    match command {
        Commands::Keygen { name, keytype } => keygen(name, keytype, out),
        Commands::Makepub {
            keytype,
            priv_key_file,
        } => makepub(keytype, priv_key_file),
        Commands::Sign {
            message,
            keytype,
            key_file,
        } => sign(message, keytype, key_file, out),
        Commands::Verify {
            message,
            signature,
            keytype,
            pub_key_file,
        } => verify(message, signature, keytype, pub_key_file, out),
        Commands::Uuid => uuid(out),
    }
}

fn keygen(name: &Path, keytype: &str, out: &mut dyn Write) -> CryptoResult<()> {
    let variant: KeyVariant = keytype.parse()?;
    let provider = CryptoProvider::generate(variant)?;
    provider.export_private_to_path(name)?;

    write!(out, "{}", provider.public_key().unwrap_or_default())?;
    Ok(())
}

fn makepub(keytype: &str, priv_key_file: &Path) -> CryptoResult<()> {
    let variant: KeyVariant = keytype.parse()?;
    let provider = CryptoProvider::from_key_file(variant, priv_key_file, KeyRole::Private)?;
    provider.export_public_to_path(&public_key_path_for(priv_key_file))?;
    Ok(())
}

fn sign(message: &str, keytype: &str, key_file: &Path, out: &mut dyn Write) -> CryptoResult<()> {
    let variant: KeyVariant = keytype.parse()?;
    let provider = CryptoProvider::from_key_file(variant, key_file, KeyRole::Private)?;

    write!(out, "{}", provider.sign_hex(message)?)?;
    Ok(())
}

fn verify(
    message: &str,
    signature: &str,
    keytype: &str,
    pub_key_file: &Path,
    out: &mut dyn Write,
) -> CryptoResult<()> {
    let variant: KeyVariant = keytype.parse()?;
    let provider = CryptoProvider::from_key_file(variant, pub_key_file, KeyRole::Public)?;

    if provider.verify(message, signature)? {
        writeln!(out, "{}", VALID_SIGNATURE_MESSAGE)?;
    } else {
        writeln!(out, "{}", INVALID_SIGNATURE_MESSAGE)?;
    }
    Ok(())
}

fn uuid(out: &mut dyn Write) -> CryptoResult<()> {
    let provider = CryptoProvider::generate(KeyVariant::None)?;
    writeln!(out, "{}", provider.uuid())?;
    Ok(())
}
