//! # CLI Argument Definitions
//!
//! - `birdolcrypt keygen <NAME> <KEYTYPE>` - Generate a key pair, write `<NAME>.priv`
//! - `birdolcrypt makepub <KEYTYPE> <PRIV_KEY_FILE>` - Write the matching `.pub` file
//! - `birdolcrypt sign <MESSAGE> <KEYTYPE> <KEY_FILE>` - Print a hex signature
//! - `birdolcrypt verify <MESSAGE> <SIGNATURE> <KEYTYPE> <PUB_KEY_FILE>` - Check a signature
//! - `birdolcrypt uuid` - Print a fresh identifier
//!
//! Key types are validated by the command handlers rather than by clap so that
//! an unknown key type produces the tool's own diagnostic.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Key management and signing for RSA and secp256k1 keys
#[derive(Debug, Parser)]
#[command(name = "birdolcrypt")]
#[command(author, version, about = "Key management and signing for RSA and secp256k1 keys")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a key pair, write the private key and print the public key
    Keygen {
        /// Base name for the private key file; `.priv` is appended
        name: PathBuf,
        /// One of rsa-1024, rsa-2048, rsa-4096, ecdsa
        keytype: String,
    },

    /// Derive the public key file from a private key file
    Makepub {
        /// One of rsa-1024, rsa-2048, rsa-4096, ecdsa
        keytype: String,
        /// Private key file; the public key is written next to it as `.pub`
        priv_key_file: PathBuf,
    },

    /// Sign a message and print the signature as hex
    Sign {
        /// Message to sign
        #[arg(allow_hyphen_values = true)]
        message: String,
        /// One of rsa-1024, rsa-2048, rsa-4096, ecdsa
        keytype: String,
        /// Private key file
        key_file: PathBuf,
    },

    /// Verify a hex signature against a public key file
    Verify {
        /// Message that was signed
        #[arg(allow_hyphen_values = true)]
        message: String,
        /// Signature as hex
        signature: String,
        /// One of rsa-1024, rsa-2048, rsa-4096, ecdsa
        keytype: String,
        /// Public key file
        pub_key_file: PathBuf,
    },

    /// Print a fresh random identifier
    Uuid,
}
