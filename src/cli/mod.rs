/*!
 * Command line interface
 *
 * Argument parsing, command dispatch and the tool's diagnostics. `main.rs`
 * only wires these to the process streams and installs logging.
 */

mod args;
mod commands;
pub mod exit_codes;

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;

pub use args::{Cli, Commands};
pub use commands::{execute, INVALID_SIGNATURE_MESSAGE, VALID_SIGNATURE_MESSAGE};

use crate::error::{error_codes, CryptoError};
use crate::variant::KEY_TYPE_NAMES;
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

/// Names accepted as the first argument, in display order
pub const COMMAND_NAMES: &str = "keygen, makepub, sign, verify, uuid";

/// Parse process arguments, the first being the program name
pub fn parse<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Print the diagnostic for a parse failure and return the exit code
///
/// Help and version requests go to `out` and succeed.
pub fn report_parse_error(err: &clap::Error, out: &mut dyn Write, err_out: &mut dyn Write) -> i32 {
    let written = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", err.render());
            return EXIT_SUCCESS;
        }
        ErrorKind::InvalidSubcommand => writeln!(err_out, "**Error: invalid command")
            .and_then(|_| writeln!(err_out, "Available commands: {}", COMMAND_NAMES)),
        ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            writeln!(err_out, "** Error: insufficient arguments")
        }
        _ => write!(err_out, "{}", err.render()),
    };
    if let Err(e) = written {
        log::error!("Failed to write diagnostic: {}", e);
    }
    EXIT_ERROR
}

/// Print the diagnostic for a failed command and return the exit code
pub fn report_error(err: &CryptoError, err_out: &mut dyn Write) -> i32 {
    log::debug!(
        "Command failed with {} ({}): {:?}",
        err.error_type(),
        err.error_code(),
        err.technical_details()
    );

    let written = if err.is_configuration_error()
        && err.error_code() == error_codes::UNKNOWN_KEY_TYPE
    {
        writeln!(err_out, "** Error: invalid keytype specified")
            .and_then(|_| writeln!(err_out, "Available keytype: {}", KEY_TYPE_NAMES))
    } else {
        writeln!(err_out, "** Error: {}", err)
    };
    if let Err(e) = written {
        log::error!("Failed to write diagnostic: {}", e);
    }
    EXIT_ERROR
}

/// Execute a parsed command line and return the exit code
pub fn run_cli(cli: &Cli, out: &mut dyn Write, err_out: &mut dyn Write) -> i32 {
    match execute(&cli.command, out).and_then(|()| out.flush().map_err(CryptoError::from)) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => report_error(&err, err_out),
    }
}

/// Parse and execute in one step, without touching logging
pub fn run<I, T>(args: I, out: &mut dyn Write, err_out: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parse(args) {
        Ok(cli) => run_cli(&cli, out, err_out),
        Err(err) => report_parse_error(&err, out, err_out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let mut argv = vec!["birdolcrypt"];
        argv.extend_from_slice(args);
        let code = run(argv, &mut out, &mut err_out);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err_out).unwrap(),
        )
    }

    #[test]
    fn test_no_arguments() {
        let (code, out, err) = run_args(&[]);
        assert_eq!(code, EXIT_ERROR);
        assert!(out.is_empty());
        assert_eq!(err, "** Error: insufficient arguments\n");
    }

    #[test]
    fn test_missing_positional_arguments() {
        for args in [
            &["keygen", "alice"][..],
            &["makepub", "ecdsa"][..],
            &["sign", "hello", "ecdsa"][..],
            &["verify", "hello", "00", "ecdsa"][..],
        ] {
            let (code, _, err) = run_args(args);
            assert_eq!(code, EXIT_ERROR, "{:?}", args);
            assert_eq!(err, "** Error: insufficient arguments\n", "{:?}", args);
        }
    }

    #[test]
    fn test_unknown_command() {
        let (code, _, err) = run_args(&["encrypt", "x"]);
        assert_eq!(code, EXIT_ERROR);
        assert_eq!(
            err,
            "**Error: invalid command\nAvailable commands: keygen, makepub, sign, verify, uuid\n"
        );
    }

    #[test]
    fn test_unknown_keytype() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("alice");
        let (code, out, err) = run_args(&["keygen", name.to_str().unwrap(), "dsa"]);

        assert_eq!(code, EXIT_ERROR);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "** Error: invalid keytype specified\nAvailable keytype: rsa-1024, rsa-2048, rsa-4096, ecdsa\n"
        );
        assert!(!dir.path().join("alice.priv").exists());
    }

    #[test]
    fn test_uuid_command() {
        let (code, out, err) = run_args(&["uuid"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(err.is_empty());

        let line = out.strip_suffix('\n').unwrap();
        let parsed = uuid::Uuid::parse_str(line).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(line, line.to_lowercase());
    }

    #[test]
    fn test_help_succeeds() {
        let (code, out, _) = run_args(&["--help"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.contains("keygen"));
    }

    #[test]
    fn test_missing_key_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.priv");
        let (code, out, err) = run_args(&["sign", "hello", "ecdsa", missing.to_str().unwrap()]);

        assert_eq!(code, EXIT_ERROR);
        assert!(out.is_empty());
        assert!(err.starts_with("** Error: IO error"));
    }

    #[test]
    fn test_verbose_flag_is_counted() {
        let cli = parse(["birdolcrypt", "-vv", "uuid"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Uuid));
    }
}
