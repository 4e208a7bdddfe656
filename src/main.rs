use std::io::{self, Write};
use std::process;

use birdolcrypt::cli;
use birdolcrypt::logging;

fn main() {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err_out = stderr.lock();

    let code = match cli::parse(std::env::args_os()) {
        Ok(parsed) => {
            if let Err(e) = logging::init(parsed.verbose) {
                let _ = writeln!(err_out, "warning: logging disabled: {}", e);
            }
            cli::run_cli(&parsed, &mut out, &mut err_out)
        }
        Err(e) => cli::report_parse_error(&e, &mut out, &mut err_out),
    };

    let _ = out.flush();
    process::exit(code);
}
