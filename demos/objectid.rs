//! Simple command that prints one or '-n count' ObjectId strings

use std::{env, io, io::Write, process::ExitCode};

use objectid::Encoding;

struct Options {
    count: usize,
    encoding: Encoding,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [--base64]",
                    program.as_deref().unwrap_or("objectid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        writeln!(buf, "{}", objectid::object_id().encode(opts.encoding))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut count = None;
    let mut encoding = Encoding::Hex;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base64" => encoding = Encoding::Base64,
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(Options {
        count: count.unwrap_or(1),
        encoding,
    })
}
