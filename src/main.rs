use anyhow::Result;
use log::{debug, warn};
use sendseq::{check_input, collect_input, Keybinding};
use std::{
    ffi::{OsStr, OsString},
    io::{self, Write},
};

/// Arguments that are not valid UTF-8 are read one byte per char, so
/// Latin-1 input still escapes as `\u00XX`.
fn decode_arg(arg: OsString) -> String {
    match arg.into_string() {
        Ok(s) => s,
        Err(arg) => decode_bytes(&arg),
    }
}

#[cfg(unix)]
fn decode_bytes(arg: &OsStr) -> String {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes().iter().map(|b| char::from(*b)).collect()
}

#[cfg(not(unix))]
fn decode_bytes(arg: &OsStr) -> String {
    arg.to_string_lossy().into_owned()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = std::env::args_os()
        .skip(1)
        .map(decode_arg)
        .collect::<Vec<_>>();
    debug!("process args: {args:?}");
    let input = collect_input(&args);
    if let Err(e) = check_input(&input) {
        warn!("{e}, the text escape will be malformed");
    }
    let binding = Keybinding::new(input);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{binding}")?;
    stdout.flush()?;
    Ok(())
}
