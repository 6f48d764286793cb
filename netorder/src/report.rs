use std::ffi::OsStr;
use std::io::Write;

use netorder_bytes::Endian;

use crate::error::Error;
use crate::options::ReportStyle;
use crate::platform::Platform;
use crate::word::{Repr, Word};

fn label(style: ReportStyle, repr: Repr) -> &'static str {
    match (style, repr) {
        (ReportStyle::Word, Repr::Host) => "HOST",
        (ReportStyle::Word, Repr::Network) => "NTWK",
        (ReportStyle::Compact, Repr::Host) => "u32_h",
        (ReportStyle::Compact, Repr::Network) => "u32_n",
    }
}

pub fn write_word<W: Write>(out: &mut W, word: &Word, style: ReportStyle) -> Result<(), Error> {
    let name = label(style, word.repr());
    match style {
        ReportStyle::Word => writeln!(
            out,
            "{name} word ->  bytes: {}  -> dec: {:>10}  -> hex: {:08X}",
            Word::SIZEOF,
            word.value(),
            word.value(),
        )?,
        ReportStyle::Compact => writeln!(
            out,
            "{name}: {:>12}\tin hexa: {:08X}",
            word.value(),
            word.value(),
        )?,
    }
    Ok(())
}

/// Prints the host-order word followed by its network-order counterpart.
pub fn report<W: Write>(
    out: &mut W,
    word_h: &Word,
    word_n: &Word,
    style: ReportStyle,
) -> Result<(), Error> {
    write_word(out, word_h, style)?;
    write_word(out, word_n, style)
}

pub fn echo_args<W, I, S>(out: &mut W, args: I) -> Result<(), Error>
where W: Write,
      I: IntoIterator<Item = S>,
      S: AsRef<OsStr> {
    let args = args.into_iter().collect::<Vec<_>>();
    writeln!(out, "argc:\t{}", args.len())?;
    for (i, arg) in args.iter().enumerate() {
        writeln!(out, "argv[{i}]:\t{}", arg.as_ref().to_string_lossy())?;
    }
    Ok(())
}

pub fn write_platform<W: Write>(out: &mut W, platform: Platform) -> Result<(), Error> {
    writeln!(out, "Platform: {platform}")?;
    Ok(())
}

pub fn write_greeting<W: Write>(out: &mut W) -> Result<(), Error> {
    writeln!(out, "Thank you for using my Makefile !\n")?;
    Ok(())
}

/// Names the swap just reported, from `host` order to network order.
pub fn write_closing<W: Write>(out: &mut W, host: Endian) -> Result<(), Error> {
    let name = if host.is_big() { "Big" } else { "Little" };
    writeln!(out, "This is an Endian swap example from {name} Endian to Big Endian.")?;
    Ok(())
}
