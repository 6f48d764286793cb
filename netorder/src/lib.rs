use std::ffi::OsStr;
use std::io::Write;

use netorder_bytes::{ByteOrderConverter, Endian};

pub mod error;
pub use error::Error;

pub mod options;
pub use options::{ReportOptions, ReportStyle};

pub mod platform;
pub use platform::Platform;

pub mod report;

pub mod word;
pub use word::{Repr, Word};

/// Echoes `args`, names the platform and reports the configured word in host
/// and network order.
pub fn run<W, I, S, C>(out: &mut W, args: I, opts: &ReportOptions, conv: &C) -> Result<(), Error>
where W: Write,
      I: IntoIterator<Item = S>,
      S: AsRef<OsStr>,
      C: ByteOrderConverter + ?Sized {
    if opts.shows_banner() {
        report::write_greeting(out)?;
    }

    if opts.echoes_args() {
        report::echo_args(out, args)?;
    }

    if opts.shows_platform() {
        report::write_platform(out, Platform::current())?;
    }

    let word_h = Word::host(opts.demo_word());
    let word_n = word_h.to_network(conv);
    log::debug!("{:#010x} in host order is {:#010x} in network order", word_h.value(), word_n.value());

    report::report(out, &word_h, &word_n, opts.report_style())?;

    if opts.shows_banner() {
        report::write_closing(out, Endian::HOST)?;
    }
    out.flush()?;

    Ok(())
}
