use std::io;

use netorder::ReportOptions;

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let opts = ReportOptions::default();
    let conv = netorder_bytes::host_converter();

    if let Err(e) = netorder::run(&mut out, std::env::args_os(), &opts, conv) {
        log::error!("{}", e);
    }
}
