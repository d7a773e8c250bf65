//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use huffcode::tools::cli::{huffopts_init, HuffOpts, Mode};
use huffcode::{HuffError, HuffmanCodec};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let options = huffopts_init();

    //----- Figure how what we need to do and go do it
    match run(&options) {
        Ok(lines) => {
            lines.iter().for_each(|line| println!("{}", line));
            info!("Done.\n");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Build the codec and produce the lines to print.
fn run(opts: &HuffOpts) -> Result<Vec<String>, HuffError> {
    let codec = HuffmanCodec::new(opts.corpus());
    let mut lines = vec![];

    if opts.show_table {
        let mut codes = codec.encoding_table().iter().collect::<Vec<_>>();
        codes.sort_unstable_by(|a, b| a.1.len().cmp(&b.1.len()).then(a.0.cmp(&b.0)));
        for (c, code) in codes {
            let f = codec.frequencies().get(c).unwrap_or(0);
            lines.push(format!("{:?}\t{}\t{}", c, f, code));
        }
    }

    match opts.op_mode {
        Mode::Roundtrip => {
            let encoded = codec.encode(&opts.text)?;
            let decoded = codec.decode(&encoded)?;
            lines.push(format!("Encoded: {}", encoded));
            lines.push(format!("Decoded: {}", decoded));
            lines.push(format!("Size: {}", codec.report(&opts.text)?));
        }
        Mode::Decode => {
            let decoded = codec.decode(&opts.text)?;
            lines.push(format!("Decoded: {}", decoded));
        }
    }
    Ok(lines)
}
