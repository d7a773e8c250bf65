use clap::Parser;
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

/// The original demonstration string.
pub const DEFAULT_TEXT: &str = "huffman coding algorithm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Encode then decode, or decode only
pub enum Mode {
    Roundtrip,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Text to encode, or digits to decode
    pub text: String,
    /// Corpus the code is derived from. Falls back to `text` when None.
    pub corpus: Option<String>,
    /// Roundtrip/Decode
    pub op_mode: Mode,
    /// Print the code table
    pub show_table: bool,
    /// Log level
    pub verbose: LevelFilter,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            corpus: None,
            op_mode: Mode::Roundtrip,
            show_table: false,
            verbose: LevelFilter::Info,
        }
    }

    /// The corpus to build the code from.
    pub fn corpus(&self) -> &str {
        self.corpus.as_deref().unwrap_or(&self.text)
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman code builder",
    long_about = "
    Builds a prefix free binary code from the character frequencies of a corpus,
    then encodes text into a string of binary digits and decodes it back."
)]
pub struct Args {
    /// Text to encode (or, with -d, digits to decode)
    #[clap(default_value = DEFAULT_TEXT)]
    text: String,

    /// Derive the code from this corpus instead of the text
    #[clap(short = 'c', long = "corpus")]
    corpus: Option<String>,

    /// Decode the text as binary digits
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Print the code assigned to every character
    #[clap(short = 't', long = "table")]
    table: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

impl Args {
    /// Put command line information from CLAP into our internal structure.
    pub fn into_opts(self) -> HuffOpts {
        let mut opts = HuffOpts::new();
        opts.text = self.text;
        opts.corpus = self.corpus;
        if self.decompress {
            opts.op_mode = Mode::Decode
        };
        opts.show_table = self.table;
        opts.verbose = level_from(self.v);
        opts
    }
}

/// Map the -v count onto a log level
pub fn level_from(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Parse the process arguments and report the resulting settings.
pub fn huffopts_init() -> HuffOpts {
    let opts = Args::parse().into_opts();
    log::set_max_level(opts.verbose);

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.corpus.is_some() {
        info!("Deriving the code from a separate corpus")
    };
    info!("---- Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::{Args, Mode, DEFAULT_TEXT};
    use clap::Parser;
    use log::LevelFilter;

    #[test]
    fn defaults_test() {
        let opts = Args::parse_from(["huffcode"]).into_opts();
        assert_eq!(opts.text, DEFAULT_TEXT);
        assert_eq!(opts.corpus(), DEFAULT_TEXT);
        assert_eq!(opts.op_mode, Mode::Roundtrip);
        assert!(!opts.show_table);
        assert_eq!(opts.verbose, LevelFilter::Info);
    }

    #[test]
    fn decode_with_corpus_test() {
        let opts = Args::parse_from(["huffcode", "-d", "-t", "-c", "aabc", "-v", "5", "0101"])
            .into_opts();
        assert_eq!(opts.text, "0101");
        assert_eq!(opts.corpus(), "aabc");
        assert_eq!(opts.op_mode, Mode::Decode);
        assert!(opts.show_table);
        assert_eq!(opts.verbose, LevelFilter::Trace);
    }
}
