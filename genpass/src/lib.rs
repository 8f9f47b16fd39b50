use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::io::{self, Write};

pub mod chars;
pub mod dictionary;
pub mod error;
pub mod random;
pub mod words;

pub use dictionary::{Dictionary, DictionarySource};
pub use error::Error;
pub use random::{FixedSequence, RandomSource, RngSource};

/// Shortest password `-n` accepts.
pub const MIN_LENGTH: usize = 8;
/// Longest password `-n` accepts.
pub const MAX_LENGTH: usize = 4096;

const USAGE_EXAMPLES: &str = "\
Examples:
  genpass                   one word-based password
  genpass 5                 five word-based passwords
  genpass -n 15             one 15-character random password
  genpass -n 15 5           five 15-character random passwords
  genpass -n 15 --no-symbols
                            random password without symbols

Words come from /usr/share/dict/words, or ./wordlist.txt when that is missing.";

#[derive(Parser, Debug)]
#[clap(version, about, after_help = USAGE_EXAMPLES)]
pub struct Args {
    /// how many passwords to print
    #[clap(default_value_t = 1)]
    pub count: usize,

    /// build a random password of this many characters
    /// instead of a word-based one (8 to 4096)
    #[clap(
        short = 'n',
        value_name = "LENGTH",
        num_args = 0..=1,
        default_missing_value = "",
        allow_negative_numbers = true
    )]
    pub length: Option<String>,

    /// leave symbols out of random character passwords
    #[clap(long)]
    pub no_symbols: bool,

    /// debug logging on stderr
    #[clap(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Words,
    Characters { length: usize, symbols: bool },
}

impl Mode {
    pub fn from_args(args: &Args) -> Result<Self, Error> {
        match &args.length {
            None => Ok(Mode::Words),
            Some(raw) => Ok(Mode::Characters {
                length: parse_length(raw)?,
                symbols: !args.no_symbols,
            }),
        }
    }
}

/// Accepts a plain unsigned integer in `MIN_LENGTH..=MAX_LENGTH`.
pub fn parse_length(raw: &str) -> Result<usize, Error> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (MIN_LENGTH..=MAX_LENGTH).contains(&n) => Ok(n),
        _ => Err(Error::InvalidLength(raw.to_string())),
    }
}

#[derive(Debug)]
pub struct PasswordGenerator {
    mode: Mode,
    count: usize,
    source: DictionarySource,
}

impl PasswordGenerator {
    pub fn new(args: &Args) -> Result<Self, Error> {
        Ok(PasswordGenerator {
            mode: Mode::from_args(args)?,
            count: args.count,
            source: DictionarySource::system(),
        })
    }

    /// Reads words from `source` instead of the system locations.
    pub fn with_source(mut self, source: DictionarySource) -> Self {
        self.source = source;
        self
    }

    /// Generates every password before writing any, so a failure leaves
    /// `out` untouched.
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Result<Vec<String>> {
        debug!("mode {:?}, count {}", self.mode, self.count);
        match self.mode {
            Mode::Words => {
                let dictionary = self.source.load()?;
                (0..self.count)
                    .map(|_| words::word_password(&dictionary, rng).map_err(anyhow::Error::from))
                    .collect()
            }
            Mode::Characters { length, symbols } => (0..self.count)
                .map(|_| chars::char_password(length, symbols, rng).map_err(anyhow::Error::from))
                .collect(),
        }
    }

    pub fn run<R: RandomSource, W: Write>(&self, rng: &mut R, out: &mut W) -> Result<()> {
        for password in self.generate(rng)? {
            writeln!(out, "{password}").context("failed to write password")?;
        }
        out.flush().context("failed to flush output")?;
        Ok(())
    }
}

pub fn run(args: Args) -> Result<()> {
    let generator = PasswordGenerator::new(&args)?;
    let stdout = io::stdout();
    generator.run(&mut RngSource::host(), &mut stdout.lock())
}
