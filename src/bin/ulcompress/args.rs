use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ulcompress::{BigInt, Shift, ShiftStep, parse_integer};

const AFTER_HELP: &str = "\
This program compresses and uncompresses files.
Its compression ratio is very near to no compression
(a fraction of a bit), but it ALWAYS compresses,
so you can ALWAYS get 0-length compressed files.
Experiment with very small files first.
Use repeatedly (billions of times or even more).

Examples:
  ulcompress -c FILE        compress once
  ulcompress -C 5 FILE      compress 5 times
  ulcompress -D 5 FILE      decompress 5 times
  ulcompress -d FILE        decompress once

Integer arguments accept a sign and the prefixes 0x (hex), 0b (binary)
and 0 (octal). All shift options add up into one net shift.";

/// Compress or decompress a file by moving it along the natural numbers.
#[derive(Parser, Debug)]
#[command(name = "ulcompress")]
#[command(version, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    // One entry per occurrence. ArgAction::Count saturates at u8::MAX.
    /// Compress once (repeatable)
    #[arg(
        short = 'c',
        long = "compress",
        action = ArgAction::Append,
        num_args = 0,
        default_missing_value = "true"
    )]
    pub compress: Vec<bool>,

    /// Decompress once (repeatable)
    #[arg(
        short = 'd',
        long = "decompress",
        action = ArgAction::Append,
        num_args = 0,
        default_missing_value = "true"
    )]
    pub decompress: Vec<bool>,

    /// Compress INTEGER times (repeatable, may be negative)
    #[arg(
        short = 'C',
        long = "compress-by",
        value_name = "INTEGER",
        value_parser = parse_integer,
        allow_hyphen_values = true
    )]
    pub compress_by: Vec<BigInt>,

    /// Decompress INTEGER times (repeatable, may be negative)
    #[arg(
        short = 'D',
        long = "decompress-by",
        value_name = "INTEGER",
        value_parser = parse_integer,
        allow_hyphen_values = true
    )]
    pub decompress_by: Vec<BigInt>,

    /// Print intermediate values (debug mode)
    #[arg(short, long)]
    pub verbose: bool,

    /// File to transform in place
    pub file: PathBuf,
}

impl Cli {
    /// Net shift requested by every compress/decompress option.
    pub fn shift(&self) -> Shift {
        let counted = [
            ShiftStep::Compress(BigInt::from(self.compress.len())),
            ShiftStep::Decompress(BigInt::from(self.decompress.len())),
        ];
        let explicit_compress = self.compress_by.iter().cloned().map(ShiftStep::Compress);
        let explicit_decompress = self
            .decompress_by
            .iter()
            .cloned()
            .map(ShiftStep::Decompress);

        Shift::accumulate(
            counted
                .into_iter()
                .chain(explicit_compress)
                .chain(explicit_decompress),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ulcompress").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_options_accumulate() {
        let cli = parse(&["-c", "-c", "-d", "-C", "10", "-D", "0x3", "file.bin"]).unwrap();
        assert_eq!(cli.shift(), Shift::from(2 - 1 + 10 - 3));
        assert_eq!(cli.file, PathBuf::from("file.bin"));
    }

    #[test]
    fn test_repeated_flags_are_not_capped() {
        let mut args = vec!["-c"; 300];
        args.push("file.bin");
        assert_eq!(parse(&args).unwrap().shift(), Shift::from(300));

        let mut args = vec!["-d"; 1000];
        args.extend(["-c", "file.bin"]);
        assert_eq!(parse(&args).unwrap().shift(), Shift::from(-999));
    }

    #[test]
    fn test_bundled_short_flags() {
        let cli = parse(&["-ccc", "-vd", "file.bin"]).unwrap();
        assert_eq!(cli.shift(), Shift::from(2));
        assert!(cli.verbose);
    }

    #[test]
    fn test_negative_literals() {
        let cli = parse(&["-D", "-5", "file.bin"]).unwrap();
        assert_eq!(cli.shift(), Shift::from(5));
    }

    #[test]
    fn test_no_options_is_zero_shift() {
        let cli = parse(&["file.bin"]).unwrap();
        assert!(cli.shift().is_zero());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["a", "b"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["-x", "a"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["-C", "five", "a"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
    }
}
