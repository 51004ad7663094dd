mod field;
mod file_io;
mod read_cli;
mod write_cli;

use clap::{Arg, App, AppSettings, SubCommand, ArgMatches};
use log::{LevelFilter, error};
use std::path::PathBuf;
use std::str::FromStr;
use bytebuf_lib::buffer::SharedBuffer;
use bytebuf_lib::error::{Result, ErrorType};
use bytebuf_lib::view::{DataView, Endianness};
use crate::file_io::load_buffer;

static DEFAULT_ARG_ENDIANNESS: &str = "big";

static FIELD_WIDTHS: &[&str] = &["u8", "u16", "u24", "u32", "bit"];

fn main() {
    let matches = App::new("bytebuf CLI")
        .version("1.0")
        .about("Decode and patch fixed width fields of binary files")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("FILE")
                .help("The binary file to operate on")
                .required(true)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("offset")
                .short("o")
                .long("offset")
                .value_name("BYTES")
                .help("Start of the view window, negative values count from the end of the file")
                .allow_hyphen_values(true)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("length")
                .short("l")
                .long("length")
                .value_name("BYTES")
                .help("Size of the view window, negative values count from the end of the file")
                .allow_hyphen_values(true)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("endianness")
                .short("e")
                .long("endianness")
                .value_name("ORDER")
                .help("Byte order of multi byte fields")
                .possible_values(&["big", "little"])
                .default_value(DEFAULT_ARG_ENDIANNESS)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Sets the level of verbosity (''=warn, 'v'=info, 'vv'=debug, 'vvv'=trace)")
                .takes_value(false)
        )
        .subcommand(
            SubCommand::with_name("dump")
                .about("Print the bytes of the view window as hex")
        )
        .subcommand(
            SubCommand::with_name("get")
                .about("Print a field of the view window")
                .arg(Arg::with_name("width").required(true).possible_values(FIELD_WIDTHS))
                .arg(Arg::with_name("index").required(true).help("Byte index, or bit index for 'bit'"))
        )
        .subcommand(
            SubCommand::with_name("set")
                .about("Write a field of the view window, out of range values are clamped")
                .arg(Arg::with_name("width").required(true).possible_values(FIELD_WIDTHS))
                .arg(Arg::with_name("index").required(true).help("Byte index, or bit index for 'bit'"))
                .arg(Arg::with_name("value").required(true).allow_hyphen_values(true))
        )
        .subcommand(
            SubCommand::with_name("resize")
                .about("Truncate or zero extend the file")
                .arg(Arg::with_name("size").required(true))
        )
        .subcommand(
            SubCommand::with_name("digest")
                .about("Print the SHA-256 of the whole file")
        )
        .get_matches();

    let log_level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder().filter_level(log_level).init();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let path = PathBuf::from(matches.value_of("file").unwrap_or_default());
    let buffer = load_buffer(&path)?;

    match matches.subcommand() {
        ("dump", Some(_)) => read_cli::dump_main(&open_view(matches, buffer)?),
        ("get", Some(sub_matches)) => read_cli::get_main(&open_view(matches, buffer)?, sub_matches),
        ("set", Some(sub_matches)) => write_cli::set_main(&mut open_view(matches, buffer)?, &path, sub_matches),
        ("resize", Some(sub_matches)) => write_cli::resize_main(&buffer, &path, sub_matches),
        ("digest", Some(_)) => read_cli::digest_main(&buffer),
        _ => Ok(()),
    }
}

fn open_view(matches: &ArgMatches, buffer: SharedBuffer) -> Result<DataView> {
    let offset = optional_number(matches, "offset")?;
    let length = optional_number(matches, "length")?;
    let endianness: Endianness = matches.value_of("endianness").unwrap_or(DEFAULT_ARG_ENDIANNESS).parse()?;
    DataView::new(buffer, offset, length, endianness)
}

/// parse a numeric argument, `InvalidNumber` if it is not a number
pub fn parse_number<T: FromStr>(value: &str) -> Result<T> {
    value.parse().map_err(|_| ErrorType::InvalidNumber(value.to_string()))
}

/// parse an optional numeric argument, None if it is absent
pub fn optional_number(matches: &ArgMatches, name: &str) -> Result<Option<i64>> {
    matches.value_of(name).map(parse_number::<i64>).transpose()
}

/// parse a required numeric argument
pub fn required_number<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T> {
    parse_number(matches.value_of(name).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use crate::{optional_number, required_number, parse_number};
    use bytebuf_lib::error::ErrorType;
    use clap::{App, Arg};

    fn matches_from(args: &[&str]) -> clap::ArgMatches<'static> {
        App::new("test")
            .arg(Arg::with_name("offset").short("o").takes_value(true).allow_hyphen_values(true))
            .arg(Arg::with_name("index").required(true))
            .get_matches_from(args)
    }

    #[test]
    fn numbers_are_parsed() {
        let matches = matches_from(&["test", "-o", "-3", "7"]);
        assert_eq!(optional_number(&matches, "offset").unwrap(), Some(-3));
        assert_eq!(required_number::<usize>(&matches, "index").unwrap(), 7);
    }

    #[test]
    fn absent_optional_number() {
        let matches = matches_from(&["test", "7"]);
        assert_eq!(optional_number(&matches, "offset").unwrap(), None);
    }

    #[test]
    fn invalid_number() {
        let matches = matches_from(&["test", "-o", "x", "y"]);
        assert!(matches!(optional_number(&matches, "offset"), Err(ErrorType::InvalidNumber(value)) if value == "x"));
        assert!(matches!(required_number::<usize>(&matches, "index"), Err(ErrorType::InvalidNumber(_))));
        assert!(parse_number::<i64>("12a").is_err());
    }
}
