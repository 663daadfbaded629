// Command-line inspector for single quads.
//
// Encodes four integers and prints the control byte and data bytes, decodes
// a hex quad back into integers, and dumps the control-byte length table.
// All I/O is on the command line; nothing touches the filesystem.

use std::io::Cursor;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde_json::{Value, json};

use crate::quad::{self, MAX_ENCODED_LEN, QuadError};

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

/// Parse a control byte given as `0x43`, `43h` or plain decimal `67`.
fn parse_control(s: &str) -> Result<u8, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else if let Some(hex) = s.strip_suffix(['h', 'H']) {
        u8::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid control byte '{s}': {e}"))
}

/// Parse a hex byte string. Whitespace, `:` and a leading `0x` are ignored.
fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    let digits: Vec<u8> = s
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();
    if !digits.len().is_multiple_of(2) {
        return Err(format!("odd number of hex digits in '{s}'"));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex '{pair}': {e}"))
        })
        .collect()
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Stream VByte quad encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "svbyte",
    version,
    about = "Stream VByte quad inspector",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (only errors are logged).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode four integers into one quad.
    Encode(EncodeArgs),
    /// Decode one quad back into four integers.
    Decode(DecodeArgs),
    /// Print control-byte length table entries.
    Table(TableArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// Control byte and data bytes reported separately.
    Split,
    /// Control byte immediately followed by its data bytes.
    Inline,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// The four integers of the quad.
    #[arg(num_args = 4, value_names = ["V0", "V1", "V2", "V3"], required = true)]
    values: Vec<u32>,

    /// Store values after the first as deltas.
    #[arg(long)]
    diff: bool,

    /// Output layout.
    #[arg(long, value_enum, default_value_t = Layout::Split)]
    layout: Layout,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Hex bytes: the data section with `--control`, otherwise an inline quad.
    #[arg(value_name = "HEX")]
    bytes: String,

    /// Control byte for split-layout input (e.g. 0x43).
    #[arg(long, short = 'c', value_parser = parse_control)]
    control: Option<u8>,

    /// Reverse delta coding after decoding.
    #[arg(long)]
    diff: bool,

    /// Pull bytes one at a time through the incremental decoder.
    #[arg(long)]
    incremental: bool,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// A single control byte to show (default: all 256).
    #[arg(value_parser = parse_control)]
    control: Option<u8>,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Codec(#[from] QuadError),
}

fn quad_of(values: &[u32]) -> Result<[u32; 4], CliError> {
    values
        .try_into()
        .map_err(|_| CliError::Usage(format!("expected 4 values, got {}", values.len())))
}

fn encode_report(args: &EncodeArgs) -> Result<Value, CliError> {
    let values = quad_of(&args.values)?;
    if args.diff && !quad::is_ascending(values) {
        log::warn!("quad {values:?} is not ascending; deltas will wrap");
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let report = match args.layout {
        Layout::Split => {
            let (control, n) = quad::encode(values, args.diff, &mut buf)?;
            json!({
                "layout": "split",
                "values": values,
                "diff": args.diff,
                "control": format!("{control:#04x}"),
                "data": hex(&buf[..n]),
                "len": n,
            })
        }
        Layout::Inline => {
            let n = quad::encode_inline(values, args.diff, &mut buf)?;
            json!({
                "layout": "inline",
                "values": values,
                "diff": args.diff,
                "control": format!("{:#04x}", buf[0]),
                "data": hex(&buf[..n]),
                "len": n,
            })
        }
    };
    log::debug!("encode: {report}");
    Ok(report)
}

fn decode_report(args: &DecodeArgs) -> Result<Value, CliError> {
    let bytes = parse_hex(&args.bytes).map_err(CliError::Usage)?;

    let (control, data) = match args.control {
        Some(control) => (control, &bytes[..]),
        None => match bytes.split_first() {
            Some((&control, data)) => (control, data),
            None => {
                return Err(QuadError::Insufficient {
                    needed: 1,
                    available: 0,
                }
                .into());
            }
        },
    };

    let (values, consumed) = if args.incremental {
        let mut cursor = Cursor::new(data);
        let values = quad::decode_from(control, &mut cursor, args.diff)?;
        (values, cursor.position() as usize)
    } else {
        quad::decode(control, data, args.diff)?
    };

    if consumed < data.len() {
        log::warn!("{} trailing bytes ignored", data.len() - consumed);
    }

    let (lens, _) = quad::lengths(control);
    Ok(json!({
        "control": format!("{control:#04x}"),
        "lengths": lens,
        "diff": args.diff,
        "values": values,
        "consumed": consumed,
    }))
}

fn table_report(args: &TableArgs) -> Value {
    let entry = |control: u8| {
        let (lens, total) = quad::lengths(control);
        json!({
            "control": format!("{control:#04x}"),
            "lengths": lens,
            "total": total,
        })
    };
    match args.control {
        Some(control) => Value::Array(vec![entry(control)]),
        None => Value::Array((0..=255u8).map(entry).collect()),
    }
}

fn print_encode(report: &Value) {
    println!("control: {}", report["control"].as_str().unwrap_or_default());
    println!("data:    {}", report["data"].as_str().unwrap_or_default());
    println!("length:  {}", report["len"]);
}

fn print_decode(report: &Value) {
    let values: Vec<String> = report["values"]
        .as_array()
        .map(|a| a.iter().map(Value::to_string).collect())
        .unwrap_or_default();
    println!("values:   {}", values.join(" "));
    println!("consumed: {}", report["consumed"]);
}

fn print_table(report: &Value) {
    for row in report.as_array().into_iter().flatten() {
        let lens: Vec<String> = row["lengths"]
            .as_array()
            .map(|a| a.iter().map(Value::to_string).collect())
            .unwrap_or_default();
        println!(
            "{}  {}  total={}",
            row["control"].as_str().unwrap_or_default(),
            lens.join(" "),
            row["total"]
        );
    }
}

fn emit(report: Result<Value, CliError>, json_output: bool, print: fn(&Value)) -> i32 {
    match report {
        Ok(report) if json_output => {
            println!("{report:#}");
            0
        }
        Ok(report) => {
            print(&report);
            0
        }
        Err(e) => {
            eprintln!("svbyte: {e}");
            1
        }
    }
}

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    println!("svbyte version {version} (Rust)");

    let parallel = cfg!(feature = "parallel") as u8;
    println!("PARALLEL={parallel}");
    println!("QUAD_LEN={}", quad::QUAD_LEN);
    println!("MIN_DATA_LEN={}", quad::MIN_DATA_LEN);
    println!("MAX_DATA_LEN={}", quad::MAX_DATA_LEN);
    println!("MAX_ENCODED_LEN={MAX_ENCODED_LEN}");

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn log_filter(quiet: bool, verbose: u8) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.quiet, cli.verbose)),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    let json_output = cli.json_output;
    let exit_code = match &cli.command {
        Cmd::Encode(args) => emit(encode_report(args), json_output, print_encode),
        Cmd::Decode(args) => emit(decode_report(args), json_output, print_decode),
        Cmd::Table(args) => emit(Ok(table_report(args)), json_output, print_table),
        Cmd::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("svbyte").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("cli parse failed")
    }

    #[test]
    fn parse_control_forms() {
        assert_eq!(parse_control("0x43").unwrap(), 0x43);
        assert_eq!(parse_control("43h").unwrap(), 0x43);
        assert_eq!(parse_control("67").unwrap(), 0x43);
        assert!(parse_control("256").is_err());
        assert!(parse_control("0xzz").is_err());
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(parse_hex("04000c0a").unwrap(), [0x04, 0x00, 0x0c, 0x0a]);
        assert_eq!(parse_hex("0x04 00:0C").unwrap(), [0x04, 0x00, 0x0c]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn encode_requires_four_values() {
        let argv = ["svbyte", "encode", "1", "2", "3"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn encode_split_report() {
        let cli = parse(&["encode", "1024", "12", "10", "1073741824"]);
        let Cmd::Encode(args) = cli.command else {
            panic!("expected encode");
        };
        let report = encode_report(&args).unwrap();
        assert_eq!(report["control"], "0x43");
        assert_eq!(report["data"], "04 00 0c 0a 40 00 00 00");
        assert_eq!(report["len"], 8);
    }

    #[test]
    fn encode_inline_report() {
        let cli = parse(&["encode", "--layout", "inline", "1", "2", "3", "1024"]);
        let Cmd::Encode(args) = cli.command else {
            panic!("expected encode");
        };
        let report = encode_report(&args).unwrap();
        assert_eq!(report["data"], "01 01 02 03 04 00");
        assert_eq!(report["len"], 6);
    }

    #[test]
    fn decode_split_and_inline_agree() {
        let split = parse(&["decode", "--control", "0x43", "04000c0a40000000", "--diff"]);
        let inline = parse(&["decode", "4304000c0a40000000", "--diff", "--incremental"]);
        let (Cmd::Decode(a), Cmd::Decode(b)) = (split.command, inline.command) else {
            panic!("expected decode");
        };
        let a = decode_report(&a).unwrap();
        let b = decode_report(&b).unwrap();
        assert_eq!(a["values"], json!([1024, 1036, 1046, 1_073_742_870u32]));
        assert_eq!(a["values"], b["values"]);
        assert_eq!(a["consumed"], 8);
    }

    #[test]
    fn decode_short_input_is_an_error() {
        let cli = parse(&["decode", "--control", "0xff", "000000"]);
        let Cmd::Decode(args) = cli.command else {
            panic!("expected decode");
        };
        assert!(matches!(
            decode_report(&args),
            Err(CliError::Codec(QuadError::Insufficient { needed: 16, .. }))
        ));
    }

    #[test]
    fn table_has_all_entries() {
        let all = table_report(&TableArgs { control: None });
        assert_eq!(all.as_array().map(Vec::len), Some(256));

        let one = table_report(&TableArgs {
            control: Some(0x43),
        });
        assert_eq!(one[0]["lengths"], json!([2, 1, 1, 4]));
        assert_eq!(one[0]["total"], 8);
    }

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter(false, 0), "warn");
        assert_eq!(log_filter(false, 1), "debug");
        assert_eq!(log_filter(false, 5), "trace");
        assert_eq!(log_filter(true, 0), "error");
    }
}
