//! `bech32`: encode a payload under a human-readable prefix, or decode a bech32 string back into
//! its prefix and payload.

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use coins_bech32::{convert_bits, Bech32Codec, MAX_LENGTH};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bech32", version, about = "bech32 encode/decode")]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// bech32 encode payload with a human-readable prefix
    ///
    /// Converts the given payload into base 32, then encodes the base 32 bytes using bech32. The
    /// specified human-readable prefix will be prepended to the encoding.
    Encode(EncodeArgs),

    /// bech32 decode human-readable prefix and payload
    ///
    /// Decodes the given bech32 encoding, and converts it back to base 256. Both the
    /// human-readable prefix and payload are printed.
    Decode(DecodeArgs),
}

#[derive(Args, Debug, Default)]
struct EncodeArgs {
    /// hrp payload
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    /// the human-readable prefix to be prepended to the bech32 encoding
    #[arg(long)]
    hrp: Option<String>,

    /// the string payload to be bech32 encoded
    #[arg(long)]
    payload: Option<String>,

    /// read the payload as hex instead of text
    #[arg(long)]
    hex: bool,

    /// maximum length of the encoded string
    #[arg(long, default_value_t = MAX_LENGTH)]
    limit: usize,
}

#[derive(Args, Debug, Default)]
struct DecodeArgs {
    /// encoding
    #[arg(value_name = "ENCODING")]
    args: Option<String>,

    /// the bech32 encoding to decode
    #[arg(long)]
    encoding: Option<String>,

    /// print the payload as hex instead of text
    #[arg(long)]
    hex: bool,

    /// maximum length of the accepted encoding
    #[arg(long, default_value_t = MAX_LENGTH)]
    limit: usize,
}

impl EncodeArgs {
    fn is_empty(&self) -> bool {
        self.args.is_empty() && self.hrp.is_none() && self.payload.is_none()
    }
}

impl DecodeArgs {
    fn is_empty(&self) -> bool {
        self.args.is_none() && self.encoding.is_none()
    }
}

/// Flags take precedence. Positional arguments fill whatever the flags leave unset, in order.
fn run_encode(args: &EncodeArgs) -> Result<String> {
    let mut positional = args.args.iter();

    let hrp = match &args.hrp {
        Some(hrp) => hrp,
        None => positional
            .next()
            .ok_or_else(|| anyhow!("Human-readable prefix argument missing"))?,
    };
    let payload = match &args.payload {
        Some(payload) => payload,
        None => positional
            .next()
            .ok_or_else(|| anyhow!("Payload argument missing"))?,
    };

    let payload = if args.hex {
        hex::decode(payload).context("invalid hex payload")?
    } else {
        payload.as_bytes().to_vec()
    };

    let payload32 = convert_bits(&payload, 8, 5, true).context("unable to convert bits")?;
    tracing::debug!(hrp = %hrp, groups = payload32.len(), "encoding payload");

    Bech32Codec::with_max_length(args.limit)
        .encode(hrp, &payload32)
        .context("unable to encode")
}

fn run_decode(args: &DecodeArgs) -> Result<String> {
    let encoding = args
        .encoding
        .as_ref()
        .or(args.args.as_ref())
        .ok_or_else(|| anyhow!("Encoding argument missing"))?;

    let (hrp, payload32) = Bech32Codec::with_max_length(args.limit)
        .decode(encoding)
        .context("unable to decode")?;
    tracing::debug!(hrp = %hrp, groups = payload32.len(), "decoded encoding");

    let payload = convert_bits(&payload32, 5, 8, false).context("unable to convert bits")?;

    let payload = if args.hex {
        hex::encode(payload)
    } else {
        String::from_utf8_lossy(&payload).into_owned()
    };
    Ok(format!("{hrp} {payload}"))
}

fn print_subcommand_help(name: &str) -> Result<()> {
    let mut cli = Cli::command();
    cli.build();
    let sub = cli
        .find_subcommand_mut(name)
        .ok_or_else(|| anyhow!("unknown subcommand {name}"))?;
    sub.print_help()?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let output = match cli.cmd {
        Commands::Encode(args) if args.is_empty() => return print_subcommand_help("encode"),
        Commands::Decode(args) if args.is_empty() => return print_subcommand_help("decode"),
        Commands::Encode(args) => run_encode(&args)?,
        Commands::Decode(args) => run_decode(&args)?,
    };
    println!("{output}");
    Ok(())
}

fn init_tracing() {
    // BECH32_LOG, then RUST_LOG, then warnings only
    let filter = std::env::var("BECH32_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".into());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("[bech32] {e:#}");
        std::process::exit(1);
    }
}
