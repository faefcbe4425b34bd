//! Converts stdin with one of the micro-hex codecs and writes the result to stdout.
//!
//! ```text
//! printf 'GET /\r\n' | cargo run --example hexdump -- --encoding hexascii
//! echo '{GET /} 0D 0A' | cargo run --example hexdump -- --encoding hexascii --decode
//! ```

use clap::Parser;
use micro_hex::{Encoding, TextCodec};
use std::error::Error;
use std::io::{self, Read, Write};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(about = "hex / hex-ascii text conversion")]
struct Args {
    /// Codec name: `Hex`, `Hex{US-ASCII}` or an alias such as `hexascii`
    #[arg(short, long, default_value = "Hex")]
    encoding: Encoding,

    /// Read text and write bytes instead of the other way round
    #[arg(short, long)]
    decode: bool,

    /// Log count and fill passes
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    let level = if args.verbose { Level::TRACE } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;

    let output = if args.decode {
        let text = String::from_utf8(input)?;
        args.encoding.decode(&text)
    } else {
        args.encoding.encode(&input).map(String::into_bytes)
    };

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            error!(cause = %e, encoding = %args.encoding, "conversion failed");
            return Err(e.into());
        }
    };

    info!(encoding = %args.encoding, decode = args.decode, len = output.len(), "converted");
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    if !args.decode {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
