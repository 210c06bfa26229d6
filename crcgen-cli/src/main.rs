//! `crcgen`: print a parallel CRC module for a given polynomial and data width
//!
//! ```text
//! crcgen verilog 8 5 05 > crc5_usb.v
//! crcgen vhdl 64 32 "x^32+x^26+x^23+x^22+x^16+x^12+x^11+x^10+x^8+x^7+x^5+x^4+x^2+x+1" --notation expr
//! ```

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crcgen_hdl::{write_module, Dialect, EmitOptions};
use crcgen_matrix::{build_with, BuildStrategy};
use crcgen_spec::{DataWidth, Limits, PolynomialSpec, SpecError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Parallel CRC generator for Verilog and VHDL", long_about = None)]
struct Cli {
    /// Output language (verilog or vhdl)
    language: String,

    /// Data bus width in bits
    data_width: usize,

    /// Polynomial width in bits
    poly_width: usize,

    /// Polynomial, x^N implied
    poly: String,

    /// How the polynomial argument is written
    #[arg(long, value_enum, default_value_t = Notation::Hex)]
    notation: Notation,

    /// Module (Verilog) or entity (VHDL) name
    #[arg(long, default_value = "crc")]
    module_name: String,

    /// Omit the comment banner
    #[arg(long, default_value_t = false)]
    no_banner: bool,

    /// Matrix construction method (superposition or squaring)
    #[arg(long, default_value = "squaring")]
    strategy: BuildStrategy,

    /// Largest accepted data and polynomial width
    #[arg(long, default_value_t = Limits::DEFAULT.max_data_width)]
    max_width: usize,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Notation {
    /// Hex digits, bit i of the value is the coefficient of x^i
    Hex,
    /// Algebraic sum such as x^5+x^2+1
    Expr,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let dialect: Dialect = cli.language.parse()?;
    let limits = Limits::uniform(cli.max_width).context("invalid --max-width")?;
    let options = EmitOptions::new(cli.module_name.as_str())?.with_banner(!cli.no_banner);

    let width = DataWidth::new(cli.data_width, &limits)?;
    PolynomialSpec::validate_width(cli.poly_width, &limits)?;
    let poly = parse_polynomial(cli, &limits)
        .with_context(|| format!("invalid polynomial {:?}", cli.poly))?;

    info!(
        %dialect,
        data_width = width.get(),
        poly_width = poly.width(),
        polynomial = %poly,
        strategy = %cli.strategy,
        "generating"
    );

    let matrix = build_with(&poly, width, cli.strategy);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_module(&mut out, &matrix, &poly, dialect, &options)
        .context("failed to write module")?;
    out.flush()?;
    Ok(())
}

fn parse_polynomial(cli: &Cli, limits: &Limits) -> Result<PolynomialSpec, SpecError> {
    match cli.notation {
        Notation::Hex => PolynomialSpec::from_hex(&cli.poly, cli.poly_width, limits),
        Notation::Expr => {
            let poly = PolynomialSpec::from_expression(&cli.poly, limits)?;
            if poly.width() != cli.poly_width {
                return Err(SpecError::WidthMismatch {
                    expected: cli.poly_width,
                    found: poly.width(),
                });
            }
            Ok(poly)
        }
    }
}
