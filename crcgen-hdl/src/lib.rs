//! # crcgen HDL emitter
//!
//! Render a [`crcgen_matrix::TransitionMatrix`] as a synthesizable Verilog
//! module or VHDL entity/architecture pair. Both languages share one section
//! sequence; only the spelling differs (see [`Syntax`]).
//!
//! Each generated module exposes `data_in`, `crc_en`, `crc_out`, `rst` and
//! `clk`, plus the parameters `INIT`, `OUTPUT_XOR`, `INPUT_INV` and
//! `OUTPUT_INV`. The next-state block holds one XOR chain per register bit.
//!
//! ## Example
//!
//! ```rust
//! use crcgen_hdl::{emit, Dialect};
//! use crcgen_matrix::build;
//! use crcgen_spec::{DataWidth, Limits, PolynomialSpec};
//!
//! let poly = PolynomialSpec::from_hex("05", 5, &Limits::DEFAULT).unwrap();
//! let matrix = build(&poly, DataWidth::try_from(8).unwrap());
//!
//! let verilog = emit(&matrix, &poly, Dialect::Verilog);
//! assert!(verilog.contains(
//!     "lfsr_c[4] = lfsr_q[1] ^ lfsr_q[2] ^ data_in_inv_res[2] ^ data_in_inv_res[4] ^ data_in_inv_res[5];"
//! ));
//! ```

pub mod dialect;
pub mod emitter;
pub mod error;
pub mod formatter;
pub mod syntax;
pub mod verilog;
pub mod vhdl;

pub use dialect::Dialect;
pub use emitter::{emit, emit_with, write_module, EmitOptions};
pub use error::{HdlError, Result};
pub use formatter::{format_column, format_term};
pub use syntax::{ModuleContext, Syntax};
pub use verilog::Verilog;
pub use vhdl::Vhdl;
