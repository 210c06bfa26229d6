//! Keyword and punctuation tables shared by every output language
//!
//! The emitter walks one fixed sequence of sections; a [`Syntax`]
//! implementation decides only how each section is spelled.

use crcgen_spec::PolynomialSpec;

/// Ports, signals, parameters and library names the emitted module declares
pub const GENERATED_NAMES: &[&str] = &[
    "data_in", "crc_en", "crc_out", "rst", "clk", "data_in_inv", "data_in_inv_res",
    "crc_out_inv", "crc_out_inv_res", "lfsr_q", "lfsr_c", "ii", "gen_data_in_inv",
    "gen_crc_out_inv", "input_width", "output_width", "init", "output_xor", "input_inv",
    "output_inv", "ieee", "std", "work", "std_logic_1164", "std_logic", "std_logic_vector",
    "rising_edge", "integer",
];

/// Values every section may need
#[derive(Debug, Clone, Copy)]
pub struct ModuleContext<'a> {
    pub name: &'a str,
    pub data_width: usize,
    pub poly_width: usize,
    pub polynomial: &'a PolynomialSpec,
}

pub trait Syntax {
    /// Line comment introducer
    fn comment(&self) -> &'static str;

    /// Horizontal rule used around the banner
    fn rule(&self) -> String;

    /// Bit range of a bus whose top bit is `msb`
    fn bus_range(&self, msb: usize) -> String;

    /// Current accumulator bit `i`
    fn state_ref(&self, i: usize) -> String;

    /// Reflected data bit `m`
    fn data_ref(&self, m: usize) -> String;

    /// Binary XOR operator with surrounding spaces
    fn xor_op(&self) -> &'static str;

    fn false_literal(&self) -> &'static str;

    /// Lowercase keywords that cannot name a module
    fn reserved_words(&self) -> &'static [&'static str];

    /// Library clauses, module/entity parameters and ports
    fn module_header(&self, out: &mut String, ctx: &ModuleContext<'_>);

    /// Internal wires and registers
    fn declarations(&self, out: &mut String, ctx: &ModuleContext<'_>);

    /// Generate loops that reverse the data and CRC bit order
    fn reflection(&self, out: &mut String);

    /// Input/output reverse selects and output XOR mask
    fn structural(&self, out: &mut String);

    fn next_state_open(&self, out: &mut String);

    fn next_state_line(&self, out: &mut String, bit: usize, expr: &str);

    fn next_state_close(&self, out: &mut String);

    /// Async reset to INIT, enable-gated load of the next state
    fn register_process(&self, out: &mut String);

    fn footer(&self, out: &mut String, ctx: &ModuleContext<'_>);
}
