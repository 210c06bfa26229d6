//! VHDL-93 spelling

use crate::syntax::{ModuleContext, Syntax};

/// IEEE 1076-1993 reserved words
const RESERVED_WORDS: &[&str] = &[
    "abs", "access", "after", "alias", "all", "and", "architecture", "array", "assert",
    "attribute", "begin", "block", "body", "buffer", "bus", "case", "component", "configuration",
    "constant", "disconnect", "downto", "else", "elsif", "end", "entity", "exit", "file", "for",
    "function", "generate", "generic", "group", "guarded", "if", "impure", "in", "inertial",
    "inout", "is", "label", "library", "linkage", "literal", "loop", "map", "mod", "nand", "new",
    "next", "nor", "not", "null", "of", "on", "open", "or", "others", "out", "package", "port",
    "postponed", "procedure", "process", "pure", "range", "record", "register", "reject", "rem",
    "report", "return", "rol", "ror", "select", "severity", "signal", "shared", "sla", "sll",
    "sra", "srl", "subtype", "then", "to", "transport", "type", "unaffected", "units", "until",
    "use", "variable", "wait", "when", "while", "with", "xnor", "xor",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Vhdl;

impl Syntax for Vhdl {
    fn comment(&self) -> &'static str {
        "--"
    }

    fn rule(&self) -> String {
        "-".repeat(79)
    }

    fn bus_range(&self, msb: usize) -> String {
        format!("({} downto 0)", msb)
    }

    fn state_ref(&self, i: usize) -> String {
        format!("lfsr_q({})", i)
    }

    fn data_ref(&self, m: usize) -> String {
        format!("data_in_inv_res({})", m)
    }

    fn xor_op(&self) -> &'static str {
        " xor "
    }

    fn false_literal(&self) -> &'static str {
        "'0'"
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        RESERVED_WORDS
    }

    fn module_header(&self, out: &mut String, ctx: &ModuleContext<'_>) {
        let msb = ctx.poly_width - 1;
        out.push_str("library ieee;\n");
        out.push_str("use ieee.std_logic_1164.all;\n\n");
        out.push_str(&format!("entity {} is\n", ctx.name));
        out.push_str("    generic (\n");
        out.push_str(&format!("        INPUT_WIDTH  : integer := {};\n", ctx.data_width));
        out.push_str(&format!("        OUTPUT_WIDTH : integer := {};\n", ctx.poly_width));
        out.push_str(&format!(
            "        INIT         : std_logic_vector({} downto 0) := (others => '1');\n",
            msb
        ));
        out.push_str(&format!(
            "        OUTPUT_XOR   : std_logic_vector({} downto 0) := (others => '0');\n",
            msb
        ));
        out.push_str("        INPUT_INV    : std_logic := '0';\n");
        out.push_str("        OUTPUT_INV   : std_logic := '0'\n");
        out.push_str("    );\n");
        out.push_str("    port (\n");
        out.push_str("        data_in : in  std_logic_vector((INPUT_WIDTH-1) downto 0);\n");
        out.push_str("        crc_en  : in  std_logic;\n");
        out.push_str("        crc_out : out std_logic_vector((OUTPUT_WIDTH-1) downto 0);\n");
        out.push_str("        rst     : in  std_logic;\n");
        out.push_str("        clk     : in  std_logic\n");
        out.push_str("    );\n");
        out.push_str(&format!("end entity {};\n\n", ctx.name));
    }

    fn declarations(&self, out: &mut String, ctx: &ModuleContext<'_>) {
        out.push_str(&format!("architecture imp_{} of {} is\n", ctx.name, ctx.name));
        out.push_str("    signal data_in_inv      : std_logic_vector((INPUT_WIDTH-1) downto 0);\n");
        out.push_str("    signal data_in_inv_res  : std_logic_vector((INPUT_WIDTH-1) downto 0);\n");
        out.push_str("    signal crc_out_inv      : std_logic_vector((OUTPUT_WIDTH-1) downto 0);\n");
        out.push_str("    signal crc_out_inv_res  : std_logic_vector((OUTPUT_WIDTH-1) downto 0);\n");
        out.push_str("    signal lfsr_q           : std_logic_vector((OUTPUT_WIDTH-1) downto 0);\n");
        out.push_str("    signal lfsr_c           : std_logic_vector((OUTPUT_WIDTH-1) downto 0);\n");
        out.push_str("begin\n\n");
    }

    fn reflection(&self, out: &mut String) {
        out.push_str("    gen_data_in_inv: for ii in 0 to INPUT_WIDTH-1 generate\n");
        out.push_str("        data_in_inv(ii) <= data_in(INPUT_WIDTH-ii-1);\n");
        out.push_str("    end generate gen_data_in_inv;\n\n");
        out.push_str("    gen_crc_out_inv: for ii in 0 to OUTPUT_WIDTH-1 generate\n");
        out.push_str("        crc_out_inv(ii) <= lfsr_q(OUTPUT_WIDTH-ii-1);\n");
        out.push_str("    end generate gen_crc_out_inv;\n\n");
    }

    fn structural(&self, out: &mut String) {
        out.push_str("    -- input reverse\n");
        out.push_str("    data_in_inv_res <= data_in_inv when INPUT_INV = '1' else data_in;\n");
        out.push_str("    -- output reverse\n");
        out.push_str("    crc_out_inv_res <= crc_out_inv when OUTPUT_INV = '1' else lfsr_q;\n");
        out.push_str("    -- output xor\n");
        out.push_str("    crc_out <= crc_out_inv_res xor OUTPUT_XOR;\n\n");
    }

    fn next_state_open(&self, out: &mut String) {
        out.push_str("    -- next state\n");
    }

    fn next_state_line(&self, out: &mut String, bit: usize, expr: &str) {
        out.push_str(&format!("    lfsr_c({}) <= {};\n", bit, expr));
    }

    fn next_state_close(&self, out: &mut String) {
        out.push('\n');
    }

    fn register_process(&self, out: &mut String) {
        out.push_str("    process (clk, rst) begin\n");
        out.push_str("        if rst = '1' then\n");
        out.push_str("            lfsr_q <= INIT;\n");
        out.push_str("        elsif rising_edge(clk) then\n");
        out.push_str("            if crc_en = '1' then\n");
        out.push_str("                lfsr_q <= lfsr_c;\n");
        out.push_str("            end if;\n");
        out.push_str("        end if;\n");
        out.push_str("    end process;\n");
    }

    fn footer(&self, out: &mut String, ctx: &ModuleContext<'_>) {
        out.push_str(&format!("\nend architecture imp_{};\n", ctx.name));
    }
}
