//! Verilog-2001 spelling

use crate::syntax::{ModuleContext, Syntax};

/// IEEE 1364-2001 keywords, gate primitives included
const KEYWORDS: &[&str] = &[
    "always", "and", "assign", "automatic", "begin", "buf", "bufif0", "bufif1", "case", "casex",
    "casez", "cell", "cmos", "config", "deassign", "default", "defparam", "design", "disable",
    "edge", "else", "end", "endcase", "endconfig", "endfunction", "endgenerate", "endmodule",
    "endprimitive", "endspecify", "endtable", "endtask", "event", "for", "force", "forever",
    "fork", "function", "generate", "genvar", "highz0", "highz1", "if", "ifnone", "incdir",
    "include", "initial", "inout", "input", "instance", "integer", "join", "large", "liblist",
    "library", "localparam", "macromodule", "medium", "module", "nand", "negedge", "nmos", "nor",
    "noshowcancelled", "not", "notif0", "notif1", "or", "output", "parameter", "pmos", "posedge",
    "primitive", "pull0", "pull1", "pulldown", "pullup", "pulsestyle_onevent",
    "pulsestyle_ondetect", "rcmos", "real", "realtime", "reg", "release", "repeat", "rnmos",
    "rpmos", "rtran", "rtranif0", "rtranif1", "scalared", "showcancelled", "signed", "small",
    "specify", "specparam", "strong0", "strong1", "supply0", "supply1", "table", "task", "time",
    "tran", "tranif0", "tranif1", "tri", "tri0", "tri1", "triand", "trior", "trireg", "unsigned",
    "use", "vectored", "wait", "wand", "weak0", "weak1", "while", "wire", "wor", "xnor", "xor",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Verilog;

impl Syntax for Verilog {
    fn comment(&self) -> &'static str {
        "//"
    }

    fn rule(&self) -> String {
        format!("//{}", "-".repeat(77))
    }

    fn bus_range(&self, msb: usize) -> String {
        format!("[{}:0]", msb)
    }

    fn state_ref(&self, i: usize) -> String {
        format!("lfsr_q[{}]", i)
    }

    fn data_ref(&self, m: usize) -> String {
        format!("data_in_inv_res[{}]", m)
    }

    fn xor_op(&self) -> &'static str {
        " ^ "
    }

    fn false_literal(&self) -> &'static str {
        "1'b0"
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        KEYWORDS
    }

    fn module_header(&self, out: &mut String, ctx: &ModuleContext<'_>) {
        out.push_str(&format!("module {} #(\n", ctx.name));
        out.push_str(&format!("    parameter INPUT_WIDTH  = {},\n", ctx.data_width));
        out.push_str(&format!("    parameter OUTPUT_WIDTH = {},\n", ctx.poly_width));
        out.push_str(&format!("    parameter INIT         = {{{}{{1'b1}}}},\n", ctx.poly_width));
        out.push_str(&format!("    parameter OUTPUT_XOR   = {{{}{{1'b0}}}},\n", ctx.poly_width));
        out.push_str("    parameter INPUT_INV    = 1'b0,\n");
        out.push_str("    parameter OUTPUT_INV   = 1'b0\n");
        out.push_str(") (\n");
        out.push_str("    input  wire [ (INPUT_WIDTH-1):0] data_in,\n");
        out.push_str("    input  wire                      crc_en,\n");
        out.push_str("    output wire [(OUTPUT_WIDTH-1):0] crc_out,\n");
        out.push_str("    input  wire                      rst,\n");
        out.push_str("    input  wire                      clk\n");
        out.push_str(");\n\n");
    }

    fn declarations(&self, out: &mut String, _ctx: &ModuleContext<'_>) {
        out.push_str("    genvar ii;\n");
        out.push_str("    wire [ (INPUT_WIDTH-1):0] data_in_inv;\n");
        out.push_str("    wire [ (INPUT_WIDTH-1):0] data_in_inv_res;\n");
        out.push_str("    wire [(OUTPUT_WIDTH-1):0] crc_out_inv;\n");
        out.push_str("    wire [(OUTPUT_WIDTH-1):0] crc_out_inv_res;\n");
        out.push_str("    reg  [(OUTPUT_WIDTH-1):0] lfsr_q;\n");
        out.push_str("    reg  [(OUTPUT_WIDTH-1):0] lfsr_c;\n\n");
    }

    fn reflection(&self, out: &mut String) {
        out.push_str("    generate\n");
        out.push_str("        for (ii = 0; ii < INPUT_WIDTH; ii = ii + 1) begin : gen_data_in_inv\n");
        out.push_str("            assign data_in_inv[ii] = data_in[INPUT_WIDTH-ii-1];\n");
        out.push_str("        end\n");
        out.push_str("        for (ii = 0; ii < OUTPUT_WIDTH; ii = ii + 1) begin : gen_crc_out_inv\n");
        out.push_str("            assign crc_out_inv[ii] = lfsr_q[OUTPUT_WIDTH-ii-1];\n");
        out.push_str("        end\n");
        out.push_str("    endgenerate\n\n");
    }

    fn structural(&self, out: &mut String) {
        out.push_str("    // input reverse\n");
        out.push_str("    assign data_in_inv_res = (INPUT_INV == 1'b1) ? data_in_inv : data_in;\n");
        out.push_str("    // output reverse\n");
        out.push_str("    assign crc_out_inv_res = (OUTPUT_INV == 1'b1) ? crc_out_inv : lfsr_q;\n");
        out.push_str("    // output xor\n");
        out.push_str("    assign crc_out         = crc_out_inv_res ^ OUTPUT_XOR;\n\n");
    }

    fn next_state_open(&self, out: &mut String) {
        out.push_str("    always @(*) begin\n");
    }

    fn next_state_line(&self, out: &mut String, bit: usize, expr: &str) {
        out.push_str(&format!("        lfsr_c[{}] = {};\n", bit, expr));
    }

    fn next_state_close(&self, out: &mut String) {
        out.push_str("    end // always\n\n");
    }

    fn register_process(&self, out: &mut String) {
        out.push_str("    always @(posedge clk, posedge rst) begin\n");
        out.push_str("        if (rst) begin\n");
        out.push_str("            lfsr_q <= INIT;\n");
        out.push_str("        end else begin\n");
        out.push_str("            lfsr_q <= crc_en ? lfsr_c : lfsr_q;\n");
        out.push_str("        end\n");
        out.push_str("    end // always\n");
    }

    fn footer(&self, out: &mut String, ctx: &ModuleContext<'_>) {
        out.push_str(&format!("endmodule // {}\n", ctx.name));
    }
}
