//! Term and XOR-chain rendering

use crcgen_matrix::{Column, ExpressionTerm};

use crate::syntax::Syntax;

/// Format one source bit
pub fn format_term(term: ExpressionTerm, syntax: &dyn Syntax) -> String {
    match term {
        ExpressionTerm::State(i) => syntax.state_ref(i),
        ExpressionTerm::Data(m) => syntax.data_ref(m),
    }
}

/// Left-to-right XOR chain of a column; an empty column is the false literal
pub fn format_column(column: &Column, syntax: &dyn Syntax) -> String {
    if column.is_empty() {
        return syntax.false_literal().to_string();
    }
    column
        .terms
        .iter()
        .map(|&term| format_term(term, syntax))
        .collect::<Vec<_>>()
        .join(syntax.xor_op())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verilog::Verilog;
    use crate::vhdl::Vhdl;

    fn column(terms: Vec<ExpressionTerm>) -> Column {
        Column { bit: 0, terms }
    }

    #[test]
    fn test_format_term() {
        assert_eq!(format_term(ExpressionTerm::State(4), &Verilog), "lfsr_q[4]");
        assert_eq!(format_term(ExpressionTerm::Data(7), &Vhdl), "data_in_inv_res(7)");
    }

    #[test]
    fn test_format_chain() {
        let c = column(vec![
            ExpressionTerm::State(1),
            ExpressionTerm::State(2),
            ExpressionTerm::Data(5),
        ]);
        assert_eq!(
            format_column(&c, &Verilog),
            "lfsr_q[1] ^ lfsr_q[2] ^ data_in_inv_res[5]"
        );
        assert_eq!(
            format_column(&c, &Vhdl),
            "lfsr_q(1) xor lfsr_q(2) xor data_in_inv_res(5)"
        );
    }

    #[test]
    fn test_format_single_term() {
        let c = column(vec![ExpressionTerm::Data(0)]);
        assert_eq!(format_column(&c, &Verilog), "data_in_inv_res[0]");
    }

    #[test]
    fn test_format_empty_column() {
        let c = column(Vec::new());
        assert_eq!(format_column(&c, &Verilog), "1'b0");
        assert_eq!(format_column(&c, &Vhdl), "'0'");
    }
}
