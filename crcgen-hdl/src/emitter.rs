//! Main emitter logic

use std::io::Write;

use crcgen_matrix::TransitionMatrix;
use crcgen_spec::PolynomialSpec;
use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{HdlError, Result};
use crate::formatter::format_column;
use crate::syntax::{ModuleContext, Syntax, GENERATED_NAMES};

/// Emission settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    module_name: String,
    banner: bool,
}

impl EmitOptions {
    /// Options with a custom module/entity name
    ///
    /// The name must be a plain identifier accepted by both Verilog and VHDL:
    /// an ASCII letter followed by letters, digits or single underscores, not
    /// ending in an underscore. It may not be a keyword of either language or
    /// the name of a generated port or signal, compared without regard to case.
    pub fn new(module_name: impl Into<String>) -> Result<Self> {
        let module_name = module_name.into();
        if !is_identifier(&module_name) {
            return Err(HdlError::InvalidModuleName(module_name));
        }
        if is_reserved(&module_name) {
            return Err(HdlError::ReservedModuleName(module_name));
        }
        Ok(Self {
            module_name,
            banner: true,
        })
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn banner(&self) -> bool {
        self.banner
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            module_name: "crc".to_string(),
            banner: true,
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_with_letter
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.ends_with('_')
        && !name.contains("__")
}

fn is_reserved(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    let lower = lower.as_str();
    GENERATED_NAMES.contains(&lower)
        || Dialect::ALL
            .iter()
            .any(|dialect| dialect.syntax().reserved_words().contains(&lower))
}

/// Render a module with default options
pub fn emit(matrix: &TransitionMatrix, poly: &PolynomialSpec, dialect: Dialect) -> String {
    emit_with(matrix, poly, dialect, &EmitOptions::default())
}

/// Render a complete module
///
/// # Panics
///
/// Panics if `matrix` was not built for `poly`.
pub fn emit_with(
    matrix: &TransitionMatrix,
    poly: &PolynomialSpec,
    dialect: Dialect,
    options: &EmitOptions,
) -> String {
    assert_eq!(
        matrix.poly_width(),
        poly.width(),
        "matrix was built for a different polynomial width"
    );

    let syntax = dialect.syntax();
    let ctx = ModuleContext {
        name: options.module_name(),
        data_width: matrix.data_width(),
        poly_width: matrix.poly_width(),
        polynomial: poly,
    };

    let mut out = String::new();
    if options.banner() {
        banner(&mut out, syntax, &ctx);
    }
    syntax.module_header(&mut out, &ctx);
    syntax.declarations(&mut out, &ctx);
    syntax.reflection(&mut out);
    syntax.structural(&mut out);

    syntax.next_state_open(&mut out);
    for column in matrix.columns() {
        syntax.next_state_line(&mut out, column.bit, &format_column(&column, syntax));
    }
    syntax.next_state_close(&mut out);

    syntax.register_process(&mut out);
    syntax.footer(&mut out, &ctx);

    debug!(
        %dialect,
        module = ctx.name,
        bytes = out.len(),
        "module emitted"
    );
    out
}

/// Render a module into `writer`
pub fn write_module<W: Write>(
    writer: &mut W,
    matrix: &TransitionMatrix,
    poly: &PolynomialSpec,
    dialect: Dialect,
    options: &EmitOptions,
) -> Result<()> {
    let text = emit_with(matrix, poly, dialect, options);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn banner(out: &mut String, syntax: &dyn Syntax, ctx: &ModuleContext<'_>) {
    let comment = syntax.comment();
    out.push_str(&syntax.rule());
    out.push('\n');
    out.push_str(&format!(
        "{} Parallel CRC generated by crcgen {}\n",
        comment,
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!(
        "{}    data{}\n",
        comment,
        syntax.bus_range(ctx.data_width - 1)
    ));
    out.push_str(&format!(
        "{}    crc{} = {}\n",
        comment,
        syntax.bus_range(ctx.poly_width - 1),
        ctx.polynomial
    ));
    out.push_str(&syntax.rule());
    out.push_str("\n\n");
}
