//! HDL emitter errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HdlError {
    #[error("Unknown output language: {0:?} (expected verilog or vhdl)")]
    UnknownDialect(String),

    #[error("Invalid module name: {0:?}")]
    InvalidModuleName(String),

    #[error("Module name {0:?} is a Verilog/VHDL keyword or a generated signal name")]
    ReservedModuleName(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HdlError>;
