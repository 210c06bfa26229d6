//! Output language selection

use std::fmt;
use std::str::FromStr;

use crate::error::HdlError;
use crate::syntax::Syntax;
use crate::verilog::Verilog;
use crate::vhdl::Vhdl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Verilog,
    Vhdl,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Verilog, Dialect::Vhdl];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Verilog => "verilog",
            Dialect::Vhdl => "vhdl",
        }
    }

    /// Conventional source file extension
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::Verilog => "v",
            Dialect::Vhdl => "vhd",
        }
    }

    pub fn syntax(self) -> &'static dyn Syntax {
        match self {
            Dialect::Verilog => &Verilog,
            Dialect::Vhdl => &Vhdl,
        }
    }
}

impl FromStr for Dialect {
    type Err = HdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verilog" => Ok(Dialect::Verilog),
            "vhdl" => Ok(Dialect::Vhdl),
            _ => Err(HdlError::UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
