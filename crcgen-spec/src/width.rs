//! Parallel data width (M)

use std::fmt;

use crate::config::Limits;
use crate::error::{Result, SpecError};

/// Number of data bits consumed per clock, validated against [`Limits`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataWidth(usize);

impl DataWidth {
    pub fn new(value: usize, limits: &Limits) -> Result<Self> {
        if !limits.allows_data_width(value) {
            return Err(SpecError::DataWidthOutOfRange {
                value,
                max: limits.max_data_width,
            });
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for DataWidth {
    type Error = SpecError;

    /// Validate against [`Limits::DEFAULT`]
    fn try_from(value: usize) -> Result<Self> {
        Self::new(value, &Limits::DEFAULT)
    }
}

impl From<DataWidth> for usize {
    fn from(width: DataWidth) -> usize {
        width.0
    }
}

impl fmt::Display for DataWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let limits = Limits::DEFAULT;
        assert_eq!(DataWidth::new(1, &limits).unwrap().get(), 1);
        assert_eq!(DataWidth::new(1024, &limits).unwrap().get(), 1024);
        assert_eq!(
            DataWidth::new(0, &limits).unwrap_err(),
            SpecError::DataWidthOutOfRange { value: 0, max: 1024 }
        );
        assert!(DataWidth::new(1025, &limits).is_err());
    }

    #[test]
    fn test_custom_ceiling() {
        let limits = Limits::new(16, 16).unwrap();
        assert!(DataWidth::new(16, &limits).is_ok());
        assert_eq!(
            DataWidth::new(17, &limits).unwrap_err(),
            SpecError::DataWidthOutOfRange { value: 17, max: 16 }
        );
    }

    #[test]
    fn test_try_from() {
        let width = DataWidth::try_from(8).unwrap();
        assert_eq!(usize::from(width), 8);
        assert_eq!(width.to_string(), "8");
        assert!(DataWidth::try_from(0).is_err());
    }
}
