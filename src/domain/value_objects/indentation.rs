//! Indentation value object - nesting depth for rendered output

use std::fmt;

const UNIT: &str = "    ";

/// Current nesting depth; displays as four spaces per level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indentation {
    level: usize,
}

impl Indentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(level: usize) -> Self {
        Self { level }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// One level deeper
    pub fn deeper(self) -> Self {
        Self {
            level: self.level + 1,
        }
    }

    /// One level shallower, saturating at zero
    pub fn shallower(self) -> Self {
        Self {
            level: self.level.saturating_sub(1),
        }
    }
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.level {
            f.write_str(UNIT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_four_spaces_per_level() {
        assert_eq!(Indentation::new().to_string(), "");
        assert_eq!(Indentation::at(2).to_string(), "        ");
    }

    #[test]
    fn shallower_saturates() {
        assert_eq!(Indentation::new().shallower().level(), 0);
        assert_eq!(Indentation::new().deeper().deeper().shallower().level(), 1);
    }
}
