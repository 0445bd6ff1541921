//! Indentation unit for generated source.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Two spaces, as emitted for TypeScript models.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    pub fn write_to(&self, out: &mut String) {
        match *self {
            Self::Spaces(width) => {
                for _ in 0..width {
                    out.push(' ');
                }
            }
            Self::Tab => out.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_level() {
        let mut out = String::from(">");
        Indent::Spaces(4).write_to(&mut out);
        Indent::Tab.write_to(&mut out);
        assert_eq!(out, ">    \t");
    }

    #[test]
    fn test_default_is_two_spaces() {
        let mut out = String::new();
        Indent::default().write_to(&mut out);
        assert_eq!(out, "  ");
    }
}
