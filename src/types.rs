#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormatSpecifier {
    LowerC,
    UpperC,
    ShortLowerC,
    ShortUpperC,
    LongLowerC,
    LongUpperC,
    D,
    I,
    ShortD,
    LongD,
    LongI,
    ShortU,
    LongU,
    LongLowerX,
    LongUpperX,
    U,
    LowerX,
    UpperX,
    ShortLowerS,
    ShortUpperS,
    LongLowerS,
    LongUpperS,
    P,
    LowerS,
    UpperS,
}

impl FormatSpecifier {
    /// The specifier used when an insertion carries none.
    pub const DEFAULT: FormatSpecifier = FormatSpecifier::LowerS;

    pub const fn all() -> &'static [FormatSpecifier] {
        use FormatSpecifier::*;
        &[
            LowerC,
            UpperC,
            ShortLowerC,
            ShortUpperC,
            LongLowerC,
            LongUpperC,
            D,
            I,
            ShortD,
            LongD,
            LongI,
            ShortU,
            LongU,
            LongLowerX,
            LongUpperX,
            U,
            LowerX,
            UpperX,
            ShortLowerS,
            ShortUpperS,
            LongLowerS,
            LongUpperS,
            P,
            LowerS,
            UpperS,
        ]
    }

    pub fn from_literal(literal: &str) -> Option<FormatSpecifier> {
        Self::all()
            .iter()
            .copied()
            .find(|specifier| specifier.to_literal() == literal)
    }

    pub const fn to_literal(&self) -> &'static str {
        use FormatSpecifier::*;
        match self {
            LowerC => "c",
            UpperC => "C",
            ShortLowerC => "hc",
            ShortUpperC => "hC",
            LongLowerC => "lc",
            LongUpperC => "lC",
            D => "d",
            I => "i",
            ShortD => "hd",
            LongD => "ld",
            LongI => "li",
            ShortU => "hu",
            LongU => "lu",
            LongLowerX => "lx",
            LongUpperX => "lX",
            U => "u",
            LowerX => "x",
            UpperX => "X",
            ShortLowerS => "hs",
            ShortUpperS => "hS",
            LongLowerS => "ls",
            LongUpperS => "lS",
            P => "p",
            LowerS => "s",
            UpperS => "S",
        }
    }

    /// `s` follows the wide-character mode, `S` takes the opposite width.
    pub const fn resolve(&self, wide_char_mode: bool) -> InsertionType {
        use FormatSpecifier::*;
        match self {
            LowerC | UpperC | ShortLowerC | ShortUpperC | LongLowerC | LongUpperC => {
                InsertionType::WideChar
            }
            D | I => InsertionType::I32,
            ShortD => InsertionType::I16,
            LongD | LongI => InsertionType::Long,
            ShortU => InsertionType::U16,
            LongU | LongLowerX | LongUpperX => InsertionType::ULong,
            U | LowerX | UpperX => InsertionType::U32,
            ShortLowerS | ShortUpperS => InsertionType::NarrowString,
            LongLowerS | LongUpperS => InsertionType::WideString,
            P => InsertionType::ConstPointer,
            LowerS => InsertionType::string(wide_char_mode),
            UpperS => InsertionType::string(!wide_char_mode),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertionType {
    WideChar,
    I16,
    I32,
    Long,
    U16,
    U32,
    ULong,
    NarrowString,
    WideString,
    ConstPointer,
}

impl InsertionType {
    pub const fn string(wide: bool) -> InsertionType {
        if wide {
            InsertionType::WideString
        } else {
            InsertionType::NarrowString
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Insertion {
    pub ty: InsertionType,
    pub name: String,
}

impl Insertion {
    pub fn new(ty: InsertionType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }

    pub fn synthesized_name(position: usize) -> String {
        format!("insert{position}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MessageDeclaration {
    pub symbolic_name: String,
    pub type_name: String,
    pub message_text: String,
    pub insertions: Vec<Insertion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_literal_maps_back_to_its_specifier() {
        for specifier in FormatSpecifier::all() {
            assert_eq!(
                FormatSpecifier::from_literal(specifier.to_literal()),
                Some(*specifier)
            );
        }
        assert_eq!(FormatSpecifier::all().len(), 25);
    }

    #[test]
    fn unlisted_literals_are_rejected() {
        for literal in ["q", "D", "hx", "llu", "f", "08lX", "", "ss"] {
            assert_eq!(FormatSpecifier::from_literal(literal), None, "{literal}");
        }
    }

    #[test]
    fn table_resolution() {
        let expected = [
            ("c", InsertionType::WideChar),
            ("C", InsertionType::WideChar),
            ("hc", InsertionType::WideChar),
            ("hC", InsertionType::WideChar),
            ("lc", InsertionType::WideChar),
            ("lC", InsertionType::WideChar),
            ("d", InsertionType::I32),
            ("i", InsertionType::I32),
            ("hd", InsertionType::I16),
            ("ld", InsertionType::Long),
            ("li", InsertionType::Long),
            ("hu", InsertionType::U16),
            ("lu", InsertionType::ULong),
            ("lx", InsertionType::ULong),
            ("lX", InsertionType::ULong),
            ("u", InsertionType::U32),
            ("x", InsertionType::U32),
            ("X", InsertionType::U32),
            ("hs", InsertionType::NarrowString),
            ("hS", InsertionType::NarrowString),
            ("ls", InsertionType::WideString),
            ("lS", InsertionType::WideString),
            ("p", InsertionType::ConstPointer),
        ];

        for wide in [false, true] {
            for (literal, ty) in expected {
                let specifier = FormatSpecifier::from_literal(literal).unwrap();
                assert_eq!(specifier.resolve(wide), ty, "{literal} (wide: {wide})");
            }
        }
    }

    #[test]
    fn upper_s_inverts_the_width_of_lower_s() {
        assert_eq!(FormatSpecifier::LowerS.resolve(false), InsertionType::NarrowString);
        assert_eq!(FormatSpecifier::UpperS.resolve(false), InsertionType::WideString);
        assert_eq!(FormatSpecifier::LowerS.resolve(true), InsertionType::WideString);
        assert_eq!(FormatSpecifier::UpperS.resolve(true), InsertionType::NarrowString);
    }

    #[test]
    fn default_specifier_is_lower_s() {
        assert_eq!(FormatSpecifier::DEFAULT.to_literal(), "s");
    }
}
