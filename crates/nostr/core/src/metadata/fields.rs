use std::fmt;

/// Well-known profile fields, in canonical order.
pub const STANDARD_KEYS: [&str; 7] = ["name", "nip05", "about", "picture", "banner", "lud06", "lud16"];

/// A profile field with dedicated editor treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardField {
    Name,
    /// NIP-05 identifier
    Nip05,
    About,
    Picture,
    Banner,
    /// LNURL pay link
    Lud06,
    /// Lightning address
    Lud16,
}

impl StandardField {
    pub const ALL: [StandardField; 7] = [
        StandardField::Name,
        StandardField::Nip05,
        StandardField::About,
        StandardField::Picture,
        StandardField::Banner,
        StandardField::Lud06,
        StandardField::Lud16,
    ];

    /// Map a field name to its standard field, if it is one.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StandardField::Name => "name",
            StandardField::Nip05 => "nip05",
            StandardField::About => "about",
            StandardField::Picture => "picture",
            StandardField::Banner => "banner",
            StandardField::Lud06 => "lud06",
            StandardField::Lud16 => "lud16",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            StandardField::Lud06 => "lud06 (LNURL)",
            other => other.as_str(),
        }
    }

    /// Fields whose value is an image URL with a live preview.
    pub fn is_image(&self) -> bool {
        matches!(self, StandardField::Picture | StandardField::Banner)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, StandardField::About)
    }
}

impl fmt::Display for StandardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if `key` is one of the standard field names.
pub fn is_standard_key(key: &str) -> bool {
    STANDARD_KEYS.contains(&key)
}
