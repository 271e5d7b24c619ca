//! External-name annotations.
//!
//! An annotation is a name token followed by optional modifiers, separated
//! by commas: `"age,omitempty"`. The sentinel `"-"` as the name token means
//! "no custom name": resolution falls back to the field's declared name
//! rather than excluding the field.

/// Name token meaning "no custom name given".
pub const SUPPRESS: &str = "-";

/// Modifier asking the encoder to omit the field when it holds its default.
pub const OMIT_EMPTY: &str = "omitempty";

const DELIMITER: char = ',';
const RAW_IDENT_PREFIX: &str = "r#";

/// A parsed external-name annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    name: &'a str,
    modifiers: &'a str,
}

impl<'a> Tag<'a> {
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let (name, modifiers) = raw.split_once(DELIMITER).unwrap_or((raw, ""));
        Self {
            name: name.trim(),
            modifiers,
        }
    }

    /// The custom name, or `None` when the token is empty or the sentinel.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        match self.name {
            "" | SUPPRESS => None,
            name => Some(name),
        }
    }

    /// Trailing modifiers in declaration order, blanks dropped.
    pub fn modifiers(&self) -> impl Iterator<Item = &'a str> + 'a {
        let modifiers = self.modifiers;
        modifiers
            .split(DELIMITER)
            .map(str::trim)
            .filter(|modifier| !modifier.is_empty())
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers().any(|m| m == modifier)
    }

    #[must_use]
    pub fn omit_empty(&self) -> bool {
        self.has_modifier(OMIT_EMPTY)
    }
}

/// Resolves the external name of a field.
///
/// An explicit, non-sentinel name token wins; otherwise the declared field
/// name is used, without any `r#` raw-identifier prefix.
#[must_use]
pub fn resolve_name<'a>(declared: &'a str, tag: Option<&'a str>) -> &'a str {
    tag.and_then(|raw| Tag::parse(raw).name())
        .unwrap_or_else(|| declared.strip_prefix(RAW_IDENT_PREFIX).unwrap_or(declared))
}
