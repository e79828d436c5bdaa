//! Identifiers that must be back-ticked when used as names.

/// Words Swift reserves in declaration, statement and expression position.
/// `Self`, `Any` and `_` are valid unquoted in the positions the printer
/// emits them, so they are not listed.
const RESERVED: &[&str] = &[
    "as", "associatedtype", "await", "break", "case", "catch", "class", "continue",
    "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough", "false",
    "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout", "internal",
    "is", "let", "nil", "operator", "precedencegroup", "private", "protocol", "public", "repeat",
    "rethrows", "return", "self", "static", "struct", "subscript", "super", "switch", "throw",
    "throws", "true", "try", "typealias", "var", "where", "while",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// `name`, back-ticked when reserved.
pub fn escape_identifier(name: &str) -> std::borrow::Cow<'_, str> {
    if is_reserved(name) {
        std::borrow::Cow::Owned(format!("`{name}`"))
    } else {
        std::borrow::Cow::Borrowed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_are_escaped() {
        assert_eq!(escape_identifier("default"), "`default`");
        assert_eq!(escape_identifier("print"), "print");
        assert_eq!(escape_identifier("_"), "_");
        assert_eq!(escape_identifier("Self"), "Self");
    }
}
