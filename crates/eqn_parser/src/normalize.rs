//! Canonical text form shared by the classifier and the extractor.

/// Collapse whitespace and canonicalize operator and exponent glyphs.
pub fn normalize(input: &str) -> String {
    let mut text = input
        .replace('≤', "<=")
        .replace('≥', ">=")
        .replace('≠', "!=")
        .replace("**", "^")
        .replace('²', "^2")
        .replace('³', "^3")
        .replace(['·', '×', '⋅'], "*")
        .replace(['−', '–'], "-");
    text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  2x   +\t3 =  7 "), "2x + 3 = 7");
    }

    #[test]
    fn canonicalizes_comparisons() {
        assert_eq!(normalize("x ≤ 3"), "x <= 3");
        assert_eq!(normalize("x ≥ 3"), "x >= 3");
        assert_eq!(normalize("x ≠ 3"), "x != 3");
    }

    #[test]
    fn canonicalizes_exponents_and_products() {
        assert_eq!(normalize("x**2 − 4"), "x^2 - 4");
        assert_eq!(normalize("3·2^x = 24"), "3*2^x = 24");
        assert_eq!(normalize("x² + x³"), "x^2 + x^3");
    }

    #[test]
    fn idempotent() {
        let once = normalize(" x² ≤  9 ");
        assert_eq!(normalize(&once), once);
    }
}
