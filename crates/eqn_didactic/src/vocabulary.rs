//! Level-dependent jargon substitution.

use eqn_model::ExplanationLevel;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

type Table = Vec<(Regex, &'static str)>;

fn compile(entries: &[(&str, &'static str)]) -> Table {
    entries
        .iter()
        .map(|(term, replacement)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            (Regex::new(&pattern).expect("valid regex literal"), *replacement)
        })
        .collect()
}

static BASIC: LazyLock<Table> = LazyLock::new(|| {
    compile(&[
        ("discriminant", "number that tells us about solutions"),
        ("coefficients", "numbers in front of the terms"),
        ("coefficient", "number in front"),
        ("quadratic", "x-squared"),
        ("logarithm", "log (the undo button for powers)"),
        ("exponential", "repeated-multiplication"),
        ("conjugates", "mirror-image pairs"),
        ("determinant", "cross-multiplication number"),
        ("interval notation", "range notation"),
        ("critical points", "boundary points"),
    ])
});

static INTERMEDIATE: LazyLock<Table> = LazyLock::new(|| {
    compile(&[
        ("critical points", "critical points (where the expression equals zero)"),
    ])
});

static DETAILED: LazyLock<Table> = LazyLock::new(|| {
    compile(&[
        ("discriminant", "discriminant (Δ = b² - 4ac)"),
        ("quadratic formula", "quadratic formula x = (-b ± √Δ) / 2a"),
        ("zero product property", "zero product property (AB = 0 ⇒ A = 0 or B = 0)"),
        ("perfect square", "perfect square trinomial"),
        ("determinant", "determinant D = a₁b₂ - a₂b₁"),
        ("power rule", "power rule ln(aⁿ) = n·ln(a)"),
    ])
});

fn table(level: ExplanationLevel) -> &'static Table {
    match level {
        // scaffolded explanations target the same reader as basic ones
        ExplanationLevel::Basic | ExplanationLevel::Scaffolded => &*BASIC,
        ExplanationLevel::Intermediate => &*INTERMEDIATE,
        ExplanationLevel::Detailed => &*DETAILED,
    }
}

/// Rewrite jargon in `text` for `level` by case-insensitive whole-word replacement.
pub fn apply_vocabulary(text: &str, level: ExplanationLevel) -> String {
    table(level)
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, NoExpand(*replacement)).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_simplifies_jargon() {
        assert_eq!(
            apply_vocabulary("Compute the Discriminant", ExplanationLevel::Basic),
            "Compute the number that tells us about solutions"
        );
    }

    #[test]
    fn detailed_adds_formula() {
        assert_eq!(
            apply_vocabulary("Compute the discriminant", ExplanationLevel::Detailed),
            "Compute the discriminant (Δ = b² - 4ac)"
        );
    }

    #[test]
    fn whole_words_only() {
        let text = "coefficients and discriminants";
        assert_eq!(
            apply_vocabulary(text, ExplanationLevel::Basic),
            "numbers in front of the terms and discriminants"
        );
    }

    #[test]
    fn scaffolded_matches_basic() {
        let text = "Read off the coefficients";
        assert_eq!(
            apply_vocabulary(text, ExplanationLevel::Scaffolded),
            apply_vocabulary(text, ExplanationLevel::Basic)
        );
    }
}
