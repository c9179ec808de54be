//! Solution steps, bridge pseudo-steps and the enhancement payload.

use serde::{Deserialize, Serialize};

/// One algebraic step as produced by the step generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step_number: usize,
    /// Step name, also the lookup key for phrase tables.
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algebraic_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default)]
    pub final_answer: bool,
}

impl Step {
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Step {
            name: name.to_string(),
            description: description.into(),
            ..Step::default()
        }
    }

    pub fn expression(mut self, expr: impl Into<String>) -> Self {
        self.expression = Some(expr.into());
        self
    }

    pub fn transform(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_expression = Some(before.into());
        self.after_expression = Some(after.into());
        self
    }

    pub fn operation(mut self, op: impl Into<String>) -> Self {
        self.operation = Some(op.into());
        self
    }

    pub fn reasoning(mut self, text: impl Into<String>) -> Self {
        self.reasoning = text.into();
        self
    }

    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.algebraic_rule = Some(rule.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.visual_hint = Some(hint.into());
        self
    }

    pub fn formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Expression shown as the step's result, whichever form it carries.
    pub fn result_text(&self) -> Option<&str> {
        self.after_expression
            .as_deref()
            .or(self.expression.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationLevel {
    Basic,
    #[default]
    Intermediate,
    Detailed,
    Scaffolded,
}

impl ExplanationLevel {
    pub const ALL: [ExplanationLevel; 4] = [
        ExplanationLevel::Basic,
        ExplanationLevel::Intermediate,
        ExplanationLevel::Detailed,
        ExplanationLevel::Scaffolded,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExplanationLevel::Basic => "basic",
            ExplanationLevel::Intermediate => "intermediate",
            ExplanationLevel::Detailed => "detailed",
            ExplanationLevel::Scaffolded => "scaffolded",
        }
    }
}

impl std::str::FromStr for ExplanationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.name() == wanted)
            .ok_or_else(|| format!("unknown explanation level '{}'", s))
    }
}

impl std::fmt::Display for ExplanationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanations {
    pub conceptual: String,
    pub procedural: String,
    pub visual: String,
    pub algebraic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveExplanation {
    pub level: ExplanationLevel,
    pub description: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSupport {
    pub prerequisites: Vec<String>,
    pub vocabulary: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPrevention {
    pub common_mistakes: Vec<String>,
    pub prevention_tips: Vec<String>,
    pub check_points: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    pub self_check: String,
    pub expected_result: String,
    pub troubleshooting: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintLadder {
    pub level1: String,
    pub level2: String,
    pub level3: String,
    pub level4: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaffolding {
    pub guiding_questions: Vec<String>,
    pub sub_steps: Vec<String>,
    pub hint_ladder: HintLadder,
    pub practice_variation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metacognition {
    pub thinking_process: String,
    pub decision_points: Vec<String>,
    pub alternatives: Vec<String>,
}

/// Pedagogical layers attached to a step without touching its base fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enhancement {
    pub explanations: Explanations,
    pub adaptive: AdaptiveExplanation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted_concept: Option<String>,
    pub learning_support: LearningSupport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_prevention: Option<ErrorPrevention>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaffolding: Option<Scaffolding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metacognition: Option<Metacognition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedStep {
    #[serde(flatten)]
    pub base: Step,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<Enhancement>,
}

impl EnhancedStep {
    pub fn plain(base: Step) -> Self {
        EnhancedStep {
            base,
            enhancement: None,
        }
    }
}

/// Narrative connector between two consecutive steps. Carries no algebra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeStep {
    pub title: String,
    pub current_state: String,
    pub next_goal: String,
    pub why: String,
    pub benefit: String,
    pub progression: String,
    pub strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "entry")]
pub enum StepEntry {
    Step(EnhancedStep),
    Bridge(BridgeStep),
}

impl StepEntry {
    pub fn as_step(&self) -> Option<&EnhancedStep> {
        match self {
            StepEntry::Step(s) => Some(s),
            StepEntry::Bridge(_) => None,
        }
    }

    pub fn is_bridge(&self) -> bool {
        matches!(self, StepEntry::Bridge(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_transform_pair() {
        let step = Step::new("Move constant term", "Subtract 6")
            .transform("x² - 5x + 6 = 0", "x² - 5x = -6")
            .operation("subtract 6");
        assert_eq!(step.result_text(), Some("x² - 5x = -6"));
        assert_eq!(step.before_expression.as_deref(), Some("x² - 5x + 6 = 0"));
        assert!(!step.final_answer);
    }

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("Detailed".parse::<ExplanationLevel>(), Ok(ExplanationLevel::Detailed));
        assert!("expert".parse::<ExplanationLevel>().is_err());
        assert_eq!(ExplanationLevel::default(), ExplanationLevel::Intermediate);
    }
}
