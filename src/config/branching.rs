//! Branching policies: how the polarity of a decision is selected.

/// The polarity policy applied to the engine's decision literals.
///
/// Every policy keeps the decided variable and only revises the polarity.
/// The theory policies route the choice through the theory atom attached to the variable, if there is one; when there is none --- or the owning engine is not attached --- the fallback of the policy applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branching {
    /// Keep the engine's polarity: its cached phase or heuristic choice.
    Default,

    /// Always decide the negative polarity.
    Negative,

    /// Always decide the positive polarity.
    Positive,

    /// The owning theory engine's preference; fall back to the engine's polarity.
    Theory,

    /// The owning theory engine's preference; fall back to the negative polarity.
    TheoryNegative,

    /// The owning theory engine's preference; fall back to the positive polarity.
    TheoryPositive,
}

impl std::fmt::Display for Branching {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Negative => write!(f, "negative"),
            Self::Positive => write!(f, "positive"),
            Self::Theory => write!(f, "theory"),
            Self::TheoryNegative => write!(f, "th-neg"),
            Self::TheoryPositive => write!(f, "th-pos"),
        }
    }
}
