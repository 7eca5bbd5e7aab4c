//! Rule kinds - the closed set of fill algorithms

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Noise,
    Dither,
    Automata,
    Reaction,
    Lines,
    Streak,
    Columns,
    Gradient,
}

/// Canonical order; the variant deriver shuffles a copy of this.
pub const ALL_RULES: [RuleKind; 8] = [
    RuleKind::Noise,
    RuleKind::Dither,
    RuleKind::Automata,
    RuleKind::Reaction,
    RuleKind::Lines,
    RuleKind::Streak,
    RuleKind::Columns,
    RuleKind::Gradient,
];

/// Only these four can ever be dominant, indexed by seed family.
pub const FAMILY_RULES: [RuleKind; 4] = [
    RuleKind::Noise,
    RuleKind::Streak,
    RuleKind::Columns,
    RuleKind::Gradient,
];

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Noise => "noise",
            RuleKind::Dither => "dither",
            RuleKind::Automata => "automata",
            RuleKind::Reaction => "reaction",
            RuleKind::Lines => "lines",
            RuleKind::Streak => "streak",
            RuleKind::Columns => "columns",
            RuleKind::Gradient => "gradient",
        }
    }

    /// Rules that run a discrete simulation and rely on the stepped loop blend
    pub fn is_stepped(self) -> bool {
        matches!(self, RuleKind::Automata | RuleKind::Reaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_serialized_form() {
        for kind in ALL_RULES {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn only_simulations_are_stepped() {
        let stepped: Vec<_> = ALL_RULES.iter().filter(|k| k.is_stepped()).collect();
        assert_eq!(stepped, vec![&RuleKind::Automata, &RuleKind::Reaction]);
        assert!(FAMILY_RULES.iter().all(|k| !k.is_stepped()));
    }
}
