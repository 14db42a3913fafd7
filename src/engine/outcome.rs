use std::fmt;

/// One of the six FLAMES tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    F,
    L,
    A,
    M,
    E,
    S,
}

impl Symbol {
    /// The elimination ring in its fixed starting order.
    pub const ALL: [Symbol; 6] = [
        Symbol::F,
        Symbol::L,
        Symbol::A,
        Symbol::M,
        Symbol::E,
        Symbol::S,
    ];

    pub fn letter(self) -> char {
        match self {
            Symbol::F => 'F',
            Symbol::L => 'L',
            Symbol::A => 'A',
            Symbol::M => 'M',
            Symbol::E => 'E',
            Symbol::S => 'S',
        }
    }

    pub fn meaning(self) -> &'static str {
        match self {
            Symbol::F => "Friends",
            Symbol::L => "Love",
            Symbol::A => "Affection",
            Symbol::M => "Marriage",
            Symbol::E => "Enemy",
            Symbol::S => "Siblings",
        }
    }

    /// Short friendly line shown under the result.
    pub fn blurb(self) -> &'static str {
        match self {
            Symbol::F => "You're likely to be good friends!",
            Symbol::L => "Romance is in the air.",
            Symbol::A => "Warm feelings and fondness.",
            Symbol::M => "A match made for long-term!",
            Symbol::E => "Watch out: playful rivalry or tension.",
            Symbol::S => "A very close, familial bond.",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Final classification of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every letter cancelled; no elimination ran.
    AllCancelled,
    /// The token left standing after five eliminations.
    Survivor(Symbol),
}

impl Outcome {
    pub fn meaning(self) -> &'static str {
        match self {
            Outcome::AllCancelled => "Strong bond",
            Outcome::Survivor(symbol) => symbol.meaning(),
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Outcome::AllCancelled => "All letters cancel out: a very strong bond.",
            Outcome::Survivor(symbol) => symbol.blurb(),
        }
    }
}

/// One removal in the cyclic reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationStep {
    /// Index removed, 0-based into the ring as it stood before this removal.
    pub removed_index: usize,
    pub removed: Symbol,
    /// Ring contents after the removal, in order.
    pub remaining: Vec<Symbol>,
}

impl EliminationStep {
    pub fn remaining_letters(&self) -> String {
        self.remaining.iter().map(|s| s.letter()).collect()
    }
}

/// Result of a match: the outcome plus the step trace when one was requested.
///
/// `steps` is `Some` exactly when tracing was requested; it is empty for an
/// all-cancelled match (the loop never runs) and holds five steps otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlamesResult {
    pub outcome: Outcome,
    pub steps: Option<Vec<EliminationStep>>,
}

impl FlamesResult {
    pub fn meaning(&self) -> &'static str {
        self.outcome.meaning()
    }
}
