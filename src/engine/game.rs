use super::cancel::{cancel, ResidualPair};
use super::eliminate::eliminate;
use super::normalize::{normalize, LetterSequence};
use super::outcome::FlamesResult;

/// Everything produced by one match, including the intermediate sequences
/// the presentation layer shows in its breakdown view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub first: LetterSequence,
    pub second: LetterSequence,
    pub residual: ResidualPair,
    pub count: usize,
    pub result: FlamesResult,
}

/// Run the full pipeline: normalize both names, cancel common letters, and
/// eliminate over the remaining count.
pub fn play_match(name1: &str, name2: &str, trace: bool) -> MatchReport {
    let first = normalize(name1);
    let second = normalize(name2);
    let residual = cancel(&first, &second);
    let count = residual.total();
    let result = eliminate(count, trace);

    MatchReport {
        first,
        second,
        residual,
        count,
        result,
    }
}

/// The single entry point consumed by presentation layers.
pub fn compute_flames(name1: &str, name2: &str, trace: bool) -> FlamesResult {
    play_match(name1, name2, trace).result
}
