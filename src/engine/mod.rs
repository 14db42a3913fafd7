pub mod cancel;
pub mod eliminate;
pub mod game;
pub mod normalize;
pub mod outcome;

pub use cancel::{cancel, ResidualPair};
pub use eliminate::eliminate;
pub use game::{compute_flames, play_match, MatchReport};
pub use normalize::{normalize, LetterSequence};
pub use outcome::{EliminationStep, FlamesResult, Outcome, Symbol};
