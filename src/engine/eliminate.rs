use super::outcome::{EliminationStep, FlamesResult, Outcome, Symbol};

/// Run the cyclic elimination for `count` uncancelled letters.
///
/// A count of zero never enters the ring: the match is classified
/// `AllCancelled` immediately. Otherwise the ring starts as the six FLAMES
/// tokens with the cursor at 0, and each round removes the token at
/// `(cursor + count - 1) % len`, counting on from the removal point. The ring
/// shrinks 6, 5, 4, 3, 2, 1, so exactly five rounds run for any positive
/// count.
///
/// When `trace` is set the returned result carries every step; an
/// all-cancelled match carries an empty trace.
pub fn eliminate(count: usize, trace: bool) -> FlamesResult {
    if count == 0 {
        return FlamesResult {
            outcome: Outcome::AllCancelled,
            steps: trace.then(Vec::new),
        };
    }

    let mut ring: Vec<Symbol> = Symbol::ALL.to_vec();
    let mut cursor = 0;
    let mut steps = Vec::new();

    while ring.len() > 1 {
        let removed_index = (cursor + count - 1) % ring.len();
        let removed = ring[removed_index];
        let remaining: Vec<Symbol> = ring
            .iter()
            .copied()
            .enumerate()
            .filter(|&(i, _)| i != removed_index)
            .map(|(_, symbol)| symbol)
            .collect();

        if trace {
            steps.push(EliminationStep {
                removed_index,
                removed,
                remaining: remaining.clone(),
            });
        }

        // The removal point now names the element that followed the removed
        // token, wrapped to the front when the tail was removed.
        cursor = if remaining.is_empty() {
            0
        } else {
            removed_index % remaining.len()
        };
        ring = remaining;
    }

    FlamesResult {
        outcome: Outcome::Survivor(ring[0]),
        steps: trace.then_some(steps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survivor(count: usize) -> Symbol {
        match eliminate(count, false).outcome {
            Outcome::Survivor(symbol) => symbol,
            Outcome::AllCancelled => panic!("count {} should not cancel", count),
        }
    }

    #[test]
    fn test_eliminate_zero_is_all_cancelled() {
        let result = eliminate(0, false);
        assert_eq!(result.outcome, Outcome::AllCancelled);
        assert_eq!(result.steps, None);
    }

    #[test]
    fn test_eliminate_zero_traced_has_empty_steps() {
        let result = eliminate(0, true);
        assert_eq!(result.outcome, Outcome::AllCancelled);
        assert_eq!(result.steps, Some(vec![]));
    }

    #[test]
    fn test_eliminate_positive_never_cancels() {
        for count in 1..=120 {
            assert_ne!(
                eliminate(count, false).outcome,
                Outcome::AllCancelled,
                "count {}",
                count
            );
        }
    }

    #[test]
    fn test_eliminate_small_counts() {
        // Derived by hand from the removal rule
        assert_eq!(survivor(1), Symbol::S);
        assert_eq!(survivor(2), Symbol::E);
        assert_eq!(survivor(3), Symbol::F);
        assert_eq!(survivor(4), Symbol::E);
        assert_eq!(survivor(5), Symbol::F);
        assert_eq!(survivor(6), Symbol::M);
    }

    #[test]
    fn test_eliminate_always_five_steps() {
        for count in 1..=60 {
            let result = eliminate(count, true);
            assert_eq!(result.steps.as_ref().map(Vec::len), Some(5), "count {}", count);
        }
    }

    #[test]
    fn test_eliminate_untraced_has_no_steps() {
        assert_eq!(eliminate(8, false).steps, None);
    }

    #[test]
    fn test_eliminate_trace_for_count_eight() {
        let result = eliminate(8, true);
        assert_eq!(result.outcome, Outcome::Survivor(Symbol::A));

        let steps = result.steps.unwrap();
        let summary: Vec<(usize, char, String)> = steps
            .iter()
            .map(|s| (s.removed_index, s.removed.letter(), s.remaining_letters()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, 'L', "FAMES".to_string()),
                (3, 'E', "FAMS".to_string()),
                (2, 'M', "FAS".to_string()),
                (0, 'F', "AS".to_string()),
                (1, 'S', "A".to_string()),
            ]
        );
    }

    #[test]
    fn test_eliminate_ring_shrinks_by_one_each_step() {
        let steps = eliminate(13, true).steps.unwrap();
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.remaining.len(), 5 - i);
            assert!(step.removed_index < 6 - i);
        }
    }

    #[test]
    fn test_eliminate_removed_symbols_are_distinct() {
        for count in [1, 7, 23, 42] {
            let steps = eliminate(count, true).steps.unwrap();
            let mut removed: Vec<char> = steps.iter().map(|s| s.removed.letter()).collect();
            removed.sort_unstable();
            removed.dedup();
            assert_eq!(removed.len(), 5, "count {}", count);
        }
    }

    #[test]
    fn test_eliminate_outcome_period_is_sixty() {
        // Each removal at ring length len depends on count mod len, for len
        // 6 down to 2, so outcomes repeat with period lcm(6,5,4,3,2) = 60.
        for count in 1..=60 {
            assert_eq!(
                eliminate(count, false).outcome,
                eliminate(count + 60, false).outcome,
                "count {}",
                count
            );
        }
    }

    #[test]
    fn test_eliminate_not_periodic_at_six() {
        // Only the first removal survives a shift of 6; later rounds work
        // modulo the shrunken ring lengths.
        assert_eq!(survivor(1), Symbol::S);
        assert_eq!(survivor(7), Symbol::E);
        assert_ne!(survivor(1), survivor(7));
    }
}
