/// Tests for the flag tally
#[cfg(test)]
mod tests {
    use crate::tally::FlagTally;
    use crate::types::*;

    fn failing(flag: Flag) -> Outcome {
        Outcome::default().with_flag(Flag::Ok, false).with_flag(flag, true)
    }

    fn sample() -> Vec<Outcome> {
        vec![
            Outcome::passed(),
            failing(Flag::Different).with_flag(Flag::Wrong, 3u64),
            failing(Flag::Failed).with_flag(Flag::Verbose, true),
            Outcome::default(),
        ]
    }

    #[test]
    fn test_empty_tally() {
        let tally = FlagTally::from_outcomes(&[]);
        assert_eq!(tally.total(), 0);
        assert!(tally.iter().all(|(_, count)| count == 0));
        assert_eq!(tally.iter().count(), Flag::ALL.len());
    }

    #[test]
    fn test_counts_booleans_and_integers() {
        let tally = FlagTally::from_outcomes(&sample());
        assert_eq!(tally.count(Flag::Ok), 1);
        assert_eq!(tally.count(Flag::Different), 1);
        assert_eq!(tally.count(Flag::Wrong), 3);
        assert_eq!(tally.count(Flag::Failed), 1);
        assert_eq!(tally.count(Flag::Verbose), 1);
        assert_eq!(tally.count(Flag::Leak), 0);
    }

    #[test]
    fn test_total_includes_outcomes_without_flags() {
        let tally = FlagTally::from_outcomes(&sample());
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_all_passing() {
        let outcomes: Vec<Outcome> = (0..5).map(|_| Outcome::passed()).collect();
        let tally = FlagTally::from_outcomes(&outcomes);
        assert_eq!(tally.count(Flag::Ok), 5);
        assert_eq!(tally.total(), 5);
        for (flag, count) in tally.iter() {
            if flag != Flag::Ok {
                assert_eq!(count, 0, "{} should be zero", flag);
            }
        }
    }

    #[test]
    fn test_merge_equals_single_pass() {
        let outcomes = sample();
        let mut split = FlagTally::from_outcomes(&outcomes[..2]);
        split.merge(&FlagTally::from_outcomes(&outcomes[2..]));
        assert_eq!(split, FlagTally::from_outcomes(&outcomes));
    }

    #[test]
    fn test_order_independent() {
        let outcomes = sample();
        let forward = FlagTally::from_outcomes(&outcomes);
        let reversed = FlagTally::from_outcomes(outcomes.iter().rev());
        let mut rotated = FlagTally::new();
        rotated.extend(outcomes[1..].iter().chain(outcomes[..1].iter()));
        assert_eq!(forward, reversed);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn test_iteration_is_sorted_by_name() {
        let tally = FlagTally::from_outcomes(&sample());
        let names: Vec<&str> = tally.iter().map(|(flag, _)| flag.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
