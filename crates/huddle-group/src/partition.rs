//! Randomized partition of a roster into fixed-size groups.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use huddle_core::{Group, Roster};

/// Smallest allowed group size.
pub const MIN_GROUP_SIZE: usize = 2;

/// Clamp a requested group size to `[2, max(2, roster_len)]`.
pub fn clamp_group_size(requested: usize, roster_len: usize) -> usize {
    requested.clamp(MIN_GROUP_SIZE, roster_len.max(MIN_GROUP_SIZE))
}

/// Number of groups a partition of `roster_len` people would produce.
pub fn group_count(roster_len: usize, group_size: usize) -> usize {
    roster_len.div_ceil(clamp_group_size(group_size, roster_len))
}

/// Shuffle the roster and split it into consecutive groups.
///
/// Every group has exactly the (clamped) group size except possibly the last,
/// which holds the remainder. Groups are named `Group 1`, `Group 2`, ... and
/// an empty roster yields no groups.
pub fn partition<R: Rng + ?Sized>(roster: &Roster, group_size: usize, rng: &mut R) -> Vec<Group> {
    let size = clamp_group_size(group_size, roster.len());
    let mut names: Vec<String> = roster.iter().map(|p| p.name.clone()).collect();
    names.shuffle(rng);

    let groups: Vec<Group> = names
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| Group::new(Group::default_name(i + 1), chunk.to_vec()))
        .collect();
    debug!(
        roster = roster.len(),
        requested = group_size,
        size,
        groups = groups.len(),
        "roster partitioned"
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_core::LineFormat;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster_of(size: usize) -> Roster {
        let names: Vec<String> = (0..size).map(|i| format!("P{i}")).collect();
        Roster::normalize(&names, LineFormat::Plain)
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_group_size(0, 10), 2);
        assert_eq!(clamp_group_size(1, 10), 2);
        assert_eq!(clamp_group_size(4, 10), 4);
        assert_eq!(clamp_group_size(50, 10), 10);
        assert_eq!(clamp_group_size(5, 0), 2);
        assert_eq!(clamp_group_size(5, 1), 2);
    }

    #[test]
    fn group_count_rounds_up() {
        assert_eq!(group_count(15, 4), 4);
        assert_eq!(group_count(16, 4), 4);
        assert_eq!(group_count(0, 4), 0);
        assert_eq!(group_count(3, 1), 2);
    }

    #[test]
    fn remainder_goes_to_last_group() {
        let mut rng = StdRng::seed_from_u64(42);
        let groups = partition(&roster_of(10), 4, &mut rng);
        let sizes: Vec<_> = groups.iter().map(Group::len).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Group 1", "Group 2", "Group 3"]);
    }

    #[test]
    fn empty_roster_has_no_groups() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(partition(&Roster::new(), 4, &mut rng).is_empty());
    }

    #[test]
    fn undersized_request_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        let groups = partition(&roster_of(5), 1, &mut rng);
        let sizes: Vec<_> = groups.iter().map(Group::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn oversized_request_gives_single_group() {
        let mut rng = StdRng::seed_from_u64(1);
        let groups = partition(&roster_of(5), 99, &mut rng);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 5);
    }

    #[test]
    fn same_seed_same_partition() {
        let roster = roster_of(12);
        let a = partition(&roster, 3, &mut StdRng::seed_from_u64(8));
        let b = partition(&roster, 3, &mut StdRng::seed_from_u64(8));
        let members = |gs: &[Group]| gs.iter().map(|g| g.members.clone()).collect::<Vec<_>>();
        assert_eq!(members(&a), members(&b));
    }

    #[test]
    fn placement_is_uniform() {
        let roster = roster_of(4);
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 8000;
        // counts[participant][slot]
        let mut counts = [[0usize; 4]; 4];
        for _ in 0..trials {
            let groups = partition(&roster, 2, &mut rng);
            let slots = groups.iter().flat_map(|g| g.members.iter());
            for (slot, name) in slots.enumerate() {
                let who: usize = name[1..].parse().unwrap();
                counts[who][slot] += 1;
            }
        }
        let expected = trials as f64 / 4.0;
        let chi_square: f64 = counts
            .iter()
            .flatten()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // df = 9, p = 0.001
        assert!(chi_square < 27.88, "chi-square {chi_square} counts {counts:?}");
    }

    proptest! {
        #[test]
        fn partition_is_complete(size in 0usize..40, group_size in 0usize..12, seed in any::<u64>()) {
            let roster = roster_of(size);
            let groups = partition(&roster, group_size, &mut StdRng::seed_from_u64(seed));
            let effective = clamp_group_size(group_size, size);

            prop_assert_eq!(groups.len(), size.div_ceil(effective));
            prop_assert_eq!(groups.len(), group_count(size, group_size));
            prop_assert_eq!(groups.iter().map(Group::len).sum::<usize>(), size);
            if let Some((last, rest)) = groups.split_last() {
                prop_assert!(rest.iter().all(|g| g.len() == effective));
                prop_assert!(!last.is_empty() && last.len() <= effective);
            }

            let mut members: Vec<String> = groups.iter().flat_map(|g| g.members.clone()).collect();
            let mut names: Vec<String> = roster.names().iter().map(|s| s.to_string()).collect();
            members.sort();
            names.sort();
            prop_assert_eq!(members, names);
        }
    }
}
