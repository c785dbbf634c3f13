//! Enrollment reconciliation delta.
//!
//! Computes the minimal insert/delete set that moves a student's current
//! enrollment state to a desired target state. The delta is a pure set
//! computation; applying it against the store happens in the API layer.

use crate::ids::TrainingId;
use std::collections::HashSet;

/// The minimal change set produced by [`enrollment_delta`].
///
/// `to_add` and `to_remove` are disjoint by construction: `to_add` is
/// drawn from outside `current` while `to_remove` is drawn from inside
/// it, so the order in which the two phases are applied does not affect
/// the final state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnrollmentDelta {
    /// Trainings in the desired set the student is not yet enrolled in.
    pub to_add: Vec<TrainingId>,
    /// Trainings the student is enrolled in but absent from the desired set.
    pub to_remove: Vec<TrainingId>,
}

impl EnrollmentDelta {
    /// True when the current state already matches the desired state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute the add/remove delta between `current` and `desired`.
///
/// The desired list is deduplicated first; duplicates in the input never
/// produce duplicate enrollment rows. `to_add` preserves the first-seen
/// order of `desired`; `to_remove` is sorted for deterministic output.
///
/// Guarantees, for all current sets C and desired sets D:
/// - `to_add = D \ C` and `to_remove = C \ D`
/// - applying the delta to C yields exactly D
/// - recomputing against the post-application state yields an empty delta
#[must_use]
pub fn enrollment_delta(current: &HashSet<TrainingId>, desired: &[TrainingId]) -> EnrollmentDelta {
    let mut seen = HashSet::with_capacity(desired.len());
    let mut to_add = Vec::new();
    for &id in desired {
        if seen.insert(id) && !current.contains(&id) {
            to_add.push(id);
        }
    }

    let mut to_remove: Vec<TrainingId> = current
        .iter()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect();
    to_remove.sort();

    EnrollmentDelta { to_add, to_remove }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<TrainingId> {
        (0..n).map(|_| TrainingId::new()).collect()
    }

    fn apply(current: &HashSet<TrainingId>, delta: &EnrollmentDelta) -> HashSet<TrainingId> {
        let mut next = current.clone();
        for id in &delta.to_remove {
            next.remove(id);
        }
        for id in &delta.to_add {
            next.insert(*id);
        }
        next
    }

    #[test]
    fn empty_current_adds_everything() {
        let desired = ids(3);
        let delta = enrollment_delta(&HashSet::new(), &desired);
        assert_eq!(delta.to_add, desired);
        assert!(delta.to_remove.is_empty());
    }

    #[test]
    fn matching_sets_produce_empty_delta() {
        let desired = ids(4);
        let current: HashSet<_> = desired.iter().copied().collect();
        assert!(enrollment_delta(&current, &desired).is_empty());
    }

    #[test]
    fn delta_is_set_difference_both_ways() {
        let all = ids(5);
        // current = {0,1,2}, desired = {2,3,4}
        let current: HashSet<_> = all[..3].iter().copied().collect();
        let desired = all[2..].to_vec();

        let delta = enrollment_delta(&current, &desired);
        assert_eq!(delta.to_add, vec![all[3], all[4]]);

        let removed: HashSet<_> = delta.to_remove.iter().copied().collect();
        let expected: HashSet<_> = all[..2].iter().copied().collect();
        assert_eq!(removed, expected);
    }

    #[test]
    fn applying_delta_yields_desired() {
        let all = ids(6);
        let current: HashSet<_> = all[..4].iter().copied().collect();
        let desired = all[2..].to_vec();

        let delta = enrollment_delta(&current, &desired);
        let next = apply(&current, &delta);
        let want: HashSet<_> = desired.iter().copied().collect();
        assert_eq!(next, want);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let all = ids(4);
        let current: HashSet<_> = all[..2].iter().copied().collect();
        let desired = all[1..].to_vec();

        let first = enrollment_delta(&current, &desired);
        let after = apply(&current, &first);
        let second = enrollment_delta(&after, &desired);
        assert!(second.is_empty());
    }

    #[test]
    fn duplicate_desired_ids_are_collapsed() {
        let id = TrainingId::new();
        let delta = enrollment_delta(&HashSet::new(), &[id, id, id]);
        assert_eq!(delta.to_add, vec![id]);
    }

    #[test]
    fn add_and_remove_are_disjoint() {
        let all = ids(8);
        let current: HashSet<_> = all[..5].iter().copied().collect();
        let desired = all[3..].to_vec();

        let delta = enrollment_delta(&current, &desired);
        for id in &delta.to_add {
            assert!(!current.contains(id));
            assert!(!delta.to_remove.contains(id));
        }
        for id in &delta.to_remove {
            assert!(!desired.contains(id));
        }
    }
}
