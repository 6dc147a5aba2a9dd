use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tag entity - a free-text label attachable to many posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// A tag about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
}

/// The result of diffing a post's current tag set against a submitted one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSetDiff {
    /// Tag ids submitted but not currently associated.
    pub to_add: Vec<i32>,
    /// Tag ids currently associated but absent from the submission.
    pub to_remove: Vec<i32>,
}

impl TagSetDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Full-replace reconciliation of a post's tag set: the submitted set wins.
///
/// Deterministic set difference in ascending id order; duplicate ids in
/// either input collapse.
pub fn reconcile_tag_sets(current: &[i32], submitted: &[i32]) -> TagSetDiff {
    let current: BTreeSet<i32> = current.iter().copied().collect();
    let submitted: BTreeSet<i32> = submitted.iter().copied().collect();

    TagSetDiff {
        to_add: submitted.difference(&current).copied().collect(),
        to_remove: current.difference(&submitted).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_adds_and_removes() {
        // {A, B} edited to {A, C}: B goes, C comes, A untouched.
        let diff = reconcile_tag_sets(&[1, 2], &[1, 3]);
        assert_eq!(diff.to_add, vec![3]);
        assert_eq!(diff.to_remove, vec![2]);
    }

    #[test]
    fn reconcile_identical_sets_is_empty() {
        let diff = reconcile_tag_sets(&[4, 2], &[2, 4]);
        assert!(diff.is_empty());
    }

    #[test]
    fn reconcile_empty_submission_removes_everything() {
        let diff = reconcile_tag_sets(&[5, 1, 3], &[]);
        assert_eq!(diff.to_add, Vec::<i32>::new());
        assert_eq!(diff.to_remove, vec![1, 3, 5]);
    }

    #[test]
    fn reconcile_collapses_duplicates() {
        let diff = reconcile_tag_sets(&[], &[2, 2, 2]);
        assert_eq!(diff.to_add, vec![2]);
    }
}
