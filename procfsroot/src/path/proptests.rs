//! Property-based tests for symlink evaluation.
//!
//! Note: The normalize and evaluator modules already carry property tests for
//! symlink-free trees. This module throws randomly linked trees at the
//! evaluator and checks the confinement guarantees.

use super::evaluator::SymlinkEvaluator;
use super::test_util::{MemoryInspector, ROOT};
use super::types::PathHandling;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("a"),
        Just("b"),
        Just("c"),
        Just("l1"),
        Just("l2"),
        Just("."),
        Just(".."),
        Just(""),
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 0..8).prop_map(|parts| parts.join("/"))
}

fn target_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), path_strategy()).prop_map(|(absolute, path)| {
        if absolute {
            format!("/{path}")
        } else {
            path
        }
    })
}

// /R/a, /R/b, /R/a/c directories, /R/b/c a file, plus two randomly aimed links.
fn linked_tree(l1: &str, l2: &str) -> MemoryInspector {
    MemoryInspector::new()
        .dir("/R/a")
        .dir("/R/b")
        .dir("/R/a/c")
        .file("/R/b/c")
        .symlink("/R/l1", l1)
        .symlink("/R/a/l2", l2)
}

fn handling_strategy() -> impl Strategy<Value = PathHandling> {
    prop_oneof![Just(PathHandling::FullPath), Just(PathHandling::ExceptLast)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Successful evaluations are canonical absolute paths
    #[test]
    fn evaluated_paths_are_canonical(
        path in path_strategy(),
        l1 in target_strategy(),
        l2 in target_strategy(),
        handling in handling_strategy(),
    ) {
        let evaluator = SymlinkEvaluator::with_inspector(linked_tree(&l1, &l2));
        if let Ok(evaluated) = evaluator.eval(&path, ROOT, handling) {
            let evaluated = evaluated.into_string().unwrap();
            prop_assert!(evaluated.starts_with('/'));
            prop_assert!(!evaluated.starts_with("//"));
            if evaluated != "/" {
                prop_assert!(!evaluated.ends_with('/'));
                for component in evaluated[1..].split('/') {
                    prop_assert!(!component.is_empty());
                    prop_assert_ne!(component, ".");
                    prop_assert_ne!(component, "..");
                }
            }
        }
    }

    // The inspector is never asked about anything outside the root
    #[test]
    fn queries_stay_below_root(
        path in path_strategy(),
        l1 in target_strategy(),
        l2 in target_strategy(),
        handling in handling_strategy(),
    ) {
        let inspector = linked_tree(&l1, &l2);
        let evaluator = SymlinkEvaluator::with_inspector(&inspector).with_max_jumps(16);
        let _ = evaluator.eval(&path, ROOT, handling);
        for queried in inspector.queries() {
            prop_assert!(queried.starts_with(ROOT));
        }
    }

    // Never more jumps than the ceiling allows
    #[test]
    fn jumps_never_exceed_ceiling(
        path in path_strategy(),
        l1 in target_strategy(),
        l2 in target_strategy(),
        ceiling in 0..8usize,
    ) {
        let evaluator = SymlinkEvaluator::with_inspector(linked_tree(&l1, &l2))
            .with_max_jumps(ceiling);
        if let Ok(evaluation) = evaluator.evaluate(&path, ROOT, PathHandling::FullPath) {
            prop_assert!(evaluation.jumps() <= ceiling);
        }
    }

    // Evaluating an evaluated path again changes nothing
    #[test]
    fn evaluation_is_a_fixpoint(
        path in path_strategy(),
        l1 in target_strategy(),
        l2 in target_strategy(),
    ) {
        let evaluator = SymlinkEvaluator::with_inspector(linked_tree(&l1, &l2));
        if let Ok(once) = evaluator.eval(&path, ROOT, PathHandling::FullPath) {
            let twice = evaluator.eval(&once, ROOT, PathHandling::FullPath).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
