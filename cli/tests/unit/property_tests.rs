//! Property-based tests for the membership logic.
//!
//! Uses `proptest` to verify invariants across many random inputs.

use proptest::prelude::*;

use ecs_audit_cli::domain::diff::{missing_instances, needs_comparison};
use ecs_audit_cli::domain::request::validate_family;

fn instance_ref() -> impl Strategy<Value = String> {
    "arn:ci/[a-d][0-9]"
}

proptest! {
    /// Every missing instance came from the cluster list and is absent from
    /// the service list.
    #[test]
    fn prop_missing_is_cluster_minus_service(
        cluster in proptest::collection::vec(instance_ref(), 0..12),
        service in proptest::collection::vec(proptest::option::of(instance_ref()), 0..12),
    ) {
        let missing = missing_instances(&cluster, &service);
        for m in &missing {
            prop_assert!(cluster.contains(m));
            prop_assert!(!service.iter().flatten().any(|s| s == m));
        }
        for c in &cluster {
            let placed = service.iter().flatten().any(|s| s == c);
            prop_assert_eq!(missing.contains(c), !placed);
        }
    }

    /// Equal counts never trigger the comparison outside strict mode.
    #[test]
    fn prop_equal_counts_skip_comparison(
        cluster in proptest::collection::vec(instance_ref(), 0..8),
        other in proptest::collection::vec(instance_ref(), 0..8),
    ) {
        let service: Vec<Option<String>> = other
            .into_iter()
            .map(Some)
            .chain(std::iter::repeat(None))
            .take(cluster.len())
            .collect();
        prop_assert!(!needs_comparison(&cluster, &service, false));
        prop_assert!(needs_comparison(&cluster, &service, true));
    }

    /// Unequal counts always trigger the comparison.
    #[test]
    fn prop_unequal_counts_compare(
        cluster in proptest::collection::vec(instance_ref(), 0..8),
        extra in 1usize..4,
    ) {
        let service = vec![None; cluster.len() + extra];
        prop_assert!(needs_comparison(&cluster, &service, false));
    }

    /// Any family with a non-whitespace character is accepted as given.
    #[test]
    fn prop_non_blank_family_accepted(family in "[ ]{0,2}[a-z][a-z0-9-]{0,20}[ ]{0,2}") {
        let resolved = validate_family(Some(&family));
        prop_assert_eq!(resolved.ok(), Some(family.clone()));
    }

    /// Whitespace-only families are rejected.
    #[test]
    fn prop_blank_family_rejected(family in "[ \t]{0,5}") {
        prop_assert!(validate_family(Some(&family)).is_err());
    }
}
