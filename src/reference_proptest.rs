//! Property-based tests for repository identifier parsing and path layout.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::reference::parse;
    use proptest::prelude::*;
    use std::path::Path;

    fn host() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,10}(\\.[a-z]{2,5}){1,2}"
    }

    fn segment() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_][A-Za-z0-9_-]{0,15}"
    }

    // ============================================================================
    // HTTP(S) parsing property tests
    // ============================================================================

    proptest! {
        /// Property: host, owner and name come from the first two path segments
        #[test]
        fn https_url_fields_match_segments(
            host in host(),
            owner in segment(),
            name in segment(),
            suffix in prop::bool::ANY,
            extra in prop::collection::vec(segment(), 0..3),
        ) {
            let mut input = format!("https://{}/{}/{}", host, owner, name);
            if suffix {
                input.push_str(".git");
            }
            for part in &extra {
                input.push('/');
                input.push_str(part);
            }

            let reference = parse(&input).unwrap();
            prop_assert_eq!(&reference.host, &host);
            prop_assert_eq!(&reference.owner, &owner);
            prop_assert_eq!(&reference.name, &name);
            prop_assert_eq!(&reference.url, &input);
            prop_assert_eq!(reference.instance, 0);
        }

        /// Property: the shorthand form parses to the same reference as the https form
        #[test]
        fn shorthand_equals_https(host in host(), owner in segment(), name in segment()) {
            let shorthand = parse(&format!("{}/{}/{}", host, owner, name)).unwrap();
            let full = parse(&format!("https://{}/{}/{}", host, owner, name)).unwrap();
            prop_assert_eq!(shorthand, full);
        }

        /// Property: SSH identifiers keep the original string as the clone URL
        #[test]
        fn ssh_url_is_preserved(host in host(), owner in segment(), name in segment()) {
            let input = format!("git@{}:{}/{}.git", host, owner, name);
            let reference = parse(&input).unwrap();
            prop_assert_eq!(&reference.url, &input);
            prop_assert_eq!(&reference.host, &host);
            prop_assert_eq!(&reference.owner, &owner);
            prop_assert_eq!(&reference.name, &name);
        }

        /// Property: a host with a single path segment never parses
        #[test]
        fn single_segment_is_rejected(host in host(), owner in segment()) {
            let input = format!("https://{}/{}", host, owner);
            prop_assert!(parse(&input).is_err());
        }
    }

    // ============================================================================
    // Path layout property tests
    // ============================================================================

    proptest! {
        /// Property: every instance lives in the same owner directory
        #[test]
        fn instances_share_parent(
            host in host(),
            owner in segment(),
            name in segment(),
            instance in 0u32..1000,
        ) {
            let reference = parse(&format!("https://{}/{}/{}", host, owner, name))
                .unwrap()
                .with_instance(instance);
            let path = reference.relative_path();
            let owner_dir = Path::new(&host).join(&owner);

            prop_assert_eq!(path.parent(), Some(owner_dir.as_path()));
            prop_assert_eq!(path.components().count(), 3);
        }

        /// Property: the final component is `name` for instance 0 and `name.N` otherwise
        #[test]
        fn dir_name_encodes_instance(name in segment(), instance in 0u32..1000) {
            let reference = parse(&format!("https://example.com/owner/{}", name))
                .unwrap()
                .with_instance(instance);
            let expected = if instance == 0 {
                name.clone()
            } else {
                format!("{}.{}", name, instance)
            };
            prop_assert_eq!(reference.dir_name(), expected);
        }
    }
}
