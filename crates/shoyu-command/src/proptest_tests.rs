//! Property-based tests for argument building.

use proptest::prelude::*;

use shoyu_core::{BuildConfig, HttpCacheConfig, PushConfig};

use crate::builder::ActionArgs;
use crate::flags;

/// Strategy for argument values, including spaces and quotes.
///
/// Values never start with `-`, so none of them can be mistaken for a flag.
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_./][A-Za-z0-9 _=\"'./:-]{0,23}"
}

/// Strategy for list-valued fields.
fn list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(value_strategy(), 0..6)
}

/// Strategy for build configurations with every list field populated.
fn build_strategy() -> impl Strategy<Value = BuildConfig> {
    (
        value_strategy(),
        value_strategy(),
        list_strategy(),
        list_strategy(),
        list_strategy(),
        list_strategy(),
        list_strategy(),
        any::<(bool, bool, bool)>(),
    )
        .prop_map(
            |(context, tag, build_args, deny_list, pushes, replicas, headers, switches)| {
                let (load, modify_fs, preserve_root) = switches;
                BuildConfig {
                    build_args,
                    deny_list,
                    pushes,
                    replicas,
                    http_cache: Some(HttpCacheConfig {
                        headers,
                        ..HttpCacheConfig::default()
                    }),
                    load,
                    modify_fs,
                    preserve_root,
                    ..BuildConfig::new(context, tag)
                }
            },
        )
}

proptest! {
    #[test]
    fn minimal_build_is_tag_then_context(context in value_strategy(), tag in value_strategy()) {
        let args = BuildConfig::new(context.clone(), tag.clone()).to_args().unwrap();
        prop_assert_eq!(args.into_vec(), vec![flags::TAG.to_string(), tag, context]);
    }

    #[test]
    fn build_args_are_reproducible(build in build_strategy()) {
        let first = build.to_args().unwrap();
        let second = build.to_args().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_list_element_gets_its_own_pair(build in build_strategy()) {
        let args = build.to_args().unwrap();
        let headers = &build.http_cache.as_ref().unwrap().headers;

        for (flag, values) in [
            (flags::BUILD_ARG, &build.build_args),
            (flags::BLACKLIST, &build.deny_list),
            (flags::PUSH, &build.pushes),
            (flags::REPLICA, &build.replicas),
            (flags::HTTP_CACHE_HEADER, headers),
        ] {
            let flag_count = args.iter().filter(|arg| arg.as_str() == flag).count();
            prop_assert_eq!(flag_count, values.len());

            let emitted = args.values_of(flag);
            let expected: Vec<&str> = values.iter().map(String::as_str).collect();
            prop_assert_eq!(emitted, expected);
        }
    }

    #[test]
    fn build_context_is_always_last(build in build_strategy()) {
        let args = build.to_args().unwrap();
        prop_assert_eq!(args.as_slice().last(), Some(&build.context));
    }

    #[test]
    fn push_path_is_always_last(
        path in value_strategy(),
        tag in value_strategy(),
        pushes in list_strategy(),
        replicas in list_strategy(),
    ) {
        let push = PushConfig {
            pushes: pushes.clone(),
            replicas,
            ..PushConfig::new(path.clone(), tag)
        };
        let args = push.to_args().unwrap();

        prop_assert_eq!(args.as_slice().last(), Some(&path));
        let push_flags = args.iter().filter(|arg| arg.as_str() == flags::PUSH).count();
        prop_assert_eq!(push_flags, pushes.len());
    }
}
