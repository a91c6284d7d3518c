//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use proptest::prelude::*;
use std::path::PathBuf;

fn procfs_strategy() -> impl Strategy<Value = PathBuf> {
    (any::<bool>(), "[a-z]{1,8}(/[a-z]{1,8}){0,3}").prop_map(|(absolute, path)| {
        if absolute {
            PathBuf::from(format!("/{path}"))
        } else {
            PathBuf::from(path)
        }
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0..1024usize),
        prop::option::of(procfs_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(max_jumps, procfs, except_last)| Config {
            max_jumps,
            procfs,
            except_last,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher precedence config win, unset ones fall through
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.max_jumps, high.max_jumps.or(low.max_jumps));
        prop_assert_eq!(result.procfs, high.procfs.clone().or(low.procfs.clone()));
        prop_assert_eq!(result.except_last, high.except_last.or(low.except_last));
    }

    // Empty config is identity element for merge
    #[test]
    fn merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging the same config twice changes nothing
    #[test]
    fn merge_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    // Validation accepts exactly positive ceilings and absolute mount points
    #[test]
    fn validation_matches_field_rules(config in config_strategy()) {
        let jumps_ok = config.max_jumps.map_or(true, |n| n >= 1);
        let procfs_ok = config.procfs.as_ref().map_or(true, |p| p.is_absolute());
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), jumps_ok && procfs_ok);
    }

    // Any config survives a YAML round trip
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
