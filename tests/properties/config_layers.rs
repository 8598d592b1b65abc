//! Property tests for config layering.

use proptest::prelude::*;

use rollbar_deploy::config::{env_overrides_from, Config, DeploySection};

fn layer() -> impl Strategy<Value = Config> {
    let opt = || proptest::option::of("[a-z0-9]{1,12}");
    (opt(), opt(), opt(), opt(), proptest::option::of(any::<bool>())).prop_map(
        |(access_token, revision, environment, local_username, silent)| Config {
            deploy: DeploySection {
                access_token,
                revision,
                environment,
                local_username,
                silent,
                endpoint: None,
            },
            ..Default::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every field of a merge comes from the higher layer when set.
    #[test]
    fn property_merge_higher_wins(lower in layer(), higher in layer()) {
        let merged = lower.clone().merge(higher.clone());

        prop_assert_eq!(
            merged.deploy.access_token,
            higher.deploy.access_token.or(lower.deploy.access_token)
        );
        prop_assert_eq!(
            merged.deploy.environment,
            higher.deploy.environment.or(lower.deploy.environment)
        );
        prop_assert_eq!(merged.deploy.silent, higher.deploy.silent.or(lower.deploy.silent));
    }

    /// PROPERTY: Merging an empty layer on top changes nothing.
    #[test]
    fn property_merge_empty_is_identity(config in layer()) {
        prop_assert_eq!(config.clone().merge(Config::default()), config);
    }

    /// PROPERTY: Arbitrary env values never panic and never touch unrelated keys.
    #[test]
    fn property_env_overrides_never_panic(
        config in layer(),
        silent in "(?s).{0,16}",
        policy in "(?s).{0,16}",
        timeout in "(?s).{0,16}",
    ) {
        let mut warnings = Vec::new();
        let lookup = |key: &str| match key {
            "ROLLBAR_DEPLOY_SILENT" => Some(silent.clone()),
            "ROLLBAR_DEPLOY_ON_TRANSPORT_ERROR" => Some(policy.clone()),
            "ROLLBAR_DEPLOY_TIMEOUT_SECS" => Some(timeout.clone()),
            _ => None,
        };
        let out = env_overrides_from(config.clone(), lookup, &mut warnings);

        prop_assert_eq!(out.deploy.access_token, config.deploy.access_token);
        prop_assert_eq!(out.deploy.revision, config.deploy.revision);
    }
}
