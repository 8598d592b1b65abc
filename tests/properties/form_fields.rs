//! Property tests for the deploy form.

use proptest::prelude::*;

use rollbar_deploy::{AccessToken, DeploymentRequest, ROLLBAR_ENDPOINT};

fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,40}"
}

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._/-]{1,32}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The builder returns an error rather than panicking.
    #[test]
    fn property_builder_never_panics(
        token in "(?s).{0,64}",
        revision in "(?s).{0,64}",
        environment in "(?s).{0,64}",
        endpoint in proptest::option::of("(?s).{0,64}"),
        username in proptest::option::of("(?s).{0,32}"),
    ) {
        let mut builder = DeploymentRequest::builder()
            .access_token(token)
            .revision(revision)
            .environment(environment)
            .local_username(username);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint(endpoint);
        }
        let _ = builder.build();
    }

    /// PROPERTY: A username adds exactly one field, and it comes first.
    #[test]
    fn property_username_adds_one_leading_field(
        token in token(),
        revision in value(),
        environment in value(),
        username in value(),
    ) {
        let base = DeploymentRequest::builder()
            .access_token(token.clone())
            .revision(revision.clone())
            .environment(environment.clone());
        let without = base.clone().build().unwrap();
        let with = base.local_username(Some(username.clone())).build().unwrap();

        let plain = without.form_fields();
        let named = with.form_fields();

        prop_assert_eq!(plain.len(), 3);
        prop_assert_eq!(named.len(), plain.len() + 1);
        prop_assert_eq!(named[0].name, "local_username");
        prop_assert_eq!(&named[0].value, &username);
        prop_assert_eq!(&named[1..], &plain[..]);
    }

    /// PROPERTY: Field names and order never depend on the values.
    #[test]
    fn property_field_order_is_fixed(
        token in token(),
        revision in value(),
        environment in value(),
    ) {
        let request = DeploymentRequest::builder()
            .access_token(token.clone())
            .revision(revision.clone())
            .environment(environment.clone())
            .build()
            .unwrap();

        let names: Vec<&str> = request.form_fields().iter().map(|f| f.name).collect();
        prop_assert_eq!(names, vec!["access_token", "revision", "environment"]);
        prop_assert_eq!(request.endpoint(), ROLLBAR_ENDPOINT);
        prop_assert_eq!(request.access_token(), &AccessToken::parse(&token).unwrap());
    }

    /// PROPERTY: The masked token never reveals more than four characters.
    #[test]
    fn property_masked_token_hides_tail(token in token()) {
        let masked = AccessToken::parse(&token).unwrap().masked();
        let visible = masked.trim_end_matches('*');
        prop_assert!(visible.len() <= 4);
        prop_assert!(token.starts_with(visible));
        if token.len() < 12 {
            prop_assert_eq!(visible, "");
        }
    }
}
