#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let mut parts = content.splitn(5, '\n');
        let token = parts.next().unwrap_or_default();
        let revision = parts.next().unwrap_or_default();
        let environment = parts.next().unwrap_or_default();
        let endpoint = parts.next().unwrap_or_default();
        let username = parts.next().map(str::to_string);

        let built = rollbar_deploy::DeploymentRequest::builder()
            .access_token(token)
            .revision(revision)
            .environment(environment)
            .endpoint(endpoint)
            .local_username(username)
            .build();

        if let Ok(request) = built {
            let fields = request.form_fields();
            assert!(fields.len() == 3 || fields.len() == 4);
        }
    }
});
