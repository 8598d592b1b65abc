#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and resolving a config file must never panic
        if let Ok(config) = toml::from_str::<rollbar_deploy::Config>(content) {
            let _ = config.into_settings().map(|s| s.options.to_request());
        }
    }
});
