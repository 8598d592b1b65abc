//! Command handlers for the `rollbar-deploy` binary

pub mod check;
pub mod notify;

use rollbar_deploy::config::ConfigWarning;
use rollbar_deploy::presentation::output::{render_config_warning, OutputFormat};

/// Text warnings go to stderr; JSON warnings join the stdout event stream.
pub(crate) fn report_config_warnings(warnings: &[ConfigWarning], format: OutputFormat) {
    for warning in warnings {
        let rendered = render_config_warning(warning, format);
        match format {
            OutputFormat::Text => eprint!("{}", rendered),
            OutputFormat::Json => print!("{}", rendered),
        }
    }
}
