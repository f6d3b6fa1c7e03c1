//! Environment variable source: VERITAS_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `VERITAS_STORE__PATH=x` sets `store.path`; `VERITAS_SCAN__IGNORE_PATTERNS=a,b` sets a list.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("VERITAS")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("scan.ignore_patterns")
            .try_parsing(true),
    );
    Ok(builder)
}
