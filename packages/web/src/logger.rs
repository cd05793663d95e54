use tracing::Level;
use tracing_wasm::{ConsoleConfig, WASMLayerConfigBuilder};

/// Route `tracing` output to the browser console, keeping events at `level` or more severe.
///
/// This installs a global subscriber, so call it once, before [`launch`](crate::launch). A second call panics.
pub fn init_logger(level: Level) {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .set_console_config(ConsoleConfig::ReportWithConsoleColor)
        .build();

    tracing_wasm::set_as_global_default_with_config(config);
}
