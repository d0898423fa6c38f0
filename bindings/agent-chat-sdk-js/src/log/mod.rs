// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Once;

use tracing::{info, Level};
use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
use tracing_subscriber::prelude::*;
use wasm_bindgen::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

static INIT: Once = Once::new();

/// Routes log output to the browser console. Only the first call has an effect.
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging(min_level: Option<String>) {
    INIT.call_once(|| {
        let max_level = min_level
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::TRACE);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(
                tracing_web::MakeWebConsoleWriter::new()
                    .with_pretty_level()
                    .with_max_level(max_level),
            )
            .with_level(false)
            .with_span_events(FmtSpan::ACTIVE);
        let perf_layer =
            tracing_web::performance_layer().with_details_from_fields(Pretty::default());

        if tracing_subscriber::registry()
            .with(fmt_layer)
            .with(perf_layer)
            .try_init()
            .is_ok()
        {
            info!("agent-chat-sdk-js Version {VERSION}");
        }
    })
}
