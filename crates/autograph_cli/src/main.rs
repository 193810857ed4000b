//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open a store from the configured seed and print table counts plus the
//!   dashboard overview, to check core wiring without any UI.
//!
//! Environment:
//! - `AUTOGRAPH_SEED`: path to a JSON seed file (bundled catalog when unset).
//! - `AUTOGRAPH_LOG_DIR`: absolute log directory (file logging off when unset).
//! - `AUTOGRAPH_LOG_LEVEL`: trace|debug|info|warn|error.

use autograph_core::{
    core_version, init_logging, open_store_with, DashboardService, LoggingConfig, SeedSource,
    TableId,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::var_os("AUTOGRAPH_LOG_DIR") {
        let config = match std::env::var("AUTOGRAPH_LOG_LEVEL") {
            Ok(level) => LoggingConfig::new(level, log_dir),
            Err(_) => LoggingConfig::with_default_level(log_dir),
        };
        if let Err(err) = init_logging(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    let source = match std::env::var_os("AUTOGRAPH_SEED") {
        Some(path) => SeedSource::File(PathBuf::from(path)),
        None => SeedSource::Embedded,
    };

    let store = match open_store_with(&source) {
        Ok(store) => store,
        Err(err) => {
            log::error!("event=cli_start module=cli status=error error={err}");
            eprintln!("failed to open store: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("autograph_core version={}", core_version());
    for table in TableId::ALL {
        println!("table={} rows={}", table, store.len(table));
    }

    let overview = DashboardService::new(&store).overview();
    println!(
        "dashboard active_products={} pending_orders={} delivered_revenue={:.2} live_auctions={} banned_customers={}",
        overview.active_products,
        overview.pending_orders,
        overview.delivered_revenue,
        overview.live_auctions,
        overview.banned_customers
    );
    ExitCode::SUCCESS
}
