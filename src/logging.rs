// ABOUTME: Structured logging setup for library consumers and the CLI
// ABOUTME: EnvFilter-driven tracing subscriber with a compact format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forage Contributors

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the crate logs at `info`,
/// or `debug` when `verbose` is requested. Calling this twice is a no-op, so
/// embedding applications that install their own subscriber are unaffected.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "forage=debug" } else { "forage=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
