use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialise structured logging on stderr so stdout only carries rendered output.
///
/// `RUST_LOG` takes precedence; otherwise warnings are shown, or debug output with `verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
  let default_directive = if verbose {
    "asset_includer=debug"
  } else {
    "warn"
  };
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .map_err(|err| anyhow!("failed to initialise logging: {err}"))
}
