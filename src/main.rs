use anyhow::Result;
use satchel::{commands::Cli, libs::messages::macros::is_debug_mode};

fn main() -> Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("satchel=debug")),
            )
            .with_target(false)
            .with_line_number(true)
            .init();
    }

    Cli::menu()
}
