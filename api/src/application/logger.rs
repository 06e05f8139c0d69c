use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::LogArgs;

pub fn init_logger(args: &LogArgs) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_new(&args.log_filter)?;

    let registry = tracing_subscriber::registry().with(filter);

    if args.log_json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }

    Ok(())
}
