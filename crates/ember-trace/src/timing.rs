//! Elapsed-time logging around named operations.

use std::time::Instant;
use tracing::info;

/// Run `f`, logging its start and elapsed time at info level.
pub fn timed<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    info!("starting {name}");
    let result = f();
    info!("{name} finished in {:?}", start.elapsed());
    result
}
