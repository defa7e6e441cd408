mod clock;
mod format;

pub use clock::{Clock, SystemClock};
pub use format::format_elapsed;

#[cfg(test)]
pub(crate) use clock::ManualClock;
