//! Line rendering shared by every channel.

mod prefix;

pub use prefix::{DEFAULT_TIMESTAMP_FORMAT, SEPARATOR, TimePrefix};
