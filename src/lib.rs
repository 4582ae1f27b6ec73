pub mod codec;
pub mod container;
pub mod dump;
pub mod error;

pub use container::{BlalContainer, VERSION};
pub use dump::{BlalDump, HashEntry};
pub use error::FormatError;
