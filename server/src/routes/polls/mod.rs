mod detail;
mod index;

pub use self::detail::*;
pub use self::index::*;
