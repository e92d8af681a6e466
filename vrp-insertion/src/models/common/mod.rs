//! Common models.

mod domain;
pub use self::domain::*;

mod primitives;
pub use self::primitives::*;

mod time_windows;
pub use self::time_windows::*;
