//! Solution domain models.

mod activity;
pub use self::activity::*;

mod route;
pub use self::route::*;
