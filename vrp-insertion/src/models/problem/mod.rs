//! Problem domain models: fleet, jobs and routing costs.

mod costs;
pub use self::costs::*;

mod fleet;
pub use self::fleet::*;

mod jobs;
pub use self::jobs::*;

mod matrix;
pub use self::matrix::*;
