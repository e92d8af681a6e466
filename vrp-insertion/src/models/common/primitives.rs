/// Represents a time duration.
pub type Duration = f64;

/// Represents a timestamp.
pub type Timestamp = f64;

/// Represents a distance.
pub type Distance = f64;

/// Specifies cost value.
pub type Cost = f64;
