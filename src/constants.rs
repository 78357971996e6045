/// Lowest status code counted as a success (inclusive).
pub const SUCCESS_STATUS_MIN: u16 = 200;

/// Highest status code counted as a success (inclusive); 299 is not a success.
pub const SUCCESS_STATUS_MAX: u16 = 298;
