// Code generated by gitver. DO NOT EDIT.

pub const GIT_REV: &str = "0000000";
pub const GIT_VERSION: &str = "v0.0.0-pre0+g0000000";
pub const GIT_TIMESTAMP: &str = "1970-01-01T00:00:00+00:00";
