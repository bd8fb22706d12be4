// src/models/conversion.rs

/// One converted integer: the original value and its binary and
/// hexadecimal renderings.
#[derive(Debug)]
pub struct Conversion {
    pub number: i64,
    pub binary: String,
    pub hexadecimal: String,
}
