use std::fmt;

/// Legacy 96-bit signed integer, stored as three little-endian 32-bit words.
///
/// Parquet writers historically used this physical type for nanosecond
/// timestamps. The most significant word carries the sign bit.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Int96([u32; 3]);

impl Int96 {
    /// Build from the raw words, least significant first.
    pub const fn new(words: [u32; 3]) -> Self {
        Self(words)
    }

    /// Build from a signed 64-bit integer, sign-extending into the high word.
    pub const fn from_i64(value: i64) -> Self {
        let high = if value < 0 { u32::MAX } else { 0 };
        Self([value as u32, (value >> 32) as u32, high])
    }

    /// Raw words, least significant first.
    pub const fn words(&self) -> [u32; 3] {
        self.0
    }

    /// Whether the sign bit is set.
    pub const fn is_negative(&self) -> bool {
        self.0[2] >> 31 != 0
    }

    /// Strict "less than" in two's complement order.
    pub fn less(&self, other: &Self) -> bool {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => return true,
            (false, true) => return false,
            _ => {}
        }
        for k in (0..3).rev() {
            let (a, b) = (self.0[k], other.0[k]);
            if a != b {
                return a < b;
            }
        }
        false
    }
}

impl fmt::Debug for Int96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int96({:#010x}_{:08x}_{:08x})", self.0[2], self.0[1], self.0[0])
    }
}

impl From<parquet::data_type::Int96> for Int96 {
    fn from(value: parquet::data_type::Int96) -> Self {
        let data = value.data();
        Self([data[0], data[1], data[2]])
    }
}

impl From<Int96> for parquet::data_type::Int96 {
    fn from(value: Int96) -> Self {
        let mut out = parquet::data_type::Int96::new();
        out.set_data(value.0[0], value.0[1], value.0[2]);
        out
    }
}
