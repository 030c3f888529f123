use bytes::Bytes;

use super::Int96;

/// Payload carried by a [`Value`].
///
/// Unsigned columns keep their bits in the signed variants of the same width,
/// matching the parquet physical layout; the declared column type decides how
/// they are ordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// Absent value of an optional column.
    #[default]
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Int96(Int96),
    Float(f32),
    Double(f64),
    ByteArray(Bytes),
    FixedLenByteArray(Bytes),
}

/// A single tagged value of an encoded row.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    column_index: u16,
    payload: Payload,
}

impl Value {
    pub fn new(column_index: u16, payload: Payload) -> Self {
        Self {
            column_index,
            payload,
        }
    }

    pub fn null(column_index: u16) -> Self {
        Self::new(column_index, Payload::Null)
    }

    pub fn boolean(column_index: u16, v: bool) -> Self {
        Self::new(column_index, Payload::Boolean(v))
    }

    pub fn int32(column_index: u16, v: i32) -> Self {
        Self::new(column_index, Payload::Int32(v))
    }

    pub fn int64(column_index: u16, v: i64) -> Self {
        Self::new(column_index, Payload::Int64(v))
    }

    pub fn uint32(column_index: u16, v: u32) -> Self {
        Self::new(column_index, Payload::Int32(v as i32))
    }

    pub fn uint64(column_index: u16, v: u64) -> Self {
        Self::new(column_index, Payload::Int64(v as i64))
    }

    pub fn int96(column_index: u16, v: Int96) -> Self {
        Self::new(column_index, Payload::Int96(v))
    }

    pub fn float(column_index: u16, v: f32) -> Self {
        Self::new(column_index, Payload::Float(v))
    }

    pub fn double(column_index: u16, v: f64) -> Self {
        Self::new(column_index, Payload::Double(v))
    }

    pub fn byte_array(column_index: u16, v: impl Into<Bytes>) -> Self {
        Self::new(column_index, Payload::ByteArray(v.into()))
    }

    pub fn fixed_len_byte_array(column_index: u16, v: impl Into<Bytes>) -> Self {
        Self::new(column_index, Payload::FixedLenByteArray(v.into()))
    }

    /// Index of the leaf column this value belongs to.
    pub fn column_index(&self) -> u16 {
        self.column_index
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn is_null(&self) -> bool {
        matches!(self.payload, Payload::Null)
    }

    // The accessors below read the payload as the requested kind and fall back
    // to the kind's zero value, so comparators never fail on a mismatch.

    pub fn as_boolean(&self) -> bool {
        match self.payload {
            Payload::Boolean(v) => v,
            _ => false,
        }
    }

    pub fn as_int32(&self) -> i32 {
        match self.payload {
            Payload::Int32(v) => v,
            _ => 0,
        }
    }

    pub fn as_int64(&self) -> i64 {
        match self.payload {
            Payload::Int64(v) => v,
            _ => 0,
        }
    }

    pub fn as_uint32(&self) -> u32 {
        self.as_int32() as u32
    }

    pub fn as_uint64(&self) -> u64 {
        self.as_int64() as u64
    }

    pub fn as_int96(&self) -> Int96 {
        match self.payload {
            Payload::Int96(v) => v,
            _ => Int96::default(),
        }
    }

    pub fn as_float(&self) -> f32 {
        match self.payload {
            Payload::Float(v) => v,
            _ => 0.0,
        }
    }

    pub fn as_double(&self) -> f64 {
        match self.payload {
            Payload::Double(v) => v,
            _ => 0.0,
        }
    }

    /// Bytes of either byte-array variant; empty for every other payload.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.payload {
            Payload::ByteArray(v) | Payload::FixedLenByteArray(v) => v,
            _ => &[],
        }
    }
}
