//! Flattened schema view used to synthesize row comparators.
//!
//! Only leaf columns matter for ordering. Each [`Leaf`] carries its dotted
//! path, its dense column index and the repetition/definition levels that
//! decide whether positional addressing into a row is safe.

use parquet::{
    basic::{ConvertedType, LogicalType, Type as PhysicalType},
    errors::ParquetError,
    schema::types::{ColumnDescriptor, ColumnPath, SchemaDescriptor},
};
use thiserror::Error;

use crate::compare::primitive::{self, ValueCompare};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema has {count} leaf columns, more than the {max} a row can address")]
    TooManyColumns { count: usize, max: usize },
    #[error("schema parquet error: {0}")]
    Parquet(#[from] ParquetError),
}

/// Declared scalar type of a leaf column.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Int96,
    Float,
    Double,
    ByteArray,
    FixedLenByteArray,
    /// 16-byte blocks ordered as big-endian unsigned integers.
    Uuid,
}

impl ColumnType {
    /// The primitive comparator for values of this type.
    pub fn compare_fn(self) -> ValueCompare {
        match self {
            ColumnType::Boolean => primitive::compare_bool_values,
            ColumnType::Int32 => primitive::compare_int32_values,
            ColumnType::Int64 => primitive::compare_int64_values,
            ColumnType::Uint32 => primitive::compare_uint32_values,
            ColumnType::Uint64 => primitive::compare_uint64_values,
            ColumnType::Int96 => primitive::compare_int96_values,
            ColumnType::Float => primitive::compare_float32_values,
            ColumnType::Double => primitive::compare_float64_values,
            ColumnType::ByteArray | ColumnType::FixedLenByteArray => {
                primitive::compare_bytes_values
            }
            ColumnType::Uuid => primitive::compare_be128_values,
        }
    }

    fn from_descriptor(column: &ColumnDescriptor) -> Self {
        let logical = column.logical_type();
        match column.physical_type() {
            PhysicalType::BOOLEAN => ColumnType::Boolean,
            PhysicalType::INT32 => match (logical, column.converted_type()) {
                (Some(LogicalType::Integer { is_signed: false, .. }), _)
                | (_, ConvertedType::UINT_8 | ConvertedType::UINT_16 | ConvertedType::UINT_32) => {
                    ColumnType::Uint32
                }
                _ => ColumnType::Int32,
            },
            PhysicalType::INT64 => match (logical, column.converted_type()) {
                (Some(LogicalType::Integer { is_signed: false, .. }), _)
                | (_, ConvertedType::UINT_64) => ColumnType::Uint64,
                _ => ColumnType::Int64,
            },
            PhysicalType::INT96 => ColumnType::Int96,
            PhysicalType::FLOAT => ColumnType::Float,
            PhysicalType::DOUBLE => ColumnType::Double,
            PhysicalType::BYTE_ARRAY => ColumnType::ByteArray,
            PhysicalType::FIXED_LEN_BYTE_ARRAY => match logical {
                Some(LogicalType::Uuid) => ColumnType::Uuid,
                _ => ColumnType::FixedLenByteArray,
            },
        }
    }
}

/// Parses a dotted path such as `"a.b.c"` into a [`ColumnPath`].
pub fn column_path(dotted: &str) -> ColumnPath {
    ColumnPath::new(dotted.split('.').map(str::to_owned).collect())
}

/// A terminal column of the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    path: ColumnPath,
    column_index: u16,
    max_repetition_level: i16,
    max_definition_level: i16,
    column_type: ColumnType,
}

impl Leaf {
    /// A required, non-repeated leaf.
    pub fn new(path: impl Into<ColumnPath>, column_index: u16, column_type: ColumnType) -> Self {
        Self {
            path: path.into(),
            column_index,
            max_repetition_level: 0,
            max_definition_level: 0,
            column_type,
        }
    }

    /// Marks the leaf as optional.
    pub fn optional(self) -> Self {
        Self {
            max_definition_level: self.max_definition_level + 1,
            ..self
        }
    }

    /// Marks the leaf as repeated. A repeated field also carries a definition level.
    pub fn repeated(self) -> Self {
        Self {
            max_repetition_level: self.max_repetition_level + 1,
            max_definition_level: self.max_definition_level + 1,
            ..self
        }
    }

    pub fn with_levels(self, max_repetition_level: i16, max_definition_level: i16) -> Self {
        Self {
            max_repetition_level,
            max_definition_level,
            ..self
        }
    }

    pub fn path(&self) -> &ColumnPath {
        &self.path
    }

    pub fn column_index(&self) -> u16 {
        self.column_index
    }

    pub fn max_repetition_level(&self) -> i16 {
        self.max_repetition_level
    }

    pub fn max_definition_level(&self) -> i16 {
        self.max_definition_level
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn is_optional(&self) -> bool {
        self.max_definition_level > 0
    }

    pub fn is_repeated(&self) -> bool {
        self.max_repetition_level > 0
    }
}

/// Leaves of a schema, in column index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    leaves: Vec<Leaf>,
}

impl Schema {
    pub fn new(leaves: Vec<Leaf>) -> Self {
        Self { leaves }
    }

    /// Flattens an Arrow schema through its parquet representation.
    pub fn try_from_arrow(schema: &arrow::datatypes::Schema) -> Result<Self, SchemaError> {
        let descriptor = parquet::arrow::arrow_to_parquet_schema(schema)?;
        Self::try_from(&descriptor)
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn leaf(&self, column_index: u16) -> Option<&Leaf> {
        self.leaves
            .iter()
            .find(|leaf| leaf.column_index == column_index)
    }

    pub fn find(&self, path: &ColumnPath) -> Option<&Leaf> {
        self.leaves.iter().find(|leaf| &leaf.path == path)
    }

    /// Whether every column holds at most one value per row.
    ///
    /// A single repeated leaf anywhere shifts the position of every later
    /// column, so positional addressing is only valid for direct schemas.
    pub fn is_direct(&self) -> bool {
        !self.leaves.iter().any(Leaf::is_repeated)
    }
}

impl TryFrom<&SchemaDescriptor> for Schema {
    type Error = SchemaError;

    fn try_from(descriptor: &SchemaDescriptor) -> Result<Self, Self::Error> {
        let count = descriptor.num_columns();
        if count > usize::from(u16::MAX) + 1 {
            return Err(SchemaError::TooManyColumns {
                count,
                max: usize::from(u16::MAX) + 1,
            });
        }
        let leaves = descriptor
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| Leaf {
                path: column.path().clone(),
                column_index: index as u16,
                max_repetition_level: column.max_rep_level(),
                max_definition_level: column.max_def_level(),
                column_type: ColumnType::from_descriptor(column),
            })
            .collect();
        Ok(Self { leaves })
    }
}
