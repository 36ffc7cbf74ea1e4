//! Value type unification.
//!
//! Computes the single output type for the collapsed "value" column by folding
//! a pairwise supertype computation across the selected value columns' types.
//! Only the part of the coercion lattice the unpivot operation needs is
//! implemented here; the general lattice lives with the expression engine and
//! is out of scope.

use arrow::datatypes::DataType;
use molt_result::Error;

use crate::ComputeResult;

/// Ordering semantics of a unified categorical type.
///
/// When two or more distinct dictionary-encoded columns are unified, value
/// identity in the output is determined by the underlying physical codes, not
/// by any shared string-to-code mapping. This holds even when a process-wide
/// string cache was active while the inputs were built; unification never
/// assumes cross-column code compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoricalOrdering {
    /// Codes are compared and unioned directly.
    Physical,
    /// Values are ordered by their string representation.
    Lexical,
}

impl CategoricalOrdering {
    /// Marker string published in output field metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoricalOrdering::Physical => "physical",
            CategoricalOrdering::Lexical => "lexical",
        }
    }
}

/// The unified output type for the "value" column.
#[derive(Clone, Debug, PartialEq)]
pub struct UnifiedType {
    pub data_type: DataType,
    /// Set when the unified type is categorical and carries explicit ordering
    /// semantics (see [`CategoricalOrdering`]).
    pub categorical_ordering: Option<CategoricalOrdering>,
}

impl UnifiedType {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            categorical_ordering: None,
        }
    }
}

/// Fold the supertype computation left-to-right across `types`.
///
/// An empty input yields the null type, which is what an unpivot with zero
/// value columns produces for its "value" column. Unifying two or more
/// distinct categorical inputs yields a categorical output declared
/// [`CategoricalOrdering::Physical`].
///
/// Fails with [`Error::InvalidOperation`] if any pair of types has no common
/// supertype (e.g. a list type combined with a scalar), so the whole unpivot
/// aborts before any row is materialized.
pub fn unify_value_types<'a, I>(types: I) -> ComputeResult<UnifiedType>
where
    I: IntoIterator<Item = &'a DataType>,
{
    let mut acc: Option<DataType> = None;
    let mut categorical_inputs = 0usize;

    for dtype in types {
        if is_categorical(dtype) {
            categorical_inputs += 1;
        }
        acc = Some(match acc {
            None => dtype.clone(),
            Some(current) => supertype(&current, dtype)?,
        });
    }

    let data_type = acc.unwrap_or(DataType::Null);
    let categorical_ordering = if categorical_inputs >= 2 && is_categorical(&data_type) {
        Some(CategoricalOrdering::Physical)
    } else {
        None
    };

    Ok(UnifiedType {
        data_type,
        categorical_ordering,
    })
}

/// Compute the narrowest type both inputs coerce into.
///
/// Symmetric; fails with [`Error::InvalidOperation`] when no common supertype
/// exists rather than silently stringifying.
pub fn supertype(left: &DataType, right: &DataType) -> ComputeResult<DataType> {
    if left == right {
        return Ok(left.clone());
    }
    supertype_directed(left, right)
        .or_else(|| supertype_directed(right, left))
        .ok_or_else(|| {
            Error::InvalidOperation(format!(
                "no common supertype for {left:?} and {right:?} in unpivot"
            ))
        })
}

/// True for dictionary-encoded string (categorical) types.
pub fn is_categorical(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Dictionary(_, values)
            if matches!(values.as_ref(), DataType::Utf8 | DataType::LargeUtf8)
    )
}

fn supertype_directed(left: &DataType, right: &DataType) -> Option<DataType> {
    use DataType::*;

    match (left, right) {
        (Null, other) => Some(other.clone()),
        (Utf8, LargeUtf8) => Some(LargeUtf8),
        // Strings absorb every scalar kind.
        (LargeUtf8, other) if coerces_to_string(other) => Some(LargeUtf8),
        (Utf8, other) if coerces_to_string(other) => Some(Utf8),
        // Two distinct categoricals unify physically over a canonical encoding.
        (Dictionary(_, _), Dictionary(_, _)) if is_categorical(left) && is_categorical(right) => {
            Some(Dictionary(Box::new(UInt32), Box::new(Utf8)))
        }
        (Boolean, other) if is_numeric(other) => Some(other.clone()),
        _ if is_numeric(left) && is_numeric(right) => numeric_supertype(left, right),
        _ => None,
    }
}

fn coerces_to_string(dtype: &DataType) -> bool {
    is_numeric(dtype)
        || is_categorical(dtype)
        || is_temporal(dtype)
        || matches!(dtype, DataType::Boolean)
}

fn is_numeric(dtype: &DataType) -> bool {
    is_float(dtype) || int_rank(dtype).is_some()
}

fn is_float(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float16 | DataType::Float32 | DataType::Float64
    )
}

fn is_temporal(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Date32
            | DataType::Date64
            | DataType::Timestamp(_, _)
            | DataType::Time32(_)
            | DataType::Time64(_)
            | DataType::Duration(_)
            | DataType::Interval(_)
    )
}

/// Width rank and signedness for integer types. Rank 1 = 8 bits, 4 = 64 bits.
fn int_rank(dtype: &DataType) -> Option<(u8, bool)> {
    use DataType::*;
    match dtype {
        Int8 => Some((1, true)),
        Int16 => Some((2, true)),
        Int32 => Some((3, true)),
        Int64 => Some((4, true)),
        UInt8 => Some((1, false)),
        UInt16 => Some((2, false)),
        UInt32 => Some((3, false)),
        UInt64 => Some((4, false)),
        _ => None,
    }
}

fn signed_of_rank(rank: u8) -> DataType {
    match rank {
        1 => DataType::Int8,
        2 => DataType::Int16,
        3 => DataType::Int32,
        _ => DataType::Int64,
    }
}

fn unsigned_of_rank(rank: u8) -> DataType {
    match rank {
        1 => DataType::UInt8,
        2 => DataType::UInt16,
        3 => DataType::UInt32,
        _ => DataType::UInt64,
    }
}

fn numeric_supertype(left: &DataType, right: &DataType) -> Option<DataType> {
    use DataType::*;

    if left == &Float64 || right == &Float64 {
        return Some(Float64);
    }
    if is_float(left) || is_float(right) {
        let (float, other) = if is_float(left) {
            (left, right)
        } else {
            (right, left)
        };
        if is_float(other) {
            // Float16 + Float32
            return Some(Float32);
        }
        let (rank, _) = int_rank(other)?;
        // Small integers fit in a Float32 mantissa; wider ones need Float64.
        return match (float, rank) {
            (Float32, r) if r <= 2 => Some(Float32),
            (Float16, _) => Some(Float32),
            _ => Some(Float64),
        };
    }

    let (left_rank, left_signed) = int_rank(left)?;
    let (right_rank, right_signed) = int_rank(right)?;

    if left_signed == right_signed {
        let rank = left_rank.max(right_rank);
        return Some(if left_signed {
            signed_of_rank(rank)
        } else {
            unsigned_of_rank(rank)
        });
    }

    // Mixed signedness: widen to the next signed integer that can hold the
    // unsigned operand; UInt64 has no signed container and falls to Float64.
    let (signed_rank, unsigned_rank) = if left_signed {
        (left_rank, right_rank)
    } else {
        (right_rank, left_rank)
    };
    if unsigned_rank >= 4 {
        return Some(Float64);
    }
    Some(signed_of_rank(signed_rank.max(unsigned_rank + 1)))
}
