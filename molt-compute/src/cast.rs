//! Casting value columns into the unified output type.

use arrow::array::ArrayRef;
use arrow::compute::cast;
use molt_result::Error;

use crate::ComputeResult;
use crate::unify::UnifiedType;

/// Cast a value column into the unified output type.
///
/// Columns already of the unified type are passed through untouched (the
/// underlying buffers are shared, not copied). Cast failures surface as
/// [`Error::InvalidOperation`] so the whole unpivot aborts; unsupported
/// combinations are normally rejected earlier, at unification time.
pub fn cast_to_unified(array: &ArrayRef, unified: &UnifiedType) -> ComputeResult<ArrayRef> {
    if array.data_type() == &unified.data_type {
        return Ok(array.clone());
    }
    cast(array.as_ref(), &unified.data_type).map_err(|err| {
        Error::InvalidOperation(format!(
            "cannot cast {:?} to unified type {:?}: {err}",
            array.data_type(),
            unified.data_type
        ))
    })
}
