//! Construction helpers for categorical (dictionary-encoded) columns.

use std::sync::Arc;

use arrow::array::{ArrayRef, DictionaryArray, StringArray, StringDictionaryBuilder, UInt32Array};
use arrow::datatypes::UInt32Type;

use crate::ComputeResult;
use crate::string_cache::StringCache;

/// Build a `Dictionary(UInt32, Utf8)` array from optional string values.
///
/// When `cache` is provided the array's codes come from the shared interner,
/// so columns built against the same cache share one code space. Without a
/// cache the array gets its own local dictionary in first-appearance order.
pub fn categorical_array(
    values: &[Option<&str>],
    cache: Option<&StringCache>,
) -> ComputeResult<ArrayRef> {
    match cache {
        Some(cache) => {
            let keys: UInt32Array = values
                .iter()
                .map(|value| value.map(|v| cache.intern(v)))
                .collect();
            // Snapshot after interning so every key has a dictionary entry.
            let dictionary = StringArray::from(cache.strings());
            let array = DictionaryArray::<UInt32Type>::try_new(keys, Arc::new(dictionary))?;
            Ok(Arc::new(array))
        }
        None => {
            let mut builder = StringDictionaryBuilder::<UInt32Type>::new();
            for value in values {
                builder.append_option(*value);
            }
            Ok(Arc::new(builder.finish()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;
    use arrow::compute::cast;
    use arrow::datatypes::DataType;

    fn as_strings(array: &ArrayRef) -> Vec<Option<String>> {
        let array = cast(array.as_ref(), &DataType::Utf8).unwrap();
        let array = array.as_any().downcast_ref::<StringArray>().unwrap();
        (0..array.len())
            .map(|i| {
                if array.is_null(i) {
                    None
                } else {
                    Some(array.value(i).to_string())
                }
            })
            .collect()
    }

    #[test]
    fn local_dictionary_round_trips() {
        let array = categorical_array(&[Some("a"), None, Some("b"), Some("a")], None).unwrap();
        assert_eq!(
            as_strings(&array),
            vec![
                Some("a".to_string()),
                None,
                Some("b".to_string()),
                Some("a".to_string())
            ]
        );
    }

    #[test]
    fn shared_cache_yields_shared_codes() {
        let cache = StringCache::new();
        let first = categorical_array(&[Some("a"), Some("b")], Some(&cache)).unwrap();
        let second = categorical_array(&[Some("b"), Some("c")], Some(&cache)).unwrap();

        let first = first
            .as_any()
            .downcast_ref::<DictionaryArray<UInt32Type>>()
            .unwrap();
        let second = second
            .as_any()
            .downcast_ref::<DictionaryArray<UInt32Type>>()
            .unwrap();
        // "b" has one code in both columns.
        assert_eq!(first.keys().value(1), second.keys().value(0));
    }
}
