//! Recursive merging of JSON objects.

use serde_json::{Map, Value};

/// Merges `overlay` into `base` in place.
///
/// Where a key maps to an object on both sides the two objects are merged
/// recursively, so nested keys in `base` survive unless `overlay` names them.
/// In every other case (missing key, scalar, array, or mismatched shapes)
/// the value from `overlay` replaces the value in `base` wholesale.
pub fn deep_merge(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(base_map)), Value::Object(overlay_map)) => {
                deep_merge(base_map, overlay_map);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
