//! Layer-name merging
//!
//! The ordering rules for combining incoming layer names with a scope's
//! retained own names.

use strata_cssom::LayerName;

/// True for the `inherit` placeholder and any `inherit.`-prefixed name
pub fn is_inherited_name(name: &LayerName) -> bool {
    name.as_str() == "inherit" || name.as_str().starts_with("inherit.")
}

/// Merge new and retained layer names into one duplicate-free order.
/// The lists are concatenated new-first and, for each duplicate, only the
/// last positional occurrence is kept.
pub fn merge_layer_names(new_names: &[LayerName], retained: &[LayerName]) -> Vec<LayerName> {
    let concatenated: Vec<&LayerName> = new_names.iter().chain(retained.iter()).collect();
    concatenated
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let last = concatenated.iter().rposition(|candidate| candidate == name)?;
            (last == index).then(|| (*name).clone())
        })
        .collect()
}
