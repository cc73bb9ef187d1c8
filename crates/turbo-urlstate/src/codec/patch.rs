//! Apply a new search state on top of the current URL params.

use crate::codec::serialize_search_state;
use crate::options::PatchOptions;
use crate::params::SearchParams;
use crate::schema::SearchSchema;
use crate::state::SearchState;

/// Build the params for `next_state`, optionally carrying over params the
/// schema does not own.
///
/// Every schema-declared param is rewritten from `next_state`; this is not a
/// field-level merge. With `preserve_unknown_params`, the remaining pairs of
/// `current` are appended after the schema params in their original order.
pub fn patch_search_params(
    current: &SearchParams,
    next_state: &SearchState,
    schema: &SearchSchema,
    options: PatchOptions,
) -> SearchParams {
    let mut params = serialize_search_state(next_state, schema, options.serialize);

    if options.preserve_unknown_params {
        let known = schema.param_names();
        params.extend(current.iter().filter(|(key, _)| !known.contains(key)));
    }

    params
}
