//! Parsing personal names and ordering them by last name, then given names.

mod key;
mod parser;

pub use key::{compute_sort_key, SortKey};
pub use parser::{parse, NameFormatError, ParsedName, MAX_GIVEN_NAMES};

/// Orders `raw_names` by last name and then by each given name, ignoring case.
///
/// The returned strings are the inputs themselves, untouched. Names whose keys
/// tie keep their input order. The first name that fails to parse aborts the
/// whole sort.
pub fn sort_names<S: AsRef<str>>(raw_names: &[S]) -> Result<Vec<String>, NameFormatError> {
    let mut keyed = raw_names
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let parsed = parse(raw)?;
            Ok((compute_sort_key(&parsed), raw))
        })
        .collect::<Result<Vec<_>, NameFormatError>>()?;

    // sort_by is stable; equal keys stay in input order.
    keyed.sort_by(|(left, _), (right, _)| left.cmp(right));

    Ok(keyed.into_iter().map(|(_, raw)| raw.to_owned()).collect())
}
