use super::parser::{ParsedName, MAX_GIVEN_NAMES};

/// Case-folded ordering key: last name first, then each given name slot.
///
/// Missing given names are empty strings, so a person with fewer given names
/// sorts ahead of one whose extra given names otherwise tie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    last_name: String,
    given_names: [String; MAX_GIVEN_NAMES],
}

impl SortKey {
    pub fn as_tuple(&self) -> (&str, &str, &str, &str) {
        let [first, second, third] = &self.given_names;
        (&self.last_name, first, second, third)
    }
}

pub fn compute_sort_key(parsed: &ParsedName) -> SortKey {
    let mut given_names: [String; MAX_GIVEN_NAMES] = Default::default();
    for (slot, name) in given_names.iter_mut().zip(parsed.given_names()) {
        *slot = name.to_lowercase();
    }

    SortKey {
        last_name: parsed.last_name().to_lowercase(),
        given_names,
    }
}
