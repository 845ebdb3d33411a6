use crate::util::name_key;
use std::collections::{BTreeMap, BTreeSet};

/// Case-insensitive set of defined names.
#[derive(Debug, Default)]
pub(super) struct NameIndex {
    keys: BTreeSet<String>,
}

impl NameIndex {
    pub(super) fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            keys: names.into_iter().map(name_key).collect(),
        }
    }

    pub(super) fn contains(&self, name: &str) -> bool {
        self.keys.contains(&name_key(name))
    }
}

/// Unresolved names in first-seen order, each with everything that points at it.
#[derive(Debug, Default)]
pub(super) struct MissingRefs {
    entries: Vec<(String, Vec<String>)>,
    positions: BTreeMap<String, usize>,
}

impl MissingRefs {
    pub(super) fn record(&mut self, name: &str, referrer: String) {
        let key = name_key(name);
        match self.positions.get(&key) {
            Some(&pos) => {
                let referrers = &mut self.entries[pos].1;
                if !referrers.contains(&referrer) {
                    referrers.push(referrer);
                }
            }
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries
                    .push((name.trim().to_string(), vec![referrer]));
            }
        }
    }

    pub(super) fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub(super) fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, referrers)| (name.as_str(), referrers.as_slice()))
    }

    /// One message per missing name, `what` naming the kind of target.
    pub(super) fn messages(&self, what: &str) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, referrers)| {
                format!(
                    "{what} '{name}' is not defined (referenced by {})",
                    referrers.join(", ")
                )
            })
            .collect()
    }
}

/// Names that occur more than once (case-insensitively), in first-seen order.
pub(super) fn duplicate_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut duplicates = Vec::new();
    for name in names {
        let key = name_key(name);
        if key.is_empty() {
            continue;
        }
        if !seen.insert(key.clone()) && reported.insert(key) {
            duplicates.push(name.trim().to_string());
        }
    }
    duplicates
}

/// Ordered, de-duplicated list of flagged entity names.
#[derive(Debug, Default)]
pub(super) struct FlaggedNames {
    names: Vec<String>,
    keys: BTreeSet<String>,
}

impl FlaggedNames {
    pub(super) fn flag(&mut self, name: &str) {
        if self.keys.insert(name_key(name)) {
            self.names.push(name.trim().to_string());
        }
    }

    pub(super) fn into_names(self) -> Vec<String> {
        self.names
    }
}
