use serde::{Serialize, Serializer, ser::SerializeMap};

type IconEntries = &'static [(&'static str, &'static str)];

/// Read-only lookup table from category key to display icon
///
/// Keys are matched exactly (case-sensitive). Unknown keys resolve to `None`;
/// whether to fall back to a default icon or omit it is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryIconTable {
    entries: IconEntries,
}

impl CategoryIconTable {
    /// Build a table from `(key, icon)` pairs.
    ///
    /// Panics on duplicate keys. In a `static` initializer this is a
    /// compile error.
    pub const fn new(entries: IconEntries) -> Self {
        let mut i = 0;
        while i < entries.len() {
            let mut j = i + 1;
            while j < entries.len() {
                if same_key(entries[i].0, entries[j].0) {
                    panic!("duplicate category key in icon table");
                }
                j += 1;
            }
            i += 1;
        }
        Self { entries }
    }

    /// Icon for a category key
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(category, _)| *category == key)
            .map(|(_, icon)| *icon)
    }

    /// Icon for a category key, or `fallback` when the key is unknown
    pub fn get_or<'a>(&self, key: &str, fallback: &'a str) -> &'a str {
        match self.get(key) {
            Some(icon) => icon,
            None => {
                log::debug!("No icon for category {key:?}, using fallback {fallback:?}");
                fallback
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// `(key, icon)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.entries.iter().copied()
    }
}

// str equality is not const yet
const fn same_key(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Serialized as a plain `{key: icon}` map
impl Serialize for CategoryIconTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, icon) in self.iter() {
            map.serialize_entry(key, icon)?;
        }
        map.end()
    }
}
