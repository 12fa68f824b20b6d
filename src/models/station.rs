use std::collections::BTreeSet;

/// Deduplicated reference list of weather station names.
///
/// Names are kept in byte-wise sorted order so that index draws from a
/// seeded generator pick the same stations on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationList {
    names: Vec<String>,
}

impl StationList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self::from(unique)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }

    /// Mean byte length of the station names, `None` for an empty list.
    pub fn average_name_len(&self) -> Option<f64> {
        if self.names.is_empty() {
            return None;
        }

        let total: usize = self.names.iter().map(String::len).sum();
        Some(total as f64 / self.names.len() as f64)
    }
}

impl From<BTreeSet<String>> for StationList {
    fn from(set: BTreeSet<String>) -> Self {
        Self {
            names: set.into_iter().collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StationList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_list_dedups_and_sorts() {
        let list = StationList::new(["Riga", "Cesis", "Riga", "Abha"]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.names(), &["Abha", "Cesis", "Riga"]);
        assert!(list.contains("Cesis"));
        assert!(!list.contains("cesis"));
    }

    #[test]
    fn test_average_name_len() {
        let list: StationList = ["X", "YY"].into_iter().collect();
        assert_eq!(list.average_name_len(), Some(1.5));

        assert_eq!(StationList::default().average_name_len(), None);
    }

    #[test]
    fn test_average_name_len_counts_bytes() {
        // "Zürich" is six characters but seven bytes
        let list = StationList::new(["Zürich"]);
        assert_eq!(list.average_name_len(), Some(7.0));
    }
}
