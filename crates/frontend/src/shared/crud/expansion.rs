use std::collections::BTreeSet;

/// Rows currently expanded in a master-detail list. Lives only as long as
/// the loaded list does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet(BTreeSet<i64>);

impl ExpansionSet {
    pub fn toggle(&mut self, id: i64) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    pub fn is_open(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut set = ExpansionSet::default();
        set.toggle(7);
        let before = set.clone();

        set.toggle(5);
        assert!(set.is_open(5));
        set.toggle(5);

        assert_eq!(set, before);
        assert!(set.is_open(7));
    }

    #[test]
    fn test_rows_toggle_independently() {
        let mut set = ExpansionSet::default();
        for id in 1..=4 {
            set.toggle(id);
        }
        set.toggle(2);
        assert_eq!(set.len(), 3);
        assert!(!set.is_open(2));
        set.clear();
        assert!(set.is_empty());
    }
}
