//! # Navigation Path
//!
//! The breadcrumb stack: every record the user has drilled into, root
//! first. Its length is the navigation depth.

use crate::core::record::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPath {
    items: Vec<Record>,
}

impl NavigationPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, record: Record) {
        self.items.push(record);
    }

    pub fn pop(&mut self) -> Option<Record> {
        self.items.pop()
    }

    /// Shrink the path to `depth` elements. Deeper targets are a no-op.
    pub fn truncate(&mut self, depth: usize) {
        self.items.truncate(depth);
    }

    pub fn pop_to_root(&mut self) {
        self.items.clear();
    }

    /// The record whose destination is currently on screen.
    pub fn top(&self) -> Option<&Record> {
        self.items.last()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a NavigationPath {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{Manufacturer, VehicleEntry};

    fn records(k: usize) -> Vec<Record> {
        (0..k)
            .map(|i| {
                if i % 2 == 0 {
                    Record::from(Manufacturer::new(format!("Maker {i}")))
                } else {
                    Record::from(VehicleEntry::new("Make", format!("Model {i}"), 2000 + i as i32))
                }
            })
            .collect()
    }

    #[test]
    fn test_new_path_is_root() {
        let path = NavigationPath::new();
        assert_eq!(path.depth(), 0);
        assert!(path.is_empty());
        assert!(path.top().is_none());
    }

    #[test]
    fn test_push_k_gives_depth_k() {
        for k in 0..6 {
            let mut path = NavigationPath::new();
            for record in records(k) {
                path.push(record);
            }
            assert_eq!(path.depth(), k);
        }
    }

    #[test]
    fn test_pop_restores_previous_top() {
        let rs = records(3);
        let mut path = NavigationPath::new();
        for record in rs.iter().cloned() {
            path.push(record);
        }

        assert_eq!(path.pop(), Some(rs[2].clone()));
        assert_eq!(path.depth(), 2);
        assert_eq!(path.top(), Some(&rs[1]));
    }

    #[test]
    fn test_pop_on_empty_is_none() {
        let mut path = NavigationPath::new();
        assert!(path.pop().is_none());
        assert_eq!(path.depth(), 0);
    }

    #[test]
    fn test_pop_to_root_from_any_depth() {
        for k in 0..5 {
            let mut path = NavigationPath::new();
            for record in records(k) {
                path.push(record);
            }
            path.pop_to_root();
            assert_eq!(path.depth(), 0);
        }
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let rs = records(4);
        let mut path = NavigationPath::new();
        for record in rs.iter().cloned() {
            path.push(record);
        }

        path.truncate(10);
        assert_eq!(path.depth(), 4);

        path.truncate(2);
        assert_eq!(path.depth(), 2);
        let kept: Vec<&Record> = path.iter().collect();
        assert_eq!(kept, vec![&rs[0], &rs[1]]);
    }
}
