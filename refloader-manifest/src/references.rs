//! The classified reference set.

use std::{fmt, path::PathBuf};

/// One of the four load groups, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Before,
    Generated,
    Unordered,
    After,
}

impl Group {
    /// All groups, in load order.
    pub const ALL: [Group; 4] = [Group::Before, Group::Generated, Group::Unordered, Group::After];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Before => "before",
            Group::Generated => "generated",
            Group::Unordered => "unordered",
            Group::After => "after",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// References split into their four load groups.
///
/// Each group keeps manifest order. The combined `all` sequence is always
/// derived from the groups, so it can never disagree with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References<T = PathBuf> {
    pub before: Vec<T>,
    pub generated: Vec<T>,
    pub unordered: Vec<T>,
    pub after: Vec<T>,
}

impl<T> Default for References<T> {
    fn default() -> Self {
        Self {
            before: Vec::new(),
            generated: Vec::new(),
            unordered: Vec::new(),
            after: Vec::new(),
        }
    }
}

impl<T> References<T> {
    /// Append an entry to a group.
    pub fn push(&mut self, group: Group, entry: T) {
        self.group_mut(group).push(entry);
    }

    /// Entries of one group.
    pub fn group(&self, group: Group) -> &[T] {
        match group {
            Group::Before => &self.before,
            Group::Generated => &self.generated,
            Group::Unordered => &self.unordered,
            Group::After => &self.after,
        }
    }

    fn group_mut(&mut self, group: Group) -> &mut Vec<T> {
        match group {
            Group::Before => &mut self.before,
            Group::Generated => &mut self.generated,
            Group::Unordered => &mut self.unordered,
            Group::After => &mut self.after,
        }
    }

    /// Iterate `before ++ generated ++ unordered ++ after`.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.before
            .iter()
            .chain(&self.generated)
            .chain(&self.unordered)
            .chain(&self.after)
    }

    /// `before ++ generated ++ unordered ++ after`, collected.
    pub fn all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        Group::ALL.iter().map(|g| self.group(*g).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the entries matching `keep`, in every group.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        for group in Group::ALL {
            self.group_mut(group).retain(|entry| keep(entry));
        }
    }

    /// Transform every entry, keeping group membership and order.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<References<U>, E> {
        let mut map = |entries: Vec<T>| {
            entries
                .into_iter()
                .map(&mut f)
                .collect::<Result<Vec<U>, E>>()
        };
        Ok(References {
            before: map(self.before)?,
            generated: map(self.generated)?,
            unordered: map(self.unordered)?,
            after: map(self.after)?,
        })
    }
}
