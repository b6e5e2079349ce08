//! Alias data structures

use serde::{Deserialize, Serialize};

/// A single alias definition: `alias <name>='<command>'`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    pub command: String,
}

impl Alias {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.command)
    }
}

/// Kind of mutation applied to an [`AliasList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasChange {
    Added(usize),
    Replaced(usize),
    Removed(usize),
    /// The whole list was swapped out (load, import, restore)
    Reset,
}

type Listener = Box<dyn FnMut(AliasChange, &[Alias])>;

/// Ordered alias collection in file order.
///
/// Duplicate names are kept as-is; the shell resolves them (last one wins).
/// Listeners registered with [`AliasList::subscribe`] are called after every
/// mutation with the change and the resulting contents. Selection state is
/// left to whoever renders the list.
#[derive(Default)]
pub struct AliasList {
    aliases: Vec<Alias>,
    listeners: Vec<Listener>,
}

impl AliasList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_aliases(aliases: Vec<Alias>) -> Self {
        Self {
            aliases,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(AliasChange, &[Alias]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn as_slice(&self) -> &[Alias] {
        &self.aliases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alias> {
        self.aliases.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Alias> {
        self.aliases.get(index)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn push(&mut self, alias: Alias) {
        self.aliases.push(alias);
        self.notify(AliasChange::Added(self.aliases.len() - 1));
    }

    /// Replace the alias at `index`, returning the previous one.
    /// Returns `None` and leaves the list untouched when out of range.
    pub fn replace(&mut self, index: usize, alias: Alias) -> Option<Alias> {
        let slot = self.aliases.get_mut(index)?;
        let previous = std::mem::replace(slot, alias);
        self.notify(AliasChange::Replaced(index));
        Some(previous)
    }

    /// Remove the alias at `index`. Returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Alias> {
        if index >= self.aliases.len() {
            return None;
        }
        let removed = self.aliases.remove(index);
        self.notify(AliasChange::Removed(index));
        Some(removed)
    }

    pub fn reset(&mut self, aliases: Vec<Alias>) {
        self.aliases = aliases;
        self.notify(AliasChange::Reset);
    }

    fn notify(&mut self, change: AliasChange) {
        for listener in &mut self.listeners {
            listener(change, &self.aliases);
        }
    }
}

impl std::fmt::Debug for AliasList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasList")
            .field("aliases", &self.aliases)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PartialEq for AliasList {
    fn eq(&self, other: &Self) -> bool {
        self.aliases == other.aliases
    }
}

impl From<Vec<Alias>> for AliasList {
    fn from(aliases: Vec<Alias>) -> Self {
        Self::from_aliases(aliases)
    }
}

impl<'a> IntoIterator for &'a AliasList {
    type Item = &'a Alias;
    type IntoIter = std::slice::Iter<'a, Alias>;

    fn into_iter(self) -> Self::IntoIter {
        self.aliases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample() -> AliasList {
        AliasList::from_aliases(vec![Alias::new("ll", "ls -la"), Alias::new("gs", "git status")])
    }

    #[test]
    fn test_listeners_see_every_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut list = sample();
        let sink = Rc::clone(&seen);
        list.subscribe(move |change, aliases| sink.borrow_mut().push((change, aliases.len())));

        list.push(Alias::new("gp", "git push"));
        list.replace(0, Alias::new("la", "ls -A"));
        list.remove(1);
        list.reset(Vec::new());

        assert_eq!(
            *seen.borrow(),
            vec![
                (AliasChange::Added(2), 3),
                (AliasChange::Replaced(0), 3),
                (AliasChange::Removed(1), 2),
                (AliasChange::Reset, 0),
            ]
        );
    }

    #[test]
    fn test_out_of_range_is_untouched() {
        let calls = Rc::new(RefCell::new(0));
        let mut list = sample();
        let counter = Rc::clone(&calls);
        list.subscribe(move |_, _| *counter.borrow_mut() += 1);

        assert!(list.replace(5, Alias::new("x", "y")).is_none());
        assert!(list.remove(2).is_none());
        assert_eq!(list, sample());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut list = sample();
        list.push(Alias::new("ll", "ls -lh"));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).map(|a| a.command.as_str()), Some("ls -lh"));
    }
}
