//! Loaded alias list bound to its store

use tracing::debug;

use super::{AliasStore, StoreError};
use crate::model::{Alias, AliasChange, AliasList};

/// In-memory alias list that writes itself back after every change.
///
/// Mutations are applied to the list first and then persisted; if the save
/// fails the error is returned but the list keeps the change, so the next
/// successful save catches the file up.
#[derive(Debug)]
pub struct AliasSession<'s> {
    store: &'s AliasStore,
    list: AliasList,
}

impl<'s> AliasSession<'s> {
    /// Load the alias file into a new session
    pub fn open(store: &'s AliasStore) -> Result<Self, StoreError> {
        let list = store.load()?;
        Ok(Self { store, list })
    }

    /// Start from an already populated list (e.g. a manual import)
    pub fn with_list(store: &'s AliasStore, list: AliasList) -> Self {
        Self { store, list }
    }

    pub fn aliases(&self) -> &AliasList {
        &self.list
    }

    pub fn store(&self) -> &AliasStore {
        self.store
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(AliasChange, &[Alias]) + 'static,
    {
        self.list.subscribe(listener);
    }

    /// Append a new alias and save
    pub fn add(&mut self, name: &str, command: &str) -> Result<&Alias, StoreError> {
        let alias = validate(name, command)?;
        self.list.push(alias);
        self.persist()?;
        let index = self.list.len() - 1;
        self.get(index)
    }

    /// Replace the alias at `index` (0-based) and save. Returns the old alias.
    pub fn edit(&mut self, index: usize, name: &str, command: &str) -> Result<Alias, StoreError> {
        let alias = validate(name, command)?;
        let previous = self
            .list
            .replace(index, alias)
            .ok_or(StoreError::NoSuchAlias {
                index,
                len: self.list.len(),
            })?;
        self.persist()?;
        Ok(previous)
    }

    /// Remove the alias at `index` (0-based) and save
    pub fn delete(&mut self, index: usize) -> Result<Alias, StoreError> {
        let removed = self.list.remove(index).ok_or(StoreError::NoSuchAlias {
            index,
            len: self.list.len(),
        })?;
        self.persist()?;
        Ok(removed)
    }

    /// Replace the whole list with the aliases in `content` and save
    pub fn import(&mut self, content: &[u8]) -> Result<usize, StoreError> {
        let count = super::import_bytes(&mut self.list, content);
        self.persist()?;
        Ok(count)
    }

    /// Discard in-memory state and read the file again
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let fresh = self.store.load()?;
        let aliases: Vec<Alias> = fresh.iter().cloned().collect();
        self.list.reset(aliases);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&Alias, StoreError> {
        self.list.get(index).ok_or(StoreError::NoSuchAlias {
            index,
            len: self.list.len(),
        })
    }

    fn persist(&self) -> Result<(), StoreError> {
        debug!("persisting {} aliases", self.list.len());
        self.store.save(self.list.as_slice())
    }
}

/// Trim and check a name/command pair typed by the user
fn validate(name: &str, command: &str) -> Result<Alias, StoreError> {
    let name = name.trim();
    let command = command.trim();

    if name.is_empty() {
        return Err(StoreError::InvalidAlias("name must not be empty".into()));
    }
    if command.is_empty() {
        return Err(StoreError::InvalidAlias("command must not be empty".into()));
    }
    if name.contains('=') {
        return Err(StoreError::InvalidAlias(format!(
            "name '{}' must not contain '='",
            name
        )));
    }

    Ok(Alias::new(name, command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    fn read(store: &AliasStore) -> String {
        std::fs::read_to_string(store.alias_file()).unwrap()
    }

    #[test]
    fn test_mutations_are_persisted() {
        let dir = tempdir().unwrap();
        let store = AliasStore::new(dir.path().join(".bash_aliases"));
        let mut session = AliasSession::open(&store).unwrap();

        session.add("ll", "ls -la").unwrap();
        session.add("gs", "git status").unwrap();
        assert_eq!(read(&store), "alias ll='ls -la'\nalias gs='git status'\n");

        let previous = session.edit(0, " la ", " ls -A ").unwrap();
        assert_eq!(previous, Alias::new("ll", "ls -la"));
        assert_eq!(read(&store), "alias la='ls -A'\nalias gs='git status'\n");

        session.delete(1).unwrap();
        assert_eq!(read(&store), "alias la='ls -A'\n");
    }

    #[test]
    fn test_out_of_range_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let store = AliasStore::new(dir.path().join(".bash_aliases"));
        std::fs::write(store.alias_file(), "alias a='b'\n").unwrap();
        let mut session = AliasSession::open(&store).unwrap();

        assert!(matches!(
            session.edit(3, "x", "y"),
            Err(StoreError::NoSuchAlias { index: 3, len: 1 })
        ));
        assert!(session.delete(1).is_err());
        assert_eq!(read(&store), "alias a='b'\n");
        assert_eq!(session.aliases().len(), 1);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let dir = tempdir().unwrap();
        let store = AliasStore::new(dir.path().join(".bash_aliases"));
        let mut session = AliasSession::open(&store).unwrap();

        assert!(matches!(session.add("  ", "ls"), Err(StoreError::InvalidAlias(_))));
        assert!(matches!(session.add("ll", ""), Err(StoreError::InvalidAlias(_))));
        assert!(matches!(session.add("a=b", "ls"), Err(StoreError::InvalidAlias(_))));
        assert!(session.aliases().is_empty());
        assert!(!store.alias_file().exists());
    }

    #[test]
    fn test_import_and_reload_notify_listeners() {
        let dir = tempdir().unwrap();
        let store = AliasStore::new(dir.path().join(".bash_aliases"));
        let mut session = AliasSession::open(&store).unwrap();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        session.subscribe(move |change, _| sink.borrow_mut().push(change));

        let count = session.import(b"alias x=\"ls -la\"\nalias y='echo hi'\n").unwrap();
        assert_eq!(count, 2);
        assert_eq!(read(&store), "alias x='ls -la'\nalias y='echo hi'\n");

        std::fs::write(store.alias_file(), "alias z='pwd'\n").unwrap();
        session.reload().unwrap();
        assert_eq!(session.aliases().as_slice(), &[Alias::new("z", "pwd")]);
        assert_eq!(*changes.borrow(), vec![AliasChange::Reset, AliasChange::Reset]);
    }
}
