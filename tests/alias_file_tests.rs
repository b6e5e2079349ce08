//! Alias file synchronization through the public library API

use bam::{parse, serialize, Alias, AliasSession, AliasStore, Home, LoadOutcome};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

#[test]
fn test_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let home = Home::new(dir.path());
    let store = AliasStore::for_home(&home);

    let aliases = vec![
        Alias::new("ll", "ls -la"),
        Alias::new("..", "cd .."),
        Alias::new("k", "kubectl --context=prod"),
        Alias::new("ll", "ls -lh"),
    ];
    store.save(&aliases).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.as_slice(), aliases.as_slice());
    assert_eq!(parse(&serialize(&aliases)), aliases);
}

#[test]
fn test_messy_file_is_normalized_on_save() {
    let dir = tempdir().unwrap();
    let home = Home::new(dir.path());
    fs::write(
        home.alias_file(),
        indoc! {r#"
            # My aliases
              alias gs="git status"

            alias foo
            if true; then echo; fi
            alias   gl = 'git log --oneline'
        "#},
    )
    .unwrap();

    let store = AliasStore::for_home(&home);
    let mut session = AliasSession::open(&store).unwrap();
    session.add("gp", "git push").unwrap();

    assert_eq!(
        fs::read_to_string(home.alias_file()).unwrap(),
        "alias gs='git status'\nalias gl='git log --oneline'\nalias gp='git push'\n"
    );
}

#[test]
fn test_open_reports_access_state() {
    let dir = tempdir().unwrap();
    let store = AliasStore::new(dir.path().join(".bash_aliases"));
    assert_eq!(store.open().unwrap(), LoadOutcome::Missing);

    fs::write(store.alias_file(), "alias a='b'\n").unwrap();
    match store.open().unwrap() {
        LoadOutcome::Loaded(list) => assert_eq!(list.as_slice(), &[Alias::new("a", "b")]),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_session_listener_tracks_file() {
    let dir = tempdir().unwrap();
    let store = AliasStore::new(dir.path().join(".bash_aliases"));
    let mut session = AliasSession::open(&store).unwrap();

    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshots);
    session.subscribe(move |_, aliases| sink.borrow_mut().push(aliases.len()));

    session.add("a", "1").unwrap();
    session.add("b", "2").unwrap();
    session.delete(0).unwrap();

    assert_eq!(*snapshots.borrow(), vec![1, 2, 1]);
    assert_eq!(fs::read_to_string(store.alias_file()).unwrap(), "alias b='2'\n");
}
