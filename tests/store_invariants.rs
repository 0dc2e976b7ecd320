use mailedit::store::{DocumentStore, StoreError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Command {
    Add(String, String),
    Upload(String, Vec<u8>),
    Select(usize),
    Delete,
    Replace(String, String),
    Edit(String),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        ("[a-z]{0,4}", "[ab ]{0,8}").prop_map(|(t, c)| Command::Add(t, c)),
        ("[a-z]{1,4}", proptest::collection::vec(any::<u8>(), 0..8))
            .prop_map(|(n, b)| Command::Upload(n, b)),
        (0usize..8).prop_map(Command::Select),
        Just(Command::Delete),
        ("[ab]{0,2}", "[ab]{0,3}").prop_map(|(t, r)| Command::Replace(t, r)),
        "[ab\n]{0,8}".prop_map(Command::Edit),
    ]
}

fn apply(store: &mut DocumentStore, cmd: &Command) -> Result<(), StoreError> {
    match cmd {
        Command::Add(title, content) => store.add_document(title, content),
        Command::Upload(name, bytes) => store.upload_document(name, bytes.clone()),
        Command::Select(index) => store.select_document(*index),
        Command::Delete => store.delete_active_document().map(|_| ()),
        Command::Replace(target, replacement) => {
            store.replace_in_active(target, replacement).map(|_| ())
        }
        Command::Edit(content) => {
            store.edit_active(content.clone());
            Ok(())
        }
    }
}

proptest! {
    #[test]
    fn store_never_empties_and_active_index_stays_valid(
        cmds in proptest::collection::vec(command(), 0..40)
    ) {
        let mut store = DocumentStore::initialize();
        for cmd in &cmds {
            let _ = apply(&mut store, cmd);
            prop_assert!(store.len() >= 1);
            prop_assert!(store.active_index() < store.len());
        }
    }

    #[test]
    fn failed_commands_leave_store_unchanged(
        setup in proptest::collection::vec(command(), 0..20),
        cmd in command()
    ) {
        let mut store = DocumentStore::initialize();
        for c in &setup {
            let _ = apply(&mut store, c);
        }
        let before = store.clone();
        if apply(&mut store, &cmd).is_err() {
            prop_assert_eq!(store, before);
        }
    }

    #[test]
    fn replace_count_matches_occurrences(
        content in "[ab]{0,16}",
        target in "[ab]{1,3}",
        replacement in "[abc]{0,3}"
    ) {
        let mut store = DocumentStore::initialize();
        store.edit_active(content.clone());
        let count = store.replace_in_active(&target, &replacement).unwrap();
        prop_assert_eq!(count, content.matches(target.as_str()).count());
        prop_assert_eq!(store.active().content(), content.replace(&target, &replacement));
    }

    #[test]
    fn edit_active_is_idempotent(content in ".{0,32}") {
        let mut once = DocumentStore::initialize();
        once.edit_active(content.clone());
        let mut twice = once.clone();
        twice.edit_active(content.clone());
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn test_deletion_floor() {
    let mut store = DocumentStore::initialize();
    assert!(matches!(
        store.delete_active_document(),
        Err(StoreError::Precondition(_))
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_upload_decode_failure_keeps_documents() {
    let mut store = DocumentStore::initialize();
    store.add_document("Existing", "body").unwrap();
    let before: Vec<_> = store.documents().to_vec();

    let err = store.upload_document("bad.txt", vec![0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)));
    assert_eq!(store.documents(), before.as_slice());
}
