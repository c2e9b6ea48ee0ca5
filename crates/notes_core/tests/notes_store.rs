use notes_core::{
    generate_default_notes, LocalNotesApiService, Note, NotesApiService, RemovalSelector,
    StoreError,
};

fn seeded(notes: &[Note]) -> LocalNotesApiService {
    LocalNotesApiService::with_notes(notes.to_vec())
}

fn abc() -> (Note, Note, Note) {
    (
        Note::new("Titre1", "Contenu1"),
        Note::new("Titre2", "Contenu2"),
        Note::new("Titre3", "Contenu3"),
    )
}

#[test]
fn fresh_store_is_non_empty() {
    let store = LocalNotesApiService::new();
    assert!(!store.get_all_notes().is_empty());
    assert_eq!(store.len(), generate_default_notes().len());
}

#[test]
fn add_note_appends_at_the_end() {
    let store = LocalNotesApiService::new();
    let before = store.get_all_notes();
    let note = Note::new("Titre", "Contenu");

    store.add_note(note.clone());

    let after = store.get_all_notes();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&note));
    assert_eq!(&after[..before.len()], before.as_slice());
}

#[test]
fn add_note_keeps_duplicates() {
    let store = seeded(&[]);
    let note = Note::new("same", "value");

    store.add_note(note.clone());
    store.add_note(note.clone());

    assert_eq!(store.get_all_notes(), vec![note.clone(), note]);
}

#[test]
fn remove_by_index_excises_interior_element() {
    let (a, b, c) = abc();
    let store = seeded(&[a.clone(), b.clone(), c.clone()]);

    let removed = store.remove_note(RemovalSelector::ByIndex(1)).unwrap();

    assert_eq!(removed, Some(b));
    assert_eq!(store.get_all_notes(), vec![a, c]);
}

#[test]
fn remove_by_index_out_of_range_is_an_error() {
    let (a, b, _) = abc();
    let store = seeded(&[a.clone(), b.clone()]);

    let err = store.remove_note(RemovalSelector::ByIndex(2)).unwrap_err();

    assert_eq!(err, StoreError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(store.get_all_notes(), vec![a, b]);
}

#[test]
fn remove_by_value_drops_first_match_only() {
    let (a, b, _) = abc();
    let store = seeded(&[a.clone(), b.clone(), a.clone()]);

    let removed = store.remove_note(RemovalSelector::ByValue(a.clone())).unwrap();

    assert_eq!(removed, Some(a.clone()));
    assert_eq!(store.get_all_notes(), vec![b, a]);
}

#[test]
fn remove_by_value_leaves_other_notes() {
    let (a, b, _) = abc();
    let store = seeded(&[a.clone(), b.clone()]);

    store.remove_note(RemovalSelector::ByValue(a)).unwrap();

    assert_eq!(store.get_all_notes(), vec![b]);
}

#[test]
fn remove_by_title_drops_first_note_with_that_title() {
    let (a, b, _) = abc();
    let same_title = Note::new("Titre1", "other body");
    let store = seeded(&[a.clone(), b.clone(), same_title.clone()]);

    let removed = store
        .remove_note(RemovalSelector::ByTitle("Titre1".to_string()))
        .unwrap();

    assert_eq!(removed, Some(a));
    assert_eq!(store.get_all_notes(), vec![b, same_title]);
}

#[test]
fn removal_matching_nothing_leaves_collection_unchanged() {
    let (a, b, c) = abc();
    let store = seeded(&[a.clone(), b.clone()]);

    assert_eq!(store.remove_note(RemovalSelector::ByValue(c)).unwrap(), None);
    assert_eq!(
        store
            .remove_note(RemovalSelector::ByTitle("missing".to_string()))
            .unwrap(),
        None
    );
    assert_eq!(store.get_all_notes(), vec![a, b]);
}

#[test]
fn removal_by_value_requires_both_fields_to_match() {
    let (a, _, _) = abc();
    let store = seeded(&[a.clone()]);

    let near_miss = Note::new(a.title.clone(), "different body");
    assert_eq!(
        store.remove_note(RemovalSelector::ByValue(near_miss)).unwrap(),
        None
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn store_is_shareable_across_threads() {
    let store = std::sync::Arc::new(seeded(&[]));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    store.add_note(Note::new(format!("w{worker}"), format!("n{i}")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 100);
}
