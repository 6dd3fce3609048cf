use hrdash_core::{seed, Leave, LeaveStatus, RecordRepository, RecordStore, StoreError};

fn leave(name: &str) -> Leave {
    Leave {
        id: 0,
        employee_name: name.to_string(),
        employee_id: 7,
        leave_type: "Sick".to_string(),
        start_date: "2025-03-03".to_string(),
        end_date: "2025-03-04".to_string(),
        status: LeaveStatus::Pending,
    }
}

#[test]
fn insert_assigns_fresh_ids_in_order() {
    let mut store = RecordStore::new();
    let first = store.insert(leave("David Lee")).unwrap();
    let second = store.insert(leave("Sophia White")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].employee_name, "David Lee");
    assert_eq!(store.list()[1].employee_name, "Sophia White");
}

#[test]
fn insert_ignores_placeholder_id() {
    let mut store = RecordStore::new();
    let mut record = leave("David Lee");
    record.id = 99;
    let stored = store.insert(record).unwrap();

    assert_eq!(stored.id, 1);
    assert!(store.get(99).is_none());
}

#[test]
fn update_replaces_in_place_and_keeps_id() {
    let mut store = RecordStore::new();
    let first = store.insert(leave("David Lee")).unwrap();
    store.insert(leave("Sophia White")).unwrap();

    let mut changed = leave("David Lee");
    changed.status = LeaveStatus::Approved;
    changed.id = 42;
    let updated = store.update(first.id, changed).unwrap();

    assert_eq!(updated.id, first.id);
    assert_eq!(store.list()[0].status, LeaveStatus::Approved);
    assert_eq!(store.list()[1].employee_name, "Sophia White");
}

#[test]
fn update_unknown_id_leaves_store_untouched() {
    let mut store = RecordStore::new();
    store.insert(leave("David Lee")).unwrap();
    let before = store.list().to_vec();

    let result = store.update(5, leave("Nobody"));

    assert_eq!(result, Err(StoreError::NotFound(5)));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn remove_returns_the_record() {
    let mut store = RecordStore::new();
    let first = store.insert(leave("David Lee")).unwrap();
    store.insert(leave("Sophia White")).unwrap();

    let removed = store.remove(first.id).unwrap();
    assert_eq!(removed.employee_name, "David Lee");
    assert_eq!(store.len(), 1);
    assert!(store.get(first.id).is_none());

    assert_eq!(store.remove(first.id), Err(StoreError::NotFound(first.id)));
    assert_eq!(store.len(), 1);
}

#[test]
fn ids_are_not_reused_after_remove() {
    let mut store = RecordStore::new();
    let first = store.insert(leave("David Lee")).unwrap();
    store.remove(first.id).unwrap();

    let next = store.insert(leave("Sophia White")).unwrap();
    assert_ne!(next.id, first.id);
}

#[test]
fn seeded_store_continues_above_highest_id() {
    let mut store = RecordStore::with_records(seed::employees());
    assert_eq!(store.len(), 13);

    let mut hire = seed::employees().remove(0);
    hire.name = "New Hire".to_string();
    let stored = store.insert(hire).unwrap();

    assert_eq!(stored.id, 14);
    assert_eq!(store.len(), 14);
}

#[test]
fn seeds_at_the_id_ceiling_refuse_further_inserts() {
    let mut top = leave("David Lee");
    top.id = i64::MAX;
    let mut store = RecordStore::with_records(vec![top.clone()]);

    let result = store.insert(leave("Sophia White"));

    assert_eq!(result, Err(StoreError::IdsExhausted));
    assert_eq!(store.list(), &[top]);
}

#[test]
fn last_id_is_handed_out_once() {
    let mut below = leave("David Lee");
    below.id = i64::MAX - 1;
    let mut store = RecordStore::with_records(vec![below]);

    let last = store.insert(leave("Sophia White")).unwrap();

    assert_eq!(last.id, i64::MAX);
    assert_eq!(
        store.insert(leave("Emily Davis")),
        Err(StoreError::IdsExhausted)
    );
    assert_eq!(store.len(), 2);
}
