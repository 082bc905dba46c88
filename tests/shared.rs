mod support;

use std::collections::HashSet;
use std::thread;

use roster_store::{
    AutoConfirm, InMemoryKeyValueStore, KeyValueStore, RosterStore, SharedRosterStore,
};
use support::fixtures::{add_employee, assert_aggregates_consistent};

#[test]
fn concurrent_adds_are_serialized() {
    let storage = InMemoryKeyValueStore::new();
    let shared: SharedRosterStore<_, _> =
        RosterStore::initialize(storage.clone(), AutoConfirm(true)).into();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let shared = shared.clone();
            thread::spawn(move || {
                for n in 0..5 {
                    shared
                        .with(|store| add_employee(store, &format!("worker-{worker}-{n}"), "30"))
                        .unwrap()
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    shared
        .with(|store| {
            assert_eq!(store.employees().len(), 40);
            let ids: HashSet<_> = store.employees().iter().map(|e| e.id).collect();
            assert_eq!(ids.len(), 40);
            assert_aggregates_consistent(store);
        })
        .unwrap();

    let reloaded = RosterStore::initialize(storage.clone(), AutoConfirm(true));
    assert_eq!(reloaded.employees().len(), 40);
    assert!(storage.get_item("employees").unwrap().is_some());
}

#[test]
fn readers_see_consistent_snapshots() {
    let shared = SharedRosterStore::new(RosterStore::initialize(
        InMemoryKeyValueStore::new(),
        AutoConfirm(true),
    ));

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for n in 0..20 {
                shared
                    .with(|store| {
                        let id = add_employee(store, &format!("emp-{n}"), "25")?;
                        store.toggle_availability(id)
                    })
                    .unwrap()
                    .unwrap();
            }
        })
    };

    for _ in 0..20 {
        let snapshot = shared.snapshot().unwrap();
        assert_eq!(snapshot.aggregates.available_employees, 0);
        assert!(snapshot.visible_employees.is_empty());
    }
    writer.join().unwrap();

    assert_eq!(shared.snapshot().unwrap().aggregates.total_employees, 20);
}
