//! Shared roster fixtures for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use roster_store::{
    AutoConfirm, DraftField, Employee, EmployeeId, InMemoryKeyValueStore, KeyValueStore,
    RosterError, RosterStore,
};

pub type TestStore = RosterStore<InMemoryKeyValueStore, AutoConfirm>;

pub fn employee(id: EmployeeId, name: &str, age: u32, available: bool) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        age,
        available,
    }
}

/// Storage holding `employees` under the default key.
pub fn seeded_storage(employees: &[Employee]) -> InMemoryKeyValueStore {
    let storage = InMemoryKeyValueStore::new();
    storage
        .set_item("employees", &serde_json::to_string(employees).unwrap())
        .unwrap();
    storage
}

pub fn seeded_store(employees: &[Employee]) -> TestStore {
    RosterStore::initialize(seeded_storage(employees), AutoConfirm(true))
}

/// A mixed roster: two available, one not.
pub fn staff() -> Vec<Employee> {
    vec![
        employee(3, "Cleo Park", 28, true),
        employee(2, "Bo Annan", 41, false),
        employee(1, "Ann Lee", 30, true),
    ]
}

/// Two employees sharing id 2, as length-based ids produce after a delete.
pub fn duplicate_staff() -> Vec<Employee> {
    vec![
        employee(2, "Cleo Park", 28, true),
        employee(2, "Bo Annan", 41, false),
        employee(1, "Ann Lee", 30, true),
    ]
}

/// Open the add form, fill it in and save.
pub fn add_employee<S, P>(
    store: &mut RosterStore<S, P>,
    name: &str,
    age: &str,
) -> Result<EmployeeId, RosterError>
where
    S: KeyValueStore,
    P: roster_store::ConfirmPrompt,
{
    store.open_add_form()?;
    store.update_draft_field(DraftField::Name, name)?;
    store.update_draft_field(DraftField::Age, age)?;
    store.save_draft()
}

/// Edit an existing employee through the form.
pub fn edit_employee<S, P>(
    store: &mut RosterStore<S, P>,
    id: EmployeeId,
    name: &str,
    age: &str,
) -> Result<EmployeeId, RosterError>
where
    S: KeyValueStore,
    P: roster_store::ConfirmPrompt,
{
    store.open_edit_form(id)?;
    store.update_draft_field(DraftField::Name, name)?;
    store.update_draft_field(DraftField::Age, age)?;
    store.save_draft()
}

/// A prompt that answers `answer` and counts how often it was asked.
pub fn counting_prompt(answer: bool) -> (impl Fn(&str) -> bool, Rc<Cell<usize>>) {
    let asked = Rc::new(Cell::new(0));
    let counter = Rc::clone(&asked);
    let prompt = move |_: &str| {
        counter.set(counter.get() + 1);
        answer
    };
    (prompt, asked)
}

/// Aggregates must always match a recount of the roster.
pub fn assert_aggregates_consistent<S, P>(store: &RosterStore<S, P>)
where
    S: KeyValueStore,
    P: roster_store::ConfirmPrompt,
{
    let aggregates = store.aggregates();
    assert_eq!(aggregates.total_employees, store.employees().len());
    assert_eq!(
        aggregates.available_employees,
        store.employees().iter().filter(|e| e.available).count()
    );
}
