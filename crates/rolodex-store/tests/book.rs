use chrono::NaiveDate;
use rolodex_core::domain::Record;
use rolodex_core::AddressBook;
use rolodex_store::error::StoreErrorKind;
use rolodex_store::Store;
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut grace = Record::new("Grace Hopper").unwrap();
    grace.add_phone("2222222222").unwrap();
    grace.add_phone("0501234567").unwrap();
    grace.add_birthday("09.12.1906", today()).unwrap();
    book.add_record(grace).unwrap();

    let mut ada = Record::new("Ada").unwrap();
    ada.add_phone("1111111111").unwrap();
    book.add_record(ada).unwrap();

    book.add_record(Record::new("Leap-Day").unwrap()).unwrap();
    book.find_mut("Leap-Day")
        .unwrap()
        .add_birthday("29.02.2000", today())
        .unwrap();

    book
}

#[test]
fn empty_store_loads_empty_book() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let book = store.contacts().load_book().expect("load");
    assert!(book.is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let book = sample_book();
    store.contacts().save_book(&book).expect("save");
    assert_eq!(store.contacts().count().expect("count"), 3);

    let loaded = store.contacts().load_book().expect("load");
    assert_eq!(loaded, book);
    let names: Vec<&str> = loaded.records().iter().map(|r| r.name().value()).collect();
    assert_eq!(names, ["Grace Hopper", "Ada", "Leap-Day"]);
    let phones: Vec<&str> = loaded.records()[0]
        .phones()
        .iter()
        .map(|p| p.value())
        .collect();
    assert_eq!(phones, ["2222222222", "0501234567"]);
}

#[test]
fn save_replaces_previous_state() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let mut book = sample_book();
    store.contacts().save_book(&book).expect("save");

    book.delete("Ada").expect("delete");
    book.rename("Grace Hopper", "Grace").expect("rename");
    book.find_mut("Grace")
        .unwrap()
        .edit_phone("2222222222", "3333333333")
        .unwrap();
    store.contacts().save_book(&book).expect("save again");

    let loaded = store.contacts().load_book().expect("load");
    assert_eq!(loaded, book);
    assert!(loaded.find("Ada").is_none());
    assert!(loaded.find("Grace").unwrap().find_phone("3333333333").is_some());
}

#[test]
fn book_survives_reopening_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("rolodex.sqlite3");

    {
        let store = Store::open(&path).expect("open");
        store.migrate().expect("migrate");
        store.contacts().save_book(&sample_book()).expect("save");
    }

    let store = Store::open(&path).expect("reopen");
    store.migrate().expect("migrate");
    let loaded = store.contacts().load_book().expect("load");
    assert_eq!(loaded, sample_book());
}

#[test]
fn stored_birthday_loads_when_clock_moves_back() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let mut book = AddressBook::new();
    let mut ada = Record::new("Ada").unwrap();
    ada.add_phone("0501234567").unwrap();
    ada.add_birthday("10.06.2024", today()).unwrap();
    book.add_record(ada).unwrap();
    book.add_record(Record::new("Bob").unwrap()).unwrap();
    store.contacts().save_book(&book).expect("save");

    let loaded = store.contacts().load_book().expect("load");
    assert_eq!(loaded, book);
    let yesterday = today().pred_opt().unwrap();
    assert!(loaded.upcoming_birthdays(yesterday, 7).iter().any(|item| item.name == "Ada"));
}

#[test]
fn corrupt_rows_are_reported() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
        .connection()
        .execute(
            "INSERT INTO contacts (name, position, birthday) VALUES ('Ada', 0, 'yesterday');",
            [],
        )
        .expect("insert");

    let err = store.contacts().load_book().unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidData);

    store
        .connection()
        .execute("UPDATE contacts SET birthday = NULL, name = '1bad';", [])
        .expect("update");
    let err = store.contacts().load_book().unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Core);
}
