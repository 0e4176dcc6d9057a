// src/tests/store_tests.rs

use crate::store::{find_previous_snapshot, load_area_codes, JsonStore, ListingStore};
use crate::tests::fixtures::{day, fingerprinted, root_entry, temp_dir, write_area_file, MemoryStore};

#[test]
fn root_round_trips_through_the_file() {
    let dir = temp_dir("root");
    let store = JsonStore::new(&dir);

    assert!(!store.root_exists("02100").unwrap());

    let entries = vec![root_entry(
        "abc",
        "20240101",
        "20240102",
        fingerprinted("Kaksiot", "Keskusta", 250000.0),
    )];
    store.save_root("02100", &entries).unwrap();

    assert!(store.root_exists("02100").unwrap());
    assert_eq!(store.load_root("02100").unwrap(), entries);
    assert!(dir.join("02100.json").is_file());
}

#[test]
fn snapshots_live_in_a_per_area_subdirectory() {
    let dir = temp_dir("snapshot");
    let store = JsonStore::new(&dir);
    let date = day(2024, 1, 2);

    assert!(!store.snapshot_exists("02100", date).unwrap());

    let listings = vec![fingerprinted("Yksiöt", "Tapiola", 155000.0)];
    store.save_snapshot("02100", date, &listings).unwrap();

    assert!(store.snapshot_exists("02100", date).unwrap());
    assert_eq!(store.load_snapshot("02100", date).unwrap(), listings);
    assert!(dir.join("02100").join("02100_20240102.json").is_file());
}

#[test]
fn snapshot_fields_keep_the_original_wire_names() {
    let dir = temp_dir("wire");
    let store = JsonStore::new(&dir);
    let date = day(2024, 1, 2);

    store
        .save_snapshot("02100", date, &[fingerprinted("Kaksiot", "Keskusta", 250000.0)])
        .unwrap();

    let text = std::fs::read_to_string(dir.join("02100").join("02100_20240102.json")).unwrap();
    assert!(text.contains("\"apartmentType\""));
    assert!(text.contains("\"pricePerSqm\""));
    assert!(text.contains("\"hasElevator\""));
}

#[test]
fn previous_snapshot_walks_backward_over_gaps() {
    let store = MemoryStore::default();
    let listings = vec![fingerprinted("Kaksiot", "Keskusta", 250000.0)];
    store.insert_snapshot("02100", day(2024, 1, 2), listings.clone());

    // Three days later; nothing on the 3rd and 4th.
    let found = find_previous_snapshot(&store, "02100", day(2024, 1, 5), day(2023, 12, 1))
        .unwrap()
        .expect("snapshot within the window");

    assert_eq!(found.0, day(2024, 1, 2));
    assert_eq!(found.1, listings);
}

#[test]
fn previous_snapshot_search_gives_up_at_the_epoch() {
    let store = MemoryStore::default();
    // A snapshot exists, but one day earlier than the epoch allows.
    store.insert_snapshot("02100", day(2023, 12, 31), Vec::new());

    let found =
        find_previous_snapshot(&store, "02100", day(2024, 1, 5), day(2024, 1, 1)).unwrap();

    assert!(found.is_none());
}

#[test]
fn todays_snapshot_is_never_the_previous_one() {
    let store = MemoryStore::default();
    let today = day(2024, 1, 5);
    store.insert_snapshot("02100", today, Vec::new());

    let found = find_previous_snapshot(&store, "02100", today, day(2024, 1, 1)).unwrap();

    assert!(found.is_none());
}

#[test]
fn area_codes_are_filtered_sorted_and_deduped() {
    let dir = temp_dir("areas");
    let path = write_area_file(
        &dir,
        &[
            ("02600", "1"),
            ("00100", "1"),
            ("02100", "1"),
            ("02100", "1"),
            ("99999", "2"), // not a postal-code entry
        ],
    );

    let codes = load_area_codes(&path).unwrap();

    assert_eq!(codes, vec!["00100", "02100", "02600"]);
}
