//! End-to-end flow: validate input, compute the norm, persist, reload.

use approx::assert_relative_eq;
use petronorm::{import, norm, validate, AnalysisRecord, AnalysisStore, Mineral};
use tempfile::TempDir;

const REFERENCE_ENTRIES: [&str; 10] = [
    "SiO2=60",
    "Al2O3=15",
    "Fe2O3=3",
    "FeO=4",
    "MgO=4",
    "CaO=7",
    "Na2O=3",
    "K2O=2",
    "TiO2=1",
    "P2O5=0.5",
];

#[test]
fn calculate_save_reload_round_trip() {
    let comp = validate::compose_entries(REFERENCE_ENTRIES).unwrap();
    validate::check(&comp).unwrap();

    let record = AnalysisRecord::new("reference-run", "end-to-end check", comp);
    assert_relative_eq!(record.result.total(), 100.0, epsilon = 1e-3);

    let dir = TempDir::new().unwrap();
    let store = AnalysisStore::open(dir.path().join("saved_analyses.json"));
    store.save(&record).unwrap();

    let reloaded = store.load_all().remove("reference-run").unwrap();
    assert_eq!(reloaded, record);

    // Recomputing from the persisted snapshot reproduces the stored result
    // bit for bit.
    let recomputed = norm::compute(&reloaded.oxides);
    for mineral in Mineral::ALL {
        assert_eq!(
            recomputed.get(mineral).to_bits(),
            record.result.get(mineral).to_bits()
        );
    }
}

#[test]
fn csv_import_feeds_the_calculator() {
    let csv = format!("{}60,15,3,4,4,7,3,2,1,0.5\n", import::template());
    let comp = import::read_single_row_from(csv.as_bytes()).unwrap();

    let from_entries = validate::compose_entries(REFERENCE_ENTRIES).unwrap();
    assert_eq!(comp, from_entries);

    let result = norm::compute(&comp);
    assert_relative_eq!(result.total(), 100.0, epsilon = 1e-3);
}

#[test]
fn editing_a_note_replaces_the_record_in_place() {
    let comp = validate::compose_entries(REFERENCE_ENTRIES).unwrap();
    let dir = TempDir::new().unwrap();
    let store = AnalysisStore::open(dir.path().join("saved_analyses.json"));

    let record = AnalysisRecord::new("run", "", comp);
    store.save(&record).unwrap();

    // Only the note changes; everything else, timestamp included, is kept.
    let mut edited = store.load_all().remove("run").unwrap();
    edited.note = "second thoughts".to_string();
    store.save(&edited).unwrap();

    let all = store.load_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all["run"].note, "second thoughts");
    assert_eq!(all["run"].timestamp, record.timestamp);
    assert_eq!(all["run"].result, record.result);
}
