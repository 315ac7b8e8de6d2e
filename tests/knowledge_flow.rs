//! Integration tests for the train/ask lifecycle of the knowledge base

use slate::kb::{fallback_message, find_best_match, resolve, KbError, KbStore, SLOT_FILE};
use slate::settings::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_train_and_answer_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings::default();

    // First open seeds the store
    let mut store = KbStore::open(temp_dir.path()).expect("Should open store");
    assert_eq!(store.len(), 3);

    // Unknown topic falls back (shares too few words with any seed)
    let reply = resolve("What is the speed of light?", &store, &settings);
    assert_eq!(reply, fallback_message(&settings.contact));

    // Teach the bot
    let entry = store
        .add(
            "Physics",
            "What is the speed of light?",
            "About 300,000 km per second in a vacuum.",
            "physics, light, speed",
        )
        .expect("Should add entry");
    let id = entry.id.clone();

    // Now the same question is answered with category and confidence
    let reply = resolve("What is the speed of light?", &store, &settings);
    assert!(reply.contains("300,000 km"));
    assert!(reply.contains("Category: Physics"));
    assert!(reply.contains("Confidence: 100%"));

    // Edit the answer
    let updated = store
        .update(
            &id,
            "Physics",
            "What is the speed of light?",
            "Exactly 299,792,458 metres per second.",
            "physics, light",
        )
        .expect("Should update entry");
    assert!(updated);

    let reply = resolve("What is the speed of light?", &store, &settings);
    assert!(reply.contains("299,792,458"));

    // The edit survives a reopen
    let reopened = KbStore::open(temp_dir.path()).expect("Should reopen store");
    assert_eq!(reopened.len(), 4);
    assert!(reopened.get(&id).unwrap().answer.contains("299,792,458"));

    // Forget the entry and the bot falls back again
    let mut store = reopened;
    assert!(store.remove(&id).expect("Should remove entry"));
    let reply = resolve("What is the speed of light?", &store, &settings);
    assert_eq!(reply, fallback_message(&settings.contact));
}

#[test]
fn test_add_validation_leaves_store_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = KbStore::open(temp_dir.path()).expect("Should open store");

    // A question that normalizes to nothing is rejected
    let err = store.add("Web", " ?!., ", "an answer", "").unwrap_err();
    assert!(matches!(err, KbError::MissingFields));

    let err = store.add("Web", "a question", "   ", "").unwrap_err();
    assert!(matches!(err, KbError::MissingFields));

    assert_eq!(store.len(), 3);
    let reopened = KbStore::open(temp_dir.path()).expect("Should reopen store");
    assert_eq!(reopened.len(), 3);
}

#[test]
fn test_unknown_ids_are_noops() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = KbStore::open(temp_dir.path()).expect("Should open store");

    let updated = store
        .update("missing-id", "C", "question", "answer", "")
        .expect("Update of unknown id should not error");
    assert!(!updated);

    let removed = store
        .remove("missing-id")
        .expect("Remove of unknown id should not error");
    assert!(!removed);

    assert_eq!(store.len(), 3);
}

#[test]
fn test_reset_restores_seeds() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = KbStore::open(temp_dir.path()).expect("Should open store");

    store
        .add("Web", "what is http", "A protocol for the web.", "http")
        .expect("Should add entry");
    let seed_id = store.entries()[0].id.clone();
    assert_eq!(store.len(), 4);

    let count = store.reset().expect("Should reset store");
    assert_eq!(count, 3);

    // Seeds come back fresh: same questions, new identities
    let reopened = KbStore::open(temp_dir.path()).expect("Should reopen store");
    assert_eq!(reopened.len(), 3);
    assert_eq!(reopened.entries()[1].question, "what is ping");
    assert!(reopened.get(&seed_id).is_none());
}

#[test]
fn test_insertion_order_breaks_ties() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = KbStore::open(temp_dir.path()).expect("Should open store");

    // Two entries with the same question but different answers
    store
        .add("First", "what is http", "First answer.", "")
        .expect("Should add first");
    store
        .add("Second", "what is http", "Second answer.", "")
        .expect("Should add second");

    let best = find_best_match("what is http", store.entries());
    assert_eq!(best.entry.unwrap().category, "First");

    // The order survives a reopen, so the winner does too
    let reopened = KbStore::open(temp_dir.path()).expect("Should reopen store");
    let best = find_best_match("what is http", reopened.entries());
    assert_eq!(best.entry.unwrap().category, "First");
}

#[test]
fn test_corrupt_slot_reseeds_on_open() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(SLOT_FILE), "## definitely not json ##")
        .expect("Should write corrupt slot");

    let store = KbStore::open(temp_dir.path()).expect("Should open despite corrupt slot");
    assert_eq!(store.len(), 3);

    // The reseed was persisted, so a second open parses cleanly
    let reopened = KbStore::open(temp_dir.path()).expect("Should reopen store");
    assert_eq!(reopened.len(), 3);
}

#[test]
fn test_configured_threshold_gates_answers() {
    let temp_dir = TempDir::new().unwrap();
    let store = KbStore::open(temp_dir.path()).expect("Should open store");

    // "ping" alone clears the default gate
    fs::write(
        temp_dir.path().join("config.toml"),
        "threshold = 0.36\ncontact = \"the TA\"\n",
    )
    .expect("Should write config");
    let settings = Settings::load(temp_dir.path()).expect("Should load settings");
    let reply = resolve("ping", &store, &settings);
    assert!(reply.contains("Category: Networking"));

    // A stricter install falls back on the same query and names its contact
    fs::write(
        temp_dir.path().join("config.toml"),
        "threshold = 0.9\ncontact = \"the TA\"\n",
    )
    .expect("Should write config");
    let settings = Settings::load(temp_dir.path()).expect("Should load settings");
    let reply = resolve("ping", &store, &settings);
    assert!(reply.contains("the TA"));
}
