//! Integration tests wiring detectors, the controller, and the store
//! through a full reload cycle.

use std::fs;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use config_events::core::EventedConfig;
use config_events::reloading::{FileChangeDetector, ReloadingController};
use tempfile::TempDir;

#[test]
fn file_change_drives_a_full_reload_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "color: red\nsize: large\n").unwrap();

    let store: EventedConfig<String> = EventedConfig::new();
    store.reload_from_file(&config_path).unwrap();
    assert_eq!(store.get("color").as_deref(), Some("red"));
    assert_eq!(store.get("size").as_deref(), Some("large"));

    let detector = FileChangeDetector::new(&config_path)
        .unwrap()
        .with_refresh_delay(Duration::ZERO);
    let controller = ReloadingController::new(Box::new(detector));

    // Nothing changed yet.
    assert!(controller.check_for_reloading::<()>(None).is_none());

    std::thread::sleep(Duration::from_millis(20));
    fs::write(&config_path, "color: blue\nsize: large\n").unwrap();

    let event = controller
        .check_for_reloading(Some("requested by test"))
        .expect("modification should require a reload");
    assert_eq!(event.data(), Some(&"requested by test"));

    store.reload_from_file(&config_path).unwrap();
    event.controller().reset_reloading_state();

    assert_eq!(store.get("color").as_deref(), Some("blue"));
    assert!(!controller.is_in_reloading_state());
    assert!(controller.check_for_reloading::<()>(None).is_none());
}

#[test]
fn reload_replaces_contents_and_raises_one_pair() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "color: blue\n").unwrap();

    let observed: Arc<Mutex<Vec<(u32, bool, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&observed);

    let store: EventedConfig<String> = EventedConfig::new().with_sink(move |event| {
        log.lock()
            .unwrap()
            .push((event.kind().code(), event.is_before_update(), event.source().len()));
    });

    store.set_property("color", "red".to_string());
    store.set_property("legacy", "yes".to_string());
    observed.lock().unwrap().clear();

    store.reload_from_file(&config_path).unwrap();

    assert_eq!(store.get("color").as_deref(), Some("blue"));
    assert_eq!(store.get("legacy"), None);

    let reload = EventedConfig::<String>::RELOAD.code();
    let observed = observed.lock().unwrap();
    // One pair; the store still holds the old two properties before the
    // swap and exactly one after it.
    assert_eq!(*observed, vec![(reload, true, 2), (reload, false, 1)]);
}

#[test]
fn failed_reload_leaves_the_store_untouched_and_silent() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "count: not-a-number\n").unwrap();

    let observed: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&observed);

    let store: EventedConfig<u32> = EventedConfig::new().with_sink(move |event| {
        log.lock().unwrap().push(event.kind().code());
    });

    store.set_property("count", 7);
    observed.lock().unwrap().clear();

    assert!(store.reload_from_file(&config_path).is_err());
    assert_eq!(store.get("count"), Some(7));
    assert!(observed.lock().unwrap().is_empty());
}

#[test]
fn store_raises_pairs_for_every_mutation_kind() {
    let observed: Arc<Mutex<Vec<(u32, Option<String>, bool)>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&observed);

    let store: EventedConfig<String> = EventedConfig::new().with_sink(move |event| {
        log.lock().unwrap().push((
            event.kind().code(),
            event.property_name().map(str::to_owned),
            event.is_before_update(),
        ));
    });

    store.add_property("color", "red".to_string());
    store.set_property("color", "blue".to_string());
    store.clear_property("color");
    store.clear();

    let add = EventedConfig::<String>::ADD_PROPERTY.code();
    let set = EventedConfig::<String>::SET_PROPERTY.code();
    let clear_property = EventedConfig::<String>::CLEAR_PROPERTY.code();
    let clear = EventedConfig::<String>::CLEAR.code();

    let observed = observed.lock().unwrap();
    assert_eq!(
        *observed,
        vec![
            (add, Some("color".into()), true),
            (add, Some("color".into()), false),
            (set, Some("color".into()), true),
            (set, Some("color".into()), false),
            (clear_property, Some("color".into()), true),
            (clear_property, Some("color".into()), false),
            (clear, None, true),
            (clear, None, false),
        ]
    );
}
