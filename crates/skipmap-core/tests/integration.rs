use parking_lot::Mutex;
use skipmap_core::{Config, Error, SkipList};
use std::sync::Arc;
use std::thread;

fn level_keys(dump: &str, level: usize) -> Vec<String> {
    let prefix = format!("level: {} - node: ", level);
    dump.lines()
        .filter_map(|line| line.strip_prefix(&prefix))
        .filter_map(|rest| rest.split(", ").next())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_insert_find_delete() {
    let mut list = SkipList::new();
    list.insert(1, "a");
    list.insert(5, "b");
    list.insert(3, "c");

    assert_eq!(list.find(&3), Some(&"c"));

    list.delete(&5);
    assert_eq!(list.find(&5), None);
    assert_eq!(level_keys(&list.debug_dump(), 0), vec!["1", "3"]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_overwrite_same_key() {
    let mut list = SkipList::new();
    list.insert(9, 1.0);
    list.insert(9, 1.1);
    list.insert(9, 1.2);

    assert_eq!(list.find(&9), Some(&1.2));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_mixed_inserts_and_overwrites() {
    let mut list = SkipList::with_config(Config::new().with_level_hint(32)).unwrap();

    for (key, value) in [
        (1, 0.2),
        (0, 0.1),
        (2, 0.3),
        (3, 0.4),
        (5, 0.6),
        (6, 0.7),
        (7, 0.8),
        (8, 0.9),
        (9, 1.0),
        (9, 1.1),
        (9, 1.2),
        (6, 6.6),
    ] {
        list.insert(key, value);
    }

    assert_eq!(list.len(), 9);
    assert_eq!(list.find(&6), Some(&6.6));
    assert_eq!(list.find(&9), Some(&1.2));
    assert_eq!(list.find(&4), None);
    assert_eq!(
        level_keys(&list.debug_dump(), 0),
        vec!["0", "1", "2", "3", "5", "6", "7", "8", "9"]
    );
}

#[test]
fn test_every_level_sorted_and_nested() {
    let mut list = SkipList::with_config(Config::new().with_seed(2024)).unwrap();
    for i in 0..500u32 {
        list.insert((i * 37) % 1009, i);
    }

    let dump = list.debug_dump();
    let base = level_keys(&dump, 0);
    assert_eq!(base.len(), list.len());

    for level in 0..=list.level() {
        let keys: Vec<u32> = level_keys(&dump, level)
            .iter()
            .map(|k| k.parse().unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "level {} unsorted", level);
        assert!(keys.iter().all(|k| base.contains(&k.to_string())));
    }
}

#[test]
fn test_seeded_lists_match() {
    let build = || {
        let mut list = SkipList::with_config(Config::new().with_seed(99)).unwrap();
        for i in 0..100 {
            list.insert(i, i * i);
        }
        list
    };

    assert_eq!(build().debug_dump(), build().debug_dump());
}

#[test]
fn test_invalid_config() {
    let result = SkipList::<u8, u8>::with_config(Config::new().with_max_level(64));
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_level_hint_above_max_level() {
    let build = |config: Config| {
        let mut list = SkipList::with_config(config).unwrap();
        for i in 0..200u32 {
            list.insert(i * 13 % 211, i);
        }
        for i in 0..40u32 {
            list.delete(&(i * 5));
        }
        list
    };

    let plain = build(Config::new().with_seed(3).with_max_level(8));
    let hinted = build(Config::new().with_seed(3).with_max_level(8).with_level_hint(64));

    assert_eq!(hinted.len(), plain.len());
    assert_eq!(hinted.level(), plain.level());
    assert_eq!(hinted.debug_dump(), plain.debug_dump());
}

#[test]
fn test_parallel_inserts_behind_mutex() {
    let list = Arc::new(Mutex::new(SkipList::new()));
    let threads = 8;
    let per_thread = 250;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..per_thread {
                    let key = t * per_thread + i;
                    list.lock().insert(key, key as f64 / 2.0);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let list = list.lock();
    assert_eq!(list.len(), threads * per_thread);
    for key in 0..threads * per_thread {
        assert_eq!(list.find(&key), Some(&(key as f64 / 2.0)));
    }
}
