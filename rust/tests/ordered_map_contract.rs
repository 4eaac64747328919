use btreemap::OrderedMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const TEST_SIZE: i32 = 2_000;

fn shuffled_keys(seed: u64) -> Vec<i32> {
    let mut keys: Vec<i32> = (0..TEST_SIZE).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

fn visit_count<K, V>(map: &OrderedMap<K, V>) -> usize {
    let mut count = 0;
    map.for_each(|_, _| {
        count += 1;
        true
    });
    count
}

/// Stamps out the same structural test for several degrees.
macro_rules! degree_tests {
    ($($degree:literal),*) => {
        paste::paste! {
            $(
                #[test]
                fn [<invariants_hold_through_shuffled_workload_degree_ $degree>]() {
                    let mut map = OrderedMap::new($degree).unwrap();
                    let keys = shuffled_keys($degree as u64);

                    for (i, key) in keys.iter().enumerate() {
                        assert_eq!(map.insert(*key, key * 2), None);
                        if i % 97 == 0 {
                            assert_eq!(map.check_invariants_detailed(), Ok(()));
                        }
                    }
                    assert_eq!(map.len(), TEST_SIZE as usize);
                    assert_eq!(map.check_invariants_detailed(), Ok(()));

                    // remove every other key in a different random order
                    let mut to_remove: Vec<i32> =
                        keys.iter().copied().filter(|k| k % 2 == 0).collect();
                    to_remove.shuffle(&mut StdRng::seed_from_u64(!($degree as u64)));
                    for (i, key) in to_remove.iter().enumerate() {
                        assert_eq!(map.remove(key), Some(key * 2));
                        if i % 97 == 0 {
                            assert_eq!(map.check_invariants_detailed(), Ok(()));
                        }
                    }
                    assert_eq!(map.check_invariants_detailed(), Ok(()));

                    let remaining: Vec<i32> = map.keys().copied().collect();
                    let expected: Vec<i32> = (0..TEST_SIZE).filter(|k| k % 2 == 1).collect();
                    assert_eq!(remaining, expected);
                    assert_eq!(visit_count(&map), map.len());
                }

                #[test]
                fn [<drain_to_empty_degree_ $degree>]() {
                    let mut map = OrderedMap::new($degree).unwrap();
                    for key in shuffled_keys(7) {
                        map.insert(key, ());
                    }
                    for key in shuffled_keys(8) {
                        assert_eq!(map.remove(&key), Some(()));
                    }
                    assert!(map.is_empty());
                    assert_eq!(map.height(), 0);
                    assert_eq!(visit_count(&map), 0);
                    assert!(map.check_invariants());
                }
            )*
        }
    };
}

degree_tests!(2, 3, 4, 7, 10, 32);

#[test]
fn round_trip_for_every_key() {
    let mut map = OrderedMap::new(5).unwrap();
    for key in shuffled_keys(1) {
        map.insert(key, format!("v{}", key));
    }
    for key in 0..TEST_SIZE {
        assert_eq!(map.get(&key), Some(&format!("v{}", key)));
    }
}

#[test]
fn overwrite_returns_previous_value() {
    let mut map = OrderedMap::new(3).unwrap();
    for key in 0..100 {
        map.insert(key, "v1");
    }
    for key in 0..100 {
        assert_eq!(map.insert(key, "v2"), Some("v1"));
        assert_eq!(map.get(&key), Some(&"v2"));
    }
    assert_eq!(map.len(), 100);
}

#[test]
fn delete_miss_changes_nothing() {
    let mut map = OrderedMap::new(2).unwrap();
    for key in (0..200).map(|k| k * 3) {
        map.insert(key, key);
    }
    let before: Vec<(i32, i32)> = map.items().map(|(k, v)| (*k, *v)).collect();

    for missing in [-5, 1, 2, 301, 598, 10_000] {
        assert_eq!(map.remove(&missing), None);
    }

    let after: Vec<(i32, i32)> = map.items().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(before, after);
    assert_eq!(map.len(), 200);
    assert!(map.check_invariants());
}

#[test]
fn len_matches_traversal_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut map = OrderedMap::new(3).unwrap();
    let mut model = BTreeSet::new();

    for _ in 0..5_000 {
        let key: i32 = rng.gen_range(0..500);
        if rng.gen_bool(0.6) {
            assert_eq!(map.insert(key, ()).is_some(), !model.insert(key));
        } else {
            assert_eq!(map.remove(&key).is_some(), model.remove(&key));
        }
        assert_eq!(map.len(), model.len());
    }

    assert_eq!(visit_count(&map), map.len());
    assert!(map.keys().copied().eq(model.iter().copied()));
    assert!(map.check_invariants());
}

#[test]
fn clear_resets_any_state() {
    for size in [0, 1, 3, 4, 1_000] {
        let mut map = OrderedMap::new(2).unwrap();
        for key in 0..size {
            map.insert(key, key);
        }
        map.clear();
        assert_eq!(map.len(), 0);
        assert_eq!(visit_count(&map), 0);
        assert_eq!(map.get(&0), None);
    }
}

#[test]
fn for_each_stops_at_first_false() {
    let mut map = OrderedMap::new(4).unwrap();
    for key in shuffled_keys(3) {
        map.insert(key, ());
    }

    let mut visited = Vec::new();
    map.for_each(|key, _| {
        visited.push(*key);
        *key != 250
    });
    assert_eq!(visited.len(), 251);
    assert_eq!(visited, (0..=250).collect::<Vec<_>>());
}

#[test]
fn single_entry_root_is_exempt_from_minimum() {
    let mut map = OrderedMap::new(10).unwrap();
    map.insert("only", 1);
    assert_eq!(map.height(), 1);
    assert!(map.check_invariants());
    assert_eq!(map.first(), Some((&"only", &1)));
    assert_eq!(map.last(), Some((&"only", &1)));
}
