//! End-to-end walkthrough matching the demo driver's sequence of operations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sllist::{LinkedList, ListError};

const VALUES: [i64; 6] = [72, 101, 108, 109, 110, 111];

fn to_vec(list: &LinkedList<i64>) -> Vec<i64> {
    list.iter().copied().collect()
}

#[test]
fn test_walkthrough_without_shuffle() {
    let mut list: LinkedList<i64> = VALUES.into_iter().collect();
    assert_eq!(list.to_string(), "72 101 108 109 110 111");

    let entry = list.find(&101).unwrap();
    list.remove(entry).unwrap();
    assert_eq!(list.to_string(), "72 108 109 110 111");

    list.swap_adjacent_pairs();
    assert_eq!(list.to_string(), "108 72 110 109 111");

    list.reverse();
    assert_eq!(list.to_string(), "111 109 110 72 108");

    list.reverse_recursive();
    assert_eq!(list.to_string(), "108 72 110 109 111");
}

#[test]
fn test_walkthrough_with_seeded_shuffle() {
    let mut list: LinkedList<i64> = VALUES.into_iter().collect();
    list.shuffle_with(&mut StdRng::seed_from_u64(2024));

    let shuffled = to_vec(&list);
    let mut sorted = shuffled.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, VALUES.to_vec());

    // Same removal applied to the model
    let mut expected = shuffled;
    let index = expected.iter().position(|v| *v == 101).unwrap();
    expected.remove(index);
    assert_eq!(list.remove_first(&101), Ok(101));
    assert_eq!(to_vec(&list), expected);

    for pair in expected.chunks_mut(2) {
        pair.reverse();
    }
    list.swap_adjacent_pairs();
    assert_eq!(to_vec(&list), expected);

    expected.reverse();
    list.reverse();
    assert_eq!(to_vec(&list), expected);

    expected.reverse();
    list.reverse_recursive();
    assert_eq!(to_vec(&list), expected);
}

#[test]
fn test_walkthrough_absent_removal_keeps_list() {
    let mut list: LinkedList<i64> = VALUES.into_iter().collect();
    assert_eq!(list.remove_first(&7), Err(ListError::NotFound));
    assert_eq!(to_vec(&list), VALUES.to_vec());
}
