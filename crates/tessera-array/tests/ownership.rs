//! Every element is dropped exactly once, whatever path removes it.

use tessera_array::DynamicArray;
use tessera_test_utils::{DropTracker, Tracked};

fn tracked_array(tracker: &DropTracker, n: usize) -> DynamicArray<Tracked<usize>> {
    (0..n).map(|i| tracker.track(i)).collect()
}

#[test]
fn dropping_array_drops_every_element_once() {
    let tracker = DropTracker::new();
    {
        let _arr = tracked_array(&tracker, 10);
        assert_eq!(tracker.live(), 10);
    }
    assert_eq!(tracker.dropped(), 10);
    assert_eq!(tracker.live(), 0);
}

#[test]
fn growth_and_shrink_do_not_drop_elements() {
    let tracker = DropTracker::new();
    let mut arr = tracked_array(&tracker, 33);
    arr.reserve(200);
    arr.shrink_to_fit();
    assert_eq!(tracker.dropped(), 0);
    while arr.size() > 1 {
        drop(arr.pop_back().unwrap());
    }
    assert_eq!(tracker.dropped(), 32);
    assert_eq!(*arr[0].value(), 0);
}

#[test]
fn erase_returns_ownership_of_removed_element() {
    let tracker = DropTracker::new();
    let mut arr = tracked_array(&tracker, 5);
    let removed = arr.erase(2).unwrap();
    assert_eq!(*removed.value(), 2);
    assert_eq!(tracker.dropped(), 0);
    drop(removed);
    assert_eq!(tracker.dropped(), 1);
}

#[test]
fn clear_drops_but_keeps_buffer() {
    let tracker = DropTracker::new();
    let mut arr = tracked_array(&tracker, 6);
    let cap = arr.capacity();
    arr.clear();
    assert_eq!(tracker.dropped(), 6);
    assert_eq!(arr.capacity(), cap);
}

#[test]
fn clone_duplicates_and_both_copies_drop() {
    let tracker = DropTracker::new();
    let a = tracked_array(&tracker, 4);
    let b = a.clone();
    assert_eq!(tracker.created(), 8);
    assert_eq!(b.capacity(), a.capacity());
    drop(a);
    assert_eq!(tracker.dropped(), 4);
    drop(b);
    assert_eq!(tracker.dropped(), 8);
}

#[test]
fn clone_from_drops_previous_contents() {
    let tracker = DropTracker::new();
    let source = tracked_array(&tracker, 2);
    let mut dest = tracked_array(&tracker, 5);
    dest.clone_from(&source);
    assert_eq!(tracker.dropped(), 5);
    assert_eq!(dest.size(), 2);
    assert_eq!(dest.capacity(), source.capacity());
}

#[test]
fn take_moves_without_dropping() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 4);
    let b = a.take();
    assert_eq!(tracker.dropped(), 0);
    assert_eq!(a.capacity(), 0);
    drop(a);
    assert_eq!(tracker.dropped(), 0);
    drop(b);
    assert_eq!(tracker.dropped(), 4);
}

#[test]
fn transfer_from_drops_destination_contents_only() {
    let tracker = DropTracker::new();
    let mut source = tracked_array(&tracker, 3);
    let mut dest = tracked_array(&tracker, 7);
    dest.transfer_from(&mut source);
    assert_eq!(tracker.dropped(), 7);
    assert_eq!(dest.size(), 3);
    assert!(source.is_empty());
    assert!(!source.is_allocated());
}

#[test]
fn partially_consumed_into_iter_drops_the_rest() {
    let tracker = DropTracker::new();
    let arr = tracked_array(&tracker, 6);
    let mut iter = arr.into_iter();
    let first = iter.next().unwrap();
    let last = iter.next_back().unwrap();
    assert_eq!(*first.value(), 0);
    assert_eq!(*last.value(), 5);
    drop(iter);
    assert_eq!(tracker.dropped(), 4);
    drop((first, last));
    assert_eq!(tracker.dropped(), 6);
}

#[test]
fn moved_from_array_is_reusable() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 3);
    let _b = a.take();
    a.push_back(tracker.track(99));
    a.insert(0, tracker.track(98)).unwrap();
    assert_eq!(a.size(), 2);
    assert_eq!(a.capacity(), 2);
}

#[test]
fn nested_arrays_cascade_drops() {
    let tracker = DropTracker::new();
    {
        let mut outer: DynamicArray<DynamicArray<Tracked<usize>>> = DynamicArray::new();
        for _ in 0..3 {
            outer.push_back(tracked_array(&tracker, 4));
        }
        let copy = outer.clone();
        assert_eq!(tracker.live(), 24);
        drop(copy);
        assert_eq!(tracker.live(), 12);
    }
    assert_eq!(tracker.live(), 0);
}
