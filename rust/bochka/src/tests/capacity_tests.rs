use crate::{DEFAULT_CAPACITY, MAX_CAPACITY, SequenceContainer, bochka};

#[test]
fn test_growth_sequence() {
    let mut c = SequenceContainer::new();
    let mut capacities = Vec::new();
    for i in 0..10 {
        c.add(i);
        capacities.push(c.capacity());
    }
    assert_eq!(capacities, vec![4, 4, 4, 4, 8, 8, 8, 8, 16, 16]);
    assert_eq!(c.capacity(), 16);
}

#[test]
fn test_first_growth_uses_default_capacity() {
    let mut c = SequenceContainer::new();
    c.add("x");
    assert_eq!(c.capacity(), DEFAULT_CAPACITY);

    let mut c = SequenceContainer::new();
    c.insert(0, "x").unwrap();
    assert_eq!(c.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_growth_from_explicit_capacity_doubles() {
    let mut c = SequenceContainer::with_capacity(3).unwrap();
    c.extend([1, 2, 3]);
    assert_eq!(c.capacity(), 3);
    c.add(4);
    assert_eq!(c.capacity(), 6);
}

#[test]
fn test_set_capacity() {
    let mut c: SequenceContainer<i32> = bochka![1, 2, 3];
    c.set_capacity(10).unwrap();
    assert_eq!(c.capacity(), 10);
    assert_eq!(c.as_slice(), &[1, 2, 3]);

    c.set_capacity(3).unwrap();
    assert_eq!(c.capacity(), 3);
    assert_eq!(c.as_slice(), &[1, 2, 3]);

    // Same capacity is a no-op.
    c.set_capacity(3).unwrap();
    assert_eq!(c.capacity(), 3);
}

#[test]
fn test_set_capacity_below_count_fails() {
    let mut c: SequenceContainer<i32> = bochka![1, 2, 3];
    c.set_capacity(3).unwrap();
    let e = c.set_capacity(1).unwrap_err();
    assert!(e.is_invalid_arg());
    assert_eq!(c.capacity(), 3);
    assert_eq!(c.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_set_capacity_above_max_fails() {
    let mut c = SequenceContainer::<u8>::new();
    assert!(c.set_capacity(MAX_CAPACITY + 1).unwrap_err().is_invalid_arg());
    assert_eq!(c.capacity(), 0);
}

#[test]
fn test_set_capacity_zero_releases_storage() {
    let mut c = SequenceContainer::<String>::with_capacity(32).unwrap();
    c.set_capacity(0).unwrap();
    assert_eq!(c.capacity(), 0);
    assert_eq!(c.items.capacity(), 0);
}

#[test]
fn test_set_capacity_does_not_invalidate_cursor() {
    let mut c: SequenceContainer<i32> = bochka![1, 2];
    let mut cursor = c.cursor();
    c.set_capacity(20).unwrap();
    assert_eq!(cursor.move_next(&c).unwrap(), Some(&1));
}

#[test]
fn test_trim_excess() {
    let mut c = SequenceContainer::new();
    for i in 0..10 {
        c.add(i);
    }
    assert_eq!(c.capacity(), 16);
    c.trim_excess();
    assert_eq!(c.capacity(), 10);
    assert_eq!(c.len(), 10);

    // 10 of 10 is above the threshold.
    c.trim_excess();
    assert_eq!(c.capacity(), 10);
}

#[test]
fn test_trim_excess_threshold() {
    let mut c = SequenceContainer::with_capacity(10).unwrap();
    c.extend(0..9);
    // 9 is not below 90% of 10.
    c.trim_excess();
    assert_eq!(c.capacity(), 10);

    c.remove_at(0).unwrap();
    c.trim_excess();
    assert_eq!(c.capacity(), 8);
}

#[test]
fn test_trim_excess_empty() {
    let mut c = SequenceContainer::<i32>::with_capacity(5).unwrap();
    c.trim_excess();
    assert_eq!(c.capacity(), 0);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut c: SequenceContainer<i32> = bochka![1, 2, 3, 4, 5];
    c.add(6);
    assert_eq!(c.capacity(), 10);
    c.clear();
    assert_eq!(c.len(), 0);
    assert_eq!(c.capacity(), 10);
}

#[test]
fn test_reserve() {
    let mut c: SequenceContainer<i32> = bochka![1, 2];
    c.reserve(1).unwrap();
    assert_eq!(c.capacity(), 4);
    c.reserve(1).unwrap();
    assert_eq!(c.capacity(), 4);
    c.reserve(20).unwrap();
    assert_eq!(c.capacity(), 22);
    assert!(c.reserve(usize::MAX).unwrap_err().is_invalid_arg());
    assert!(c.reserve(MAX_CAPACITY).unwrap_err().is_invalid_arg());
    assert_eq!(c.capacity(), 22);
}

#[test]
fn test_zero_sized_elements() {
    let mut c = SequenceContainer::new();
    for _ in 0..5 {
        c.add(());
    }
    assert_eq!(c.len(), 5);
    assert_eq!(c.capacity(), 8);
    c.trim_excess();
    assert_eq!(c.capacity(), 5);
}
