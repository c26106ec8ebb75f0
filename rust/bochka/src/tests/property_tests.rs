use std::cmp::Ordering;

use crate::{SequenceContainer, bochka};

fn random_container(len: usize) -> SequenceContainer<u8> {
    (0..len).map(|_| fastrand::u8(0..4)).collect()
}

#[test]
fn test_random_operations_keep_invariants() {
    fastrand::seed(715517);
    let mut c = SequenceContainer::<u32>::new();
    let mut model = Vec::<u32>::new();

    for step in 0..5000 {
        let value = fastrand::u32(0..50);
        match fastrand::u8(0..9) {
            0 | 1 => {
                c.add(value);
                model.push(value);
            }
            2 => {
                let index = fastrand::usize(0..=model.len() + 1);
                let result = c.insert(index, value);
                if index <= model.len() {
                    result.unwrap();
                    model.insert(index, value);
                } else {
                    assert!(result.unwrap_err().is_index_out_of_range());
                }
            }
            3 => {
                let index = fastrand::usize(0..=model.len());
                let result = c.remove_at(index);
                if index < model.len() {
                    assert_eq!(result.unwrap(), model.remove(index));
                } else {
                    assert!(result.unwrap_err().is_index_out_of_range());
                }
            }
            4 => {
                let removed = c.remove(&value);
                match model.iter().position(|v| *v == value) {
                    Some(index) => {
                        assert!(removed);
                        model.remove(index);
                    }
                    None => assert!(!removed),
                }
            }
            5 if !model.is_empty() => {
                let index = fastrand::usize(0..model.len());
                c.set(index, value).unwrap();
                model[index] = value;
            }
            6 => c.trim_excess(),
            7 => {
                let capacity = fastrand::usize(0..64);
                let result = c.set_capacity(capacity);
                if capacity < model.len() {
                    assert!(result.unwrap_err().is_invalid_arg());
                } else {
                    result.unwrap();
                    assert_eq!(c.capacity(), capacity);
                }
            }
            8 if fastrand::u8(0..20) == 0 => {
                c.clear();
                model.clear();
            }
            _ => (),
        }

        assert!(c.len() <= c.capacity(), "step {step}");
        assert_eq!(c.as_slice(), model.as_slice(), "step {step}");
        assert_eq!(c.index_of(&value), model.iter().position(|v| *v == value));
    }
}

#[test]
fn test_round_trip_through_cursor() {
    fastrand::seed(42);
    for len in [0usize, 1, 3, 4, 5, 17, 100] {
        let source: Vec<u64> = (0..len).map(|_| fastrand::u64(..)).collect();
        let c = SequenceContainer::from_source(source.iter().copied());

        let mut cursor = c.cursor();
        let mut enumerated = Vec::with_capacity(len);
        while let Some(item) = cursor.move_next(&c).unwrap() {
            enumerated.push(*item);
        }
        assert_eq!(enumerated, source);
        itertools::assert_equal(c.iter(), source.iter());
    }
}

#[test]
fn test_append_amortization() {
    for n in [1usize, 4, 5, 8, 9, 100, 1000, 4097] {
        let mut c = SequenceContainer::new();
        let mut reallocations = 0;
        let mut capacity = c.capacity();
        for i in 0..n {
            c.add(i);
            if c.capacity() != capacity {
                reallocations += 1;
                capacity = c.capacity();
            }
        }
        let bound = (n as f64 / 4.0).log2().ceil().max(0.0) as usize + 1;
        assert!(
            reallocations <= bound,
            "{n} adds caused {reallocations} reallocations (bound {bound})"
        );
    }
}

#[test]
fn test_equality_is_reflexive_and_symmetric() {
    fastrand::seed(8812);
    for _ in 0..200 {
        let a = random_container(fastrand::usize(0..6));
        let b = random_container(fastrand::usize(0..6));
        assert_eq!(a, a);
        assert_eq!(a == b, b == a);
        if a == b {
            assert_eq!(a.hash_code(), b.hash_code());
        }
    }
}

#[test]
fn test_ordering_is_a_strict_total_order() {
    fastrand::seed(1297);
    let containers: Vec<_> = (0..60)
        .map(|_| random_container(fastrand::usize(0..4)))
        .collect();

    for a in &containers {
        for b in &containers {
            let ab = a.compare(b);
            assert_eq!(ab, b.compare(a).reverse());
            assert_eq!(ab == Ordering::Equal, a == b);
            if a < b {
                assert!(!(a > b));
                assert!(a != b);
            }
            assert_eq!(ab, a.as_slice().cmp(b.as_slice()));
            for c in &containers {
                if a < b && b < c {
                    assert!(a < c);
                }
            }
        }
    }
}

#[test]
fn test_equal_after_capacity_changes() {
    let a: SequenceContainer<i32> = bochka![1, 2, 3];
    let mut b: SequenceContainer<i32> = bochka![1, 2, 3];
    b.set_capacity(64).unwrap();
    assert_eq!(a, b);
    b.set_capacity(3).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
}
