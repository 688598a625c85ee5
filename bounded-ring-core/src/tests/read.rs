use crate::{BoundedRing, RingError};

#[test]
fn peeks_on_empty_ring() {
    let ring: BoundedRing<String, 3> = BoundedRing::new();
    assert_eq!(ring.front(), None);
    assert_eq!(ring.back(), None);

    let view = ring.lock();
    assert!(view.is_empty());
    assert_eq!(view.front(), None);
    assert_eq!(view.back(), None);
    assert_eq!(view.iter().count(), 0);
}

#[test]
fn front_and_back_track_both_ends() {
    let ring: BoundedRing<i32, 4> = BoundedRing::new();

    ring.push(1);
    assert_eq!(ring.front(), Some(1));
    assert_eq!(ring.back(), Some(1));

    ring.push(2);
    ring.push(3);
    assert_eq!(ring.front(), Some(1));
    assert_eq!(ring.back(), Some(3));

    assert_eq!(ring.pop(), 1);
    assert_eq!(ring.front(), Some(2));

    // Peeking does not consume.
    assert_eq!(ring.len(), 2);
}

#[test]
fn get_by_logical_index() {
    let ring: BoundedRing<char, 3> = BoundedRing::new();
    for c in ['a', 'b', 'c', 'd', 'e'] {
        let _ = ring.push_overwrite(c);
    }

    assert_eq!(ring.get(0), Ok('c'));
    assert_eq!(ring.get(1), Ok('d'));
    assert_eq!(ring.get(2), Ok('e'));
}

#[test]
fn get_past_len_is_out_of_bounds() {
    let ring: BoundedRing<u8, 4> = BoundedRing::new();
    ring.push(9);
    ring.push(8);

    let err = ring.get(2).unwrap_err();
    assert_eq!(err, RingError::OutOfBounds { index: 2, len: 2 });
    assert_eq!(
        err.to_string(),
        "index out of bounds: the len is 2 but the index is 2"
    );

    // Slots past `len` are never exposed, even if they held data once.
    assert_eq!(ring.pop(), 9);
    assert!(matches!(
        ring.get(1),
        Err(RingError::OutOfBounds { index: 1, len: 1 })
    ));
}

#[test]
fn guard_indexes_match_pop_order() {
    let ring: BoundedRing<u32, 5> = BoundedRing::new();
    for i in 0..12 {
        let _ = ring.push_overwrite(i);
    }

    let expected: Vec<u32> = {
        let view = ring.lock();
        assert_eq!(view.len(), 5);
        assert!(view.is_full());
        assert_eq!(view[0], 7);
        assert_eq!(view[view.len() - 1], 11);
        assert_eq!(view.front(), Some(&7));
        assert_eq!(view.back(), Some(&11));
        assert_eq!(view.get(5), None);
        view.iter().copied().collect()
    };

    let popped: Vec<u32> = (0..5).map(|_| ring.pop()).collect();
    assert_eq!(popped, expected);
}

#[test]
fn iter_after_wraparound() {
    let ring: BoundedRing<usize, 4> = BoundedRing::new();
    for i in 0..3 {
        ring.push(i);
    }
    for _ in 0..3 {
        let _ = ring.pop();
    }
    for i in 10..14 {
        ring.push(i);
    }

    let view = ring.lock();
    let mut iter = view.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&10));
    assert_eq!(iter.nth(1), Some(&12));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&13));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);

    let all: Vec<usize> = (&view).into_iter().copied().collect();
    assert_eq!(all, vec![10, 11, 12, 13]);
}

#[test]
fn iter_nth_past_end() {
    let ring: BoundedRing<u8, 4> = BoundedRing::new();
    ring.push(1);
    ring.push(2);

    let view = ring.lock();
    let mut iter = view.iter();
    assert_eq!(iter.nth(5), None);
    assert_eq!(iter.next(), None);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn guard_index_past_len_panics() {
    let ring: BoundedRing<i32, 4> = BoundedRing::new();
    ring.push(1);
    let view = ring.lock();
    let _value = view[1];
}

#[test]
fn guard_is_released_on_drop() {
    let ring: BoundedRing<i32, 2> = BoundedRing::new();
    ring.push(1);
    {
        let view = ring.lock();
        assert_eq!(view.len(), 1);
    }
    // Would deadlock if the guard still held the gates.
    ring.push(2);
    assert_eq!(ring.pop(), 1);
}

#[test]
fn heap_ring_reads() {
    let ring = BoundedRing::<String, 3>::new_heap();
    ring.push("x".to_owned());
    ring.push("y".to_owned());

    assert_eq!(ring.front().as_deref(), Some("x"));
    assert_eq!(ring.back().as_deref(), Some("y"));
    assert_eq!(ring.get(1).as_deref(), Ok("y"));
}
