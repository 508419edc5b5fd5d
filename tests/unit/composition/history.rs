use super::*;

#[test]
fn push_beyond_cap_evicts_oldest_first() {
    let mut h: HistoryStack<u32> = HistoryStack::with_capacity(10);
    for i in 0..15 {
        h.push(i);
    }
    assert_eq!(h.len(), 10);
    let kept: Vec<u32> = h.iter().copied().collect();
    assert_eq!(kept, (5..15).collect::<Vec<u32>>());
    assert_eq!(h.current(), Some(&14));
}

#[test]
fn undo_returns_previous_snapshot() {
    let mut h: HistoryStack<&str> = HistoryStack::default();
    h.push("a");
    h.push("b");
    h.push("c");
    assert_eq!(h.undo(), Some(&"b"));
    assert_eq!(h.len(), 2);
    assert_eq!(h.current(), Some(&"b"));
}

#[test]
fn undo_with_single_snapshot_is_noop() {
    let mut h: HistoryStack<&str> = HistoryStack::default();
    assert_eq!(h.undo(), None);

    h.push("only");
    assert_eq!(h.undo(), None);
    assert_eq!(h.len(), 1);
    assert_eq!(h.current(), Some(&"only"));
}

#[test]
fn capacity_has_a_floor_of_one() {
    let mut h: HistoryStack<u8> = HistoryStack::with_capacity(0);
    h.push(1);
    h.push(2);
    assert_eq!(h.len(), 1);
    assert_eq!(h.current(), Some(&2));
}
