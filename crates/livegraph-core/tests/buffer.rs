// File: crates/livegraph-core/tests/buffer.rs
// Purpose: Ring buffer eviction order, resizing, removal and cursor/snapshot iteration.

use livegraph_core::{ChartError, Point, PointRingBuffer};

fn collect(buf: &PointRingBuffer) -> Vec<(f64, f64)> {
    buf.iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn size_and_oldest_follow_fifo_eviction() {
    for cap in 1..=5usize {
        for n in 0..=12usize {
            let mut buf = PointRingBuffer::new(cap).expect("positive capacity");
            for i in 0..n {
                buf.insert(i as f64, i as f64 * 10.0);
            }
            assert_eq!(buf.len(), n.min(cap), "cap={cap} n={n}");
            if n > 0 {
                let oldest = buf.get(0).expect("non-empty");
                assert_eq!(oldest.x, (n - buf.len()) as f64, "cap={cap} n={n}");
            }
        }
    }
}

#[test]
fn scenario_capacity_three_drops_first_point() {
    let mut buf = PointRingBuffer::new(3).unwrap();
    for i in 1..=4 {
        buf.insert(i as f64, i as f64);
    }
    assert_eq!(buf.len(), 3);
    assert!(buf.is_full());
    assert_eq!(buf.first(), Some(Point::new(2.0, 2.0)));
    assert_eq!(buf.last(), Some(Point::new(4.0, 4.0)));
}

#[test]
fn shrinking_full_buffer_keeps_most_recent_in_order() {
    let mut buf = PointRingBuffer::new(5).unwrap();
    for i in 0..5 {
        buf.insert(i as f64, -(i as f64));
    }
    buf.resize(3).unwrap();
    assert_eq!(buf.capacity(), 3);
    assert_eq!(collect(&buf), vec![(2.0, -2.0), (3.0, -3.0), (4.0, -4.0)]);

    // head was reset, so the next insert evicts (2, -2)
    buf.insert(5.0, -5.0);
    assert_eq!(collect(&buf), vec![(3.0, -3.0), (4.0, -4.0), (5.0, -5.0)]);
}

#[test]
fn resize_after_wraparound_preserves_order() {
    let mut buf = PointRingBuffer::new(4).unwrap();
    for i in 0..7 {
        buf.insert(i as f64, 0.0);
    }
    // stored: 3,4,5,6 with head mid-array
    buf.resize(6).unwrap();
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.iter().map(|p| p.x).collect::<Vec<_>>(), vec![3.0, 4.0, 5.0, 6.0]);
    buf.insert(7.0, 0.0);
    buf.insert(8.0, 0.0);
    buf.insert(9.0, 0.0);
    assert_eq!(buf.iter().map(|p| p.x).collect::<Vec<_>>(), vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn zero_capacity_is_rejected() {
    assert_eq!(PointRingBuffer::new(0).unwrap_err(), ChartError::InvalidCapacity(0));
    let mut buf = PointRingBuffer::new(2).unwrap();
    assert_eq!(buf.resize(0).unwrap_err(), ChartError::InvalidCapacity(0));
    assert_eq!(buf.capacity(), 2);
}

#[test]
fn get_out_of_range_fails_fast() {
    let mut buf = PointRingBuffer::new(3).unwrap();
    buf.insert(1.0, 1.0);
    assert_eq!(buf.get(1).unwrap_err(), ChartError::IndexOutOfRange { index: 1, len: 1 });
}

#[test]
fn remove_oldest_and_newest() {
    let mut buf = PointRingBuffer::new(3).unwrap();
    assert_eq!(buf.remove_oldest().unwrap_err(), ChartError::Empty);
    assert_eq!(buf.remove_newest().unwrap_err(), ChartError::Empty);

    for i in 0..5 {
        buf.insert(i as f64, i as f64);
    }
    assert_eq!(buf.remove_oldest().unwrap(), Point::new(2.0, 2.0));
    assert_eq!(buf.remove_newest().unwrap(), Point::new(4.0, 4.0));
    assert_eq!(collect(&buf), vec![(3.0, 3.0)]);

    buf.insert(10.0, 10.0);
    buf.insert(11.0, 11.0);
    assert_eq!(collect(&buf), vec![(3.0, 3.0), (10.0, 10.0), (11.0, 11.0)]);
}

#[test]
fn remove_by_value_takes_first_match_only() {
    let mut buf = PointRingBuffer::new(5).unwrap();
    buf.insert(1.0, 1.0);
    buf.insert(2.0, 2.0);
    buf.insert(1.0, 1.0);
    assert!(buf.remove_by_value(Point::new(1.0, 1.0), 0.0).unwrap());
    assert_eq!(collect(&buf), vec![(2.0, 2.0), (1.0, 1.0)]);
    assert!(!buf.remove_by_value(Point::new(7.0, 7.0), 0.0).unwrap());
    assert_eq!(buf.len(), 2);
}

#[test]
fn remove_by_value_compacts_wrapped_buffer() {
    let mut buf = PointRingBuffer::new(3).unwrap();
    for i in 0..5 {
        buf.insert(i as f64, 0.0);
    }
    // stored: 2,3,4 (wrapped)
    assert!(buf.remove_by_value(Point::new(3.0, 0.0), 0.0).unwrap());
    assert_eq!(buf.iter().map(|p| p.x).collect::<Vec<_>>(), vec![2.0, 4.0]);
    buf.insert(5.0, 0.0);
    buf.insert(6.0, 0.0);
    assert_eq!(buf.iter().map(|p| p.x).collect::<Vec<_>>(), vec![4.0, 5.0, 6.0]);
}

#[test]
fn remove_by_value_tolerance_and_exact_rules() {
    let mut buf = PointRingBuffer::new(4).unwrap();
    buf.insert(1.0004, 2.0);
    buf.insert(f64::NAN, 0.0);
    buf.insert(-0.0, 0.0);

    assert!(!buf.remove_by_value(Point::new(1.0, 2.0), 0.0).unwrap());
    assert!(buf.remove_by_value(Point::new(1.0, 2.0), 1e-3).unwrap());
    // exact comparison: NaN matches NaN, 0.0 does not match -0.0
    assert!(buf.remove_by_value(Point::new(f64::NAN, 0.0), 0.0).unwrap());
    assert!(!buf.remove_by_value(Point::new(0.0, 0.0), 0.0).unwrap());
    assert!(buf.remove_by_value(Point::new(-0.0, 0.0), 0.0).unwrap());
    assert!(buf.is_empty());

    assert_eq!(
        buf.remove_by_value(Point::new(0.0, 0.0), -1.0).unwrap_err(),
        ChartError::InvalidTolerance(-1.0)
    );
}

#[test]
fn cursor_is_restartable_and_double_ended() {
    let mut buf = PointRingBuffer::new(3).unwrap();
    for i in 0..4 {
        buf.insert(i as f64, 0.0);
    }
    let cursor = buf.iter();
    assert_eq!(cursor.len(), 3);
    let forward: Vec<f64> = cursor.clone().map(|p| p.x).collect();
    let again: Vec<f64> = cursor.clone().map(|p| p.x).collect();
    let backward: Vec<f64> = cursor.rev().map(|p| p.x).collect();
    assert_eq!(forward, vec![1.0, 2.0, 3.0]);
    assert_eq!(forward, again);
    assert_eq!(backward, vec![3.0, 2.0, 1.0]);
}

#[test]
fn snapshot_ignores_later_mutation() {
    let mut buf = PointRingBuffer::new(2).unwrap();
    buf.insert(1.0, 1.0);
    buf.insert(2.0, 2.0);
    let snap = buf.snapshot();
    buf.insert(3.0, 3.0);
    buf.remove_oldest().unwrap();

    assert_eq!(snap.len(), 2);
    assert_eq!(snap.iter().map(|p| p.x).collect::<Vec<_>>(), vec![1.0, 2.0]);
    // restartable
    assert_eq!(snap.iter().count(), 2);
    assert_eq!(collect(&buf), vec![(3.0, 3.0)]);
}

#[test]
fn clear_resets_contents() {
    let mut buf = PointRingBuffer::default();
    assert_eq!(buf.capacity(), 100);
    buf.insert(1.0, 1.0);
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.first(), None);
    assert_eq!(buf.last(), None);
}
