//! Tests for the crossing simulator.

use super::*;
use rstest::rstest;

fn hiker(name: &str, pace: f64) -> Hiker {
    Hiker::new(name, pace).expect("valid hiker")
}

fn bridge(id: u32, length: f64, hikers: &[(&str, f64)]) -> Bridge {
    let roster = hikers.iter().map(|&(name, pace)| hiker(name, pace)).collect();
    Bridge::new(BridgeId::new(id), length, roster).expect("valid bridge")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn trip_names(crossing: &BridgeCrossing) -> Vec<(&'static str, &str)> {
    crossing
        .trips()
        .iter()
        .map(|trip| match trip {
            Trip::Over { ferried, .. } => ("over", ferried.name()),
            Trip::Back { runner, .. } => ("back", runner.name()),
        })
        .collect()
}

#[rstest]
fn empty_pool_takes_no_time() {
    let (crossing, next) = cross_bridge(Pool::new(), &bridge(0, 10.0, &[]));
    assert_eq!(crossing.duration(), 0.0);
    assert!(crossing.trips().is_empty());
    assert!(crossing.fastest().is_none());
    assert!(next.is_empty());
}

#[rstest]
#[case(0.5)]
#[case(7.0)]
fn lone_hiker_takes_no_time(#[case] pace: f64) {
    let (crossing, next) = cross_bridge(Pool::new(), &bridge(0, 10.0, &[("solo", pace)]));
    assert_eq!(crossing.duration(), 0.0);
    assert!(crossing.trips().is_empty());
    assert_eq!(next.len(), 1);
}

#[rstest]
fn pair_crosses_at_slower_pace_without_return() {
    let (crossing, _) = cross_bridge(Pool::new(), &bridge(0, 10.0, &[("A", 2.0), ("B", 1.0)]));
    assert_eq!(crossing.duration(), 10.0);
    assert_eq!(trip_names(&crossing), [("over", "B")]);
}

#[rstest]
fn classic_four_hikers_follow_the_ferry_strategy() {
    // The 1, 2, 5 and 10 minute hikers. Ferrying each with the fastest costs
    // 10 + 1 + 5 + 1 + 2; the 17 minute answer needs the two slowest to cross
    // together, which this strategy never does.
    let (crossing, _) = cross_bridge(
        Pool::new(),
        &bridge(0, 1.0, &[("1", 1.0), ("2", 0.5), ("5", 0.2), ("10", 0.1)]),
    );
    assert_close(crossing.duration(), 19.0);
    assert_eq!(
        trip_names(&crossing),
        [
            ("over", "10"),
            ("back", "1"),
            ("over", "5"),
            ("back", "1"),
            ("over", "2"),
        ]
    );
}

#[rstest]
fn trips_record_running_bridge_time() {
    let (crossing, _) = cross_bridge(
        Pool::new(),
        &bridge(0, 10.0, &[("A", 10.0), ("B", 5.0), ("C", 2.0)]),
    );
    let elapsed: Vec<f64> = crossing.trips().iter().map(Trip::elapsed).collect();
    assert_eq!(elapsed, [5.0, 6.0, 8.0]);
    assert_eq!(crossing.duration(), 8.0);
}

#[rstest]
fn fastest_hiker_is_fixed_and_survives() {
    let (crossing, next) = cross_bridge(
        Pool::new(),
        &bridge(0, 4.0, &[("slow", 1.0), ("quick", 4.0), ("mid", 2.0)]),
    );
    assert_eq!(crossing.fastest().map(Hiker::name), Some("quick"));
    assert_eq!(crossing.waiting(), 3);
    let survivors: Vec<&str> = next.hikers().iter().map(Hiker::name).collect();
    assert_eq!(survivors, ["quick"]);
}

#[rstest]
fn equal_pace_keeps_earliest_as_ferry() {
    let (crossing, next) = cross_bridge(
        Pool::new(),
        &bridge(0, 1.0, &[("first", 3.0), ("second", 3.0), ("slow", 1.0)]),
    );
    assert_eq!(crossing.fastest().map(Hiker::name), Some("first"));
    assert_eq!(
        trip_names(&crossing),
        [("over", "slow"), ("back", "first"), ("over", "second")]
    );
    assert_eq!(next.hikers().first().map(Hiker::name), Some("first"));
}

#[rstest]
fn newcomers_join_the_survivor_of_the_previous_bridge() {
    let first = bridge(0, 10.0, &[("A", 2.0), ("B", 1.0)]);
    let second = bridge(1, 8.0, &[("C", 4.0)]);

    let (_, pool) = cross_bridge(Pool::new(), &first);
    let (crossing, _) = cross_bridge(pool, &second);

    assert_eq!(crossing.waiting(), 2);
    assert_eq!(crossing.fastest().map(Hiker::name), Some("C"));
    assert_eq!(trip_names(&crossing), [("over", "A")]);
    assert_eq!(crossing.duration(), 4.0);
}

#[rstest]
fn simulate_records_each_bridge_and_the_total() {
    let bridges = vec![
        bridge(0, 10.0, &[("A", 2.0), ("B", 1.0)]),
        bridge(1, 8.0, &[("C", 4.0)]),
        bridge(2, 5.0, &[]),
    ];
    let report = simulate(&bridges).expect("simulation succeeds");

    assert_eq!(report.duration(BridgeId::new(0)), Some(10.0));
    assert_eq!(report.duration(BridgeId::new(1)), Some(4.0));
    // Only C carries on to bridge 2, alone.
    assert_eq!(report.duration(BridgeId::new(2)), Some(0.0));
    assert_eq!(report.total(), 14.0);
    assert_eq!(report.crossings().len(), 3);
}

#[rstest]
fn simulate_follows_input_order_not_id_order() {
    let bridges = vec![
        bridge(1, 10.0, &[("A", 2.0), ("B", 1.0)]),
        bridge(0, 10.0, &[("C", 1.0)]),
    ];
    let report = simulate(&bridges).expect("simulation succeeds");

    assert_eq!(report.duration(BridgeId::new(1)), Some(10.0));
    assert_eq!(report.duration(BridgeId::new(0)), Some(10.0));
    let order: Vec<BridgeId> = report.crossings().iter().map(BridgeCrossing::bridge).collect();
    assert_eq!(order, [BridgeId::new(1), BridgeId::new(0)]);
}

#[rstest]
fn simulate_with_no_bridges_is_empty() {
    let report = simulate(&[]).expect("simulation succeeds");
    assert!(report.durations().is_empty());
    assert_eq!(report.total(), 0.0);
}

#[rstest]
fn simulate_rejects_duplicate_ids() {
    let bridges = vec![
        bridge(0, 10.0, &[("A", 2.0)]),
        bridge(0, 10.0, &[("B", 1.0)]),
    ];
    let err = simulate(&bridges).expect_err("duplicate ids should fail");
    assert_eq!(
        err,
        CrossingError::DuplicateBridgeId {
            id: BridgeId::new(0)
        }
    );
}

#[rstest]
#[case(&[2], 2)]
#[case(&[0, 5], 5)]
fn simulate_rejects_sparse_ids(#[case] ids: &[u32], #[case] offending: u32) {
    let bridges: Vec<Bridge> = ids.iter().map(|&id| bridge(id, 1.0, &[])).collect();
    let err = simulate(&bridges).expect_err("sparse ids should fail");
    assert_eq!(
        err,
        CrossingError::BridgeIdOutOfRange {
            id: BridgeId::new(offending),
            count: ids.len(),
        }
    );
}

#[rstest]
fn caller_bridges_are_left_untouched() {
    let bridges = vec![bridge(0, 10.0, &[("B", 1.0), ("A", 2.0), ("C", 3.0)])];
    let before = bridges.clone();
    let _ = simulate(&bridges).expect("simulation succeeds");
    assert_eq!(bridges, before);
}
