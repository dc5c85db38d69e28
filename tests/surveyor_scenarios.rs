// tests/surveyor_scenarios.rs

mod common;
use crate::common::{TestResult, init_tracing};

use surveyor::path::{Path, Seed};
use surveyor::surveyor::{Surveyor, SurveyorOptions};
use surveyor_test_utils::tree::{FanTree, Node, ids};

fn limit(n: usize) -> SurveyorOptions {
    SurveyorOptions { max_concurrency: n }
}

#[test]
fn fanout_of_three_under_limit_two_parks_one_path() -> TestResult {
    init_tracing();

    let mut s: Surveyor<Node> = Surveyor::new(FanTree::new(3).shared(), Seed::Default, limit(2));

    s.tick()?;
    assert_eq!(s.active().len(), 3);
    assert_eq!(ids(s.active()), vec![1, 2, 3]);

    s.trim()?;
    assert_eq!(ids(s.active()), vec![1, 2]);
    assert_eq!(ids(s.trimmed()), vec![3]);

    // Already at the cap: nothing comes back.
    s.untrim();
    assert_eq!(s.active().len(), 2);
    assert_eq!(s.trimmed().len(), 1);

    Ok(())
}

#[test]
fn terminal_path_with_error_is_deadended_and_errored() -> TestResult {
    init_tracing();

    let tree = FanTree::new(0).with_error_at(0).shared();
    let mut s: Surveyor<Node> = Surveyor::new(tree, Seed::Default, limit(10));

    s.tick()?;

    assert!(s.active().is_empty());
    assert_eq!(ids(s.deadended()), vec![0]);
    assert_eq!(ids(s.errored()), vec![0]);
    assert_eq!(s.errored()[0].errors().len(), 1);

    Ok(())
}

#[test]
fn seeding_with_three_entries() {
    init_tracing();

    let s: Surveyor<Node> =
        Surveyor::new(FanTree::new(1).shared(), Seed::Many(vec![10, 20, 30]), limit(10));

    let entries: Vec<u64> = s.active().iter().map(|n| n.entry).collect();
    assert_eq!(entries, vec![10, 20, 30]);
    assert!(s.deadended().is_empty());
    assert!(s.errored().is_empty());
    assert!(s.trimmed().is_empty());
    assert_eq!(s.round(), 0);
}

#[test]
fn default_and_single_seeds_start_one_path() {
    let s: Surveyor<Node> = Surveyor::new(FanTree::new(1).shared(), Seed::Default, limit(10));
    assert_eq!(s.active().len(), 1);
    assert_eq!(s.active()[0].entry, 0);

    let s: Surveyor<Node> = Surveyor::new(FanTree::new(1).shared(), Seed::Single(7), limit(10));
    assert_eq!(s.active().len(), 1);
    assert_eq!(s.active()[0].entry, 7);
}

#[test]
fn empty_seed_is_immediately_done() -> TestResult {
    let s: Surveyor<Node> = Surveyor::new(FanTree::new(1).shared(), Seed::Many(vec![]), limit(10));
    assert!(s.active().is_empty());
    assert!(s.done()?);
    Ok(())
}

#[test]
fn default_concurrency_limit_is_ten() {
    let s: Surveyor<Node> =
        Surveyor::new(FanTree::new(1).shared(), Seed::Default, SurveyorOptions::default());
    assert_eq!(s.max_concurrency(), 10);
}

#[test]
fn errors_do_not_end_a_path() -> TestResult {
    init_tracing();

    let tree = FanTree::new(2).with_error_at(0).shared();
    let mut s: Surveyor<Node> = Surveyor::new(tree, Seed::Default, limit(10));

    s.tick()?;
    assert_eq!(ids(s.errored()), vec![0]);
    assert!(s.deadended().is_empty());
    assert_eq!(ids(s.active()), vec![1, 2]);

    // Children carry no errors of their own.
    s.tick()?;
    assert_eq!(s.errored().len(), 1);
    assert_eq!(s.active().len(), 4);

    Ok(())
}

#[test]
fn successors_keep_path_then_fork_order() -> TestResult {
    let mut s: Surveyor<Node> =
        Surveyor::new(FanTree::new(2).shared(), Seed::Many(vec![1, 2]), limit(10));
    assert_eq!(ids(s.active()), vec![0, 1]);

    s.tick()?;
    assert_eq!(ids(s.active()), vec![2, 3, 4, 5]);
    let entries: Vec<u64> = s.active().iter().map(|n| n.entry).collect();
    assert_eq!(entries, vec![1, 1, 2, 2]);

    Ok(())
}

#[test]
fn deadended_path_never_returns_to_active() -> TestResult {
    let tree = FanTree::new(1).with_fanout_for_entry(5, 0).shared();
    let mut s: Surveyor<Node> = Surveyor::new(tree, Seed::Many(vec![1, 5]), limit(10));

    s.tick()?;
    assert_eq!(s.deadended().len(), 1);
    let dead = s.deadended()[0].id;

    for _ in 0..5 {
        s.tick()?.trim()?.untrim();
        assert!(!ids(s.active()).contains(&dead));
        assert!(s.active().iter().all(|n| n.entry == 1));
    }
    assert_eq!(s.deadended().len(), 1);

    Ok(())
}

#[test]
fn round_counter_moves_only_on_tick() -> TestResult {
    let mut s: Surveyor<Node> = Surveyor::new(FanTree::new(3).shared(), Seed::Default, limit(2));

    s.tick()?;
    assert_eq!(s.round(), 1);
    s.trim()?;
    assert_eq!(s.round(), 1);
    s.untrim();
    assert_eq!(s.round(), 1);
    s.tick()?;
    assert_eq!(s.round(), 2);

    Ok(())
}

#[test]
fn tick_on_empty_active_still_counts_a_round() -> TestResult {
    let mut s: Surveyor<Node> =
        Surveyor::new(FanTree::new(1).shared(), Seed::Many(vec![]), limit(2));
    s.tick()?;
    assert_eq!(s.round(), 1);
    assert!(s.active().is_empty());
    Ok(())
}

#[test]
fn step_round_reports_what_changed() -> TestResult {
    let tree = FanTree::new(3).with_error_at(0).shared();
    let mut s: Surveyor<Node> = Surveyor::new(tree, Seed::Default, limit(2));

    let report = s.step_round()?;
    assert_eq!(report.round, 1);
    assert_eq!(report.stepped, 1);
    assert_eq!(report.successors, 3);
    assert_eq!(report.deadended, 0);
    assert_eq!(report.errored, 1);
    assert_eq!(report.dropped, 0);
    assert_eq!(report.parked, 1);
    assert_eq!(report.reclaimed, 0);

    Ok(())
}

#[test]
fn summary_lists_active_trimmed_deadended_errored() -> TestResult {
    let tree = FanTree::new(3).shared();
    let mut s: Surveyor<Node> = Surveyor::new(tree, Seed::Default, limit(2));
    assert_eq!(s.to_string(), "1 active, 0 trimmed, 0 deadended, 0 errored");

    s.tick()?.trim()?;
    assert_eq!(s.to_string(), "2 active, 1 trimmed, 0 deadended, 0 errored");
    assert_eq!(s.view().to_string(), s.to_string());

    Ok(())
}

#[test]
fn analyze_entry_appends_to_active() {
    let mut s: Surveyor<Node> = Surveyor::new(FanTree::new(1).shared(), Seed::Single(1), limit(4));
    s.analyze_entry(9);

    let entries: Vec<u64> = s.active().iter().map(|n| n.entry).collect();
    assert_eq!(entries, vec![1, 9]);
}

#[test]
fn collect_active_flattens_in_order() -> TestResult {
    let mut s: Surveyor<Node> =
        Surveyor::new(FanTree::new(2).shared(), Seed::Many(vec![3, 4]), limit(10));
    s.tick()?;

    let collected = s.collect_active(|n| vec![n.entry, n.id]);
    assert_eq!(collected, vec![3, 2, 3, 3, 4, 4, 4, 5]);

    Ok(())
}
