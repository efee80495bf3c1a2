//! Agent domain: tests for the training bridge and policy driver.

use super::{EpisodeEnd, EpisodeOutcome, PolicyDriver, TrainingBridge};

// -----------------------------------------------------------------------------
// TrainingBridge tests
// -----------------------------------------------------------------------------

#[test]
fn test_fresh_bridge_is_empty() {
    let mut bridge = TrainingBridge::default();
    assert!(bridge.observation().is_none());
    assert!(bridge.take_outcome().is_none());
    assert!(bridge.take_action().is_none());
    assert!(!bridge.take_reset_request());
}

#[test]
fn test_submit_action_returns_the_applied_vector() {
    let mut bridge = TrainingBridge::default();

    let control = bridge.submit_action(1.0);
    assert_eq!(control.horizontal(), 1.0);
    assert_eq!(control.jump(), 1.0);
    assert_eq!(control.attack(), 0.0);
}

#[test]
fn test_submit_action_clamps() {
    let mut bridge = TrainingBridge::default();
    let control = bridge.submit_action(5.0);
    assert_eq!(control.horizontal(), 1.0);

    // The stored action is the clamped one.
    assert_eq!(bridge.take_action(), Some(1.0));
}

#[test]
fn test_action_is_consumed_once() {
    let mut bridge = TrainingBridge::default();
    bridge.submit_action(0.5);

    assert!(bridge.take_action().is_some());
    assert!(bridge.take_action().is_none());
}

#[test]
fn test_resubmission_replaces_pending_action() {
    let mut bridge = TrainingBridge::default();
    bridge.submit_action(-1.0);
    bridge.submit_action(1.0);

    assert_eq!(bridge.take_action(), Some(1.0));
}

#[test]
fn test_first_terminal_wins() {
    let mut bridge = TrainingBridge::default();
    bridge.record_outcome(EpisodeOutcome::reached_opponent());
    bridge.record_outcome(EpisodeOutcome::died());

    let outcome = bridge.take_outcome().expect("a terminal was recorded");
    assert_eq!(outcome.end, EpisodeEnd::ReachedOpponent);
    assert_eq!(outcome.reward, 1.0);
}

#[test]
fn test_outcome_is_consumed_once() {
    let mut bridge = TrainingBridge::default();
    bridge.record_outcome(EpisodeOutcome::died());

    assert!(bridge.take_outcome().is_some());
    assert!(bridge.take_outcome().is_none());
}

#[test]
fn test_reset_clears_episode_state() {
    let mut bridge = TrainingBridge::default();
    bridge.submit_action(1.0);
    bridge.record_outcome(EpisodeOutcome::died());

    bridge.request_reset();
    assert!(bridge.take_reset_request());
    bridge.clear_episode();

    assert!(bridge.take_action().is_none());
    assert!(bridge.take_outcome().is_none());
}

#[test]
fn test_observation_records_latest() {
    let mut bridge = TrainingBridge::default();
    bridge.record_observation([1.0, 2.0, 3.0, 4.0]);
    bridge.record_observation([5.0, 6.0, 7.0, 8.0]);

    assert_eq!(bridge.observation(), Some([5.0, 6.0, 7.0, 8.0]));
}

#[test]
fn test_death_outcome_carries_zero_reward() {
    let outcome = EpisodeOutcome::died();
    assert_eq!(outcome.reward, 0.0);
    assert_eq!(outcome.end, EpisodeEnd::Died);
}

// -----------------------------------------------------------------------------
// PolicyDriver tests
// -----------------------------------------------------------------------------

#[test]
fn test_driver_starts_neutral() {
    let driver = PolicyDriver::default();
    assert!(driver.control().horizontal_axis().abs() < 1e-6);
    assert!(!driver.control().jump_requested());
}

#[test]
fn test_driver_holds_last_action_between_decisions() {
    let mut driver = PolicyDriver::default();
    driver.apply_action(1.0);

    // No new action: the held vector keeps applying.
    let held = driver.control();
    assert_eq!(held.horizontal(), 1.0);
    assert_eq!(held.jump(), 1.0);
    assert_eq!(driver.control(), held);
}
