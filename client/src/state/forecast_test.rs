use super::*;

#[test]
fn forecast_state_starts_idle_without_results() {
    let state = ForecastState::default();
    assert!(!state.loading);
    assert!(!state.show_results);
    assert_eq!(state.button_label(), "Generate Forecast");
}

#[test]
fn begin_sets_loading_and_numbers_runs() {
    let mut state = ForecastState::default();
    assert_eq!(state.begin(), Some(1));
    assert!(state.loading);
    assert!(!state.show_results);
    assert_eq!(state.button_label(), "AI Processing...");
}

#[test]
fn begin_is_ignored_while_processing() {
    let mut state = ForecastState::default();
    assert_eq!(state.begin(), Some(1));
    assert_eq!(state.begin(), None);
    assert_eq!(state.runs_started, 1);
}

#[test]
fn finish_reveals_results_once_per_run() {
    let mut state = ForecastState::default();
    let run = state.begin().unwrap();
    assert!(state.finish(run));
    assert!(!state.loading);
    assert!(state.show_results);
    assert!(!state.finish(run));
    assert_eq!(state.runs_completed, 1);
}

#[test]
fn stale_run_cannot_finish_current_one() {
    let mut state = ForecastState::default();
    let first = state.begin().unwrap();
    assert!(state.finish(first));
    let second = state.begin().unwrap();
    assert!(!state.finish(first));
    assert!(state.loading);
    assert!(state.finish(second));
    assert_eq!(state.runs_completed, 2);
}

#[test]
fn results_stay_visible_during_a_rerun() {
    let mut state = ForecastState::default();
    let run = state.begin().unwrap();
    state.finish(run);
    state.begin();
    assert!(state.loading);
    assert!(state.show_results);
}

#[test]
fn every_click_completes_exactly_once() {
    let mut state = ForecastState::default();
    for click in 1..=5 {
        let run = state.begin().unwrap();
        assert_eq!(run, click);
        assert!(state.finish(run));
    }
    assert_eq!(state.runs_started, 5);
    assert_eq!(state.runs_completed, 5);
}

#[test]
fn delay_is_two_seconds() {
    assert_eq!(FORECAST_DELAY_MS, 2_000);
}
