use super::*;

#[test]
fn start_makes_run_current() {
    let ticker = Ticker::new();
    let run = ticker.start(TICK, || TickFlow::Continue);
    assert!(ticker.is_current(run));
}

#[test]
fn stop_invalidates_run() {
    let ticker = Ticker::new();
    let run = ticker.start(TICK, || TickFlow::Continue);
    ticker.stop();
    assert!(!ticker.is_current(run));
}

#[test]
fn restart_supersedes_previous_run() {
    let ticker = Ticker::new();
    let first = ticker.start(TICK, || TickFlow::Continue);
    let second = ticker.start(TICK, || TickFlow::Continue);
    assert!(!ticker.is_current(first));
    assert!(ticker.is_current(second));
}

#[test]
fn clones_share_generation() {
    let ticker = Ticker::new();
    let handle = ticker.clone();
    let run = ticker.start(TICK, || TickFlow::Continue);
    handle.stop();
    assert!(!ticker.is_current(run));
}
