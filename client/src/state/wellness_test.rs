use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// Breathing
// =============================================================

#[test]
fn breathing_starts_at_inhale_four() {
    let cycle = BreathingCycle::new();
    assert_eq!(cycle.phase, BreathPhase::Inhale);
    assert_eq!(cycle.remaining, 4);
}

#[test]
fn breathing_runs_inhale_hold_exhale_inhale() {
    let mut cycle = BreathingCycle::new();
    let mut transitions = vec![(cycle.phase, cycle.remaining)];
    for _ in 0..40 {
        let before = cycle.phase;
        cycle.tick();
        if cycle.phase != before {
            transitions.push((cycle.phase, cycle.remaining));
        }
    }
    assert_eq!(
        &transitions[..4],
        &[
            (BreathPhase::Inhale, 4),
            (BreathPhase::Hold, 7),
            (BreathPhase::Exhale, 8),
            (BreathPhase::Inhale, 4),
        ]
    );
}

#[test]
fn breathing_counts_down_through_zero_before_switching() {
    let mut cycle = BreathingCycle::new();
    let mut seen = Vec::new();
    for _ in 0..5 {
        cycle.tick();
        seen.push((cycle.phase, cycle.remaining));
    }
    assert_eq!(
        seen,
        [
            (BreathPhase::Inhale, 3),
            (BreathPhase::Inhale, 2),
            (BreathPhase::Inhale, 1),
            (BreathPhase::Inhale, 0),
            (BreathPhase::Hold, 7),
        ]
    );
}

#[test]
fn breathing_never_skips_a_phase() {
    let mut cycle = BreathingCycle::new();
    for _ in 0..500 {
        let before = cycle.phase;
        cycle.tick();
        assert!(cycle.phase == before || cycle.phase == before.next());
        assert!(cycle.remaining >= 0);
    }
}

// =============================================================
// Meditation
// =============================================================

#[test]
fn meditation_finishes_after_five_minutes() {
    let mut timer = MeditationTimer::new();
    assert_eq!(timer.remaining, 300);
    let mut ticks = 0;
    while timer.tick() == TimerStatus::Running {
        ticks += 1;
    }
    assert_eq!(ticks, 299);
    assert!(timer.is_finished());
    assert_eq!(timer.tick(), TimerStatus::Finished);
    assert_eq!(timer.remaining, 0);
}

#[test]
fn format_clock_pads_seconds() {
    assert_eq!(format_clock(300), "5:00");
    assert_eq!(format_clock(65), "1:05");
    assert_eq!(format_clock(9), "0:09");
}

// =============================================================
// Mood + journal
// =============================================================

#[test]
fn mood_round_trips_per_user() {
    let store = MemoryStore::new();
    save_mood(&store, "u1", Mood::Tired);
    assert_eq!(load_mood(&store, "u1"), Some(Mood::Tired));
    assert_eq!(load_mood(&store, "u2"), None);
}

#[test]
fn legacy_bare_mood_is_accepted() {
    let store = MemoryStore::new();
    store.set_raw("mood_u1", "happy").unwrap();
    assert_eq!(load_mood(&store, "u1"), Some(Mood::Happy));
}

#[test]
fn unknown_mood_is_discarded() {
    let store = MemoryStore::new();
    store.set_raw("mood_u1", "\"ecstatic\"").unwrap();
    assert_eq!(load_mood(&store, "u1"), None);
    assert!(store.get_raw("mood_u1").unwrap().is_none());
}

#[test]
fn stressed_and_frustrated_suggest_activity() {
    assert!(Mood::Stressed.message().ends_with("help you feel better."));
    assert!(Mood::Frustrated.suggests_activity());
    assert!(Mood::Happy.message().ends_with("Keep up the positive energy!"));
}

#[test]
fn blank_journal_is_not_saved() {
    let store = MemoryStore::new();
    assert!(!save_journal(&store, "u1", "   \n"));
    assert!(store.is_empty());
}

#[test]
fn journal_overwrites_and_clamps() {
    let store = MemoryStore::new();
    assert!(save_journal(&store, "u1", "first"));
    let long = "x".repeat(JOURNAL_MAX_CHARS + 20);
    assert!(save_journal(&store, "u1", &long));
    assert_eq!(load_journal(&store, "u1").chars().count(), JOURNAL_MAX_CHARS);
}

// =============================================================
// Activities + riddles
// =============================================================

#[test]
fn nine_activities_and_only_timed_ones_lack_guides() {
    assert_eq!(Activity::ALL.len(), 9);
    for activity in Activity::ALL {
        assert_eq!(activity.guide().is_none(), activity.is_timed(), "{}", activity.title());
    }
}

#[test]
fn riddle_answer_is_case_and_space_insensitive() {
    let riddle = &RIDDLES[0];
    assert!(riddle.is_correct("  a NEEDLE "));
    assert!(!riddle.is_correct("needle"));
    assert_eq!(riddle.feedback("a needle"), "Correct! 🎉");
    assert_eq!(riddle.feedback("thread"), "Incorrect. The answer is: A needle");
}

#[test]
fn pick_riddle_avoids_immediate_repeat() {
    assert_eq!(pick_riddle(3, None), 3);
    assert_eq!(pick_riddle(3, Some(3)), 4);
    assert_eq!(pick_riddle(19, Some(19)), 0);
    assert!(pick_riddle(u64::MAX, None) < RIDDLES.len());
}
