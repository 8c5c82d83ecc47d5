//! Wellness center: mood check-in, journal, timed exercises, activities, riddles.
//!
//! DESIGN
//! ======
//! The two timed exercises are plain state machines advanced by `tick()`;
//! the component owns the one-second loop (`util::ticker`) and only renders
//! what these report. Mood and journal are single overwrite-on-save slots
//! per user.

#[cfg(test)]
#[path = "wellness_test.rs"]
mod wellness_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, LocalStore, Namespace, StorageError, StorageKey};

// =============================================================================
// MOOD
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Stressed,
    Tired,
    Frustrated,
}

impl Mood {
    pub const ALL: [Self; 6] =
        [Self::Happy, Self::Neutral, Self::Sad, Self::Stressed, Self::Tired, Self::Frustrated];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
            Self::Tired => "tired",
            Self::Frustrated => "frustrated",
        }
    }

    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value.trim())
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Neutral => "😐",
            Self::Sad => "😔",
            Self::Stressed => "😰",
            Self::Tired => "😴",
            Self::Frustrated => "😤",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Neutral => "Neutral",
            Self::Sad => "Sad",
            Self::Stressed => "Stressed",
            Self::Tired => "Tired",
            Self::Frustrated => "Frustrated",
        }
    }

    /// Stressed and frustrated check-ins point the user at an activity.
    #[must_use]
    pub fn suggests_activity(self) -> bool {
        matches!(self, Self::Stressed | Self::Frustrated)
    }

    #[must_use]
    pub fn message(self) -> String {
        let tail = if self.suggests_activity() {
            "Try one of the activities below to help you feel better."
        } else {
            "Keep up the positive energy!"
        };
        format!("Thanks for sharing! Remember that all feelings are valid. {tail}")
    }
}

fn mood_key(user_id: &str) -> StorageKey {
    StorageKey::scoped(Namespace::Mood, user_id)
}

/// Last saved mood; unreadable or unknown values are dropped.
pub fn load_mood<S: LocalStore + ?Sized>(store: &S, user_id: &str) -> Option<Mood> {
    let key = mood_key(user_id);
    let text = match storage::load_text(store, &key) {
        Ok(text) => text?,
        Err(err) => {
            storage::discard(store, &key, &err);
            return None;
        }
    };
    let mood = Mood::from_str_opt(&text);
    if mood.is_none() {
        let err = StorageError::Malformed { key: key.to_string(), reason: format!("unknown mood `{text}`") };
        storage::discard(store, &key, &err);
    }
    mood
}

pub fn save_mood<S: LocalStore + ?Sized>(store: &S, user_id: &str, mood: Mood) {
    storage::save_logged(store, &mood_key(user_id), mood.as_str());
}

// =============================================================================
// JOURNAL
// =============================================================================

pub const JOURNAL_MAX_CHARS: usize = 500;

fn journal_key(user_id: &str) -> StorageKey {
    StorageKey::scoped(Namespace::Journal, user_id)
}

/// Cut `text` to the journal's character limit.
#[must_use]
pub fn clamp_journal(text: &str) -> String {
    text.chars().take(JOURNAL_MAX_CHARS).collect()
}

pub fn load_journal<S: LocalStore + ?Sized>(store: &S, user_id: &str) -> String {
    let key = journal_key(user_id);
    match storage::load_text(store, &key) {
        Ok(text) => text.unwrap_or_default(),
        Err(err) => {
            storage::discard(store, &key, &err);
            String::new()
        }
    }
}

/// Overwrite the journal entry. Blank text is not saved; returns whether a
/// write happened.
pub fn save_journal<S: LocalStore + ?Sized>(store: &S, user_id: &str, text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    storage::save_logged(store, &journal_key(user_id), &clamp_journal(text));
    true
}

// =============================================================================
// BREATHING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    #[must_use]
    pub fn seconds(self) -> i32 {
        match self {
            Self::Inhale => 4,
            Self::Hold => 7,
            Self::Exhale => 8,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Inhale => Self::Hold,
            Self::Hold => Self::Exhale,
            Self::Exhale => Self::Inhale,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inhale => "Breathe In",
            Self::Hold => "Hold",
            Self::Exhale => "Breathe Out",
        }
    }
}

/// 4-7-8 breathing: inhale 4s, hold 7s, exhale 8s, repeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreathingCycle {
    pub phase: BreathPhase,
    pub remaining: i32,
}

impl Default for BreathingCycle {
    fn default() -> Self {
        Self { phase: BreathPhase::Inhale, remaining: BreathPhase::Inhale.seconds() }
    }
}

impl BreathingCycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one second. The count runs down through zero, then the next
    /// phase starts at its full duration.
    pub fn tick(&mut self) {
        self.remaining -= 1;
        if self.remaining < 0 {
            self.phase = self.phase.next();
            self.remaining = self.phase.seconds();
        }
    }
}

// =============================================================================
// MEDITATION
// =============================================================================

pub const MEDITATION_SECONDS: u32 = 5 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerStatus {
    Running,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeditationTimer {
    pub remaining: u32,
}

impl Default for MeditationTimer {
    fn default() -> Self {
        Self { remaining: MEDITATION_SECONDS }
    }
}

impl MeditationTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> TimerStatus {
        if self.remaining <= 1 {
            self.remaining = 0;
            return TimerStatus::Finished;
        }
        self.remaining -= 1;
        TimerStatus::Running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

/// `m:ss`
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

// =============================================================================
// ACTIVITIES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Breathing,
    Meditation,
    QuickWalk,
    Stretching,
    MusicBreak,
    Gratitude,
    Hydration,
    MindPuzzle,
    Visualization,
}

/// Static copy for a guide-style activity page.
#[derive(Debug, PartialEq, Eq)]
pub struct ActivityGuide {
    pub intro: &'static str,
    pub steps: &'static [&'static str],
    pub footnote: &'static str,
}

impl Activity {
    pub const ALL: [Self; 9] = [
        Self::Breathing,
        Self::Meditation,
        Self::QuickWalk,
        Self::Stretching,
        Self::MusicBreak,
        Self::Gratitude,
        Self::Hydration,
        Self::MindPuzzle,
        Self::Visualization,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Breathing => "Breathing Exercise",
            Self::Meditation => "Mindful Meditation",
            Self::QuickWalk => "Quick Walk",
            Self::Stretching => "Guided Stretching",
            Self::MusicBreak => "Music Break",
            Self::Gratitude => "Gratitude Practice",
            Self::Hydration => "Hydration Reminder",
            Self::MindPuzzle => "Mind Puzzle",
            Self::Visualization => "Visualization",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Breathing => "4-7-8 breathing technique for relaxation",
            Self::Meditation => "5-minute guided meditation",
            Self::QuickWalk => "Take a 10-minute break and walk",
            Self::Stretching => "A quick 5-minute stretch to ease tension",
            Self::MusicBreak => "Listen to a relaxing song or a favorite tune",
            Self::Gratitude => "Write down three things you are grateful for",
            Self::Hydration => "Time to drink a glass of water",
            Self::MindPuzzle => "Solve a quick riddle or puzzle",
            Self::Visualization => "Envision a calm, happy place",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Breathing => "🌬️",
            Self::Meditation => "🧠",
            Self::QuickWalk => "🚶",
            Self::Stretching => "🤸",
            Self::MusicBreak => "🎵",
            Self::Gratitude => "🪶",
            Self::Hydration => "💧",
            Self::MindPuzzle => "🧩",
            Self::Visualization => "☀️",
        }
    }

    /// Activities driven by the tick loop.
    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(self, Self::Breathing | Self::Meditation)
    }

    #[must_use]
    pub fn guide(self) -> Option<&'static ActivityGuide> {
        match self {
            Self::QuickWalk => Some(&QUICK_WALK),
            Self::Stretching => Some(&STRETCHING),
            Self::MusicBreak => Some(&MUSIC_BREAK),
            Self::Gratitude => Some(&GRATITUDE),
            Self::Hydration => Some(&HYDRATION),
            Self::MindPuzzle => Some(&MIND_PUZZLE),
            Self::Visualization => Some(&VISUALIZATION),
            Self::Breathing | Self::Meditation => None,
        }
    }
}

static QUICK_WALK: ActivityGuide = ActivityGuide {
    intro: "Take a purposeful 10-minute walk. Focus on your posture and breath.",
    steps: &[
        "Keep your head up, shoulders relaxed, and your back straight.",
        "Gently swing your arms to help propel you forward.",
        "Walk with a rolling motion from heel to toe.",
    ],
    footnote: "Even a short walk can boost your heart rate and clear your mind.",
};

static STRETCHING: ActivityGuide = ActivityGuide {
    intro: "Ease tension with a 5-minute guided stretch. Move slowly and listen to your body.",
    steps: &[
        "Shoulder Stretch: Bring one arm across your chest and gently pull it closer. Hold for 30 seconds.",
        "Quad Stretch: Hold onto a wall for balance, then pull one heel toward your glute. Hold for 30 seconds.",
        "Calf Stretch: Face a wall, place one foot behind the other, and lean forward with your back heel on the floor. Hold for 30 seconds.",
    ],
    footnote: "Hold each stretch without bouncing. Breathe deeply as you hold each position.",
};

static MUSIC_BREAK: ActivityGuide = ActivityGuide {
    intro: "Time to relax and reset. Here are some songs to help you unwind:",
    steps: &[
        "Classical: \"Clair de Lune\" by Claude Debussy",
        "Modern Classical: \"Nuvole Bianche\" by Ludovico Einaudi",
        "Ambient: \"Weightless\" by Marconi Union",
        "Piano: \"River Flows in You\" by Yiruma",
        "Nature Sounds: A playlist of ocean waves or gentle rain.",
    ],
    footnote: "Focus on the melody and let your thoughts drift away.",
};

static GRATITUDE: ActivityGuide = ActivityGuide {
    intro: "Take a moment to shift your focus to the positive. Write down three things you are grateful for today.",
    steps: &[],
    footnote: "Practicing gratitude can reframe your day and boost your happiness.",
};

static HYDRATION: ActivityGuide = ActivityGuide {
    intro: "A simple reminder to drink water. The general recommendation is 8 to 12 cups a day.",
    steps: &[
        "A clear, pale yellow urine color is a good sign you are hydrated.",
        "Darker urine can be a sign of dehydration.",
    ],
    footnote: "Staying hydrated is crucial for mental clarity and physical energy.",
};

static MIND_PUZZLE: ActivityGuide = ActivityGuide {
    intro: "Pick a puzzle to give your mind a short, focused break.",
    steps: &[],
    footnote: "Engaging in puzzles can reduce mental fatigue and improve concentration.",
};

static VISUALIZATION: ActivityGuide = ActivityGuide {
    intro: "Find a quiet spot, close your eyes, and visualize a peaceful place. Engage all your senses to make the image vivid.",
    steps: &[
        "What do you see in this peaceful place?",
        "What sounds can you hear?",
        "What scents are present?",
        "What do you feel (e.g., the warmth of the sun, a gentle breeze)?",
    ],
    footnote: "This practice helps train your mind to focus on calming images and sensations.",
};

// =============================================================================
// PUZZLES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Puzzle {
    Riddles,
    Sudoku,
    Crossword,
    Logic,
}

impl Puzzle {
    pub const ALL: [Self; 4] = [Self::Riddles, Self::Sudoku, Self::Crossword, Self::Logic];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Riddles => "Riddles",
            Self::Sudoku => "Sudoku",
            Self::Crossword => "Crossword Puzzles",
            Self::Logic => "Logic Puzzles",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Riddles => "Solve a quick, thought-provoking riddle.",
            Self::Sudoku => "A classic number-placement puzzle.",
            Self::Crossword => "A classic test of vocabulary.",
            Self::Logic => "A challenging way to use deductive reasoning.",
        }
    }

    /// Only riddles are playable; the rest show a placeholder.
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Riddles)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Riddle {
    pub question: &'static str,
    pub answer: &'static str,
}

impl Riddle {
    /// Case-insensitive comparison after trimming both sides.
    #[must_use]
    pub fn is_correct(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }

    #[must_use]
    pub fn feedback(&self, guess: &str) -> String {
        if self.is_correct(guess) {
            "Correct! 🎉".to_owned()
        } else {
            format!("Incorrect. The answer is: {}", self.answer)
        }
    }
}

pub static RIDDLES: [Riddle; 20] = [
    Riddle { question: "What has an eye but cannot see?", answer: "A needle" },
    Riddle { question: "What is full of holes but still holds water?", answer: "A sponge" },
    Riddle { question: "What question can you never answer yes to?", answer: "Are you asleep yet?" },
    Riddle {
        question: "I speak without a mouth and hear without ears. I have no body, but I come alive with wind. What am I?",
        answer: "An echo",
    },
    Riddle { question: "The more you take, the more you leave behind. What am I?", answer: "Footsteps" },
    Riddle { question: "What has to be broken before you can use it?", answer: "An egg" },
    Riddle { question: "What is always in front of you but can't be seen?", answer: "The future" },
    Riddle { question: "What is always coming, but never arrives?", answer: "Tomorrow" },
    Riddle { question: "What can you hold in your left hand, but not in your right?", answer: "Your right elbow" },
    Riddle { question: "What has a head and a tail but no body?", answer: "A coin" },
    Riddle { question: "What word is spelled incorrectly in every dictionary?", answer: "Incorrectly" },
    Riddle {
        question: "What is light as a feather, but even the strongest person can't hold it for five minutes?",
        answer: "Breath",
    },
    Riddle { question: "What belongs to you, but other people use it more than you do?", answer: "Your name" },
    Riddle { question: "What is it that lives if it is fed, and dies if you give it a drink?", answer: "Fire" },
    Riddle { question: "What is it that has an iron back and a wooden leg?", answer: "A chair" },
    Riddle {
        question: "I have cities, but no houses. I have mountains, but no trees. I have water, but no fish. What am I?",
        answer: "A map",
    },
    Riddle { question: "What has many teeth, but cannot bite?", answer: "A comb" },
    Riddle { question: "What is full of keys but can't open a single door?", answer: "A piano" },
    Riddle { question: "What is it that has a neck but no head?", answer: "A bottle" },
    Riddle { question: "What has a thumb and four fingers, but is not alive?", answer: "A glove" },
];

/// Pick a riddle index from `seed`, never repeating `previous` back to back.
#[must_use]
pub fn pick_riddle(seed: u64, previous: Option<usize>) -> usize {
    let len = RIDDLES.len();
    #[allow(clippy::cast_possible_truncation)]
    let index = (seed % len as u64) as usize;
    if previous == Some(index) { (index + 1) % len } else { index }
}
