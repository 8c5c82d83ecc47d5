//! Gamified lessons: static catalog, quiz flow, XP/level/badge rules.
//!
//! DESIGN
//! ======
//! The catalog and leaderboard are compiled-in statics. A [`QuizSession`] is
//! the only mutable piece while a lesson is open; on completion the
//! component hands the score to [`progress_after`] and persists the
//! completed lesson id through [`CompletedLessons`].

#[cfg(test)]
#[path = "gamified_test.rs"]
mod gamified_test;

use crate::net::types::User;
use crate::util::storage::{self, LocalStore, Namespace, StorageKey};

pub const XP_PER_LEVEL: u32 = 200;
pub const PERFECT_SCORE: &str = "Perfect Score";
pub const HIGH_ACHIEVER: &str = "High Achiever";

#[derive(Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LessonContent {
    pub theory: &'static str,
    pub equation: Option<&'static str>,
    pub examples: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub subject: &'static str,
    pub level: &'static str,
    pub description: &'static str,
    pub xp: u32,
    pub duration: &'static str,
    pub content: LessonContent,
    pub quiz: &'static [QuizQuestion],
}

impl Lesson {
    /// Case-insensitive match against title, description and subject.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [self.title, self.description, self.subject]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub name: &'static str,
    pub level: u32,
    pub xp: u32,
    pub badges: u32,
    pub streak: u32,
    pub avatar: &'static str,
}

pub static LESSONS: &[Lesson] = &[
    Lesson {
        id: "algebra-basics",
        title: "Linear Equations",
        subject: "Mathematics",
        level: "Beginner",
        description: "Learn to solve one-variable linear equations step by step.",
        xp: 100,
        duration: "15 min",
        content: LessonContent {
            theory: "A linear equation has the form ax + b = c. Isolate x by undoing addition and multiplication in reverse order, doing the same to both sides.",
            equation: Some("ax + b = c  =>  x = (c - b) / a"),
            examples: &["2x + 3 = 11  =>  x = 4", "5x - 10 = 0  =>  x = 2"],
        },
        quiz: &[
            QuizQuestion {
                question: "Solve for x: 3x + 6 = 21",
                options: &["x = 3", "x = 5", "x = 7", "x = 9"],
                correct: 1,
                explanation: "Subtract 6 to get 3x = 15, then divide by 3.",
            },
            QuizQuestion {
                question: "Solve for x: x / 4 = 2",
                options: &["x = 2", "x = 4", "x = 6", "x = 8"],
                correct: 3,
                explanation: "Multiply both sides by 4.",
            },
            QuizQuestion {
                question: "Which operation undoes multiplication?",
                options: &["Addition", "Subtraction", "Division", "Exponentiation"],
                correct: 2,
                explanation: "Division is the inverse of multiplication.",
            },
        ],
    },
    Lesson {
        id: "photosynthesis",
        title: "Photosynthesis",
        subject: "Biology",
        level: "Intermediate",
        description: "Discover how plants turn light, water and carbon dioxide into food.",
        xp: 150,
        duration: "20 min",
        content: LessonContent {
            theory: "Photosynthesis takes place in chloroplasts. Light energy drives the conversion of carbon dioxide and water into glucose, releasing oxygen.",
            equation: Some("6CO2 + 6H2O + light -> C6H12O6 + 6O2"),
            examples: &["Leaves are green because chlorophyll reflects green light", "Aquatic plants release oxygen bubbles in sunlight"],
        },
        quiz: &[
            QuizQuestion {
                question: "Where does photosynthesis happen?",
                options: &["Mitochondria", "Chloroplasts", "Nucleus", "Ribosomes"],
                correct: 1,
                explanation: "Chloroplasts contain the chlorophyll that captures light.",
            },
            QuizQuestion {
                question: "Which gas is released by photosynthesis?",
                options: &["Carbon dioxide", "Nitrogen", "Oxygen", "Hydrogen"],
                correct: 2,
                explanation: "Oxygen is a by-product of splitting water.",
            },
            QuizQuestion {
                question: "What sugar does photosynthesis produce?",
                options: &["Glucose", "Sucrose", "Lactose", "Fructose"],
                correct: 0,
                explanation: "The main product is glucose, C6H12O6.",
            },
            QuizQuestion {
                question: "What pigment absorbs light for photosynthesis?",
                options: &["Melanin", "Hemoglobin", "Keratin", "Chlorophyll"],
                correct: 3,
                explanation: "Chlorophyll absorbs red and blue light.",
            },
        ],
    },
    Lesson {
        id: "world-war-2",
        title: "World War II Overview",
        subject: "History",
        level: "Intermediate",
        description: "Key events and turning points of the Second World War.",
        xp: 120,
        duration: "25 min",
        content: LessonContent {
            theory: "World War II lasted from 1939 to 1945. It began with the invasion of Poland and ended with the surrender of Germany in May 1945 and of Japan in September 1945.",
            equation: None,
            examples: &["1939: Invasion of Poland", "1941: Attack on Pearl Harbor", "1944: D-Day landings"],
        },
        quiz: &[
            QuizQuestion {
                question: "In which year did World War II begin?",
                options: &["1914", "1939", "1941", "1945"],
                correct: 1,
                explanation: "Germany invaded Poland on 1 September 1939.",
            },
            QuizQuestion {
                question: "What event brought the United States into the war?",
                options: &["D-Day", "Battle of Britain", "Pearl Harbor", "Battle of Midway"],
                correct: 2,
                explanation: "The attack on Pearl Harbor came on 7 December 1941.",
            },
        ],
    },
    Lesson {
        id: "python-basics",
        title: "Python Variables and Loops",
        subject: "Computer Science",
        level: "Beginner",
        description: "Store values in variables and repeat work with for loops.",
        xp: 130,
        duration: "20 min",
        content: LessonContent {
            theory: "A variable names a value. A for loop runs its body once for every item in a sequence such as range(n).",
            equation: None,
            examples: &["total = 0", "for i in range(3): total += i"],
        },
        quiz: &[
            QuizQuestion {
                question: "How many times does `for i in range(5)` run?",
                options: &["4", "5", "6", "Forever"],
                correct: 1,
                explanation: "range(5) yields 0, 1, 2, 3, 4.",
            },
            QuizQuestion {
                question: "Which line assigns 10 to a variable named x?",
                options: &["x == 10", "10 = x", "x = 10", "let x: 10"],
                correct: 2,
                explanation: "A single = assigns; == compares.",
            },
            QuizQuestion {
                question: "What does print(2 * 3) show?",
                options: &["23", "5", "6", "2 * 3"],
                correct: 2,
                explanation: "The expression is evaluated before printing.",
            },
        ],
    },
];

pub static LEADERBOARD: &[LeaderboardEntry] = &[
    LeaderboardEntry { id: 1, name: "Sarah Chen", level: 12, xp: 2450, badges: 15, streak: 21, avatar: "SC" },
    LeaderboardEntry { id: 2, name: "Marcus Johnson", level: 11, xp: 2210, badges: 13, streak: 14, avatar: "MJ" },
    LeaderboardEntry { id: 3, name: "Priya Patel", level: 10, xp: 1980, badges: 12, streak: 18, avatar: "PP" },
    LeaderboardEntry { id: 4, name: "Diego Alvarez", level: 9, xp: 1760, badges: 10, streak: 9, avatar: "DA" },
    LeaderboardEntry { id: 5, name: "Emma Wilson", level: 8, xp: 1540, badges: 8, streak: 6, avatar: "EW" },
];

#[must_use]
pub fn lesson_by_id(id: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|lesson| lesson.id == id)
}

/// Level reached at `xp`.
#[must_use]
pub fn level_for(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Fraction of the current level already earned, 0..=100.
#[must_use]
pub fn level_progress_percent(xp: u32) -> u32 {
    (xp % XP_PER_LEVEL) * 100 / XP_PER_LEVEL
}

/// Badges earned by scoring `score` out of `total`.
#[must_use]
pub fn badges_for(score: usize, total: usize) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if total > 0 && score == total {
        badges.push(PERFECT_SCORE);
    }
    // score >= 80% of total, kept in integers
    if total > 0 && score * 5 >= total * 4 {
        badges.push(HIGH_ACHIEVER);
    }
    badges
}

/// Append `new` badges to `existing`, skipping ones already present.
pub fn merge_badges<'a, I>(existing: &mut Vec<String>, new: I)
where
    I: IntoIterator<Item = &'a str>,
{
    for badge in new {
        if !existing.iter().any(|b| b == badge) {
            existing.push(badge.to_owned());
        }
    }
}

/// Progress values to store on the user after finishing `lesson`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub xp: u32,
    pub level: u32,
    pub badges: Vec<String>,
}

#[must_use]
pub fn progress_after(user: &User, lesson: &Lesson, score: usize) -> ProgressUpdate {
    let xp = user.xp.saturating_add(lesson.xp);
    let mut badges = user.badges.clone();
    merge_badges(&mut badges, badges_for(score, lesson.quiz.len()));
    ProgressUpdate { xp, level: level_for(xp), badges }
}

// =============================================================================
// QUIZ SESSION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Showing the lesson overview before the first question.
    Overview,
    /// Answering `current`.
    Question,
    /// `current` was submitted; explanation visible.
    Answered,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    pub lesson_id: &'static str,
    pub current: usize,
    pub selected: Option<usize>,
    pub score: usize,
    pub phase: QuizPhase,
    total: usize,
}

impl QuizSession {
    #[must_use]
    pub fn new(lesson: &'static Lesson) -> Self {
        Self {
            lesson_id: lesson.id,
            current: 0,
            selected: None,
            score: 0,
            phase: QuizPhase::Overview,
            total: lesson.quiz.len(),
        }
    }

    #[must_use]
    pub fn lesson(&self) -> Option<&'static Lesson> {
        lesson_by_id(self.lesson_id)
    }

    #[must_use]
    pub fn question(&self) -> Option<&'static QuizQuestion> {
        self.lesson().and_then(|l| l.quiz.get(self.current))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn begin(&mut self) {
        if self.phase == QuizPhase::Overview {
            self.phase = if self.total == 0 { QuizPhase::Complete } else { QuizPhase::Question };
        }
    }

    /// Choose an option. Ignored once the question is answered.
    pub fn select(&mut self, option: usize) {
        if self.phase == QuizPhase::Question {
            self.selected = Some(option);
        }
    }

    /// Lock in the selection. Returns whether it was correct, `None` when
    /// there is nothing to submit.
    pub fn submit(&mut self) -> Option<bool> {
        if self.phase != QuizPhase::Question {
            return None;
        }
        let selected = self.selected?;
        let correct = self.question().is_some_and(|q| q.correct == selected);
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Answered;
        Some(correct)
    }

    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        if self.phase != QuizPhase::Answered {
            return None;
        }
        Some(self.selected == self.question().map(|q| q.correct))
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.total
    }

    /// Advance to the next question, or complete after the last one.
    /// Returns `true` when this call completed the quiz.
    pub fn next(&mut self) -> bool {
        if self.phase != QuizPhase::Answered {
            return false;
        }
        if self.is_last_question() {
            self.phase = QuizPhase::Complete;
            return true;
        }
        self.current += 1;
        self.selected = None;
        self.phase = QuizPhase::Question;
        false
    }

    /// Questions answered so far, for the progress bar.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        match self.phase {
            QuizPhase::Overview => 0,
            QuizPhase::Question => self.current,
            QuizPhase::Answered => self.current + 1,
            QuizPhase::Complete => self.total,
        }
    }

    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        #[allow(clippy::cast_possible_truncation)]
        let percent = (self.answered_count() * 100 / self.total) as u32;
        percent
    }
}

// =============================================================================
// COMPLETED LESSONS
// =============================================================================

/// Completed lesson ids for one user, in completion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletedLessons {
    ids: Vec<String>,
}

impl CompletedLessons {
    pub fn load<S: LocalStore + ?Sized>(store: &S, user_id: &str) -> Self {
        let ids: Vec<String> = storage::load_or_default(store, &Self::key(user_id));
        Self { ids }
    }

    fn key(user_id: &str) -> StorageKey {
        StorageKey::scoped(Namespace::CompletedLessons, user_id)
    }

    #[must_use]
    pub fn contains(&self, lesson_id: &str) -> bool {
        self.ids.iter().any(|id| id == lesson_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Record `lesson_id` and persist. Returns `false` when already recorded.
    pub fn mark<S: LocalStore + ?Sized>(&mut self, lesson_id: &str, store: &S, user_id: &str) -> bool {
        if self.contains(lesson_id) {
            return false;
        }
        self.ids.push(lesson_id.to_owned());
        storage::save_logged(store, &Self::key(user_id), &self.ids);
        true
    }
}
