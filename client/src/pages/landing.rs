//! Public landing page.

use leptos::prelude::*;

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: "🧠",
        title: "AI-Powered Learning",
        description: "Personalized tutoring and adaptive learning paths powered by advanced AI",
    },
    Benefit {
        icon: "♿",
        title: "Universal Accessibility",
        description: "Text-to-speech, speech input, sign language basics, and multi-language support",
    },
    Benefit {
        icon: "🏆",
        title: "Gamification",
        description: "Engaging badges, leaderboards, and achievements to motivate learning",
    },
    Benefit {
        icon: "❤️",
        title: "Student Wellness",
        description: "Integrated mood tracking and stress-relief tools for holistic education",
    },
    Benefit {
        icon: "📊",
        title: "Teacher Analytics",
        description: "Class insights and automated grading to enhance teaching efficiency",
    },
    Benefit {
        icon: "⚡",
        title: "AI Lesson Planning",
        description: "Automated lesson plan generation with PDF export",
    },
];

const STATS: [(&str, &str); 4] = [
    ("50,000+", "Students Enrolled"),
    ("5,000+", "Teachers Active"),
    ("2M+", "Lessons Completed"),
    ("500+", "Schools Partnered"),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Dr. Sarah Chen",
        "Education Director, Lincoln High School",
        "EduNexus has transformed how we approach personalized learning. Our students are 40% more engaged.",
    ),
    (
        "Marcus Johnson",
        "Mathematics Teacher",
        "The AI lesson planner saves me hours each week and the analytics help me support struggling students.",
    ),
    (
        "Emma Rodriguez",
        "Grade 10 Student",
        "The gamification makes learning fun! I've earned 15 badges this month and love the daily challenges.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="landing__nav">
                <span class="brand">"🎓 EduNexus"</span>
                <div class="landing__nav-actions">
                    <a class="btn btn--ghost" href="/student-login">"Sign In"</a>
                    <a class="btn" href="/student-login">"Get Started"</a>
                </div>
            </nav>

            <section class="landing__hero">
                <h1>"EduNexus: The Smart " <span class="accent">"Education Hub"</span></h1>
                <p>
                    "AI-powered, Accessible, and Gamified Learning for Everyone. Personalized experiences, universal accessibility, and data-driven insights."
                </p>
                <div class="landing__cta">
                    <a class="btn btn--lg" href="/student-login">"For Students →"</a>
                    <a class="btn btn--lg btn--outline" href="/teacher-login">"For Teachers →"</a>
                    <a class="btn btn--lg btn--ghost" href="/accessibility">"Accessibility Center"</a>
                </div>
            </section>

            <section class="landing__stats">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat">
                                <div class="stat__value">{*value}</div>
                                <div class="stat__label">{*label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="landing__benefits">
                <h2>"Why Choose EduNexus?"</h2>
                <div class="card-grid">
                    {BENEFITS
                        .iter()
                        .map(|b| {
                            view! {
                                <div class="card card--center">
                                    <div class="card__icon">{b.icon}</div>
                                    <h3>{b.title}</h3>
                                    <p>{b.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="landing__testimonials">
                <h2>"What Educators and Students Say"</h2>
                <div class="card-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|(name, role, quote)| {
                            view! {
                                <figure class="card testimonial">
                                    <div class="testimonial__stars">"★★★★★"</div>
                                    <blockquote>{*quote}</blockquote>
                                    <figcaption>
                                        <strong>{*name}</strong>
                                        <span>{*role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <footer class="landing__footer">
                <span>"🎓 EduNexus"</span>
                <span>"Empowering every learner."</span>
            </footer>
        </div>
    }
}
