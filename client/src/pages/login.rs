//! Student and teacher sign-in / registration pages.
//!
//! Both routes render the same form; the role fixes the dashboard the user
//! lands on and which grade/subject list the registration form offers.
//! Registration runs in demo mode: a successful signup signs the user in
//! straight away with the details they entered.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::{Role, SignupRequest, User};
use crate::state::session::SessionState;

pub const STUDENT_GRADES: [&str; 19] = [
    "Kindergarten",
    "Grade 1",
    "Grade 2",
    "Grade 3",
    "Grade 4",
    "Grade 5",
    "Grade 6",
    "Grade 7",
    "Grade 8",
    "Grade 9",
    "Grade 10",
    "Grade 11",
    "Grade 12",
    "College Freshman",
    "College Sophomore",
    "College Junior",
    "College Senior",
    "Graduate Student",
    "Adult Learner",
];

pub const TEACHER_SUBJECTS: [&str; 16] = [
    "Mathematics",
    "Science",
    "English",
    "History",
    "Geography",
    "Physics",
    "Chemistry",
    "Biology",
    "Computer Science",
    "Art",
    "Music",
    "Physical Education",
    "Foreign Languages",
    "Social Studies",
    "Elementary Education",
    "Special Education",
];

const DEMO_TOKEN: &str = "demo-token";

/// Grade (students) or subject (teachers) choices for the signup form.
pub fn grade_options(role: Role) -> &'static [&'static str] {
    match role {
        Role::Student => &STUDENT_GRADES,
        Role::Teacher => &TEACHER_SUBJECTS,
    }
}

pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Raw registration form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub grade: String,
}

pub fn validate_signup_input(form: &SignupForm, role: Role) -> Result<SignupRequest, &'static str> {
    let name = form.name.trim();
    let (email, password) = validate_login_input(&form.email, &form.password)?;
    if name.is_empty() {
        return Err("Enter your full name.");
    }
    if form.grade.is_empty() {
        return Err(match role {
            Role::Student => "Select your grade.",
            Role::Teacher => "Select the subject or grade you teach.",
        });
    }
    let (grade, subjects) = match role {
        Role::Student => (Some(form.grade.clone()), Vec::new()),
        Role::Teacher => (None, vec![form.grade.clone()]),
    };
    Ok(SignupRequest { name: name.to_owned(), email, password, role, grade, subjects, photo: None })
}

/// The signed-in user created from an accepted registration.
pub fn demo_user(request: &SignupRequest, id: String) -> User {
    User {
        id,
        name: request.name.clone(),
        email: request.email.clone(),
        role: request.role,
        grade: request.grade.clone().or_else(|| request.subjects.first().cloned()),
        photo: request.photo.clone(),
        is_verified: true,
        xp: 0,
        level: 1,
        badges: Vec::new(),
    }
}

fn heading(role: Role, signup: bool) -> String {
    let who = match role {
        Role::Student => "Student",
        Role::Teacher => "Teacher",
    };
    let what = if signup { "Registration" } else { "Login" };
    format!("{who} {what}")
}

#[component]
pub fn StudentLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::Student/> }
}

#[component]
pub fn TeacherLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::Teacher/> }
}

#[component]
fn LoginForm(role: Role) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let signup = RwSignal::new(false);
    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = form.get();
        let registering = signup.get();
        let checked = if registering {
            validate_signup_input(&fields, role).map(Some)
        } else {
            validate_login_input(&fields.email, &fields.password).map(|_| None)
        };
        let signup_request = match checked {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::util::storage::BrowserStore;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match signup_request {
                    Some(request) => api::signup(&request)
                        .await
                        .map(|_| (demo_user(&request, uuid::Uuid::new_v4().to_string()), DEMO_TOKEN.to_owned()))
                        .map_err(|e| e.user_message(api::SIGNUP_FAILED)),
                    None => api::login(fields.email.trim(), &fields.password, role)
                        .await
                        .map(|resp| (resp.user, resp.token))
                        .map_err(|e| e.user_message(api::LOGIN_FAILED)),
                };
                match outcome {
                    Ok((user, token)) => {
                        let target = user.role.dashboard_path();
                        log::info!("signed in user_id={} role={}", user.id, user.role.as_str());
                        session.update(|s| s.login(user, token, &BrowserStore));
                        busy.set(false);
                        navigate(target, leptos_router::NavigateOptions::default());
                    }
                    Err(message) => {
                        log::warn!("authentication failed: {message}");
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (signup_request, &navigate, session);
    };

    let on_toggle_mode = move |_| {
        signup.update(|s| *s = !*s);
        error.set(String::new());
    };

    let grade_label = match role {
        Role::Student => "Grade Level",
        Role::Teacher => "Subject/Grade You Teach",
    };
    let grade_placeholder = match role {
        Role::Student => "Select your grade",
        Role::Teacher => "Select subject/grade",
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="brand brand--large">"🎓 EduNexus"</div>
                <h1>{move || heading(role, signup.get())}</h1>
                <p class="login-card__subtitle">
                    {move || {
                        if signup.get() {
                            "Create your account to get started"
                        } else {
                            "Welcome back! Please sign in to continue"
                        }
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || signup.get()>
                        <label class="field">
                            <span>"Full Name"</span>
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>{grade_label}</span>
                            <select
                                class="login-input"
                                prop:value=move || form.get().grade
                                on:change=move |ev| form.update(|f| f.grade = event_target_value(&ev))
                            >
                                <option value="">{grade_placeholder}</option>
                                {grade_options(role)
                                    .iter()
                                    .map(|option| view! { <option value=*option>{*option}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </Show>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Please wait..."
                            } else if signup.get() {
                                "Create Account"
                            } else {
                                "Sign In"
                            }
                        }}
                    </button>
                </form>
                <button class="btn btn--ghost" type="button" on:click=on_toggle_mode>
                    {move || {
                        if signup.get() {
                            "Already have an account? Sign In"
                        } else {
                            "Need an account? Sign Up"
                        }
                    }}
                </button>
            </div>
            <a class="btn btn--ghost" href="/">"← Back to Home"</a>
        </div>
    }
}
