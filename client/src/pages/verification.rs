//! Landing target for the email-verification link.

use leptos::prelude::*;

#[component]
pub fn VerificationSuccessPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card login-card--center">
                <div class="verified-mark">"✔"</div>
                <h2>"Email Verified Successfully!"</h2>
                <p>
                    "Congratulations! Your email address has been successfully verified. You can now log in to your account."
                </p>
                <a class="login-button" href="/student-login">"Go to Login"</a>
            </div>
        </div>
    }
}
