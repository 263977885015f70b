//! Login View
//!
//! Native POST to `/login`; validation is left to the browser.

use leptos::prelude::*;

use super::ThemeToggle;

#[component]
pub fn LoginView() -> impl IntoView {
    view! {
        <section class="section auth-page">
            <ThemeToggle />
            <div class="box auth-card">
                <h2 class="title is-4 has-text-centered">"Log in to your account"</h2>
                <form action="/login" method="POST">
                    <div class="field">
                        <label class="label" for="email">"Email Address"</label>
                        <div class="control">
                            <input class="input" type="email" id="email" name="email" autocomplete="email" required=true />
                        </div>
                    </div>
                    <div class="field">
                        <label class="label" for="password">"Password"</label>
                        <div class="control">
                            <input class="input" type="password" id="password" name="password" autocomplete="current-password" required=true />
                        </div>
                    </div>
                    <div class="field is-grouped is-justify-content-space-between">
                        <label class="checkbox" for="remember_me">
                            <input type="checkbox" id="remember_me" name="remember_me" />
                            " Remember me"
                        </label>
                        <a href="/forgot_password">"Forgot your password?"</a>
                    </div>
                    <button type="submit" class="button is-primary is-fullwidth">"Log in"</button>
                </form>
                <p class="has-text-centered mt-4">
                    "Don't have an account? "
                    <a href="/register">"Sign up"</a>
                </p>
            </div>
        </section>
    }
}
