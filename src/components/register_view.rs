//! Register View
//!
//! Native POST to `/register`. Password confirmation is compared on the server.

use leptos::prelude::*;

use super::ThemeToggle;

/// Minimum password length enforced by the browser
pub const MIN_PASSWORD_LEN: u32 = 8;

fn password_hint() -> String {
    format!("At least {} characters.", MIN_PASSWORD_LEN)
}

#[component]
pub fn RegisterView() -> impl IntoView {
    view! {
        <section class="section auth-page">
            <ThemeToggle />
            <div class="box auth-card">
                <h2 class="title is-4 has-text-centered">"Create Account"</h2>
                <form action="/register" method="POST">
                    <div class="field">
                        <label class="label" for="name">"Name"</label>
                        <div class="control">
                            <input class="input" type="text" id="name" name="name" autocomplete="name" required=true />
                        </div>
                    </div>
                    <div class="field">
                        <label class="label" for="email">"Email Address"</label>
                        <div class="control">
                            <input class="input" type="email" id="email" name="email" autocomplete="email" required=true />
                        </div>
                    </div>
                    <div class="field">
                        <label class="label" for="password">"Password"</label>
                        <div class="control">
                            <input
                                class="input"
                                type="password"
                                id="password"
                                name="password"
                                autocomplete="new-password"
                                minlength=MIN_PASSWORD_LEN.to_string()
                                required=true
                            />
                        </div>
                        <p class="help">{password_hint()}</p>
                    </div>
                    <div class="field">
                        <label class="label" for="confirm_password">"Confirm Password"</label>
                        <div class="control">
                            <input class="input" type="password" id="confirm_password" name="confirm_password" autocomplete="new-password" required=true />
                        </div>
                    </div>
                    <div class="field">
                        <label class="checkbox" for="agree_terms">
                            <input type="checkbox" id="agree_terms" name="agree_terms" required=true />
                            " I agree to the Terms of Service"
                        </label>
                    </div>
                    <button type="submit" class="button is-primary is-fullwidth">"Register"</button>
                </form>
                <p class="has-text-centered mt-4">
                    "Already have an account? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_follows_min_length() {
        assert_eq!(MIN_PASSWORD_LEN, 8);
        assert_eq!(password_hint(), "At least 8 characters.");
    }
}
