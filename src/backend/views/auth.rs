use maud::{html, Markup};

use crate::backend::views::layout::page;

/// Login form, optionally with an error and the previously typed username
pub fn login_page(error: Option<&str>, username: &str) -> Markup {
    let content = html! {
        h1 { "Log in" }
        @if let Some(error) = error {
            p.error { (error) }
        }
        form method="post" action="/auth/login" {
            label for="username" { "Username" }
            input id="username" type="text" name="username" value=(username) required;
            label for="password" { "Password" }
            input id="password" type="password" name="password" required;
            button type="submit" { "Log in" }
        }
        p { "No account yet? " a href="/auth/register" { "Register" } }
    };
    page("Log in", None, content)
}

/// Registration form, optionally with an error and the previously typed values
pub fn register_page(error: Option<&str>, username: &str, email: &str) -> Markup {
    let content = html! {
        h1 { "Register" }
        @if let Some(error) = error {
            p.error { (error) }
        }
        form method="post" action="/auth/register" {
            label for="username" { "Username" }
            input id="username" type="text" name="username" value=(username) required;
            label for="email" { "Email" }
            input id="email" type="email" name="email" value=(email) required;
            label for="password" { "Password" }
            input id="password" type="password" name="password" minlength="8" required;
            button type="submit" { "Create account" }
        }
        p { "Already registered? " a href="/auth/login" { "Log in" } }
    };
    page("Register", None, content)
}
