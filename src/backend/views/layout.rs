use maud::{html, Markup, DOCTYPE};

/// Wrap page content in the site chrome
///
/// `username` comes from the session and decides which nav links show.
pub fn page(title: &str, username: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Bookswap" }
                link rel="stylesheet" href="/styles/main.css";
            }
            body {
                header { (nav(username)) }
                main { (content) }
            }
        }
    }
}

fn nav(username: Option<&str>) -> Markup {
    html! {
        nav {
            a href="/" { "Bookswap" }
            @if let Some(name) = username {
                a href="/listings" { "My listings" }
                span.username { "Logged in as " (name) }
                form method="post" action="/auth/logout" {
                    button type="submit" { "Log out" }
                }
            } @else {
                a href="/auth/login" { "Log in" }
                a href="/auth/register" { "Register" }
            }
        }
    }
}
