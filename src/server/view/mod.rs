//! Server-rendered HTML pages.
//!
//! Pages are Dioxus components rendered to strings with `dioxus-ssr`. Each page
//! module exposes plain `*_page` functions returning the finished document, so
//! controllers never touch `rsx!` themselves.

pub mod player;
pub mod team;

use dioxus::prelude::*;

/// Request-scoped values every page shows in its header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    /// Display name of the logged-in user.
    pub user_name: Option<String>,
    pub login_enabled: bool,
    /// Flash messages drained from the session for this render.
    pub flashes: Vec<String>,
}

/// Renders an element into a complete HTML document.
pub fn render(element: Element) -> String {
    format!("<!DOCTYPE html>{}", dioxus_ssr::render_element(element))
}

/// Error page for view routes.
pub fn error_page(ctx: PageContext, status: u16, message: String, detail: Option<String>) -> String {
    render(rsx! {
        ErrorPage { ctx, status, message, detail }
    })
}

#[component]
fn Layout(ctx: PageContext, title: String, children: Element) -> Element {
    rsx!(
        html {
            lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{title} | League Roster" }
                link {
                    rel: "stylesheet",
                    href: "https://cdn.jsdelivr.net/npm/daisyui@4/dist/full.min.css",
                }
            }
            body {
                class: "min-h-screen bg-base-200",
                header {
                    class: "navbar bg-base-100 shadow",
                    div {
                        class: "flex-1",
                        a { class: "btn btn-ghost text-xl", href: "/teams/", "League Roster" }
                    }
                    div {
                        class: "flex-none gap-2",
                        if let Some(name) = ctx.user_name.clone() {
                            span { class: "px-2", "{name}" }
                            a { class: "btn btn-sm", href: "/auth/logout", "Log out" }
                        } else if ctx.login_enabled {
                            a { class: "btn btn-sm btn-primary", href: "/auth/login", "Log in" }
                        }
                    }
                }
                main {
                    class: "container mx-auto p-4 flex flex-col gap-4",
                    for (index, message) in ctx.flashes.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "alert alert-success",
                            role: "status",
                            "{message}"
                        }
                    }
                    {children}
                }
            }
        }
    )
}

#[component]
fn ErrorPage(ctx: PageContext, status: u16, message: String, detail: Option<String>) -> Element {
    rsx!(
        Layout {
            ctx,
            title: format!("Error {}", status),
            div {
                class: "card bg-base-100 shadow",
                div {
                    class: "card-body",
                    h1 { class: "card-title", "Error {status}" }
                    p { class: "error-message", "{message}" }
                    if let Some(detail) = detail {
                        pre { class: "text-sm opacity-70", "{detail}" }
                    }
                    a { class: "link", href: "/teams/", "Back to teams" }
                }
            }
        }
    )
}
