//! Player detail, form and delete confirmation pages.

use dioxus::prelude::*;

use crate::server::{
    model::{
        player::{Player, PlayerSubmission},
        team::Team,
    },
    view::{render, Layout, PageContext},
};

/// Whether the form adds a new player or edits an existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerFormMode {
    New,
    Edit(Player),
}

pub fn player_page(ctx: PageContext, team: Team, player: Player) -> String {
    render(rsx! {
        PlayerPage { ctx, team, player }
    })
}

/// Renders the add or edit form.
///
/// `values` are shown in the inputs: empty for a fresh add form, the stored
/// player for a fresh edit form, or the rejected submission alongside `error`.
pub fn player_form_page(
    ctx: PageContext,
    team: Team,
    mode: PlayerFormMode,
    values: PlayerSubmission,
    error: Option<String>,
) -> String {
    render(rsx! {
        PlayerFormPage { ctx, team, mode, values, error }
    })
}

pub fn delete_player_page(ctx: PageContext, team: Team, player: Player) -> String {
    render(rsx! {
        DeletePlayerPage { ctx, team, player }
    })
}

#[component]
fn PlayerPage(ctx: PageContext, team: Team, player: Player) -> Element {
    let base = team.players_path();

    rsx!(
        Layout {
            ctx,
            title: player.name.clone(),
            div {
                class: "card bg-base-100 shadow",
                div {
                    class: "card-body",
                    h1 { class: "card-title", "#{player.jersey_number} {player.name}" }
                    dl {
                        dt { class: "font-semibold", "Position" }
                        dd { "{player.position}" }
                        dt { class: "font-semibold", "Team" }
                        dd {
                            a { class: "link", href: "{base}", "{team.name}" }
                        }
                    }
                    div {
                        class: "card-actions",
                        a { class: "btn btn-sm", href: "{base}{player.id}/edit", "Edit" }
                        a { class: "btn btn-sm btn-error", href: "{base}{player.id}/delete/", "Delete" }
                    }
                }
            }
        }
    )
}

#[component]
fn PlayerFormPage(
    ctx: PageContext,
    team: Team,
    mode: PlayerFormMode,
    values: PlayerSubmission,
    error: Option<String>,
) -> Element {
    let (heading, submit_label) = match &mode {
        PlayerFormMode::New => (format!("Add player to {}", team.name), "Add player"),
        PlayerFormMode::Edit(player) => (format!("Edit {}", player.name), "Save"),
    };
    let cancel_href = team.players_path();

    rsx!(
        Layout {
            ctx,
            title: heading.clone(),
            h1 { class: "text-2xl font-bold", "{heading}" }
            if let Some(error) = error {
                div { class: "alert alert-error", role: "alert", "{error}" }
            }
            form {
                method: "post",
                class: "card bg-base-100 shadow",
                div {
                    class: "card-body flex flex-col gap-3",
                    label {
                        class: "form-control",
                        span { class: "label-text", "Name" }
                        input {
                            class: "input input-bordered",
                            r#type: "text",
                            name: "name",
                            value: "{values.name}",
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text", "Position" }
                        input {
                            class: "input input-bordered",
                            r#type: "text",
                            name: "position",
                            value: "{values.position}",
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text", "Jersey number" }
                        input {
                            class: "input input-bordered",
                            r#type: "text",
                            name: "jersey_number",
                            value: "{values.jersey_number}",
                        }
                    }
                    div {
                        class: "card-actions",
                        button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
                        a { class: "btn btn-ghost", href: "{cancel_href}", "Cancel" }
                    }
                }
            }
        }
    )
}

#[component]
fn DeletePlayerPage(ctx: PageContext, team: Team, player: Player) -> Element {
    let base = team.players_path();

    rsx!(
        Layout {
            ctx,
            title: format!("Delete {}", player.name),
            div {
                class: "card bg-base-100 shadow",
                div {
                    class: "card-body",
                    h1 { class: "card-title", "Delete {player.name}?" }
                    p { "#{player.jersey_number} will be removed from {team.name}." }
                    form {
                        method: "post",
                        class: "card-actions",
                        button { class: "btn btn-error", r#type: "submit", "Delete" }
                        a { class: "btn btn-ghost", href: "{base}{player.id}", "Cancel" }
                    }
                }
            }
        }
    )
}
