//! Team list and roster pages.

use dioxus::prelude::*;

use crate::server::{
    model::{player::Player, team::Team},
    view::{render, Layout, PageContext},
};

pub fn teams_page(ctx: PageContext, teams: Vec<Team>) -> String {
    render(rsx! {
        TeamsPage { ctx, teams }
    })
}

pub fn players_page(ctx: PageContext, team: Team, players: Vec<Player>) -> String {
    render(rsx! {
        PlayersPage { ctx, team, players }
    })
}

#[component]
fn TeamsPage(ctx: PageContext, teams: Vec<Team>) -> Element {
    rsx!(
        Layout {
            ctx,
            title: "Teams".to_string(),
            h1 { class: "text-2xl font-bold", "Teams" }
            if teams.is_empty() {
                p { "No teams yet." }
            } else {
                table {
                    class: "table bg-base-100",
                    thead {
                        tr {
                            th { "Team" }
                            th { "Nickname" }
                        }
                    }
                    tbody {
                        for team in teams {
                            tr {
                                key: "{team.id}",
                                td {
                                    a { class: "link", href: "{team.players_path()}", "{team.name}" }
                                }
                                td { "{team.nickname}" }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn PlayersPage(ctx: PageContext, team: Team, players: Vec<Player>) -> Element {
    let base = team.players_path();

    rsx!(
        Layout {
            ctx,
            title: team.name.clone(),
            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "{team.name}" }
                a { class: "btn btn-primary", href: "{base}new/", "Add player" }
            }
            if players.is_empty() {
                p { "No players on this team yet." }
            } else {
                table {
                    class: "table bg-base-100",
                    thead {
                        tr {
                            th { "#" }
                            th { "Name" }
                            th { "Position" }
                            th {}
                        }
                    }
                    tbody {
                        for player in players {
                            tr {
                                key: "{player.id}",
                                td { "{player.jersey_number}" }
                                td {
                                    a { class: "link", href: "{base}{player.id}", "{player.name}" }
                                }
                                td { "{player.position}" }
                                td {
                                    class: "flex gap-2",
                                    a { class: "btn btn-xs", href: "{base}{player.id}/edit", "Edit" }
                                    a { class: "btn btn-xs btn-error", href: "{base}{player.id}/delete/", "Delete" }
                                }
                            }
                        }
                    }
                }
            }
            a { class: "link", href: "/teams/", "All teams" }
        }
    )
}
