//! Detail page for a single country.

use maud::{html, Markup};

use crate::detail::state::DetailState;
use crate::detail::view::{DetailView, Flag, Media};
use crate::render::components::{layout, page_title, status_message};

pub const LOADING_TEXT: &str = "Loading...";
pub const NOT_FOUND_TEXT: &str = "Country not found";

/// Render the page for any state of the detail state machine.
pub fn render_detail(state: &DetailState) -> Markup {
    match state {
        DetailState::Loading => layout(&page_title(None), status_message(LOADING_TEXT)),
        DetailState::NotFound => layout(&page_title(None), status_message(NOT_FOUND_TEXT)),
        DetailState::Found(record) => {
            let view = DetailView::new(record);
            layout(&page_title(Some(&view.common_name)), detail_body(&view))
        }
    }
}

fn field(label: &str, value: &str) -> Markup {
    html! {
        p { span class="label" { (label) ":" } " " (value) }
    }
}

fn badge(flag: Flag, yes: &str, no: &str) -> Markup {
    match flag {
        Flag::Yes => html! { span class="good" { (yes) } },
        Flag::No => html! { span class="bad" { (no) } },
        Flag::Unknown => html! { span class="muted" { "Unknown" } },
    }
}

fn image(media: &Media, width: u32, height: u32) -> Markup {
    match media {
        Media::Available { url, alt } => html! {
            img src=(url) alt=(alt) width=(width) height=(height);
        },
        Media::Missing(placeholder) => html! {
            span class="muted" { (placeholder) }
        },
    }
}

fn detail_body(view: &DetailView) -> Markup {
    html! {
        div class="panel detail" {
            div {
                a class="button" href="/" { "← Back to All Countries" }
            }

            div class="grid" {
                div {
                    h1 { (view.common_name) }
                    p class="official" { (view.official_name) }
                    p { (badge(view.independent, "Independent", "Not Independent")) }
                    div class="fields" {
                        p { span class="label" { "Status:" } " " span class="capitalize" { (view.status) } }
                        (field("Capital", &view.capital))
                        (field("Region", &view.region))
                        (field("Subregion", &view.subregion))
                        (field("Population", &view.population))
                        (field("Area", &view.area))
                        p { span class="label" { "Landlocked:" } " " (badge(view.landlocked, "Yes", "No")) }
                    }
                }
                div class="media" {
                    div {
                        p class="label" { "Flag:" }
                        (image(&view.flag, 200, 134))
                    }
                    div {
                        p class="label" { "Coat of Arms:" }
                        (image(&view.coat_of_arms, 100, 100))
                    }
                }
            }

            div class="grid" {
                div class="fields" {
                    h2 { "General Information" }
                    (field("Currency", &view.currency))
                    (field("Languages", &view.languages))
                    (field("Timezones", &view.timezones))
                    (field("Continent", &view.continents))
                    (field("Start of week", &view.start_of_week))
                }
                div class="fields" {
                    h2 { "Geographic Information" }
                    (field("Latitude and Longitude", &view.latlng))
                    @if let Some(location) = &view.capital_location {
                        (field("Capital Location", location))
                    }
                    (field("Car sign", &view.car_signs))
                    (field("Car side", &view.car_side))
                    @if let Some(postal) = &view.postal_code {
                        (field("Postal code format", &postal.format))
                        (field("Postal code regex", &postal.regex))
                    }
                }
            }

            div {
                @match &view.google_maps {
                    Media::Available { url, .. } => {
                        a class="button" href=(url) target="_blank" rel="noopener noreferrer" { "View on Google Maps" }
                    }
                    Media::Missing(placeholder) => {
                        span class="muted" { (placeholder) }
                    }
                }
            }
        }
    }
}
