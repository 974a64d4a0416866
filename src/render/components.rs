//! Shared page chrome: stylesheet, navigation bar, footer.

use chrono::Datelike;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "Geo Glimpse";

/// Inline CSS for every page.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#111827;--surface:#1f2937;--raised:#374151;--border:#4b5563;--fg:#f3f4f6;--fg2:#d1d5db;--fg3:#9ca3af;--accent:#3b82f6;--accent-hover:#2563eb;--good:#4ade80;--bad:#f87171}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.5;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column}
a{color:inherit;text-decoration:none}
nav{background:var(--surface);box-shadow:0 1px 3px rgba(0,0,0,.4);position:sticky;top:0;z-index:10}
nav h1{font-size:1.5rem;font-weight:700;text-align:center;padding:1rem}
main{flex:1;width:100%;max-width:80rem;margin:0 auto;padding:2rem 1rem}
footer{background:var(--surface);padding:1rem;text-align:center;color:var(--fg3)}
.panel{background:var(--surface);border-radius:.5rem;box-shadow:0 10px 15px rgba(0,0,0,.3);overflow:hidden}
.controls{display:flex;flex-wrap:wrap;gap:1rem;justify-content:space-between;align-items:center;padding:1.25rem;margin-bottom:1.5rem}
.controls input,.controls select{padding:.5rem .75rem;background:var(--raised);color:var(--fg);border:1px solid var(--border);border-radius:.5rem}
.controls input{min-width:16rem}
table{width:100%;text-align:left;border-collapse:collapse}
th{background:var(--raised);color:var(--fg2);text-transform:uppercase;letter-spacing:.05em;padding:.75rem 1rem;font-size:.85rem}
td{padding:1rem;white-space:nowrap;border-top:1px solid var(--border)}
tr:hover td{background:var(--raised)}
td a:hover{color:var(--accent)}
td img{border-radius:2px;vertical-align:middle}
.empty{padding:2rem;text-align:center;color:var(--fg3)}
.status-message{text-align:center;padding:2.5rem 0}
.detail{padding:1.5rem;display:flex;flex-direction:column;gap:1.5rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr));gap:1.5rem}
.button{display:inline-block;background:var(--accent);color:#fff;font-weight:700;padding:.5rem 1rem;border-radius:.25rem}
.button:hover{background:var(--accent-hover)}
.detail h1{font-size:1.875rem;font-weight:700}
.detail h2{font-size:1.25rem;font-weight:600;margin-bottom:.5rem}
.official{font-size:1.25rem;color:var(--fg2);margin:.5rem 0 1rem}
.fields p{margin:.35rem 0}
.label{font-weight:600}
.capitalize{text-transform:capitalize}
.good{color:var(--good)}
.bad{color:var(--bad)}
.muted{color:var(--fg3)}
.media img{border-radius:.375rem}
"#;

/// Year printed in the footer.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Wrap page content in the site layout.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                nav {
                    h1 { a href="/" { (SITE_NAME) } }
                }
                main {
                    (content)
                }
                footer {
                    p { "© " (current_year()) " " (SITE_NAME) ". All rights reserved." }
                }
            }
        }
    }
}

/// Page title for a section of the site.
pub fn page_title(section: Option<&str>) -> String {
    match section {
        Some(section) => format!("{section} | {SITE_NAME}"),
        None => SITE_NAME.to_string(),
    }
}

/// Centered one-line message used for loading and not-found states.
pub fn status_message(text: &str) -> Markup {
    html! {
        div class="status-message" { (text) }
    }
}
