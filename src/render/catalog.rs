//! Catalog page: search controls and the country table.

use maud::{html, Markup, PreEscaped};

use crate::catalog::filter::{filter_entries, region_options, RegionFilter};
use crate::catalog::format::{raw_f64, RenderPhase};
use crate::country::{is_safe_segment, CountryRecord, Snapshot};
use crate::detail::view::UNKNOWN;
use crate::render::components::{layout, page_title};

/// Client-side half of the two-phase render.
///
/// Runs once the document is interactive: swaps raw numbers for grouped
/// ones and filters rows as the controls change.
const STABILIZE_SCRIPT: &str = r#"
(function(){
function group(s){var p=s.split('.');p[0]=p[0].replace(/\B(?=(\d{3})+(?!\d))/g,',');return p.join('.');}
function apply(){
var q=document.getElementById('q').value.toLowerCase();
var r=document.getElementById('region').value;
document.querySelectorAll('#countries tbody tr').forEach(function(row){
row.hidden=!(row.dataset.name.indexOf(q)!==-1&&(r==='All'||row.dataset.region===r));
});
}
document.addEventListener('DOMContentLoaded',function(){
var params=new URLSearchParams(location.search);
if(params.has('q'))document.getElementById('q').value=params.get('q');
if(params.has('region'))document.getElementById('region').value=params.get('region');
document.querySelectorAll('td[data-raw]').forEach(function(td){td.textContent=group(td.dataset.raw);});
document.getElementById('filters').addEventListener('submit',function(e){e.preventDefault();apply();});
document.getElementById('q').addEventListener('input',apply);
document.getElementById('region').addEventListener('change',apply);
apply();
});
})();
"#;

/// Inputs for one catalog render.
#[derive(Debug, Clone)]
pub struct CatalogPage<'a> {
    pub snapshot: &'a Snapshot,
    pub query: &'a str,
    pub region: &'a RegionFilter,
    pub phase: RenderPhase,
}

impl<'a> CatalogPage<'a> {
    pub fn new(snapshot: &'a Snapshot, query: &'a str, region: &'a RegionFilter, phase: RenderPhase) -> Self {
        Self {
            snapshot,
            query,
            region,
            phase,
        }
    }

    /// Full HTML document.
    pub fn render(&self) -> Markup {
        let rows = filter_entries(self.snapshot, self.query, self.region);
        let regions = region_options(self.snapshot.records());
        let selected = self.region.as_str();
        // Without the client script the form round-trips through the server.
        let submit_on_change = (self.phase == RenderPhase::Stabilized).then_some("this.form.submit()");

        let content = html! {
            form id="filters" class="panel controls" method="get" action="/" {
                input id="q" type="search" name="q" value=(self.query) placeholder="Search country..." autocomplete="off";
                select id="region" name="region" onchange=[submit_on_change] {
                    @for region in &regions {
                        option value=(region) selected[region == selected] { (region) }
                    }
                }
            }
            div class="panel" {
                table id="countries" {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Flag" }
                            th { "Population" }
                            th { "Area (km²)" }
                            th { "Region" }
                        }
                    }
                    tbody {
                        @for (slug, record) in &rows {
                            (self.row(slug, record))
                        }
                    }
                }
            }
            @if self.phase == RenderPhase::Initial {
                script { (PreEscaped(STABILIZE_SCRIPT)) }
            }
        };

        layout(&page_title(None), content)
    }

    fn row(&self, slug: &str, record: &CountryRecord) -> Markup {
        let name = record.common_name();
        let label = if name.trim().is_empty() { UNKNOWN } else { name };
        html! {
            tr data-name=(name.to_lowercase()) data-region=(record.region().unwrap_or("")) {
                td {
                    // Rows without a routable slug have no detail page to link to.
                    @if is_safe_segment(slug) {
                        a href={ "/" (slug) } { (label) }
                    } @else {
                        (label)
                    }
                }
                td {
                    @if let Some(svg) = record.flags.svg.as_deref().or(record.flags.png.as_deref()) {
                        img src=(svg) alt={ "Flag of " (label) } width="32" height="32" loading="lazy";
                    }
                }
                (self.number_cell(record.population.map(|p| p.to_string())))
                (self.number_cell(record.area.map(raw_f64)))
                td { (record.region().unwrap_or(UNKNOWN)) }
            }
        }
    }

    fn number_cell(&self, raw: Option<String>) -> Markup {
        match raw {
            Some(raw) if self.phase == RenderPhase::Initial => html! {
                td data-raw=(raw) { (raw) }
            },
            Some(raw) => html! {
                td { (self.phase.display(&raw)) }
            },
            None => html! {
                td class="muted" { (UNKNOWN) }
            },
        }
    }
}
