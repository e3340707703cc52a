//! Dashboard View
//!
//! Country snapshot, GDP trend and hosting figures for the selected
//! country, over a flag background.

use super::ViewContext;
use crate::data::{Country, DataResult};
use crate::format::{format_count, format_money, format_percent, format_score};
use crate::render::{escape_html, line_chart, render_background, styles, Page, StyleDirective};

pub const TITLE: &str = "World Cup Host Feasibility Explorer";
pub const NO_SERIES_WARNING: &str = "No GDP series found for this country.";

/// Render the dashboard for `country`
pub async fn render(ctx: &ViewContext<'_>, country: &Country) -> DataResult<Page> {
    let names = ctx.store.country_names()?;
    let series = ctx.store.series_for(&country.name)?;

    let mut page = Page::new(TITLE);
    page.push(&format!("<h1>{}</h1>", escape_html(TITLE)));
    page.push(&top_bar(&names, &country.name));

    // Flag background: local asset, then CDN, then a caption saying why not
    match country.flag_code() {
        Some(code) => {
            let image = ctx.flags.resolve(Some(code)).await;
            match render_background(image.as_ref()) {
                Some(directive) => page.style(directive),
                None => page.push(&caption(&format!(
                    "(Flag background not loaded — could not fetch {})",
                    ctx.flags.flag_url(code)
                ))),
            }
        }
        None => page.push(&caption(
            "(No ISO2/flag_code found for this country in the country list — add iso2 like 'US'.)",
        )),
    }

    // The readability panel must come after the background
    page.style(StyleDirective::new(styles::DASHBOARD_CSS));

    let points: Vec<(i32, f64)> = series.iter().map(|p| (p.year, p.gdp_usd)).collect();
    page.push(&format!(
        r#"<div class="columns">
<section class="left-pane">{}</section>
<section class="right-panel">{}</section>
</div>"#,
        snapshot(country, &points),
        feasibility(country)
    ));

    Ok(page)
}

/// Country switcher and back button
fn top_bar(names: &[String], selected: &str) -> String {
    let options: String = names
        .iter()
        .map(|name| {
            let escaped = escape_html(name);
            let selected_attr = if name == selected { " selected" } else { "" };
            format!(r#"<option value="{escaped}"{selected_attr}>{escaped}</option>"#)
        })
        .collect();

    format!(
        r#"<div class="top-bar">
<form method="post" action="/select">
<label for="country-switcher">Country</label>
<select id="country-switcher" name="country" onchange="this.form.submit()">{options}</select>
<noscript><button type="submit">Switch</button></noscript>
</form>
<form method="post" action="/back"><button type="submit">Back to landing</button></form>
</div>"#
    )
}

/// Left pane: population, capital, GDP figures and the GDP trend
fn snapshot(country: &Country, points: &[(i32, f64)]) -> String {
    let trend = match line_chart(points) {
        Some(svg) => svg,
        None => format!(
            r#"<div class="notice-warning" role="alert">{}</div>"#,
            escape_html(NO_SERIES_WARNING)
        ),
    };

    format!(
        r#"<h2>Country Snapshot</h2>
<div class="grid-2">{}{}</div>
<div class="grid-2">{}{}</div>
<h3>Key context (placeholder)</h3>
<p>Add airport capacity, hotels, transit, tax, infrastructure indices, etc.</p>
<h3>GDP trend</h3>
{trend}"#,
        metric("Population", &format_count(country.population)),
        metric("Capital", &country.capital),
        metric("GDP (current USD)", &format_money(Some(country.gdp_usd))),
        metric("GDP per capita", &format_money(Some(country.gdp_per_capita_usd))),
    )
}

/// Right pane: headline hosting figures and placeholder tradeoffs
fn feasibility(country: &Country) -> String {
    format!(
        r#"<h2>World Cup Hosting Feasibility</h2>
<h3>Headline FIFA hosting outputs</h3>
<div class="grid-4">{}{}{}{}</div>
<h3>Tradeoffs (placeholder)</h3>
<div class="grid-3">
{}
{}
{}
</div>"#,
        metric("Projected GDP lift", &format_percent(country.wc_gdp_lift_pct)),
        metric("Estimated host cost", &format_money(country.wc_host_cost_usd)),
        metric("Estimated net impact", &format_money(country.wc_net_impact_usd)),
        metric("Feasibility score", &format_score(country.feasibility_score)),
        callout("info", "Infrastructure readiness", "(placeholder) stadium + transit readiness"),
        callout(
            "warning",
            "Fiscal / delivery risk",
            "(placeholder) debt capacity, cost overrun risk",
        ),
        callout("success", "Legacy upside", "(placeholder) tourism, soft power, FDI"),
    )
}

fn metric(label: &str, value: &str) -> String {
    format!(
        r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div></div>"#,
        escape_html(label),
        escape_html(value)
    )
}

fn callout(kind: &str, heading: &str, text: &str) -> String {
    format!(
        r#"<div class="callout {kind}"><p><strong>{}</strong></p><p>{}</p></div>"#,
        escape_html(heading),
        escape_html(text)
    )
}

fn caption(text: &str) -> String {
    format!(r#"<p class="caption">{}</p>"#, escape_html(text))
}
