//! Landing View
//!
//! Full-page globe background, optional corner logo, hero line and the
//! country picker.

use super::{ViewContext, SELECT_PLACEHOLDER};
use crate::data::DataResult;
use crate::render::{
    escape_html, image_data_url, render_background, styles, ImageSource, Page, StyleDirective,
};

pub const TITLE: &str = "World Cup Host Feasibility";
pub const HERO_TEXT: &str = "Explore who can host — and what it costs.";

/// Render the landing page
pub fn render(ctx: &ViewContext<'_>) -> DataResult<Page> {
    let names = ctx.store.country_names()?;

    let mut page = Page::new(TITLE);
    page.style(StyleDirective::new(styles::LANDING_CSS));

    let background = ctx.assets.landing_background().map(ImageSource::File);
    if let Some(directive) = render_background(background.as_ref()) {
        page.style(directive);
    }

    let logo = ctx.assets.logo_path().map(ImageSource::File);
    if let Some((data, format)) = logo.and_then(|logo| logo.load()) {
        page.push(&format!(
            r#"<img class="corner-logo" alt="" src="{}" />"#,
            image_data_url(&data, &format)
        ));
    }

    page.push(&format!(
        r#"<div class="landing-hero"><div><div class="landing-title">{}</div></div></div>"#,
        escape_html(HERO_TEXT)
    ));
    page.push(&picker(&names));

    Ok(page)
}

/// Auto-submitting `<select>` with the placeholder first
fn picker(names: &[String]) -> String {
    let mut options = format!(
        r#"<option value="" selected>{}</option>"#,
        escape_html(SELECT_PLACEHOLDER)
    );
    for name in names {
        let name = escape_html(name);
        options.push_str(&format!(r#"<option value="{name}">{name}</option>"#));
    }

    format!(
        r#"<form class="landing-picker" method="post" action="/select">
<select name="country" aria-label="Country" onchange="this.form.submit()">{options}</select>
<noscript><button type="submit">Explore</button></noscript>
</form>"#
    )
}
