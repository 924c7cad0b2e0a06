use portfolio_core::NavItem;

use super::html::{class_list, Markup};
use crate::config::SiteConfig;

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#1e293b;background:#f8fafc}\
.navbar{display:flex;justify-content:space-between;padding:1rem 2rem;background:#fff}\
.navbar a{margin-left:1rem;text-decoration:none;color:inherit}\
.navbar a.active{color:#2563eb;font-weight:600}\
main{max-width:72rem;margin:0 auto;padding:2rem}\
.project-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1.5rem}\
.reveal{opacity:0}.reveal.revealed{opacity:1;transition:opacity .6s}\
.form-error{color:#b91c1c}.success{background:#f0fdf4;padding:1.5rem}\
.skill-bar{background:#e2e8f0;height:.5rem}.skill-bar span{display:block;height:100%;background:#2563eb}";

/// Wraps a page body in the shared document shell and navbar.
pub fn document(config: &SiteConfig, page_title: &str, nav: &[NavItem], body: &str) -> String {
    let mut html = Markup::new();
    html.raw("<!DOCTYPE html>");
    html.open("html", &[("lang", Some("en"))]);
    html.open("head", &[]);
    html.open("meta", &[("charset", Some("utf-8"))]);
    html.open(
        "meta",
        &[
            ("name", Some("viewport")),
            ("content", Some("width=device-width, initial-scale=1")),
        ],
    );
    html.element(
        "title",
        &[],
        &format!("{page_title} | {}", config.site_title),
    );
    html.raw("<style>").raw(STYLESHEET).raw("</style>");
    html.close("head");
    html.open("body", &[]);
    navbar(&mut html, config, nav);
    html.open("main", &[]).raw(body).close("main");
    footer(&mut html, config);
    html.close("body");
    html.close("html");
    html.into_string()
}

fn navbar(html: &mut Markup, config: &SiteConfig, nav: &[NavItem]) {
    html.open("nav", &[("class", Some("navbar"))]);
    html.link("/", "brand", &config.site_title);
    html.open("div", &[("class", Some("nav-links"))]);
    for item in nav {
        let class = class_list("nav-link", item.active);
        let mut attrs = vec![("href", Some(item.href)), ("class", Some(class.as_str()))];
        if item.active {
            attrs.push(("aria-current", Some("page")));
        }
        html.element("a", &attrs, item.label);
    }
    html.close("div");
    html.close("nav");
}

fn footer(html: &mut Markup, config: &SiteConfig) {
    html.open("footer", &[("class", Some("footer"))]);
    html.element("p", &[], &config.owner_name);
    html.close("footer");
}
