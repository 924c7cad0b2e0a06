use portfolio_core::{update, AppState, AppViewModel, Catalog, Msg, Route, Section};
use portfolio_engine::RenderedPage;
use site_logging::{site_debug, EXPORT_TARGET};

use super::render::render_page;
use crate::config::SiteConfig;

/// Path rendered for `404.html`; any unmatched path gives the same page.
const NOT_FOUND_PATH: &str = "/404";

/// Every canonical route of the site for `catalog`, in navigation order.
pub fn site_routes(catalog: &Catalog) -> Vec<Route> {
    let mut routes = vec![
        Route::Home,
        Route::About,
        Route::Skills,
        Route::Projects,
    ];
    routes.extend(
        catalog
            .projects()
            .iter()
            .map(|project| Route::ProjectDetail(project.id)),
    );
    routes.push(Route::Contact);
    routes
}

/// Renders each page in its settled state: headline fully typed and every section revealed.
pub fn render_site(catalog: &Catalog, config: &SiteConfig) -> Vec<RenderedPage> {
    let mut pages: Vec<RenderedPage> = site_routes(catalog)
        .into_iter()
        .map(|route| {
            let path = route.path();
            let view = settled_view(catalog, &path);
            site_debug!(target: EXPORT_TARGET, "Rendered {} as {:?}", path, view.page.title());
            RenderedPage::route(path, render_page(&view, config))
        })
        .collect();

    let missing = settled_view(catalog, NOT_FOUND_PATH);
    pages.push(RenderedPage::not_found(render_page(&missing, config)));
    pages
}

/// View of `path` after the page has finished its entrance animations.
pub fn settled_view(catalog: &Catalog, path: &str) -> AppViewModel {
    let state = AppState::with_catalog(catalog.clone());
    let (mut state, _) = update(state, Msg::Navigate(path.to_string()));
    for section in Section::ALL {
        (state, _) = update(state, Msg::SectionRevealed(section));
    }
    loop {
        let (next, _) = update(state, Msg::Tick);
        state = next;
        if !state.consume_dirty() {
            break;
        }
    }
    state.view()
}
