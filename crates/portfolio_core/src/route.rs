use url::Url;

use crate::catalog::ProjectId;

const BASE: &str = "http://portfolio.invalid/";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    ProjectDetail(ProjectId),
    /// `/projects/{segment}` where the segment is not a project id.
    ProjectLookup(String),
    Contact,
    NotFound(String),
}

impl Route {
    /// Parse a site path; query strings and fragments are ignored.
    ///
    /// A path that resolves onto another host (`//host/...`) is not a site page.
    pub fn parse(path: &str) -> Self {
        let Ok(base) = Url::parse(BASE) else {
            return Route::NotFound(path.to_string());
        };
        match base.join(path) {
            Ok(url) if url.host() == base.host() => Self::from_segments(url.path()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Parse an absolute link back into a route, keeping only its path.
    pub fn from_href(href: &str) -> Self {
        match Url::parse(href) {
            Ok(url) => Self::from_segments(url.path()),
            Err(_) => Self::parse(href),
        }
    }

    fn from_segments(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["skills"] => Route::Skills,
            ["projects"] => Route::Projects,
            ["projects", id] => match canonical_id(id) {
                Some(id) => Route::ProjectDetail(id),
                None => Route::ProjectLookup((*id).to_string()),
            },
            ["contact"] => Route::Contact,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Skills => "/skills".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{id}"),
            Route::ProjectLookup(segment) => format!("/projects/{segment}"),
            Route::Contact => "/contact".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Navbar entry this route lights up, if any.
    pub fn nav_section(&self) -> Option<NavSection> {
        match self {
            Route::Home => Some(NavSection::Home),
            Route::About => Some(NavSection::About),
            Route::Skills => Some(NavSection::Skills),
            Route::Projects | Route::ProjectDetail(_) | Route::ProjectLookup(_) => {
                Some(NavSection::Projects)
            }
            Route::Contact => Some(NavSection::Contact),
            Route::NotFound(_) => None,
        }
    }
}

/// Id of a `/projects/{id}` segment written the way `Route::path` writes it:
/// plain ASCII digits, no sign, no leading zero.
fn canonical_id(segment: &str) -> Option<ProjectId> {
    let digits_only = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (segment.len() > 1 && segment.starts_with('0')) {
        return None;
    }
    segment.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Home,
        NavSection::About,
        NavSection::Skills,
        NavSection::Projects,
        NavSection::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::About => "About",
            NavSection::Skills => "Skills",
            NavSection::Projects => "Projects",
            NavSection::Contact => "Contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            NavSection::Home => "/",
            NavSection::About => "/about",
            NavSection::Skills => "/skills",
            NavSection::Projects => "/projects",
            NavSection::Contact => "/contact",
        }
    }
}
