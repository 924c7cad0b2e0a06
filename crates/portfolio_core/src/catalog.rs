use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub type ProjectId = u32;

/// Marker that turns a long-description line into a feature bullet.
pub const BULLET_MARKER: char = '•';

/// Technologies shown on a project card before the rest collapse into "+N more".
pub const CARD_TECHNOLOGY_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Fullstack,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Web, Category::Mobile, Category::Fullstack];

    pub fn key(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Fullstack => "fullstack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web Development",
            Category::Mobile => "Mobile Apps",
            Category::Fullstack => "Full Stack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub category: Category,
}

/// First few technologies of a project plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologySummary {
    pub shown: Vec<String>,
    pub more: usize,
}

impl Project {
    /// Bullet lines of the long description, marker stripped.
    pub fn feature_list(&self) -> Vec<String> {
        self.long_description
            .lines()
            .map(str::trim_start)
            .filter_map(|line| line.strip_prefix(BULLET_MARKER))
            .map(|rest| rest.trim().to_string())
            .filter(|rest| !rest.is_empty())
            .collect()
    }

    /// Prose blocks of the long description; bullet runs split paragraphs.
    pub fn overview_paragraphs(&self) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in self.long_description.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(BULLET_MARKER) {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
                continue;
            }
            current.push(line);
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }
        paragraphs
    }

    pub fn technology_summary(&self, limit: usize) -> TechnologySummary {
        let shown: Vec<String> = self.technologies.iter().take(limit).cloned().collect();
        let more = self.technologies.len().saturating_sub(shown.len());
        TechnologySummary { shown, more }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("project id 0 is reserved")]
    ZeroId,
    #[error("duplicate project id {0}")]
    DuplicateId(ProjectId),
    #[error("project {0} has an empty title")]
    EmptyTitle(ProjectId),
    #[error("project {id} lists technology {technology:?} more than once")]
    DuplicateTechnology { id: ProjectId, technology: String },
    #[error("project {id} has an invalid {field} link {value:?}")]
    InvalidLink {
        id: ProjectId,
        field: &'static str,
        value: String,
    },
}

/// Immutable, ordered project catalog. Cloning shares the same list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Arc<[Project]>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(projects.len());
        for project in &projects {
            validate_project(project)?;
            if !ids.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }
        Ok(Self {
            projects: projects.into(),
        })
    }

    /// The sample catalog the site ships with.
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects().into(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_project(project: &Project) -> Result<(), CatalogError> {
    if project.id == 0 {
        return Err(CatalogError::ZeroId);
    }
    if project.title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle(project.id));
    }
    let mut seen = HashSet::with_capacity(project.technologies.len());
    for technology in &project.technologies {
        if !seen.insert(technology.as_str()) {
            return Err(CatalogError::DuplicateTechnology {
                id: project.id,
                technology: technology.clone(),
            });
        }
    }
    for (field, link) in [
        ("demo", project.demo_link.as_deref()),
        ("github", project.github_link.as_deref()),
    ] {
        if let Some(value) = link {
            if !is_web_url(value) {
                return Err(CatalogError::InvalidLink {
                    id: project.id,
                    field,
                    value: value.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn is_web_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-Commerce Platform".to_string(),
            description: "A full-stack e-commerce platform with user authentication, product catalog, shopping cart, and payment integration.".to_string(),
            long_description: "\
This e-commerce platform provides a complete shopping experience with features including:

• User authentication and profile management
• Product catalog with categories, filtering, and search
• Shopping cart functionality
• Secure payment processing with Stripe
• Order history and tracking
• Admin dashboard for product and order management

The application is built with the MERN stack (MongoDB, Express.js, React, Node.js) and uses Redux for state management. The frontend is styled with TailwindCSS and features a responsive design for all device sizes.".to_string(),
            technologies: tags(&[
                "MongoDB",
                "Express.js",
                "React",
                "Node.js",
                "Redux",
                "TailwindCSS",
                "Stripe API",
            ]),
            demo_link: Some("https://ecommerce-demo.example.com".to_string()),
            github_link: Some("https://github.com/yourusername/ecommerce-platform".to_string()),
            featured: true,
            category: Category::Fullstack,
        },
        Project {
            id: 2,
            title: "Mobile Fitness App".to_string(),
            description: "A cross-platform fitness tracking application with iOS-specific features using SwiftUI and Android customizations in Kotlin.".to_string(),
            long_description: "\
This fitness tracking app helps users monitor their fitness journey and improve their health:

• Workout tracking and custom workout plans
• Calorie and nutrition tracking
• Progress visualization with charts
• Social sharing features
• Integration with health devices
• Personalized fitness goals

The core application is built with React Native and Expo for cross-platform functionality. Platform-specific features are implemented using SwiftUI for iOS and Kotlin for Android to provide the best native experience on each platform.".to_string(),
            technologies: tags(&["React Native", "Expo", "SwiftUI", "Kotlin", "Firebase", "Neo4j"]),
            demo_link: Some("https://fitnessapp-demo.example.com".to_string()),
            github_link: Some("https://github.com/yourusername/fitness-mobile-app".to_string()),
            featured: true,
            category: Category::Mobile,
        },
        Project {
            id: 3,
            title: "Next.js Dashboard".to_string(),
            description: "An analytics dashboard with real-time data visualization, authentication, and dark mode support.".to_string(),
            long_description: "\
This dashboard application provides businesses with insights through:

• Real-time data visualization
• Interactive charts and graphs
• User authentication and role-based access
• Dark mode support
• Data export functionality
• Customizable widgets

Built with Next.js App Router for optimal performance and SEO. Uses server components for improved loading states and initial page load performance. The dashboard includes a responsive design that works well on all device sizes.".to_string(),
            technologies: tags(&[
                "Next.js",
                "TypeScript",
                "TailwindCSS",
                "Prisma",
                "PostgreSQL",
                "Chart.js",
            ]),
            demo_link: Some("https://dashboard-demo.example.com".to_string()),
            github_link: Some("https://github.com/yourusername/nextjs-dashboard".to_string()),
            featured: false,
            category: Category::Web,
        },
        Project {
            id: 4,
            title: "Social Media Platform".to_string(),
            description: "A full-stack social media platform with real-time chat, post sharing, and user interactions.".to_string(),
            long_description: "\
This social media platform enables users to connect and share:

• User profiles and connections
• Post creation with rich media support
• Real-time chat and notifications
• Comment and reaction systems
• Content discovery feed
• Privacy and security controls

The application uses the MERN stack with Socket.io for real-time features. It includes a responsive design and progressive web app capabilities for mobile use.".to_string(),
            technologies: tags(&[
                "MongoDB",
                "Express.js",
                "React",
                "Node.js",
                "Socket.io",
                "Redis",
                "AWS S3",
            ]),
            demo_link: Some("https://social-demo.example.com".to_string()),
            github_link: Some("https://github.com/yourusername/social-platform".to_string()),
            featured: false,
            category: Category::Fullstack,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_passes_validation() {
        let projects = Catalog::builtin().projects().to_vec();
        assert!(Catalog::new(projects).is_ok());
    }

    #[test]
    fn web_url_requires_http_scheme() {
        assert!(is_web_url("https://example.com"));
        assert!(!is_web_url("ftp://example.com"));
        assert!(!is_web_url("example.com"));
    }
}
