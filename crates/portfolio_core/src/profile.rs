//! Static biographical content for the Home, About and Skills pages.

/// Headline typed out one character per tick on the home page.
pub const TYPED_HEADLINE: &str = "Freelance Developer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    /// Proficiency, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub years: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub period: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        key: "mern",
        name: "MERN Stack",
        description: "The foundational JavaScript-based technology stack that powers my web development projects.",
        skills: &[
            Skill {
                title: "MongoDB",
                description: "Database design, aggregation pipelines, performance optimization, Atlas cloud deployment.",
                level: 60,
            },
            Skill {
                title: "Express.js",
                description: "RESTful API design, middleware implementation, authentication, route handling.",
                level: 40,
            },
            Skill {
                title: "React.js",
                description: "Component architecture, hooks, context API, custom hooks, state management (Redux, Zustand).",
                level: 60,
            },
            Skill {
                title: "Node.js",
                description: "Server-side JavaScript, asynchronous programming, microservices, real-time applications.",
                level: 40,
            },
        ],
    },
    SkillGroup {
        key: "nextjs",
        name: "Next.js",
        description: "Advanced React framework expertise for building production-grade applications with superior SEO and performance.",
        skills: &[
            Skill {
                title: "Next.js App Router",
                description: "Server components, client components, layouts, loading states, error boundaries, streaming.",
                level: 40,
            },
            Skill {
                title: "Next.js API Routes",
                description: "API development, serverless functions, middleware, edge functions, authentication.",
                level: 40,
            },
        ],
    },
    SkillGroup {
        key: "mobile",
        name: "Mobile Development",
        description: "Cross-platform and native mobile application development for iOS and Android platforms.",
        skills: &[
            Skill {
                title: "React Native with Expo",
                description: "Cross-platform mobile app development, Expo SDK integration, native modules, performance optimization.",
                level: 60,
            },
            Skill {
                title: "iOS Development (SwiftUI)",
                description: "Modern declarative UI framework for iOS, Swift programming, iOS app lifecycle and architecture.",
                level: 40,
            },
            Skill {
                title: "Android Development (Kotlin)",
                description: "Android app development using Kotlin, Jetpack libraries, material design principles.",
                level: 30,
            },
        ],
    },
    SkillGroup {
        key: "additional",
        name: "Additional Skills",
        description: "Supporting technologies and tools that enhance my development workflow and project capabilities.",
        skills: &[
            Skill {
                title: "TypeScript",
                description: "Static typing, interfaces, generics, advanced types, type inference.",
                level: 50,
            },
            Skill {
                title: "TailwindCSS",
                description: "Utility-first CSS framework, responsive design, custom configurations.",
                level: 50,
            },
            Skill {
                title: "GraphQL",
                description: "Schema design, resolvers, Apollo Client/Server, subscriptions.",
                level: 30,
            },
            Skill {
                title: "CI/CD",
                description: "GitHub Actions, Vercel deployment, automated testing, continuous integration.",
                level: 50,
            },
        ],
    },
];

pub const EXPERIENCE: &[Milestone] = &[
    Milestone {
        years: "2021-Present",
        title: "Freelance Developer",
        organization: "Self-Employed",
    },
    Milestone {
        years: "2019-2023",
        title: "Information Technology Teacher",
        organization: "State and Private Institutions",
    },
    Milestone {
        years: "2018-2019",
        title: "Freelance Flutter Developer",
        organization: "Mango Byte",
    },
    Milestone {
        years: "2017-2018",
        title: "Web Developer",
        organization: "ALLWEB Co., Ltd.",
    },
    Milestone {
        years: "2016-2017",
        title: "Junior Developer",
        organization: "TechStart Company",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        period: "2023-2025",
        degree: "Master of Informatics",
        institution: "Czech University of Life Science Prague",
    },
    Education {
        period: "2018-2019",
        degree: "Informatics for Higher Education",
        institution: "National Institute of Education",
    },
    Education {
        period: "2013-2017",
        degree: "Computer Science and Engineering",
        institution: "Royal University of Phnom Penh",
    },
];

pub fn skill_group(key: &str) -> Option<&'static SkillGroup> {
    SKILL_GROUPS.iter().find(|group| group.key == key)
}
