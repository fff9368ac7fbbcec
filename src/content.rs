//! Static site content.
//!
//! Everything on the page is authored here as `'static` tables and rendered
//! by the components in `app/`. Nothing in this module is ever mutated; the
//! UI holds read-only references for as long as it needs them.

pub struct PersonalInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub bio: &'static str,
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Clone, Copy)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [Technology],
}

/// Media attached to a project. All fields are opaque locators; resolution
/// (fetching, caching) is the browser's concern, not ours.
pub struct ProjectMedia {
    pub image: Option<&'static str>,
    pub video: Option<&'static str>,
    pub gallery: &'static [&'static str],
    /// Aligned by index to `gallery`; may be shorter. A missing entry simply
    /// renders no caption.
    pub captions: &'static [&'static str],
}

impl ProjectMedia {
    /// The standalone presentation image. The gallery takes exclusive
    /// precedence: when it is non-empty the single image is never shown,
    /// even if set.
    pub fn presentation_image(&self) -> Option<&'static str> {
        if self.gallery.is_empty() {
            self.image
        } else {
            None
        }
    }
}

pub struct ProjectLinks {
    pub frontend: Option<&'static str>,
    pub backend: Option<&'static str>,
    pub live: Option<&'static str>,
}

impl ProjectLinks {
    pub fn any(&self) -> bool {
        self.frontend.is_some() || self.backend.is_some() || self.live.is_some()
    }
}

pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub full_description: Option<&'static str>,
    pub technologies: &'static [Technology],
    pub features: &'static [&'static str],
    pub media: Option<ProjectMedia>,
    pub links: Option<ProjectLinks>,
}

impl Project {
    /// Whether the project carries enough supplementary detail to warrant
    /// the detail overlay. A card with only a short description opens
    /// nothing; that is deliberate policy, not missing data.
    pub fn has_detail(&self) -> bool {
        self.full_description.is_some() || !self.features.is_empty() || self.media.is_some()
    }
}

pub struct ContactInfo {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub phone: &'static str,
}

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Franco Marinozzi",
    role: "Software Developer & CS Student",
    avatar: "/images/fm_icon.png",
    bio: "A technologist at heart, I blend academic rigor with practical expertise in backend systems and cloud infrastructure. Currently pursuing a Computer Science degree while architecting robust solutions.",
};

pub static WORK_EXPERIENCE: &[Experience] = &[Experience {
    company: "Boombet",
    role: "Backend Developer & Cloud Infrastructure Manager",
    period: "Present",
    description: "Driving backend development and infrastructure management for a dynamic platform.",
    responsibilities: &[
        "Architected and maintained backend services using Java and Spring Boot.",
        "Managed cloud infrastructure on Microsoft Azure, ensuring high availability and scalability.",
        "Database design and management (PostgreSQL).",
        "Developed automation and web scraping scripts.",
        "Provided hardware and software troubleshooting to maintain system stability.",
    ],
}];

const DEFAULT_LOGO: &str = "/images/webscraping-logo.gif";

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "backend",
        skills: &[
            Technology { name: "Java", icon: "/images/java-logo.png" },
            Technology { name: "Spring Boot", icon: "/images/springboot-logo.png" },
            Technology { name: "PostgreSQL", icon: "/images/PostgresSQL-logo.png" },
            Technology { name: "REST API Design", icon: DEFAULT_LOGO },
            Technology { name: "Postman", icon: "/images/postman-logo.png" },
        ],
    },
    SkillGroup {
        category: "cloud",
        skills: &[
            Technology { name: "Microsoft Azure", icon: "/images/azure-logo.png" },
            Technology { name: "Docker", icon: "/images/Docker-logo.png" },
            Technology { name: "CI/CD", icon: "/images/GitHub Actions-logo.png" },
        ],
    },
    SkillGroup {
        category: "automation",
        skills: &[
            Technology { name: "N8N", icon: "/images/n8n-logo.png" },
            Technology { name: "Playwright", icon: "/images/playwright-logo.png" },
            Technology { name: "Web Scraping", icon: "/images/webscraping-logo.gif" },
        ],
    },
    SkillGroup {
        category: "general",
        skills: &[
            Technology { name: "System Design", icon: DEFAULT_LOGO },
            Technology { name: "AI Integration", icon: DEFAULT_LOGO },
            Technology { name: "Linux", icon: "/images/Linux-logo.png" },
            Technology { name: "Git", icon: "/images/Git-logo.png" },
        ],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Logistics Management System",
        kind: "Academic & Professional Practice",
        status: "Completed",
        description: "A comprehensive logistics software solution developed as a final degree project, demonstrating full-cycle development capabilities.",
        full_description: Some(
            "Final degree project built end to end: requirements, architecture, implementation, and delivery.\nThe system tracks shipments, fleets, and warehouse stock for a mid-size logistics operator, with role-based dashboards for dispatchers and drivers.",
        ),
        technologies: &[
            Technology { name: "Java", icon: "/images/java-logo.png" },
            Technology { name: "Spring Boot", icon: "/images/springboot-logo.png" },
            Technology { name: "PostgreSQL", icon: "/images/PostgresSQL-logo.png" },
            Technology { name: "Docker", icon: "/images/Docker-logo.png" },
        ],
        features: &[
            "Implemented a robust backend architecture using Spring Boot.",
            "Designed a microservices-based infrastructure for modular integration.",
            "Collaborated within an agile team using Scrumban, managing sprints and deliverables effectively.",
        ],
        media: Some(ProjectMedia {
            image: None,
            video: None,
            gallery: &[
                "/images/logistics-dashboard.png",
                "/images/logistics-shipments.png",
                "/images/logistics-fleet.png",
            ],
            captions: &[
                "Dispatcher dashboard with live shipment status",
                "Shipment detail and tracking history",
            ],
        }),
        links: Some(ProjectLinks {
            frontend: Some("https://github.com/francomarinozzi/logistics-frontend"),
            backend: Some("https://github.com/francomarinozzi/logistics-backend"),
            live: None,
        }),
    },
    Project {
        title: "Pasta Factory Management",
        kind: "Personal Project",
        status: "Near Completion",
        description: "A specialized management software tailored for manufacturing processes.",
        full_description: Some(
            "Management software for a family-run pasta factory: production batches, ingredient stock, and order fulfillment in one place.\nBuilt to replace a pile of spreadsheets, so the UI is deliberately minimal and keyboard-friendly.",
        ),
        technologies: &[
            Technology { name: "Java", icon: "/images/java-logo.png" },
            Technology { name: "Spring Boot", icon: "/images/springboot-logo.png" },
            Technology { name: "PostgreSQL", icon: "/images/PostgresSQL-logo.png" },
        ],
        features: &[
            "Modeled production batches with traceability from raw ingredients to packaged goods.",
            "Designed stock alerts that account for perishable ingredient shelf life.",
        ],
        media: Some(ProjectMedia {
            image: Some("/images/pasta-overview.png"),
            video: Some("/videos/pasta-demo.mp4"),
            gallery: &[],
            captions: &[],
        }),
        links: None,
    },
    Project {
        title: "Automation Scripts Collection",
        kind: "Personal Project",
        status: "Ongoing",
        description: "A growing set of web scraping and workflow automation scripts for everyday data chores.",
        full_description: None,
        technologies: &[
            Technology { name: "Playwright", icon: "/images/playwright-logo.png" },
            Technology { name: "N8N", icon: "/images/n8n-logo.png" },
        ],
        features: &[],
        media: None,
        links: None,
    },
];

pub static FUTURE_INTERESTS: &[&str] = &[
    "Networking",
    "DevOps & Infrastructure",
    "Cybersecurity",
    "Linux",
];

pub static HOBBIES: &[&str] = &["Playing Guitar", "Rock & Heavy Metal Music"];

pub static ABOUT_ME: &str = "Beyond the code, I am an avid musician. Playing guitar and exploring new music fuels my creativity and provides a rhythmic balance to my technical endeavors.";

pub static CONTACT_INFO: ContactInfo = ContactInfo {
    email: "francomarinozzi4@gmail.com",
    linkedin: "https://www.linkedin.com/in/franco-marinozzi-377127254/",
    phone: "+5491156350137",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captions_never_outnumber_gallery() {
        for project in PROJECTS {
            if let Some(media) = &project.media {
                assert!(
                    media.captions.len() <= media.gallery.len(),
                    "{} has more captions than gallery images",
                    project.title
                );
            }
        }
    }

    #[test]
    fn test_gallery_takes_precedence_over_single_image() {
        let media = ProjectMedia {
            image: Some("x.png"),
            video: None,
            gallery: &["g1.png"],
            captions: &[],
        };
        assert_eq!(media.presentation_image(), None);

        let media = ProjectMedia {
            image: Some("x.png"),
            video: None,
            gallery: &[],
            captions: &[],
        };
        assert_eq!(media.presentation_image(), Some("x.png"));
    }

    #[test]
    fn test_detail_eligibility() {
        // A short description alone is not enough for the overlay.
        let bare = Project {
            title: "Bare",
            kind: "Personal Project",
            status: "Ongoing",
            description: "Just a blurb.",
            full_description: None,
            technologies: &[],
            features: &[],
            media: None,
            links: None,
        };
        assert!(!bare.has_detail());

        let logistics = &PROJECTS[0];
        assert!(logistics.has_detail());

        // The scripts collection intentionally carries no detail.
        let scripts = PROJECTS
            .iter()
            .find(|p| p.title == "Automation Scripts Collection")
            .expect("scripts project should exist");
        assert!(!scripts.has_detail());
    }

    #[test]
    fn test_links_section_gate() {
        let none = ProjectLinks {
            frontend: None,
            backend: None,
            live: None,
        };
        assert!(!none.any());

        let live_only = ProjectLinks {
            frontend: None,
            backend: None,
            live: Some("https://example.com"),
        };
        assert!(live_only.any());

        let logistics_links = PROJECTS[0].links.as_ref().expect("logistics has links");
        assert!(logistics_links.any());
    }

    #[test]
    fn test_skill_groups_are_populated() {
        assert!(!SKILL_GROUPS.is_empty());
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty(), "{} is empty", group.category);
        }
    }
}
