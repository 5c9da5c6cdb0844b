pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub stats: &'static [Stat],
    pub projects: &'static [Project],
    pub skills: &'static [SkillGroup],
    pub contacts: &'static [Contact],
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub href: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct Contact {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub struct NavItem {
    pub section_id: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        section_id: "home",
        label: "Home",
    },
    NavItem {
        section_id: "about",
        label: "About",
    },
    NavItem {
        section_id: "projects",
        label: "Projects",
    },
    NavItem {
        section_id: "skills",
        label: "Skills",
    },
    NavItem {
        section_id: "contact",
        label: "Contact",
    },
];

pub const TECH_ICONS: &[&str] = &["</>", "{ }", "λ", "#", "=>", "::"];
pub const FLOATING_SHAPES: usize = 4;
pub const DATA_STREAMS: usize = 3;
pub const DATA_BITS_PER_STREAM: usize = 8;

pub const PROFILE: Profile = Profile {
    name: "Jordan Avery",
    role: "Software Engineer",
    tagline: "Building fast, dependable software for the web and beyond.",
    about: &[
        "I design and ship systems end to end, from storage engines to the pixels on screen.",
        "Lately I have been focused on WebAssembly front ends and the tooling around them.",
    ],
    stats: &[
        Stat {
            value: "5+",
            label: "Years shipping",
        },
        Stat {
            value: "30+",
            label: "Projects delivered",
        },
        Stat {
            value: "100+",
            label: "Pull requests merged",
        },
    ],
    projects: &[
        Project {
            title: "Ledgerline",
            summary: "Append-only event store with snapshotting and a typed query layer.",
            tags: &["Rust", "Storage", "gRPC"],
            href: "https://github.com/",
        },
        Project {
            title: "Tidepool",
            summary: "Streaming dashboard that renders live metrics in the browser via WebAssembly.",
            tags: &["WebAssembly", "Yew", "Charts"],
            href: "https://github.com/",
        },
        Project {
            title: "Switchyard",
            summary: "Command-line release orchestrator with dry runs and rollback plans.",
            tags: &["CLI", "Automation"],
            href: "https://github.com/",
        },
    ],
    skills: &[
        SkillGroup {
            title: "Languages",
            items: &["Rust", "TypeScript", "Python", "SQL"],
        },
        SkillGroup {
            title: "Platforms",
            items: &["WebAssembly", "Linux", "PostgreSQL", "Kubernetes"],
        },
        SkillGroup {
            title: "Practices",
            items: &["Testing", "Observability", "API design"],
        },
    ],
    contacts: &[
        Contact {
            icon: "fas fa-envelope",
            label: "hello@example.com",
            href: "mailto:hello@example.com",
        },
        Contact {
            icon: "fab fa-github",
            label: "GitHub",
            href: "https://github.com/",
        },
        Contact {
            icon: "fab fa-linkedin",
            label: "LinkedIn",
            href: "https://www.linkedin.com/",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::parse_stat_target;

    #[test]
    fn every_stat_animates_from_a_number() {
        for stat in PROFILE.stats {
            let target = parse_stat_target(stat.value).expect("stat values are numeric");
            assert!(target > 0, "{} should count up", stat.label);
        }
    }

    #[test]
    fn nav_items_link_to_in_page_sections() {
        for item in NAV_ITEMS {
            assert_eq!(
                crate::navigation::anchor_target_id(&item.href()),
                Some(item.section_id)
            );
        }
    }
}
