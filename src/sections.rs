use thiserror::Error;

/// One navigable content block: the element id doubles as the anchor
/// fragment target, so it has to be usable in both places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Page order is render order - the nav bar and the scroll snap points are
/// both built from this table.
pub const SECTIONS: [Section; 5] = [
    Section {
        id: "home",
        label: "Home",
    },
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "skills",
        label: "Skills",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

pub const SKILLS: [&str; 6] = ["React", "Node.js", "Python", "TailwindCSS", "Flask", "SQL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        name: "SmartTarget Ad System",
        summary: "A modern project showcasing innovation, creativity, and functionality.",
    },
    Project {
        name: "Portfolio Website",
        summary: "A modern project showcasing innovation, creativity, and functionality.",
    },
    Project {
        name: "Data Dashboard",
        summary: "A modern project showcasing innovation, creativity, and functionality.",
    },
    Project {
        name: "AI Face Detection",
        summary: "A modern project showcasing innovation, creativity, and functionality.",
    },
];

pub const CONTACT_EMAIL: &str = "your.email@example.com";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("duplicate section id `{0}`")]
    DuplicateId(String),
    #[error("section id `{0}` is not usable as a fragment target")]
    InvalidId(String),
}

/// Checks the invariants the scroll controller relies on: ids are unique and
/// each one is a well-formed fragment target.
pub fn validate(sections: &[Section]) -> Result<(), SectionError> {
    for (i, s) in sections.iter().enumerate() {
        if s.id.is_empty() || s.id.contains('#') || s.id.contains(char::is_whitespace) {
            return Err(SectionError::InvalidId(s.id.to_string()));
        }
        if sections[..i].iter().any(|prev| prev.id == s.id) {
            return Err(SectionError::DuplicateId(s.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_table_is_valid() {
        assert!(validate(&SECTIONS).is_ok());
    }

    #[test]
    fn test_section_order_is_fixed() {
        let ids = SECTIONS.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
    }

    #[test]
    fn test_hrefs_point_at_section_ids() {
        for s in &SECTIONS {
            assert_eq!(s.href(), format!("#{}", s.id));
            assert!(s.href().starts_with('#'));
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let sections = [
            Section {
                id: "home",
                label: "Home",
            },
            Section {
                id: "home",
                label: "Start",
            },
        ];
        assert_eq!(
            validate(&sections),
            Err(SectionError::DuplicateId("home".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_unusable_ids() {
        let bad = ["", "my section", "#home"];
        for id in bad {
            let sections = [Section { id, label: "Bad" }];
            assert_eq!(
                validate(&sections),
                Err(SectionError::InvalidId(id.to_string())),
                "id {id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_first_broken_entry_wins() {
        // validation walks in page order, so the first broken entry wins
        let sections = [
            Section {
                id: "home",
                label: "Home",
            },
            Section {
                id: "bad id",
                label: "Bad",
            },
            Section {
                id: "home",
                label: "Again",
            },
        ];
        assert_eq!(
            validate(&sections),
            Err(SectionError::InvalidId("bad id".to_string()))
        );
    }
}
