use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Screenshot and photo assets bundled into the binary. A reference that
/// doesn't resolve here is a build bug, not a runtime condition.
#[derive(Embed)]
#[folder = "public/images"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct ImageAssets;

pub const PROFILE_PHOTO: &str = "profile.jpg";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectAction {
    Live(String),
    Source(String),
}

impl Project {
    /// Actions a rendered card exposes: "View Live" iff a live URL exists,
    /// a source-code link iff a repository URL exists.
    pub fn actions(&self) -> Vec<ProjectAction> {
        let mut actions = Vec::new();
        if let Some(url) = &self.live_url {
            actions.push(ProjectAction::Live(url.clone()));
        }
        if let Some(url) = &self.github_url {
            actions.push(ProjectAction::Source(url.clone()));
        }
        actions
    }

    pub fn image_src(&self) -> String {
        format!("/images/{}", self.image_ref)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Devicon glyph class rendered as an icon font.
    pub icon: String,
    pub color: String,
}

fn skill(name: &str, icon: &str, color: &str) -> Skill {
    Skill {
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| Profile {
    name: "Ishan Pathak".to_string(),
    title: "Full-Stack Developer".to_string(),
    bio: "Senior CS student passionate about building web applications and creating \
          solutions that are accessible and user-friendly. I enjoy tackling challenges, \
          collaborating with others, and learning new technologies along the way."
        .to_string(),
    email: "pathakishan333@gmail.com".to_string(),
    github: "https://github.com/ishanpathak3".to_string(),
    linkedin: "https://www.linkedin.com/in/ishan-pathak333/".to_string(),
});

pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: 1,
            title: "VotoSecure 🗳️".to_string(),
            description: "A modern, accessible online voting platform for university clubs \
                          and student organizations. Features role-based access control, \
                          anonymous voting, real-time results, and full WCAG 2.1 AA \
                          accessibility compliance."
                .to_string(),
            technologies: ["Python", "Django", "PostgreSQL", "Chart.js", "CSS"]
                .map(String::from)
                .to_vec(),
            github_url: Some("https://github.com/ishanpathak3/votosecure".to_string()),
            live_url: Some("https://votosecure.onrender.com".to_string()),
            image_ref: "votosecure.png".to_string(),
        },
        Project {
            id: 2,
            title: "ERISA Recovery Claims Management Demo".to_string(),
            description: "Functional web app for analyzing insurance claims. Includes \
                          real-time claim detail views, flagging and annotation, search and \
                          filter, and admin dashboard analytics—all powered with HTMX for \
                          zero page reloads."
                .to_string(),
            technologies: [
                "Python", "Django", "SQLite", "HTMX", "Alpine.js", "Chart.js", "CSS",
            ]
            .map(String::from)
            .to_vec(),
            github_url: Some("https://github.com/ishanpathak3/erisa_project".to_string()),
            live_url: Some("https://erisa-project.onrender.com/".to_string()),
            image_ref: "erisa.png".to_string(),
        },
        Project {
            id: 3,
            title: "Expense Tracker".to_string(),
            description: "Full-stack expense tracking application built with Java, Spring \
                          Boot, MySQL, and React. Implements JWT authentication, RESTful \
                          APIs, Docker deployment, and unit tests with JUnit for reliable \
                          financial tracking."
                .to_string(),
            technologies: ["Java", "Spring Boot", "MySQL", "React", "Docker", "JUnit"]
                .map(String::from)
                .to_vec(),
            github_url: Some("https://github.com/ishanpathak3/expense-tracker".to_string()),
            live_url: None,
            image_ref: "expense.png".to_string(),
        },
    ]
});

pub static SKILLS: LazyLock<Vec<Skill>> = LazyLock::new(|| {
    vec![
        skill("Java", "devicon-java-plain", "#5382a1"),
        skill("React", "devicon-react-original", "#61dbfb"),
        skill("Python", "devicon-python-plain", "#3776ab"),
        skill("Django", "devicon-django-plain", "#092e20"),
        skill("Spring Boot", "devicon-spring-plain", "#6db33f"),
        skill("Docker", "devicon-docker-plain", "#2496ed"),
        skill("Go", "devicon-go-original-wordmark", "#00add8"),
        skill("Flutter", "devicon-flutter-plain", "#02569b"),
        skill("Git", "devicon-git-plain", "#f05032"),
        skill("PostgreSQL", "devicon-postgresql-plain", "#336791"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_image_refs_resolve() {
        for project in PROJECTS.iter() {
            assert!(
                ImageAssets::get(&project.image_ref).is_some(),
                "missing bundled asset: {}",
                project.image_ref
            );
        }
        assert!(ImageAssets::get(PROFILE_PHOTO).is_some());
    }

    #[test]
    fn test_live_project_without_source_action() {
        let project = Project {
            id: 1,
            title: "X".to_string(),
            description: String::new(),
            technologies: ["Python", "Django"].map(String::from).to_vec(),
            github_url: None,
            live_url: Some("https://x".to_string()),
            image_ref: "x.png".to_string(),
        };
        let actions = project.actions();
        assert_eq!(actions, vec![ProjectAction::Live("https://x".to_string())]);
        assert!(!actions
            .iter()
            .any(|a| matches!(a, ProjectAction::Source(_))));
    }

    #[test]
    fn test_actions_ordering_live_first() {
        let project = &PROJECTS[0];
        let actions = project.actions();
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], ProjectAction::Live(_)));
        assert!(matches!(actions[1], ProjectAction::Source(_)));
    }
}
