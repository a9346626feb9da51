//! Project types and the built-in portfolio entries

use serde::{Deserialize, Serialize};

/// One portfolio entry shown as a card
#[derive(Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tech: String,
    pub url: Option<String>,
    pub likes: u32,
}

/// Persisted projection of a project's like counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeEntry {
    pub id: i64,
    pub likes: u32,
}

/// The portfolio is a fixed set; only like counts change at runtime.
pub fn seed_projects() -> Vec<Project> {
    let entry =
        |id: i64, title: &str, description: &str, tech: &str, url: &str, likes: u32| Project {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            tech: tech.to_owned(),
            url: Some(url.to_owned()),
            likes,
        };

    vec![
        entry(
            1,
            "DevSync",
            "Collaborative task management platform on Jakarta EE, where managers organize and developers execute.",
            "Java, JEE, Maven, JSP, JPA, Hibernate, JUnit, Mockito, GlassFish, Tomcat",
            "https://github.com/devfolio-showcase/devsync",
            24,
        ),
        entry(
            2,
            "LigueChasse",
            "Competition management application serving the needs of administrators and participants.",
            "Java, Angular, Spring Boot, Spring Security, Maven, JPA, JUnit, Mockito, Postman, Swagger",
            "https://github.com/devfolio-showcase/liguechasse",
            18,
        ),
        entry(
            3,
            "Assamer-Market",
            "Marketplace for discovering crafts and local products from Draa Tafilalet, with online payment.",
            "Java, Spring Boot, Spring Security, Maven, JPA, Angular, NGRX",
            "https://github.com/devfolio-showcase/assamer-market",
            32,
        ),
        entry(
            4,
            "SudEst Market",
            "Online platform for discovering local crafts and gastronomy, with online payment.",
            "PHP, Laravel, JavaScript, AJAX, jQuery, TailwindCSS, HTML5, CSS3",
            "https://github.com/devfolio-showcase/sudest-market",
            9,
        ),
        entry(
            5,
            "EVENTHarBor",
            "Event management platform: discovery, booking and ticket generation.",
            "PHP, Laravel, TailwindCSS, AJAX, JavaScript",
            "https://github.com/devfolio-showcase/eventharbor",
            7,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_carry_project_urls() {
        for p in seed_projects() {
            let url = p.url.as_deref().expect("seed url");
            assert!(url.starts_with("https://"), "project {}", p.id);
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let projects = seed_projects();
        let mut ids: Vec<i64> = projects.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }
}
