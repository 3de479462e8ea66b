use serde::{Deserialize, Deserializer, Serialize};

/// Content of one portfolio owner.
///
/// Image fields hold inline data URIs (`data:image/...`) or are empty.
/// Field names serialize in camelCase to match the stored layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub profile_image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub background_image: String,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Present links as `(label, url)` pairs, skipping blanks.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", self.github.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("Twitter", self.twitter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.filter(|u| !u.trim().is_empty()).map(|u| (label, u)))
        .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for UserDetails {
    fn default() -> Self {
        Self::sample()
    }
}

impl UserDetails {
    /// The sample profile a fresh builder starts from.
    pub fn sample() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            title: "Full Stack Developer".to_string(),
            email: "alex.morgan@example.com".to_string(),
            phone: "+1 (555) 010-2030".to_string(),
            bio: "I build fast, accessible web applications and enjoy turning rough ideas \
                  into polished products."
                .to_string(),
            profile_image: String::new(),
            background_image: String::new(),
            skills: ["JavaScript", "TypeScript", "React", "Node.js", "CSS"]
                .into_iter()
                .map(String::from)
                .collect(),
            experience: vec![
                Experience {
                    position: "Senior Developer".to_string(),
                    company: "Tech Solutions Inc.".to_string(),
                    period: "2021 - Present".to_string(),
                    description: "Lead development of customer-facing dashboards.".to_string(),
                },
                Experience {
                    position: "Web Developer".to_string(),
                    company: "Digital Agency".to_string(),
                    period: "2018 - 2021".to_string(),
                    description: "Built marketing sites and e-commerce storefronts.".to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "E-commerce Platform".to_string(),
                    description: "A storefront with cart, checkout and order tracking."
                        .to_string(),
                    tags: vec!["React".to_string(), "Node.js".to_string()],
                    image: String::new(),
                },
                Project {
                    title: "Task Manager".to_string(),
                    description: "A collaborative board for planning team work.".to_string(),
                    tags: vec!["TypeScript".to_string(), "PostgreSQL".to_string()],
                    image: String::new(),
                },
            ],
            social_links: SocialLinks {
                github: Some("https://github.com/alexmorgan".to_string()),
                linkedin: Some("https://linkedin.com/in/alexmorgan".to_string()),
                twitter: None,
            },
        }
    }

    /// Names of the identity fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("title", &self.title),
            ("email", &self.email),
            ("phone", &self.phone),
            ("bio", &self.bio),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Append a skill. Returns false (and changes nothing) for blanks and duplicates.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill.trim());
        self.skills.len() != before
    }

    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.push(entry);
    }

    pub fn remove_experience(&mut self, index: usize) -> Option<Experience> {
        (index < self.experience.len()).then(|| self.experience.remove(index))
    }

    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    pub fn remove_project(&mut self, index: usize) -> Option<Project> {
        (index < self.projects.len()).then(|| self.projects.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_complete() {
        let user = UserDetails::sample();
        assert!(user.is_complete());
        assert!(user.profile_image.is_empty());
    }

    #[test]
    fn test_missing_fields_reports_blanks() {
        let mut user = UserDetails::sample();
        user.email = "  ".to_string();
        user.bio.clear();
        assert_eq!(user.missing_fields(), vec!["email", "bio"]);
        assert!(!user.is_complete());
    }

    #[test]
    fn test_add_skill_ignores_duplicates() {
        let mut user = UserDetails::sample();
        let count = user.skills.len();

        assert!(!user.add_skill("React"));
        assert!(!user.add_skill("  React "));
        assert!(!user.add_skill(""));
        assert_eq!(user.skills.len(), count);

        assert!(user.add_skill("Rust"));
        assert_eq!(user.skills.last().map(String::as_str), Some("Rust"));
    }

    #[test]
    fn test_remove_by_index_keeps_order() {
        let mut user = UserDetails::sample();
        user.add_project(Project {
            title: "Third".to_string(),
            ..Project::default()
        });

        let removed = user.remove_project(0).unwrap();
        assert_eq!(removed.title, "E-commerce Platform");
        let titles: Vec<_> = user.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Task Manager", "Third"]);

        assert!(user.remove_project(10).is_none());
        assert!(user.remove_experience(5).is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(UserDetails::sample()).unwrap();
        assert!(json.get("profileImage").is_some());
        assert!(json.get("socialLinks").is_some());
        assert!(json["socialLinks"].get("twitter").is_none());
    }

    #[test]
    fn test_project_tolerates_missing_and_null_fields() {
        let project: Project =
            serde_json::from_str(r#"{"title":"Only title","image":null}"#).unwrap();
        assert_eq!(project.title, "Only title");
        assert!(project.tags.is_empty());
        assert_eq!(project.image, "");
    }

    #[test]
    fn test_social_entries_skip_blank() {
        let links = SocialLinks {
            github: Some("https://github.com/a".to_string()),
            linkedin: Some(" ".to_string()),
            twitter: None,
        };
        assert_eq!(links.entries(), vec![("GitHub", "https://github.com/a")]);
    }
}
