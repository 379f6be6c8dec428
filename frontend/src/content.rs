use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub blurb: String,
    pub focus_label: String,
    pub focus_stack: String,
    pub focus_tiles: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub title: String,
    pub tag: String,
    /// Start and end colors of the card background.
    pub gradient: [String; 2],
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Capability {
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct AboutContent {
    pub intro: String,
    pub stats: Vec<Stat>,
    pub cards: Vec<Capability>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ContactContent {
    pub heading: String,
    pub blurb: String,
    pub email: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ProfileLinks {
    pub github: String,
    pub linkedin: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub hero: HeroContent,
    pub projects: Vec<Project>,
    pub about: AboutContent,
    pub skills: Vec<Skill>,
    pub contact: ContactContent,
    pub links: ProfileLinks,
}

#[derive(Debug)]
pub enum ContentError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Parse(err) => write!(f, "Content parse error: {}", err),
            ContentError::Invalid(msg) => write!(f, "Invalid content: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err)
    }
}

impl SiteContent {
    /// The copy compiled into the bundle.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if let Some(link) = self.nav.iter().find(|link| !link.href.starts_with('#')) {
            return Err(ContentError::Invalid(format!(
                "nav link {} must point at an in-page anchor",
                link.href
            )));
        }
        if let Some(skill) = self.skills.iter().find(|skill| skill.level > 100) {
            return Err(ContentError::Invalid(format!(
                "skill {} has level {} above 100",
                skill.name, skill.level
            )));
        }
        Ok(())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}
