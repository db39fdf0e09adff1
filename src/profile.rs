use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::typewriter::{PhraseList, TaglineConfig, TaglineError};

const PROFILE_FILE: &str = "profile.json";

pub static GLOBAL_PROFILE: LazyLock<Result<Profile, ProfileError>> =
    LazyLock::new(|| Profile::load(PROFILE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile content not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse profile content: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub taglines: Vec<String>,
    #[serde(default)]
    pub tagline: TaglineConfig,
    pub about: About,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub achievements: Vec<Achievement>,
    pub blog: Vec<BlogPost>,
    pub contact: ContactInfo,
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub decimals: usize,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub location: String,
    pub achievements: Vec<String>,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub major: String,
    pub institution: String,
    pub location: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub badge: Option<String>,
    pub description: String,
    pub thumbnail: String,
    pub metrics: Vec<String>,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    /// Proficiency clamped to a percentage for the bar width.
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub github: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    pub form_endpoint: String,
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

impl NavLink {
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }
}

impl Profile {
    pub fn load(name: &str) -> Result<Self, ProfileError> {
        let file = Content::get(name).ok_or_else(|| ProfileError::NotFound(name.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ProfileError> {
        serde_json::from_slice(bytes).map_err(|e| ProfileError::ParseError(e.to_string()))
    }

    /// Taglines checked for use by the hero animator.
    pub fn phrases(&self) -> Result<PhraseList, TaglineError> {
        PhraseList::new(self.taglines.iter().cloned())
    }
}

/// The site's profile. Embedded content that fails to parse is a build defect.
pub fn profile() -> &'static Profile {
    GLOBAL_PROFILE
        .as_ref()
        .expect("embedded profile content should parse")
}
