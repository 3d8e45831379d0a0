use crate::i18n::Lang;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const CONTENT_JSON: &str = include_str!("../data/content.json");
const PROJECTS_JSON: &str = include_str!("../data/projects.json");
const PREVIEW_STRIP_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("project `{project}` has an empty gallery")]
    EmptyGallery { project: String },
    #[error("project id `{project}` appears more than once")]
    DuplicateProjectId { project: String },
    #[error("hero roles for `{lang}` are empty")]
    EmptyRoles { lang: &'static str },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavText {
    pub about: String,
    pub experience: String,
    pub stack: String,
    pub projects: String,
    pub contact: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroText {
    pub greeting: String,
    pub name: String,
    pub roles: Vec<String>,
    pub tagline: String,
    pub cta: String,
    pub contact: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SpokenLanguage {
    pub name: String,
    pub level: String,
    pub percent: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutText {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub languages_title: String,
    pub spoken: Vec<SpokenLanguage>,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExperienceText {
    pub title: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub bullets: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StackCategory {
    pub key: String,
    pub label: String,
    pub accent: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackText {
    pub title: String,
    pub categories: Vec<StackCategory>,
    pub other: String,
    pub other_items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsText {
    pub title: String,
    pub view_site: String,
    pub internal: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub value: String,
    pub href: String,
}

impl ContactLink {
    pub fn contact_kind(&self) -> ContactKind {
        ContactKind::from_key(&self.kind)
    }

    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactText {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub save_contact: String,
    pub links: Vec<ContactLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub experience: ExperienceText,
    pub stack: StackText,
    pub projects: ProjectsText,
    pub contact: ContactText,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VCard {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub linkedin: String,
    pub note: String,
}

impl VCard {
    pub const MIME_TYPE: &'static str = "text/vcard;charset=utf-8";

    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render(&self) -> String {
        let optional = [
            ("TITLE", &self.title),
            ("ORG", &self.company),
            ("EMAIL;TYPE=INTERNET", &self.email),
            ("TEL;TYPE=CELL", &self.phone),
            ("URL", &self.website),
            ("X-SOCIALPROFILE;TYPE=linkedin", &self.linkedin),
            ("NOTE", &self.note),
        ];

        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("N:{};{};;;", self.last_name, self.first_name),
            format!("FN:{}", self.full_name()),
        ];
        lines.extend(
            optional
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| format!("{key}:{value}")),
        );
        lines.push("END:VCARD".to_string());

        lines.join("\r\n")
    }

    /// Download name for the card. Characters that are not allowed in file
    /// names are replaced; everything else, including non-ASCII, is kept.
    pub fn file_name(&self) -> String {
        let stem = if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{}_{}", self.first_name, self.last_name)
        };
        let stem: String = stem
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        format!("{stem}.vcf")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub image: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub features: Option<String>,
    pub role: String,
    pub result: String,
    #[serde(default)]
    url: Option<String>,
}

impl ProjectContent {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn features(&self) -> Option<&str> {
        self.features.as_deref().filter(|text| !text.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub icon: String,
    pub accent: String,
    pub accent_hex: String,
    pub accent_bg: String,
    pub accent_text: String,
    pub glow_color: String,
    pub gallery: Vec<GalleryItem>,
    en: ProjectContent,
    zh: ProjectContent,
}

impl Project {
    pub fn content(&self, lang: Lang) -> &ProjectContent {
        match lang {
            Lang::En => &self.en,
            Lang::Zh => &self.zh,
        }
    }

    pub fn icon_kind(&self) -> IconKind {
        IconKind::from_key(&self.icon)
    }

    pub fn preview_strip(&self) -> &[GalleryItem] {
        &self.gallery[..self.gallery.len().min(PREVIEW_STRIP_LEN)]
    }
}

pub fn project_ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    CreditCard,
    Globe,
    ShoppingBag,
    Gem,
    Box,
}

impl IconKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            "CreditCard" => Self::CreditCard,
            "Globe" => Self::Globe,
            "ShoppingBag" => Self::ShoppingBag,
            "Gem" => Self::Gem,
            _ => Self::Box,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::CreditCard => "💳",
            Self::Globe => "🌐",
            Self::ShoppingBag => "🛍",
            Self::Gem => "💎",
            Self::Box => "📦",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    WhatsApp,
}

impl ContactKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            "linkedin" => Self::LinkedIn,
            "whatsapp" => Self::WhatsApp,
            _ => Self::Email,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::LinkedIn => "linkedin",
            Self::WhatsApp => "whatsapp",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Email => "✉",
            Self::LinkedIn => "in",
            Self::WhatsApp => "💬",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDocument {
    en: Translations,
    zh: Translations,
    #[serde(default)]
    marquee: Vec<String>,
    #[serde(default)]
    easter_egg_roles: Vec<String>,
    #[serde(default)]
    vcard: VCard,
}

#[derive(Deserialize)]
struct ProjectsDocument {
    projects: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentStore {
    document: ContentDocument,
    projects: Vec<Project>,
}

impl ContentStore {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(CONTENT_JSON, PROJECTS_JSON)
    }

    pub fn from_json(content: &str, projects: &str) -> Result<Self, ContentError> {
        let document: ContentDocument =
            serde_json::from_str(content).map_err(|source| ContentError::Parse {
                document: "content.json",
                source,
            })?;
        let projects: ProjectsDocument =
            serde_json::from_str(projects).map_err(|source| ContentError::Parse {
                document: "projects.json",
                source,
            })?;

        let store = Self {
            document,
            projects: projects.projects,
        };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), ContentError> {
        for lang in Lang::ALL {
            if self.translations(lang).hero.roles.is_empty() {
                return Err(ContentError::EmptyRoles {
                    lang: lang.as_str(),
                });
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.gallery.is_empty() {
                return Err(ContentError::EmptyGallery {
                    project: project.id.clone(),
                });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId {
                    project: project.id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn translations(&self, lang: Lang) -> &Translations {
        match lang {
            Lang::En => &self.document.en,
            Lang::Zh => &self.document.zh,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn marquee(&self) -> &[String] {
        &self.document.marquee
    }

    pub fn easter_egg_roles(&self) -> &[String] {
        &self.document.easter_egg_roles
    }

    pub fn vcard(&self) -> &VCard {
        &self.document.vcard
    }
}
