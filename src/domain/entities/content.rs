use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierColor {
    Red,
    Blue,
    Purple,
    Magenta,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Residential,
    Commercial,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessIcon {
    Consultation,
    Installation,
    Training,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub price_display: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tier_color: TierColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<&'static str>,
    pub images: &'static [&'static str],
    pub tags: &'static [ProjectCategory],
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link_label: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ProcessIcon,
    pub what_to_expect: &'static [&'static str],
    pub timeline: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Inclusion {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub founded: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub consultation_form: &'static str,
    pub social_links: &'static [SocialLink],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesCatalog {
    pub intro: &'static str,
    pub packages: &'static [Package],
    pub common_inclusions: &'static [Inclusion],
    pub faq: &'static [FaqItem],
}

/// Query string for `GET /api/content/projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
    pub category: Option<ProjectCategory>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.featured.is_none_or(|f| project.featured == f)
            && self.category.is_none_or(|c| project.category == c)
    }
}
