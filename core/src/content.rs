#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Portrait {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub eyebrow: &'static str,
    pub tagline: &'static str,
    pub badge: &'static str,
    pub roles: &'static [&'static str],
    pub resume: &'static str,
    pub portrait: Portrait,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capabilities {
    pub body: &'static str,
    pub labels: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeaturedProject {
    pub title: &'static str,
    pub accent: &'static str,
    pub outline: &'static str,
    pub body: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub accent: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactLinks {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub location: &'static str,
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Section anchors in page order. Navigation targets must be one of these.
pub const SECTION_IDS: &[&str] = &[
    "hero",
    "capabilities",
    "featured",
    "experience",
    "skills",
    "projects",
    "contact",
];

include!(concat!(env!("OUT_DIR"), "/portfolio_content.rs"));

pub fn nav_link_by_target(target: &str) -> Option<&'static NavLink> {
    let trimmed = target.trim().trim_start_matches('#');
    NAV_LINKS
        .iter()
        .find(|link| link.target.eq_ignore_ascii_case(trimmed))
}

/// Point on the capability radar for label `index` of `count`, in a 100x100
/// box. Labels start at the top and go clockwise.
pub fn radar_label_position(index: usize, count: usize, radius: f64) -> (f64, f64) {
    let count = count.max(1) as f64;
    let step = 360.0 / count;
    let angle = (index as f64 * step - 90.0).to_radians();
    (50.0 + radius * angle.cos(), 50.0 + radius * angle.sin())
}
