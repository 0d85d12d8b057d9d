use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct ContentFile {
    profile: ProfileEntry,
    nav: Vec<NavEntry>,
    capabilities: CapabilitiesEntry,
    featured: FeaturedEntry,
    experience: Vec<ExperienceEntry>,
    skills: Vec<SkillCategoryEntry>,
    projects: Vec<ProjectEntry>,
    contact: ContactEntry,
}

#[derive(Deserialize)]
struct ProfileEntry {
    name: String,
    short_name: String,
    eyebrow: String,
    tagline: String,
    badge: String,
    roles: Vec<String>,
    resume: String,
    portrait: PortraitEntry,
}

#[derive(Deserialize)]
struct PortraitEntry {
    src: String,
    alt: String,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Deserialize)]
struct NavEntry {
    label: String,
    target: String,
}

#[derive(Deserialize)]
struct CapabilitiesEntry {
    body: String,
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct FeaturedEntry {
    title: String,
    accent: String,
    outline: String,
    body: String,
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct ExperienceEntry {
    company: String,
    role: String,
    duration: String,
    highlights: Vec<String>,
    technologies: Vec<String>,
}

#[derive(Deserialize)]
struct SkillCategoryEntry {
    name: String,
    accent: String,
    items: Vec<SkillEntry>,
}

#[derive(Deserialize)]
struct SkillEntry {
    name: String,
    level: u8,
}

#[derive(Deserialize)]
struct ProjectEntry {
    title: String,
    description: String,
    tags: Vec<String>,
    accent: String,
}

#[derive(Deserialize)]
struct ContactEntry {
    email: String,
    linkedin: String,
    github: String,
    location: String,
}

const SECTION_IDS: &[&str] = &[
    "hero",
    "capabilities",
    "featured",
    "experience",
    "skills",
    "projects",
    "contact",
];

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=FOLIO_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read portfolio content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse portfolio content at {}: {err}",
            content_path.display()
        )
    });

    validate(&content, &content_path);

    let (portrait_width, portrait_height, portrait_path) =
        portrait_dimensions(&content.profile.portrait, workspace_root);
    println!("cargo:rerun-if-changed={}", portrait_path.display());

    let mut output = String::new();
    write_profile(&mut output, &content.profile, portrait_width, portrait_height);
    write_nav(&mut output, &content.nav);
    write_capabilities(&mut output, &content.capabilities);
    write_featured(&mut output, &content.featured);
    write_experience(&mut output, &content.experience);
    write_skills(&mut output, &content.skills);
    write_projects(&mut output, &content.projects);
    write_contact(&mut output, &content.contact);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("portfolio_content.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("FOLIO_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/portfolio.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_str_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|value| rust_string(value)).collect();
    format!("&[{}]", items.join(", "))
}

fn validate(content: &ContentFile, content_path: &Path) {
    let profile = &content.profile;
    if profile.name.trim().is_empty() {
        panic!("profile name cannot be empty in {}", content_path.display());
    }
    if profile.roles.is_empty() || profile.roles.iter().any(|role| role.trim().is_empty()) {
        panic!(
            "profile needs at least one non-empty role in {}",
            content_path.display()
        );
    }
    if profile.portrait.src.trim().is_empty() {
        panic!("portrait src cannot be empty in {}", content_path.display());
    }
    if profile.portrait.width.is_some() ^ profile.portrait.height.is_some() {
        panic!(
            "portrait must set both width and height or neither in {}",
            content_path.display()
        );
    }

    let mut targets = HashSet::new();
    for link in &content.nav {
        if link.label.trim().is_empty() {
            panic!("nav label cannot be empty in {}", content_path.display());
        }
        if !SECTION_IDS.contains(&link.target.as_str()) {
            panic!(
                "nav link '{}' targets unknown section '{}' in {}",
                link.label,
                link.target,
                content_path.display()
            );
        }
        if !targets.insert(link.target.clone()) {
            panic!(
                "duplicate nav target '{}' in {}",
                link.target,
                content_path.display()
            );
        }
    }

    if content.experience.is_empty() {
        panic!("experience list is empty in {}", content_path.display());
    }

    let mut categories = HashSet::new();
    for category in &content.skills {
        if !categories.insert(category.name.clone()) {
            panic!(
                "duplicate skill category '{}' in {}",
                category.name,
                content_path.display()
            );
        }
        for skill in &category.items {
            if skill.level > 100 {
                panic!(
                    "skill '{}' level {} exceeds 100 in {}",
                    skill.name,
                    skill.level,
                    content_path.display()
                );
            }
        }
    }

    let email = content.contact.email.trim();
    if email.is_empty() || !email.contains('@') {
        panic!(
            "contact email '{}' is not an address in {}",
            content.contact.email,
            content_path.display()
        );
    }
}

fn write_profile(output: &mut String, profile: &ProfileEntry, width: u32, height: u32) {
    writeln!(output, "pub const PROFILE: Profile = Profile {{").unwrap();
    writeln!(output, "    name: {},", rust_string(&profile.name)).unwrap();
    writeln!(output, "    short_name: {},", rust_string(&profile.short_name)).unwrap();
    writeln!(output, "    eyebrow: {},", rust_string(&profile.eyebrow)).unwrap();
    writeln!(output, "    tagline: {},", rust_string(&profile.tagline)).unwrap();
    writeln!(output, "    badge: {},", rust_string(&profile.badge)).unwrap();
    writeln!(output, "    roles: {},", rust_str_slice(&profile.roles)).unwrap();
    writeln!(output, "    resume: {},", rust_string(&profile.resume)).unwrap();
    writeln!(output, "    portrait: Portrait {{").unwrap();
    writeln!(output, "        src: {},", rust_string(&profile.portrait.src)).unwrap();
    writeln!(output, "        alt: {},", rust_string(&profile.portrait.alt)).unwrap();
    writeln!(output, "        width: {},", width).unwrap();
    writeln!(output, "        height: {},", height).unwrap();
    writeln!(output, "    }},").unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
}

fn write_nav(output: &mut String, nav: &[NavEntry]) {
    writeln!(output, "pub const NAV_LINKS: &[NavLink] = &[").unwrap();
    for link in nav {
        writeln!(
            output,
            "    NavLink {{ label: {}, target: {} }},",
            rust_string(&link.label),
            rust_string(&link.target)
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_capabilities(output: &mut String, capabilities: &CapabilitiesEntry) {
    writeln!(output, "pub const CAPABILITIES: Capabilities = Capabilities {{").unwrap();
    writeln!(output, "    body: {},", rust_string(&capabilities.body)).unwrap();
    writeln!(output, "    labels: {},", rust_str_slice(&capabilities.labels)).unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
}

fn write_featured(output: &mut String, featured: &FeaturedEntry) {
    writeln!(output, "pub const FEATURED: FeaturedProject = FeaturedProject {{").unwrap();
    writeln!(output, "    title: {},", rust_string(&featured.title)).unwrap();
    writeln!(output, "    accent: {},", rust_string(&featured.accent)).unwrap();
    writeln!(output, "    outline: {},", rust_string(&featured.outline)).unwrap();
    writeln!(output, "    body: {},", rust_string(&featured.body)).unwrap();
    writeln!(output, "    tags: {},", rust_str_slice(&featured.tags)).unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
}

fn write_experience(output: &mut String, experience: &[ExperienceEntry]) {
    writeln!(output, "pub const EXPERIENCES: &[Experience] = &[").unwrap();
    for entry in experience {
        writeln!(output, "    Experience {{").unwrap();
        writeln!(output, "        company: {},", rust_string(&entry.company)).unwrap();
        writeln!(output, "        role: {},", rust_string(&entry.role)).unwrap();
        writeln!(output, "        duration: {},", rust_string(&entry.duration)).unwrap();
        writeln!(output, "        highlights: {},", rust_str_slice(&entry.highlights)).unwrap();
        writeln!(output, "        technologies: {},", rust_str_slice(&entry.technologies)).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_skills(output: &mut String, skills: &[SkillCategoryEntry]) {
    writeln!(output, "pub const SKILL_CATEGORIES: &[SkillCategory] = &[").unwrap();
    for category in skills {
        writeln!(output, "    SkillCategory {{").unwrap();
        writeln!(output, "        name: {},", rust_string(&category.name)).unwrap();
        writeln!(output, "        accent: {},", rust_string(&category.accent)).unwrap();
        writeln!(output, "        skills: &[").unwrap();
        for skill in &category.items {
            writeln!(
                output,
                "            Skill {{ name: {}, level: {} }},",
                rust_string(&skill.name),
                skill.level
            )
            .unwrap();
        }
        writeln!(output, "        ],").unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_projects(output: &mut String, projects: &[ProjectEntry]) {
    writeln!(output, "pub const PROJECTS: &[Project] = &[").unwrap();
    for project in projects {
        writeln!(output, "    Project {{").unwrap();
        writeln!(output, "        title: {},", rust_string(&project.title)).unwrap();
        writeln!(output, "        description: {},", rust_string(&project.description)).unwrap();
        writeln!(output, "        tags: {},", rust_str_slice(&project.tags)).unwrap();
        writeln!(output, "        accent: {},", rust_string(&project.accent)).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_contact(output: &mut String, contact: &ContactEntry) {
    writeln!(output, "pub const CONTACT: ContactLinks = ContactLinks {{").unwrap();
    writeln!(output, "    email: {},", rust_string(&contact.email)).unwrap();
    writeln!(output, "    linkedin: {},", rust_string(&contact.linkedin)).unwrap();
    writeln!(output, "    github: {},", rust_string(&contact.github)).unwrap();
    writeln!(output, "    location: {},", rust_string(&contact.location)).unwrap();
    writeln!(output, "}};").unwrap();
}

fn portrait_dimensions(portrait: &PortraitEntry, workspace_root: &Path) -> (u32, u32, PathBuf) {
    let src_path = resolve_src_path(&portrait.src, workspace_root);
    match imagesize::size(&src_path) {
        Ok(size) => {
            let width = u32::try_from(size.width).unwrap_or_else(|_| {
                panic!(
                    "portrait {} has width {} larger than u32",
                    src_path.display(),
                    size.width
                )
            });
            let height = u32::try_from(size.height).unwrap_or_else(|_| {
                panic!(
                    "portrait {} has height {} larger than u32",
                    src_path.display(),
                    size.height
                )
            });
            if width == 0 || height == 0 {
                panic!(
                    "portrait {} has invalid dimensions {}x{}",
                    src_path.display(),
                    width,
                    height
                );
            }
            (width, height, src_path)
        }
        Err(err) => match (portrait.width, portrait.height) {
            (Some(width), Some(height)) => {
                println!(
                    "cargo:warning=failed to read image size for '{}', falling back to declared dimensions {}x{}: {}",
                    portrait.src, width, height, err
                );
                (width, height, src_path)
            }
            _ => panic!(
                "failed to read image size for '{}' at {}: {err}",
                portrait.src,
                src_path.display()
            ),
        },
    }
}

fn resolve_src_path(src: &str, workspace_root: &Path) -> PathBuf {
    let raw_path = PathBuf::from(src);
    if raw_path.is_absolute() && raw_path.exists() {
        return raw_path;
    }
    let trimmed = src.trim_start_matches('/');
    let public_path = workspace_root.join("public").join(trimmed);
    if public_path.exists() {
        return public_path;
    }
    let workspace_path = workspace_root.join(trimmed);
    if workspace_path.exists() {
        return workspace_path;
    }
    if raw_path.is_absolute() {
        return raw_path;
    }
    public_path
}
