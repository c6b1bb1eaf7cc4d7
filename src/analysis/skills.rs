//! Related-skill suggestions and strength phrases

use std::collections::HashSet;

pub const MAX_SUGGESTED_SKILLS: usize = 10;
pub const MAX_STRENGTHS: usize = 5;

/// Base skill stems mapped to related technologies, in fixed declaration
/// order. The order drives the discovery order of suggestions.
const SKILL_MAP: &[(&str, &[&str])] = &[
    ("python", &["Django", "Flask", "Pandas", "NumPy", "PyTorch"]),
    ("java", &["Spring", "Hibernate", "J2EE", "Android"]),
    ("javascript", &["React", "Node.js", "Vue", "Angular"]),
    ("machine learning", &["TensorFlow", "Keras", "scikit-learn", "AI"]),
    ("database", &["SQL", "MySQL", "PostgreSQL", "MongoDB"]),
    ("cloud", &["AWS", "Azure", "GCP", "Docker", "Kubernetes"]),
    ("data", &["Data Analysis", "Data Mining", "Big Data"]),
    ("develop", &["Software Development", "Web Development", "Mobile Development"]),
    ("manage", &["Project Management", "Team Management", "Product Management"]),
    ("analyze", &["Business Analysis", "Statistical Analysis"]),
    ("design", &["UI Design", "UX Design", "Graphic Design"]),
    ("network", &["Network Administration", "Network Security"]),
    ("security", &["Cybersecurity", "Information Security"]),
    ("test", &["Software Testing", "QA Testing"]),
];

const COMMON_STRENGTHS: &[&str] = &[
    "team player",
    "fast learner",
    "adaptability",
    "communication",
    "problem solving",
    "leadership",
    "time management",
    "detail-oriented",
];

/// Map missing keywords to related technologies worth adding.
///
/// Containment is stem-in-keyword on the lowercased keyword, so "python3"
/// hits the "python" stem. Each stem fires at most once across the whole
/// input; suggestions are de-duplicated in discovery order and truncated to
/// [`MAX_SUGGESTED_SKILLS`].
pub fn suggest_related_skills(missing_keywords: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for keyword in missing_keywords {
        let keyword = keyword.to_lowercase();
        for (stem, related) in SKILL_MAP {
            if keyword.contains(stem) && !seen.contains(stem) {
                for skill in *related {
                    if seen.insert(skill) {
                        suggestions.push((*skill).to_string());
                    }
                }
                seen.insert(stem);
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTED_SKILLS);
    suggestions
}

/// Scan a resume for common strength phrases, at most [`MAX_STRENGTHS`], in
/// table order.
pub fn extract_strengths(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    COMMON_STRENGTHS
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .take(MAX_STRENGTHS)
        .map(|phrase| phrase.to_string())
        .collect()
}
