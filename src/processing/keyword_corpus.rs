//! Static keyword corpus: skill categories, industry keywords and action verbs
//!
//! All tables are compiled in as `static` data and never change at runtime.
//! Within each set terms are unique and keep the order listed here, which is
//! also the order gap analysis reports missing keywords in.

/// A named, ordered set of terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

static SKILL_CATEGORIES: [KeywordSet; 10] = [
    KeywordSet {
        name: "Leadership & Management",
        terms: &[
            "Team Leadership", "Strategic Planning", "Project Management", "People Management",
            "Change Management", "Decision Making", "Stakeholder Management",
            "Performance Management", "Conflict Resolution", "Mentoring", "Coaching",
            "Delegation", "Budget Management", "Cross-functional Leadership", "Talent Development",
        ],
    },
    KeywordSet {
        name: "Technical Skills",
        terms: &[
            "JavaScript", "TypeScript", "Python", "Java", "Rust", "Go", "C++", "SQL", "React",
            "Node.js", "Docker", "Kubernetes", "AWS", "Azure", "Google Cloud", "Git",
            "REST APIs", "GraphQL", "CI/CD", "Linux",
        ],
    },
    KeywordSet {
        name: "Data & Analytics",
        terms: &[
            "Data Analysis", "Data Visualization", "Statistical Analysis", "Machine Learning",
            "Excel", "Tableau", "Power BI", "SQL", "Python", "R", "Data Modeling", "ETL",
            "A/B Testing", "Predictive Analytics", "Big Data",
        ],
    },
    KeywordSet {
        name: "Design & Creative",
        terms: &[
            "UI Design", "UX Design", "Figma", "Adobe Photoshop", "Adobe Illustrator", "Sketch",
            "Prototyping", "Wireframing", "Typography", "Branding", "Visual Design",
            "User Research", "Motion Graphics", "Design Systems",
        ],
    },
    KeywordSet {
        name: "Marketing & Sales",
        terms: &[
            "Digital Marketing", "SEO", "SEM", "Content Marketing", "Social Media Marketing",
            "Email Marketing", "Marketing Automation", "CRM", "Lead Generation",
            "Sales Strategy", "Account Management", "Market Research", "Brand Strategy",
            "Google Analytics", "HubSpot",
        ],
    },
    KeywordSet {
        name: "Communication",
        terms: &[
            "Public Speaking", "Technical Writing", "Presentation Skills", "Copywriting",
            "Active Listening", "Negotiation", "Interpersonal Skills", "Written Communication",
            "Verbal Communication", "Storytelling", "Facilitation", "Client Relations",
            "Cross-cultural Communication",
        ],
    },
    KeywordSet {
        name: "Business & Finance",
        terms: &[
            "Financial Analysis", "Budgeting", "Forecasting", "Financial Modeling",
            "Business Strategy", "Risk Management", "Accounting", "Business Development",
            "Market Analysis", "Compliance", "Auditing", "Valuation", "P&L Management",
            "Cost Reduction",
        ],
    },
    KeywordSet {
        name: "Operations & Supply Chain",
        terms: &[
            "Operations Management", "Supply Chain Management", "Logistics",
            "Inventory Management", "Procurement", "Vendor Management", "Process Improvement",
            "Lean", "Six Sigma", "Quality Assurance", "Demand Planning", "ERP Systems",
            "Continuous Improvement",
        ],
    },
    KeywordSet {
        name: "Healthcare",
        terms: &[
            "Patient Care", "Clinical Research", "Electronic Health Records", "HIPAA Compliance",
            "Medical Terminology", "Patient Education", "Care Coordination",
            "Healthcare Administration", "Infection Control", "Medical Billing",
            "Case Management", "Triage", "Pharmacology", "CPR Certified",
        ],
    },
    KeywordSet {
        name: "Education & Training",
        terms: &[
            "Curriculum Design", "Instructional Design", "Lesson Planning",
            "Classroom Management", "E-Learning", "Training Delivery", "Student Assessment",
            "Learning Management Systems", "Workshop Facilitation", "Educational Technology",
            "Tutoring", "Adult Learning", "Onboarding",
        ],
    },
];

static INDUSTRY_KEYWORDS: [KeywordSet; 7] = [
    KeywordSet {
        name: "Technology",
        terms: &[
            "Agile", "Cloud Computing", "API Development", "DevOps", "Machine Learning",
            "Cybersecurity", "Scalability", "Microservices",
        ],
    },
    KeywordSet {
        name: "Finance",
        terms: &[
            "Financial Analysis", "Risk Management", "Compliance", "Forecasting", "Budgeting",
            "Financial Modeling", "Auditing", "Portfolio Management",
        ],
    },
    KeywordSet {
        name: "Healthcare",
        terms: &[
            "Patient Care", "HIPAA", "Clinical Documentation", "EHR", "Quality Improvement",
            "Care Coordination", "Medical Terminology", "Patient Safety",
        ],
    },
    KeywordSet {
        name: "Marketing",
        terms: &[
            "SEO", "Content Strategy", "Brand Management", "Digital Marketing",
            "Campaign Management", "Analytics", "Social Media", "Lead Generation",
        ],
    },
    KeywordSet {
        name: "Sales",
        terms: &[
            "Pipeline Management", "CRM", "Negotiation", "Account Management",
            "Quota Attainment", "Prospecting", "Closing", "Relationship Building",
        ],
    },
    KeywordSet {
        name: "Education",
        terms: &[
            "Curriculum Development", "Lesson Planning", "Classroom Management",
            "Student Assessment", "Differentiated Instruction", "Educational Technology",
            "Student Engagement", "Mentoring",
        ],
    },
    KeywordSet {
        name: "Manufacturing",
        terms: &[
            "Lean Manufacturing", "Six Sigma", "Quality Control", "Process Improvement",
            "Supply Chain", "Safety Compliance", "Production Planning", "Inventory Management",
        ],
    },
];

static ACTION_VERBS: [KeywordSet; 6] = [
    KeywordSet {
        name: "Leadership",
        terms: &["Led", "Managed", "Directed", "Supervised", "Coordinated", "Mentored", "Spearheaded"],
    },
    KeywordSet {
        name: "Achievement",
        terms: &["Achieved", "Exceeded", "Delivered", "Won", "Earned", "Attained", "Surpassed"],
    },
    KeywordSet {
        name: "Improvement",
        terms: &["Improved", "Optimized", "Streamlined", "Enhanced", "Reduced", "Increased", "Transformed"],
    },
    KeywordSet {
        name: "Creation",
        terms: &["Created", "Designed", "Developed", "Built", "Launched", "Established", "Implemented"],
    },
    KeywordSet {
        name: "Analysis",
        terms: &["Analyzed", "Evaluated", "Assessed", "Researched", "Identified", "Investigated", "Measured"],
    },
    KeywordSet {
        name: "Growth",
        terms: &["Grew", "Expanded", "Generated", "Scaled", "Accelerated", "Boosted", "Doubled"],
    },
];

pub fn skill_categories() -> &'static [KeywordSet] {
    &SKILL_CATEGORIES
}

pub fn skill_category(name: &str) -> Option<&'static KeywordSet> {
    SKILL_CATEGORIES.iter().find(|set| set.name == name)
}

/// Keywords for an industry, or an empty slice when the industry is unknown.
///
/// Lookup is by exact name, e.g. `"Technology"`.
pub fn industry_keywords(industry: &str) -> &'static [&'static str] {
    INDUSTRY_KEYWORDS
        .iter()
        .find(|set| set.name == industry)
        .map(|set| set.terms)
        .unwrap_or(&[])
}

pub fn industries() -> impl Iterator<Item = &'static str> {
    INDUSTRY_KEYWORDS.iter().map(|set| set.name)
}

pub fn action_verbs() -> &'static [KeywordSet] {
    &ACTION_VERBS
}

/// Every action verb across all categories, in table order.
pub fn all_action_verbs() -> impl Iterator<Item = &'static str> {
    ACTION_VERBS.iter().flat_map(|set| set.terms.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(sets: &[KeywordSet]) {
        let names: HashSet<_> = sets.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), sets.len(), "duplicate category name");

        for set in sets {
            let terms: HashSet<_> = set.terms.iter().collect();
            assert_eq!(terms.len(), set.terms.len(), "duplicate term in {}", set.name);
        }
    }

    #[test]
    fn test_skill_categories_shape() {
        let categories = skill_categories();
        assert_eq!(categories.len(), 10);
        for set in categories {
            assert!(
                (13..=25).contains(&set.terms.len()),
                "{} has {} terms",
                set.name,
                set.terms.len()
            );
        }
        assert_unique(categories);
    }

    #[test]
    fn test_skill_category_membership() {
        let technical = skill_category("Technical Skills").unwrap();
        assert!(technical.terms.contains(&"Kubernetes"));
        assert!(technical.terms.contains(&"Rust"));

        let healthcare = skill_category("Healthcare").unwrap();
        assert!(healthcare.terms.contains(&"Patient Care"));

        assert!(skill_category("Underwater Basket Weaving").is_none());
    }

    #[test]
    fn test_industry_keywords_membership() {
        let tech = industry_keywords("Technology");
        assert_eq!(tech.len(), 8);
        assert!(tech.contains(&"Agile"));
        assert!(tech.contains(&"Scalability"));

        assert!(industry_keywords("Finance").contains(&"Risk Management"));
        assert!(industry_keywords("Manufacturing").contains(&"Six Sigma"));
    }

    #[test]
    fn test_required_industries_present() {
        let names: Vec<_> = industries().collect();
        for required in [
            "Technology",
            "Finance",
            "Healthcare",
            "Marketing",
            "Sales",
            "Education",
            "Manufacturing",
        ] {
            assert!(names.contains(&required), "missing industry {required}");
        }
        assert_unique(&INDUSTRY_KEYWORDS);
    }

    #[test]
    fn test_unknown_industry_is_empty() {
        assert!(industry_keywords("Nonexistent").is_empty());
        assert!(industry_keywords("").is_empty());
        // Exact-name lookup
        assert!(industry_keywords("technology").is_empty());
    }

    #[test]
    fn test_action_verbs_shape() {
        let verbs = action_verbs();
        assert_eq!(verbs.len(), 6);
        for set in verbs {
            assert_eq!(set.terms.len(), 7, "{}", set.name);
        }
        assert_unique(verbs);

        let leadership = verbs.iter().find(|s| s.name == "Leadership").unwrap();
        assert!(leadership.terms.contains(&"Led"));
        assert_eq!(all_action_verbs().count(), 42);
    }
}
