//! Built-in bundles
//!
//! Each bundle is a fixed group of repository files for the constellation
//! project, embedded at compile time from `assets/`. Bundles do not depend on
//! each other and can be generated in any order.

use std::path::Path;

use crate::artifact::{Artifact, ArtifactSet};
use crate::emitter::EmitError;

/// A named group of artifacts
#[derive(Debug)]
pub struct Bundle {
    /// Short name used on the command line
    pub name: &'static str,
    /// One-line heading printed after generation
    pub title: &'static str,
    /// (relative path, content) pairs in write order
    pub files: &'static [(&'static str, &'static str)],
    /// Feature notes printed after generation
    pub features: &'static [&'static str],
}

impl Bundle {
    /// Artifacts of this bundle, in declaration order
    pub fn artifacts(&self) -> impl Iterator<Item = Artifact> + '_ {
        self.files
            .iter()
            .map(|(path, content)| Artifact::new(*path, *content))
    }

    /// Collect the bundle into a checked set
    pub fn artifact_set(&self) -> Result<ArtifactSet, EmitError> {
        let mut set = ArtifactSet::new();
        set.extend(self.artifacts())?;
        Ok(set)
    }
}

static BUNDLES: &[Bundle] = &[
    Bundle {
        name: "community",
        title: "Contributor guide",
        files: &[(
            "CONTRIBUTING.md",
            include_str!("../assets/community/CONTRIBUTING.md"),
        )],
        features: &[
            "🤝 Neurodivergent-friendly contributor guidelines",
            "🎯 Clear development standards and processes",
            "♿ Accessibility-first contribution requirements",
            "🏆 Recognition system for contributors",
            "📚 Comprehensive resource links",
            "🌈 Inclusive community guidelines",
        ],
    },
    Bundle {
        name: "essentials",
        title: "Essential repository files",
        files: &[
            (
                "CODE_OF_CONDUCT.md",
                include_str!("../assets/essentials/CODE_OF_CONDUCT.md"),
            ),
            ("LICENSE", include_str!("../assets/essentials/LICENSE")),
            (
                "package.json",
                include_str!("../assets/essentials/package.json"),
            ),
        ],
        features: &[
            "CODE_OF_CONDUCT.md - Comprehensive neurodivergent-inclusive guidelines",
            "LICENSE - MIT license with accessibility and neurodiversity clauses",
            "package.json - Complete project configuration with dev scripts",
            "🚀 Ready for professional GitHub deployment!",
        ],
    },
    Bundle {
        name: "github",
        title: "GitHub configuration files",
        files: &[
            (
                ".github/workflows/deploy.yml",
                include_str!("../assets/github/deploy.yml"),
            ),
            (
                ".github/ISSUE_TEMPLATE/bug_report.yml",
                include_str!("../assets/github/bug_report.yml"),
            ),
            (
                ".github/ISSUE_TEMPLATE/feature_request.yml",
                include_str!("../assets/github/feature_request.yml"),
            ),
            (
                ".github/ISSUE_TEMPLATE/accessibility_issue.yml",
                include_str!("../assets/github/accessibility_issue.yml"),
            ),
        ],
        features: &[
            "🚀 Automated GitHub Pages deployment",
            "♿ Accessibility testing integration",
            "⚡ Performance monitoring",
            "🔒 Security scanning",
            "📋 Professional issue templates",
            "🏆 Automated deployment summaries",
        ],
    },
    Bundle {
        name: "repository",
        title: "Final repository configuration files",
        files: &[
            (
                ".github/PULL_REQUEST_TEMPLATE.md",
                include_str!("../assets/repository/PULL_REQUEST_TEMPLATE.md"),
            ),
            (".gitignore", include_str!("../assets/repository/gitignore")),
            (
                "SECURITY.md",
                include_str!("../assets/repository/SECURITY.md"),
            ),
            (
                ".github/FUNDING.yml",
                include_str!("../assets/repository/FUNDING.yml"),
            ),
        ],
        features: &[
            "✅ GitHub workflows and automation",
            "✅ Issue templates for all scenarios",
            "✅ Security policy and vulnerability reporting",
            "✅ Funding configuration for sustainability",
            "✅ Comprehensive .gitignore",
            "✅ Pull request template",
        ],
    },
    Bundle {
        name: "seo",
        title: "SEO manager",
        files: &[(
            "seo-manager.js",
            include_str!("../assets/seo/seo-manager.js"),
        )],
        features: &[
            "🌐 Comprehensive Open Graph meta tags",
            "🐦 Twitter Card optimization",
            "💼 LinkedIn sharing enhancements",
            "📊 JSON-LD structured data",
            "🔗 Dynamic URL and meta updates",
            "🗺️ Sitemap generation capability",
            "🤖 Robots.txt configuration",
            "⚡ Core Web Vitals monitoring",
            "🌍 Hreflang international SEO",
            "📈 SEO score reporting",
        ],
    },
];

/// All built-in bundles
pub fn catalog() -> &'static [Bundle] {
    BUNDLES
}

/// Find a bundle by name
pub fn find(name: &str) -> Option<&'static Bundle> {
    BUNDLES.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Names of all bundles, in catalog order
pub fn names() -> Vec<&'static str> {
    BUNDLES.iter().map(|b| b.name).collect()
}

/// Find the artifact declared at `path` in any bundle
pub fn find_artifact(path: &Path) -> Option<(&'static Bundle, Artifact)> {
    BUNDLES.iter().find_map(|bundle| {
        bundle
            .artifact_set()
            .ok()?
            .get(path)
            .cloned()
            .map(|artifact| (bundle, artifact))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_unique_across_catalog() {
        let mut all = ArtifactSet::new();
        for bundle in catalog() {
            all.extend(bundle.artifacts()).unwrap();
        }
        assert_eq!(all.len(), 13);
    }

    #[test]
    fn test_bundle_names_unique() {
        let names = names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
        assert_eq!(names, vec!["community", "essentials", "github", "repository", "seo"]);
    }

    #[test]
    fn test_every_bundle_has_content() {
        for bundle in catalog() {
            assert!(!bundle.features.is_empty(), "{} has no features", bundle.name);
            for artifact in bundle.artifacts() {
                assert!(!artifact.is_empty(), "{} is empty", artifact.path.display());
            }
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("GitHub").map(|b| b.name), Some("github"));
        assert!(find("website").is_none());
    }

    #[test]
    fn test_find_artifact() {
        let (bundle, artifact) = find_artifact(Path::new(".gitignore")).unwrap();
        assert_eq!(bundle.name, "repository");
        assert!(artifact.content.contains("node_modules"));

        let (bundle, _) = find_artifact(Path::new("./LICENSE")).unwrap();
        assert_eq!(bundle.name, "essentials");

        assert!(find_artifact(Path::new("README.md")).is_none());
    }

    #[test]
    fn test_embedded_text_is_project_specific() {
        let license = find_artifact(Path::new("LICENSE")).unwrap().1;
        assert!(license.content.starts_with("MIT License"));

        let workflow = find_artifact(Path::new(".github/workflows/deploy.yml")).unwrap().1;
        assert!(workflow.content.contains("GITHUB_STEP_SUMMARY"));
    }
}
