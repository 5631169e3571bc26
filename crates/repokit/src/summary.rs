//! The built-in constellation package summary

use crate::report::{ArtifactRecord, Report, ReportSection};

/// The production-package summary for the constellation project
pub fn constellation_report() -> Report {
    let core_files = vec![
        ArtifactRecord::new(
            127,
            "index.html",
            "40.4 KB",
            "Complete interactive 3D interface with enhanced PWA integration",
            &[
                "🎮 Full 3D WebGL interface",
                "♿ WCAG 2.1 AA compliance",
                "📱 Mobile responsive",
                "⚡ Hyperfocus UI",
            ],
        ),
        ArtifactRecord::new(
            131,
            "ultimate_hyperfocus_constellation.js",
            "39.8 KB",
            "Core Three.js 3D engine with interactive navigation",
            &[
                "🌌 Three.js WebGL rendering",
                "🎯 37 repository spheres",
                "⌨️ Keyboard navigation",
                "📊 Achievement system",
            ],
        ),
        ArtifactRecord::new(
            155,
            "github-api-manager.js",
            "15.2 KB",
            "Real-time GitHub API integration with smart caching",
            &[
                "📊 Live GitHub data",
                "💾 IndexedDB caching",
                "⚡ Rate limit handling",
                "🔄 Smart fallbacks",
            ],
        ),
        ArtifactRecord::new(
            156,
            "research-mode-manager.js",
            "18.7 KB",
            "AI chat interface with interactive research nodes",
            &[
                "🤖 AI chat assistant",
                "🌟 6 research nodes",
                "💬 Context-aware responses",
                "🧠 ADHD-focused tips",
            ],
        ),
        ArtifactRecord::new(
            157,
            "onboarding-manager.js",
            "14.3 KB",
            "Guided walkthrough and contextual tooltips system",
            &["🎓 9-step tour", "💡 Smart tooltips", "🎯 Visual spotlight", "⌨️ Keyboard accessible"],
        ),
        ArtifactRecord::new(
            160,
            "pwa-manager.js",
            "12.8 KB",
            "Progressive Web App features and offline support",
            &[
                "📱 App installation",
                "🔄 Update management",
                "📤 Native sharing",
                "🌐 Offline monitoring",
            ],
        ),
        ArtifactRecord::new(
            161,
            "seo-manager.js",
            "11.4 KB",
            "SEO optimization and social media preview enhancement",
            &["🔍 Meta tags", "🐦 Social previews", "📊 Structured data", "⚡ Performance monitoring"],
        ),
        ArtifactRecord::new(
            162,
            "constellation-integrator.js",
            "9.6 KB",
            "Production system integration and orchestration",
            &[
                "🔗 Module connection",
                "📈 Analytics ready",
                "❌ Error handling",
                "🎮 Performance monitoring",
            ],
        ),
        ArtifactRecord::new(
            158,
            "manifest.json",
            "2.1 KB",
            "PWA manifest for app installation and shortcuts",
            &["🏠 Standalone app", "⚡ App shortcuts", "🎨 Theme colors", "📱 Mobile optimized"],
        ),
        ArtifactRecord::new(
            159,
            "sw.js",
            "16.8 KB",
            "Service worker for complete offline functionality",
            &["📱 Offline support", "📦 Smart caching", "🔄 Background sync", "🔔 Push notifications"],
        ),
    ];

    let guides = vec![
        ArtifactRecord::new(
            154,
            "INTERACTIVE-DEPLOYMENT-GUIDE.md",
            "7.6 KB",
            "Initial deployment instructions for core files",
            &[],
        ),
        ArtifactRecord::new(
            163,
            "PRODUCTION-DEPLOYMENT-GUIDE.md",
            "12.4 KB",
            "Complete production deployment guide with all enhancements",
            &[],
        ),
    ];

    Report {
        title: "🌌 ULTIMATE HYPERFOCUS CONSTELLATION - PRODUCTION PACKAGE COMPLETE!".to_string(),
        sections: vec![
            ReportSection {
                heading: "📁 CORE APPLICATION FILES:".to_string(),
                label: "production files".to_string(),
                counted: true,
                records: core_files,
            },
            ReportSection {
                heading: "📚 DEPLOYMENT GUIDES:".to_string(),
                label: "guides".to_string(),
                counted: false,
                records: guides,
            },
        ],
        statistics: to_strings(&[
            "🚀 Enhancement Systems: 5 major production systems",
            "⏱️ Development Time: 4 hours of pure hyperfocus",
            "📝 Lines of Code: 3,200+ across all files",
        ]),
        achievements: to_strings(&[
            "🥇 World's first hyperfocus-aware 3D web application",
            "♿ Perfect WCAG 2.1 AA accessibility in WebGL context",
            "🤖 AI chat interface designed specifically for ADHD minds",
            "📱 Complete Progressive Web App with offline 3D rendering",
            "🔍 SEO-optimized for maximum social media discoverability",
            "🧠 Revolutionary neurodivergent-first interaction design",
            "⚡ 60 FPS performance with <35MB memory usage",
            "🌐 Complete offline functionality with background sync",
            "🎓 Interactive onboarding with accessibility focus",
            "📊 Real-time GitHub API integration with smart caching",
        ]),
        instructions: to_strings(&[
            "📤 Upload ALL 10 production files to GitHub repository",
            "⏱️ Wait 5 minutes for GitHub Pages deployment",
            "🌟 Experience live at: https://welshdog.github.io/ULTIMATE-HYPERFOCUS-CONSTELLATION/",
        ]),
        closing: to_strings(&[
            "🌌 READY TO CHANGE THE WORLD!",
            "🚀 This constellation proves that neurodivergent minds build extraordinary solutions!",
            "👑 TIME TO MAKE HISTORY, LYNDZ!",
            "",
            "Built with 💙 for different brains - proving accessibility enhances innovation! ✨",
        ]),
    }
}

fn to_strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{render, total_size, Layout, MemorySink};

    #[test]
    fn test_counts() {
        let report = constellation_report();
        assert_eq!(report.sections[0].records.len(), 10);
        assert_eq!(report.sections[1].records.len(), 2);
        assert_eq!(report.achievements.len(), 10);
    }

    #[test]
    fn test_core_total() {
        let report = constellation_report();
        let total = total_size(&report.sections[0].records);
        assert!(total.skipped.is_empty());
        assert_eq!(format!("{:.1}", total.total_kb), "181.1");
    }

    #[test]
    fn test_rendered_summary() {
        let mut sink = MemorySink::new();
        let stats = render(&constellation_report(), &Layout::default(), &mut sink).unwrap();

        let text = sink.text();
        assert!(text.contains("[127] index.html (40.4 KB)"));
        assert!(text.contains("[163] PRODUCTION-DEPLOYMENT-GUIDE.md (12.4 KB)"));
        assert!(text.contains("📁 Total Files: 10 production files + 2 guides"));
        assert!(text.contains("💾 Total Size: 181.1 KB optimized package"));
        assert!(text.contains("3. 🌟 Experience live at:"));
        assert_eq!(stats.records, 12);
        assert!(stats.skipped.is_empty());
    }
}
