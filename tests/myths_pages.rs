//! Acceptance suite for the myth story pages and the timeline index.
//!
//! Generates the full set once, then audits each page's skeleton,
//! navigation, content volume, styling contract and the prev/next chain,
//! plus the index timeline ordering.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use rstest::rstest;
use tempfile::TempDir;

use yuanchu_assets::myths::{self, STORIES};
use yuanchu_assets::validate::PageAudit;

fn out_dir() -> &'static Path {
    static DIR: OnceLock<TempDir> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = TempDir::new().expect("temp dir");
        myths::generate(dir.path()).expect("generate myth pages");
        dir
    })
    .path()
}

fn audit(file: &str) -> PageAudit {
    PageAudit::load(&out_dir().join(file)).expect("load page")
}

fn story_audit(slug: &str) -> PageAudit {
    audit(&format!("{slug}.html"))
}

const SLUGS: [&str; 13] = [
    "pangu",
    "nvwa",
    "youchao",
    "suiren",
    "fuxi",
    "shennong",
    "xuanyuan",
    "qinchiyou",
    "fenghou",
    "xuannv",
    "changxian",
    "hanba",
    "xingtian",
];

#[test]
fn fourteen_pages_are_written() {
    for slug in SLUGS {
        assert!(out_dir().join(format!("{slug}.html")).exists(), "{slug} missing");
    }
    assert!(out_dir().join("index.html").exists(), "index missing");
}

#[rstest]
fn page_skeleton_is_complete(
    #[values(
        "pangu", "nvwa", "youchao", "suiren", "fuxi", "shennong", "xuanyuan",
        "qinchiyou", "fenghou", "xuannv", "changxian", "hanba", "xingtian"
    )]
    slug: &str,
) {
    let story = myths::story(slug).expect("registered story");
    let page = story_audit(slug);
    assert!(page.has_doctype(), "{slug}: doctype");
    assert_eq!(page.html_lang().as_deref(), Some("zh-CN"), "{slug}: lang");
    assert!(page.has_utf8_charset(), "{slug}: charset");
    assert!(page.has_viewport_meta(), "{slug}: viewport");
    assert!(page.has_canvas(), "{slug}: particle canvas");
    assert!(page.title().contains(story.title), "{slug}: title");
    assert!(page.title().contains("元初"), "{slug}: brand in title");
    assert_eq!(page.h1_text(), story.title, "{slug}: h1");
    assert!(page.raw.contains(story.en_upper), "{slug}: english hero line");
}

#[rstest]
fn navigation_is_uniform(
    #[values(
        "pangu", "nvwa", "youchao", "suiren", "fuxi", "shennong", "xuanyuan",
        "qinchiyou", "fenghou", "xuannv", "changxian", "hanba", "xingtian"
    )]
    slug: &str,
) {
    let page = story_audit(slug);
    let nav = page.nav_links();
    let texts: Vec<&str> = nav.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["首页", "神话", "故事", "AI"], "{slug}: nav labels");
    let hrefs: Vec<&str> = nav.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(
        hrefs,
        ["https://yuanchu.ai", "index.html", "#story", "#ai"],
        "{slug}: nav targets"
    );
    assert!(page.has_section("story"), "{slug}: story section");
    assert!(page.has_section("ai"), "{slug}: ai section");
    assert!(page.raw.contains("<h2>Story</h2>"), "{slug}: story heading");
    assert!(page.raw.contains("class=\"quote\""), "{slug}: opening quote");
    assert!(page.raw.contains("class=\"ai-grid\""), "{slug}: ai grid");
}

#[rstest]
fn content_volume_meets_the_floor(
    #[values(
        "pangu", "nvwa", "youchao", "suiren", "fuxi", "shennong", "xuanyuan",
        "qinchiyou", "fenghou", "xuannv", "changxian", "hanba", "xingtian"
    )]
    slug: &str,
) {
    let page = story_audit(slug);
    assert!(page.class_count("text") >= 6, "{slug}: thin narrative");
    assert!(page.class_count("ancient") >= 1, "{slug}: no classical citation");
    assert!(page.class_count("ai-item") >= 5, "{slug}: thin metaphor grid");
}

#[test]
fn flagship_stories_carry_extra_depth() {
    assert_eq!(story_audit("pangu").class_count("text"), 8);
    assert_eq!(story_audit("pangu").class_count("ancient"), 2);
    assert_eq!(story_audit("nvwa").class_count("text"), 10);
    assert_eq!(story_audit("nvwa").class_count("ancient"), 2);
}

#[test]
fn classical_sources_are_the_canonical_books() {
    let expected = [
        ("pangu", "三五历纪"),
        ("nvwa", "风俗通"),
        ("youchao", "韩非子"),
        ("suiren", "韩非子"),
        ("fuxi", "周易"),
        ("shennong", "淮南子"),
        ("xuanyuan", "史记"),
        ("qinchiyou", "史记"),
        ("fenghou", "太平御览"),
        ("xuannv", "太平御览"),
        ("changxian", "山海经"),
        ("hanba", "山海经"),
        ("xingtian", "山海经"),
    ];
    for (slug, book) in expected {
        let page = story_audit(slug);
        assert!(page.raw.contains(book), "{slug}: missing citation of {book}");
    }
}

#[rstest]
fn styling_contract_holds(
    #[values(
        "pangu", "nvwa", "youchao", "suiren", "fuxi", "shennong", "xuanyuan",
        "qinchiyou", "fenghou", "xuannv", "changxian", "hanba", "xingtian"
    )]
    slug: &str,
) {
    let page = story_audit(slug);
    let body_bg = Regex::new(r"(?s)body\s*\{\s*background:\s*#0a0a0f").expect("regex");
    assert!(body_bg.is_match(&page.raw), "{slug}: body background");
    assert!(
        page.raw.contains("-webkit-background-clip: text"),
        "{slug}: gradient title clip"
    );
    assert!(
        page.raw.contains("-webkit-text-fill-color: transparent"),
        "{slug}: gradient title fill"
    );
    let media = Regex::new(r"(?s)@media \(max-width: 768px\) \{.*?\.title-cn").expect("regex");
    assert!(media.is_match(&page.raw), "{slug}: mobile title rule");
}

#[rstest]
fn particles_and_tracking_are_wired(
    #[values(
        "pangu", "nvwa", "youchao", "suiren", "fuxi", "shennong", "xuanyuan",
        "qinchiyou", "fenghou", "xuannv", "changxian", "hanba", "xingtian"
    )]
    slug: &str,
) {
    let page = story_audit(slug);
    let count = Regex::new(r"particleCount\s*=\s*(\d+)").expect("regex");
    let caps = count.captures(&page.raw).expect("particle count");
    assert_eq!(&caps[1], "80", "{slug}: particle count");
    assert!(page.raw.contains("rgba(10,10,15,0.1)"), "{slug}: trail fade");
    assert!(page.raw.contains("requestAnimationFrame"), "{slug}: animation loop");
    assert!(page.raw.contains("tracker.js"), "{slug}: analytics hook");
}

#[rstest]
fn illustrations_degrade_gracefully(
    #[values(
        "pangu", "nvwa", "youchao", "suiren", "fuxi", "shennong", "xuanyuan",
        "qinchiyou", "fenghou", "xuannv", "changxian", "hanba", "xingtian"
    )]
    slug: &str,
) {
    let page = story_audit(slug);
    let images = page.images();
    assert!(!images.is_empty(), "{slug}: no illustration");
    for img in images {
        assert!(!img.alt.is_empty(), "{slug}: {} has no alt text", img.src);
        assert!(img.has_onerror, "{slug}: {} has no fallback", img.src);
    }
}

#[test]
fn gradients_are_unique_and_keep_the_brand_anchors() {
    let re = Regex::new(r"linear-gradient\(135deg, (#[0-9a-f]{6}), (#[0-9a-f]{6})\)")
        .expect("regex");
    let mut gradients = HashSet::new();
    for slug in SLUGS {
        let page = story_audit(slug);
        let caps = re.captures(&page.raw).expect("gradient");
        gradients.insert(format!("{},{}", &caps[1], &caps[2]));
    }
    assert_eq!(gradients.len(), 13, "gradients reused across stories");
    for anchor in ["#e0e0e0", "#ff9a9e", "#81c784", "#ff8a65", "#7c8cf8"] {
        assert!(
            gradients.iter().any(|g| g.contains(anchor)),
            "anchor color {anchor} missing"
        );
    }
}

#[test]
fn footer_chain_walks_the_timeline() {
    for (i, story) in STORIES.iter().enumerate() {
        let page = story_audit(story.slug);
        let footer = page.footer_raw().to_string();
        if i == 0 {
            assert!(!page.raw.contains("上一个"), "first page links backward");
        } else {
            let prev = &STORIES[i - 1];
            assert!(
                footer.contains(&format!("href=\"{}.html\"", prev.slug)),
                "{}: prev href",
                story.slug
            );
            assert!(
                footer.contains(&format!("上一个：{}", prev.title)),
                "{}: prev label",
                story.slug
            );
        }
        if i == STORIES.len() - 1 {
            assert!(!page.raw.contains("下一个"), "last page links forward");
        } else {
            let next = &STORIES[i + 1];
            assert!(
                footer.contains(&format!("href=\"{}.html\"", next.slug)),
                "{}: next href",
                story.slug
            );
            assert!(
                footer.contains(&format!("下一个：{}", next.title)),
                "{}: next label",
                story.slug
            );
        }
        assert!(
            footer.contains("https://yuanchu.ai/myths"),
            "{}: home link",
            story.slug
        );
    }
}

#[test]
fn index_lists_the_timeline_in_order() {
    let page = audit("index.html");
    assert!(page.has_doctype());
    assert_eq!(page.html_lang().as_deref(), Some("zh-CN"));
    assert!(page.title().contains("上古神话"));
    assert!(page.title().contains("元初"));
    assert_eq!(page.h1_text(), "上古神话");

    let titles: Vec<&str> = STORIES.iter().map(|s| s.title).collect();
    assert_eq!(page.h3_texts(), titles, "timeline order");
    assert_eq!(page.class_count("timeline-item"), 13);
    assert_eq!(page.class_count("timeline-year"), 13);

    for story in STORIES {
        assert!(
            page.raw.contains(&format!("href=\"{}.html\"", story.slug)),
            "{}: no timeline link",
            story.slug
        );
        assert!(page.raw.contains(story.era), "{}: era missing", story.slug);
        assert!(
            page.raw.contains(&format!("{} · Myth", story.en_name)),
            "{}: english name missing",
            story.slug
        );
    }
}

#[test]
fn index_keeps_the_shared_styling() {
    let page = audit("index.html");
    let body_bg = Regex::new(r"(?s)body\s*\{\s*background:\s*#0a0a0f").expect("regex");
    assert!(body_bg.is_match(&page.raw));
    let media = Regex::new(r"(?s)@media \(max-width: 768px\) \{.*?\.title-cn").expect("regex");
    assert!(media.is_match(&page.raw));
    assert!(page.raw.contains("tracker.js"));
}

#[test]
fn replaced_stories_do_not_resurface() {
    let page = audit("index.html");
    for absent in ["后羿射日", "精卫填海", "夸父追日", "鲧禹治水"] {
        assert!(!page.raw.contains(absent), "{absent} should be gone");
    }
}

#[test]
fn every_internal_link_resolves() {
    let re = Regex::new(r#"href="([a-z0-9]+\.html)""#).expect("regex");
    let mut pages: Vec<String> = SLUGS.iter().map(|s| format!("{s}.html")).collect();
    pages.push("index.html".to_string());
    for file in &pages {
        let page = audit(file);
        for caps in re.captures_iter(&page.raw) {
            let target = &caps[1];
            assert!(
                out_dir().join(target).exists(),
                "{file}: dangling link to {target}"
            );
        }
    }
}
