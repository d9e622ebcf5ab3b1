//! Timeline index page.
//!
//! A single column of thirteen timeline entries in story order. The only
//! `<h3>` elements on the page are the story titles, which downstream
//! checks rely on when validating timeline order.

use std::fmt::Write;

use super::stories::STORIES;

/// Render the myths index as a standalone HTML document.
pub fn render() -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>上古神话 - 元初AI</title>\n");
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");

    html.push_str(concat!(
        "<header>\n<nav>\n",
        "<a href=\"https://yuanchu.ai\">首页</a>\n",
        "<a href=\"index.html\">神话</a>\n",
        "</nav>\n</header>\n"
    ));

    html.push_str(concat!(
        "<div class=\"hero\">\n",
        "<p class=\"title-en\">MYTHS OF THE ORIGIN</p>\n",
        "<h1 class=\"title-cn\">上古神话</h1>\n",
        "<p class=\"subtitle\">从开天辟地到文明初成，十三个古老的故事</p>\n",
        "</div>\n"
    ));

    html.push_str("<div class=\"timeline\">\n");
    for s in STORIES {
        let _ = writeln!(
            html,
            concat!(
                "<div class=\"timeline-item\">\n",
                "<div class=\"timeline-year\">{era}</div>\n",
                "<div class=\"timeline-content\">\n",
                "<a href=\"{slug}.html\"><h3>{title}</h3></a>\n",
                "<span class=\"timeline-meta\">{en} · Myth</span>\n",
                "<p>{summary}</p>\n",
                "</div>\n",
                "</div>"
            ),
            era = s.era,
            slug = s.slug,
            title = s.title,
            en = s.en_name,
            summary = s.summary
        );
    }
    html.push_str("</div>\n");

    html.push_str("<footer>\n<a href=\"https://yuanchu.ai\">元初AI · yuanchu.ai</a>\n</footer>\n");
    html.push_str("<script src=\"tracker.js\"></script>\n");
    html.push_str("</body>\n</html>\n");
    html
}

const STYLE: &str = r#"<style>
body {
  background: #0a0a0f;
  color: #e8e8f0;
  font-family: "Noto Serif SC", "Songti SC", serif;
  margin: 0;
  line-height: 1.8;
}
header {
  position: fixed;
  top: 0;
  width: 100%;
  backdrop-filter: blur(8px);
  background: rgba(10, 10, 15, 0.7);
  z-index: 10;
}
nav {
  display: flex;
  gap: 2rem;
  justify-content: center;
  padding: 1rem 0;
}
nav a {
  color: #b8b8c8;
  text-decoration: none;
}
.hero {
  text-align: center;
  padding: 9rem 1rem 3rem;
}
.title-en {
  letter-spacing: 0.5em;
  color: #8888a0;
  font-size: 0.9rem;
}
.title-cn {
  background: linear-gradient(135deg, #e8e8f0, #8888a0);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
  font-size: 3.2rem;
  margin: 0.4em 0;
}
.subtitle {
  color: #707088;
}
.timeline {
  max-width: 720px;
  margin: 0 auto 6rem;
  padding: 0 1.2rem;
  border-left: 2px solid #26263a;
}
.timeline-item {
  position: relative;
  margin: 2.5rem 0 2.5rem 1.5rem;
}
.timeline-year {
  color: #a89868;
  font-size: 0.9rem;
  letter-spacing: 0.2em;
}
.timeline-content a {
  color: #e8e8f0;
  text-decoration: none;
}
.timeline-content h3 {
  margin: 0.3em 0;
  font-size: 1.5rem;
}
.timeline-meta {
  color: #707088;
  font-size: 0.85rem;
  letter-spacing: 0.15em;
}
.timeline-content p {
  color: #b8b8c8;
  margin-top: 0.5em;
}
footer {
  border-top: 1px solid #26263a;
  padding: 2rem 1.2rem 4rem;
  text-align: center;
}
footer a {
  color: #b8b8c8;
  text-decoration: none;
}
@media (max-width: 768px) {
  .title-cn {
    font-size: 2.2rem;
  }
  .timeline-content h3 {
    font-size: 1.25rem;
  }
}
</style>
"#;
