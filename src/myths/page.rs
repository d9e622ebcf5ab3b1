//! Story page rendering.
//!
//! One fixed layout shared by all thirteen pages: particle canvas, fixed
//! header with anchor navigation, hero block with gradient title and
//! illustration, opening quote, narrative section, AI metaphor grid and
//! the footer navigation chain. The output is a complete standalone HTML
//! document.

use std::fmt::Write;

use super::stories::Story;
use super::neighbors;

/// Render the full HTML document for one story.
pub fn render(story: &Story) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(html, "<title>{} - 元初神话</title>", story.title);
    html.push_str(&style(story));
    html.push_str("</head>\n<body>\n");
    html.push_str("<canvas id=\"particles\"></canvas>\n");

    html.push_str(concat!(
        "<header>\n<nav>\n",
        "<a href=\"https://yuanchu.ai\">首页</a>\n",
        "<a href=\"index.html\">神话</a>\n",
        "<a href=\"#story\">故事</a>\n",
        "<a href=\"#ai\">AI</a>\n",
        "</nav>\n</header>\n"
    ));

    let _ = writeln!(
        html,
        "<div class=\"hero\">\n<p class=\"title-en\">{}</p>\n<h1 class=\"title-cn\">{}</h1>\n<p class=\"era\">{}</p>\n</div>",
        story.en_upper, story.title, story.era
    );
    let _ = writeln!(
        html,
        "<div class=\"hero-image\">\n<img src=\"{}.jpg\" alt=\"{}插图\" onerror=\"this.style.display='none'\">\n</div>",
        story.slug, story.title
    );

    let _ = writeln!(
        html,
        "<section class=\"quote\">\n<p>「{}」</p>\n<p class=\"quote-source\">——《{}》</p>\n</section>",
        story.quote, story.quote_source
    );

    html.push_str("<section id=\"story\">\n<h2>Story</h2>\n");
    // Interleave: classical citations sit after the narrative they support.
    let cite_every = if story.ancient.is_empty() {
        usize::MAX
    } else {
        story.text.len() / story.ancient.len()
    };
    let mut cited = 0;
    for (i, para) in story.text.iter().enumerate() {
        let _ = writeln!(html, "<p class=\"text\">{}</p>", para);
        if cited < story.ancient.len() && (i + 1) % cite_every.max(1) == 0 {
            let a = &story.ancient[cited];
            let _ = writeln!(html, "<p class=\"ancient\">「{}」——《{}》</p>", a.text, a.source);
            cited += 1;
        }
    }
    for a in &story.ancient[cited..] {
        let _ = writeln!(html, "<p class=\"ancient\">「{}」——《{}》</p>", a.text, a.source);
    }
    html.push_str("</section>\n");

    html.push_str("<section id=\"ai\">\n<h2>AI Metaphor</h2>\n<div class=\"ai-grid\">\n");
    for item in story.ai_items {
        let _ = writeln!(
            html,
            "<div class=\"ai-item\">\n<h3>{}</h3>\n<p>{}</p>\n</div>",
            item.title, item.body
        );
    }
    html.push_str("</div>\n</section>\n");

    html.push_str(&footer(story));
    html.push_str(PARTICLE_SCRIPT);
    html.push_str("<script src=\"tracker.js\"></script>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn style(story: &Story) -> String {
    let (g0, g1) = story.gradient;
    format!(
        r#"<style>
body {{
  background: #0a0a0f;
  color: #e8e8f0;
  font-family: "Noto Serif SC", "Songti SC", serif;
  margin: 0;
  line-height: 1.9;
}}
#particles {{
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  z-index: -1;
}}
header {{
  position: fixed;
  top: 0;
  width: 100%;
  backdrop-filter: blur(8px);
  background: rgba(10, 10, 15, 0.7);
  z-index: 10;
}}
nav {{
  display: flex;
  gap: 2rem;
  justify-content: center;
  padding: 1rem 0;
}}
nav a {{
  color: #b8b8c8;
  text-decoration: none;
}}
.hero {{
  text-align: center;
  padding: 9rem 1rem 2rem;
}}
.title-en {{
  letter-spacing: 0.5em;
  color: #8888a0;
  font-size: 0.9rem;
}}
.title-cn {{
  background: linear-gradient(135deg, {g0}, {g1});
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
  font-size: 3.2rem;
  margin: 0.4em 0;
}}
.era {{
  color: #707088;
}}
.hero-image {{
  max-width: 720px;
  margin: 2rem auto;
  text-align: center;
}}
.hero-image img {{
  max-width: 100%;
  border-radius: 8px;
}}
.quote {{
  max-width: 640px;
  margin: 3rem auto;
  text-align: center;
  color: #c0c0d4;
  font-style: italic;
}}
section {{
  max-width: 720px;
  margin: 0 auto 4rem;
  padding: 0 1.2rem;
}}
h2 {{
  letter-spacing: 0.3em;
  color: #9898b0;
  border-bottom: 1px solid #26263a;
  padding-bottom: 0.5rem;
}}
p.ancient {{
  color: #a89868;
  border-left: 3px solid #a89868;
  padding-left: 1rem;
  font-size: 0.95rem;
}}
.ai-grid {{
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.2rem;
}}
.ai-item {{
  background: rgba(255, 255, 255, 0.03);
  border: 1px solid #26263a;
  border-radius: 8px;
  padding: 1rem 1.2rem;
}}
.ai-item h3 {{
  margin-top: 0;
  color: {g0};
}}
footer {{
  border-top: 1px solid #26263a;
  padding: 2rem 1.2rem 4rem;
  text-align: center;
}}
footer a {{
  color: #b8b8c8;
  margin: 0 1rem;
  text-decoration: none;
}}
@media (max-width: 768px) {{
  .title-cn {{
    font-size: 2.2rem;
  }}
  .ai-grid {{
    grid-template-columns: 1fr;
  }}
}}
</style>
"#
    )
}

fn footer(story: &Story) -> String {
    let (prev, next) = neighbors(story.slug);
    let mut html = String::from("<footer>\n");
    if let Some(p) = prev {
        let _ = writeln!(
            html,
            "<a class=\"nav-prev\" href=\"{}.html\">← 上一个：{}</a>",
            p.slug, p.title
        );
    }
    if let Some(n) = next {
        let _ = writeln!(
            html,
            "<a class=\"nav-next\" href=\"{}.html\">下一个：{} →</a>",
            n.slug, n.title
        );
    }
    html.push_str("<a class=\"nav-home\" href=\"https://yuanchu.ai/myths\">回到首页</a>\n");
    html.push_str("</footer>\n");
    html
}

/// Shared particle background; 80 drifting dots on the page backdrop.
const PARTICLE_SCRIPT: &str = r#"<script>
const canvas = document.getElementById('particles');
const ctx = canvas.getContext('2d');
canvas.width = window.innerWidth;
canvas.height = window.innerHeight;

const particleCount = 80;
const particles = [];

class Particle {
  constructor() {
    this.reset();
  }
  reset() {
    this.x = Math.random() * canvas.width;
    this.y = Math.random() * canvas.height;
    this.vx = (Math.random() - 0.5) * 0.3;
    this.vy = (Math.random() - 0.5) * 0.3;
    this.r = Math.random() * 1.6 + 0.4;
    this.alpha = Math.random() * 0.5 + 0.1;
  }
  step() {
    this.x += this.vx;
    this.y += this.vy;
    if (this.x < 0 || this.x > canvas.width || this.y < 0 || this.y > canvas.height) {
      this.reset();
    }
  }
  draw() {
    ctx.beginPath();
    ctx.arc(this.x, this.y, this.r, 0, Math.PI * 2);
    ctx.fillStyle = 'rgba(232,232,240,' + this.alpha + ')';
    ctx.fill();
  }
}

for (let i = 0; i < particleCount; i++) {
  particles.push(new Particle());
}

function animate() {
  ctx.fillStyle = 'rgba(10,10,15,0.1)';
  ctx.fillRect(0, 0, canvas.width, canvas.height);
  for (const p of particles) {
    p.step();
    p.draw();
  }
  requestAnimationFrame(animate);
}
animate();

window.addEventListener('resize', () => {
  canvas.width = window.innerWidth;
  canvas.height = window.innerHeight;
});
</script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::myths::STORIES;

    #[test]
    fn page_carries_the_shared_skeleton() {
        let html = render(&STORIES[0]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"zh-CN\">"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert!(html.contains("<canvas id=\"particles\">"));
        assert!(html.contains("particleCount = 80"));
        assert!(html.contains("tracker.js"));
        assert!(html.contains("background: #0a0a0f;"));
        assert!(html.contains("-webkit-background-clip: text;"));
    }

    #[test]
    fn first_page_has_no_previous_link() {
        let html = render(&STORIES[0]);
        assert!(!html.contains("上一个"));
        assert!(html.contains("下一个：女娲造人"));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let html = render(&STORIES[STORIES.len() - 1]);
        assert!(html.contains("上一个：旱神女魃"));
        assert!(!html.contains("下一个"));
    }

    #[test]
    fn citation_counts_survive_interleaving() {
        for story in STORIES {
            let html = render(story);
            assert_eq!(
                html.matches("<p class=\"text\">").count(),
                story.text.len(),
                "{}",
                story.slug
            );
            assert_eq!(
                html.matches("<p class=\"ancient\">").count(),
                story.ancient.len(),
                "{}",
                story.slug
            );
            assert_eq!(
                html.matches("class=\"ai-item\"").count(),
                story.ai_items.len(),
                "{}",
                story.slug
            );
        }
    }
}
