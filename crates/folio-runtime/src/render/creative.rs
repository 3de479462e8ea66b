use super::html::{document, escape_html, initials, page_href};
use super::{RenderContext, Template};
use folio_types::StyleId;

/// Bold gradients and card layouts.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreativeTemplate;

impl Template for CreativeTemplate {
    fn style(&self) -> StyleId {
        StyleId::Creative
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let content = match ctx.page.id.as_str() {
            "home" => home(ctx),
            "about" => about(ctx),
            "experience" => experience(ctx),
            "projects" => projects(ctx),
            "skills" => skills(ctx),
            "contact" => contact(ctx),
            _ => format!(
                "<section class=\"card\"><h2>{}</h2></section>\n",
                escape_html(&ctx.page.name)
            ),
        };

        let body = format!(
            "{}<main>\n{}</main>\n{}",
            header(ctx),
            content,
            footer(ctx)
        );
        let title = format!("{} - {}", ctx.user.name, ctx.page.name);
        document(&title, &css(ctx), &body)
    }
}

fn css(ctx: &RenderContext<'_>) -> String {
    format!(
        ":root {{ --primary: {}; --secondary: {}; }}\n\
         body {{ margin: 0; font-family: 'Trebuchet MS', sans-serif; background: #0b0b12; color: #f9fafb; }}\n\
         header {{ padding: 24px 32px; background: linear-gradient(135deg, var(--primary), var(--secondary)); }}\n\
         header .logo {{ font-size: 1.6em; font-weight: 800; letter-spacing: -1px; }}\n\
         nav {{ margin-top: 12px; display: flex; flex-wrap: wrap; gap: 8px; }}\n\
         nav a {{ padding: 6px 14px; border-radius: 999px; color: #fff; text-decoration: none; \
         background: rgba(255,255,255,0.15); }}\n\
         nav a.current {{ background: #fff; color: var(--primary); }}\n\
         main {{ padding: 40px 32px; display: grid; gap: 24px; }}\n\
         .card {{ background: #161622; border-radius: 20px; padding: 28px; \
         border-top: 4px solid var(--secondary); }}\n\
         .hero {{ min-height: 240px; background-size: cover; background-position: center; }}\n\
         .avatar {{ width: 96px; height: 96px; border-radius: 50%; display: grid; place-items: center; \
         background: var(--primary); font-size: 2em; font-weight: 800; }}\n\
         .chip {{ display: inline-block; padding: 4px 12px; margin: 4px; border-radius: 999px; \
         background: var(--secondary); color: #fff; }}\n\
         .grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px; }}\n\
         footer {{ padding: 24px 32px; text-align: right; opacity: 0.6; }}\n",
        ctx.primary, ctx.secondary
    )
}

fn header(ctx: &RenderContext<'_>) -> String {
    let links: String = ctx
        .nav
        .iter()
        .map(|page| {
            format!(
                "<a href=\"{}\"{}>{}</a>",
                page_href(&page.id),
                if ctx.is_current(page) { " class=\"current\"" } else { "" },
                escape_html(&page.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<header>\n<div class=\"logo\">{}</div>\n<nav>\n{}\n</nav>\n</header>\n",
        escape_html(&ctx.user.name),
        links
    )
}

fn footer(ctx: &RenderContext<'_>) -> String {
    format!(
        "<footer>Made with color by {} &middot; {}</footer>\n",
        escape_html(&ctx.user.name),
        ctx.year
    )
}

fn avatar(ctx: &RenderContext<'_>) -> String {
    if ctx.user.profile_image.is_empty() {
        format!(
            "<div class=\"avatar\">{}</div>\n",
            escape_html(&initials(&ctx.user.name))
        )
    } else {
        format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"{}\">\n",
            escape_html(&ctx.user.profile_image),
            escape_html(&ctx.user.name)
        )
    }
}

fn chips(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"chip\">{}</span>", escape_html(item)))
        .collect()
}

fn home(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    if ctx.section_enabled("hero") {
        let background = if ctx.user.background_image.is_empty() {
            String::new()
        } else {
            format!(
                " style=\"background-image: url('{}')\"",
                escape_html(&ctx.user.background_image)
            )
        };
        out.push_str(&format!("<section class=\"card hero\"{}>\n", background));
        out.push_str(&avatar(ctx));
        out.push_str(&format!(
            "<h1>Hi, I'm {}</h1>\n<h2>{}</h2>\n</section>\n",
            escape_html(&ctx.user.name),
            escape_html(&ctx.user.title)
        ));
    }
    if ctx.section_enabled("featured-projects") {
        out.push_str("<section class=\"grid\">\n");
        for project in ctx.user.projects.iter().take(3) {
            out.push_str(&format!(
                "<article class=\"card\"><h3>{}</h3><p>{}</p></article>\n",
                escape_html(&project.title),
                escape_html(&project.description)
            ));
        }
        out.push_str("</section>\n");
    }
    out
}

fn about(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    if ctx.section_enabled("bio") {
        out.push_str("<section class=\"card\">\n");
        out.push_str(&avatar(ctx));
        out.push_str(&format!(
            "<h2>{}</h2>\n<p>{}</p>\n</section>\n",
            escape_html(&ctx.user.name),
            escape_html(&ctx.user.bio)
        ));
    }
    if ctx.section_enabled("social-links") {
        let links = ctx.user.social_links.entries();
        if !links.is_empty() {
            out.push_str("<section class=\"card\">\n<h2>Find me online</h2>\n");
            for (label, url) in links {
                out.push_str(&format!(
                    "<a class=\"chip\" href=\"{}\">{}</a>\n",
                    escape_html(url),
                    label
                ));
            }
            out.push_str("</section>\n");
        }
    }
    out
}

fn experience(ctx: &RenderContext<'_>) -> String {
    if !ctx.section_enabled("timeline") {
        return String::new();
    }
    let mut out = String::from("<section class=\"grid\">\n");
    for entry in &ctx.user.experience {
        out.push_str(&format!(
            "<article class=\"card\">\n<span class=\"chip\">{}</span>\n<h3>{}</h3>\n<h4>{}</h4>\n<p>{}</p>\n</article>\n",
            escape_html(&entry.period),
            escape_html(&entry.position),
            escape_html(&entry.company),
            escape_html(&entry.description)
        ));
    }
    out.push_str("</section>\n");
    out
}

fn projects(ctx: &RenderContext<'_>) -> String {
    if !ctx.section_enabled("project-grid") {
        return String::new();
    }
    let mut out = String::from("<section class=\"grid\">\n");
    for project in &ctx.user.projects {
        out.push_str("<article class=\"card project\">\n");
        if !project.image.is_empty() {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                escape_html(&project.image),
                escape_html(&project.title)
            ));
        }
        out.push_str(&format!(
            "<h3>{}</h3>\n<p>{}</p>\n<div>{}</div>\n</article>\n",
            escape_html(&project.title),
            escape_html(&project.description),
            chips(&project.tags)
        ));
    }
    out.push_str("</section>\n");
    out
}

fn skills(ctx: &RenderContext<'_>) -> String {
    if !ctx.section_enabled("skill-list") {
        return String::new();
    }
    format!(
        "<section class=\"card\">\n<h2>What I work with</h2>\n<div>{}</div>\n</section>\n",
        chips(&ctx.user.skills)
    )
}

fn contact(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    if ctx.section_enabled("contact-details") {
        out.push_str(&format!(
            "<section class=\"card\">\n<h2>Let's talk</h2>\n<p><a href=\"mailto:{0}\">{0}</a></p>\n<p>{1}</p>\n</section>\n",
            escape_html(&ctx.user.email),
            escape_html(&ctx.user.phone)
        ));
    }
    if ctx.section_enabled("contact-form") {
        out.push_str(
            "<section class=\"card\">\n<form>\n<input name=\"name\" placeholder=\"Your name\">\n\
             <input name=\"email\" placeholder=\"Your email\">\n\
             <textarea name=\"message\" placeholder=\"Say hello\"></textarea>\n\
             <button type=\"button\">Send it</button>\n</form>\n</section>\n",
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{UserDetails, default_pages, default_sections, toggle_section};

    #[test]
    fn test_background_image_only_when_set() {
        let pages = default_pages();
        let sections = default_sections();
        let mut user = UserDetails::sample();
        let ctx = |user: &UserDetails| {
            CreativeTemplate.render(&RenderContext {
                page: &pages[0],
                nav: &pages,
                sections: folio_types::sections_for_page(&sections, "home"),
                user,
                primary: "#f97316",
                secondary: "#db2777",
                year: 2026,
            })
        };
        assert!(!ctx(&user).contains("background-image: url("));

        user.background_image = "data:image/png;base64,AAAA".to_string();
        assert!(ctx(&user).contains("background-image: url('data:image/png;base64,AAAA')"));
    }

    #[test]
    fn test_disabled_section_is_omitted() {
        let pages = default_pages();
        let sections = toggle_section(&default_sections(), "skill-list").unwrap();
        let user = UserDetails::sample();
        let skills_page = pages.iter().find(|p| p.id == "skills").unwrap();
        let html = CreativeTemplate.render(&RenderContext {
            page: skills_page,
            nav: &pages,
            sections: folio_types::sections_for_page(&sections, "skills"),
            user: &user,
            primary: "#f97316",
            secondary: "#db2777",
            year: 2026,
        });
        assert!(!html.contains("What I work with"));
        assert!(html.contains("Alex Morgan"));
    }
}
