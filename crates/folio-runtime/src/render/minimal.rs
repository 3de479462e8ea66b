use super::html::{document, escape_html, initials, page_href};
use super::{RenderContext, Template};
use folio_types::StyleId;

/// Clean typography, lots of whitespace, a single accent color.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimalTemplate;

impl Template for MinimalTemplate {
    fn style(&self) -> StyleId {
        StyleId::Minimal
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut body = String::new();
        body.push_str(&header(ctx));
        body.push_str("<main class=\"container\">\n");
        let content = match ctx.page.id.as_str() {
            "home" => home(ctx),
            "about" => about(ctx),
            "experience" => experience(ctx),
            "projects" => projects(ctx),
            "skills" => skills(ctx),
            "contact" => contact(ctx),
            _ => generic(ctx),
        };
        body.push_str(&content);
        body.push_str("</main>\n");
        body.push_str(&footer(ctx));

        let title = format!("{} | {}", ctx.page.name, ctx.user.name);
        document(&title, &css(ctx), &body)
    }
}

fn css(ctx: &RenderContext<'_>) -> String {
    format!(
        ":root {{ --primary: {}; --secondary: {}; }}\n\
         body {{ margin: 0; font-family: Georgia, serif; color: #1f2937; background: #ffffff; }}\n\
         .container {{ max-width: 720px; margin: 0 auto; padding: 48px 24px; }}\n\
         header {{ display: flex; justify-content: space-between; align-items: baseline; \
         max-width: 720px; margin: 0 auto; padding: 24px; border-bottom: 1px solid #e5e7eb; }}\n\
         header .brand {{ font-weight: bold; color: var(--primary); text-decoration: none; }}\n\
         nav a {{ margin-left: 16px; color: var(--secondary); text-decoration: none; }}\n\
         nav a.active {{ color: var(--primary); border-bottom: 1px solid var(--primary); }}\n\
         h1, h2 {{ color: var(--primary); font-weight: normal; }}\n\
         .muted {{ color: var(--secondary); }}\n\
         .entry {{ margin-bottom: 32px; }}\n\
         .tags span {{ margin-right: 8px; font-size: 0.85em; color: var(--secondary); }}\n\
         footer {{ text-align: center; padding: 32px; color: #9ca3af; font-size: 0.85em; }}\n",
        ctx.primary, ctx.secondary
    )
}

fn header(ctx: &RenderContext<'_>) -> String {
    let mut out = String::from("<header>\n");
    out.push_str(&format!(
        "<a class=\"brand\" href=\"{}\">{}</a>\n<nav>\n",
        ctx.nav
            .first()
            .map(|page| page_href(&page.id))
            .unwrap_or_else(|| "/".to_string()),
        escape_html(&ctx.user.name)
    ));
    for page in ctx.nav {
        let class = if ctx.is_current(page) { " class=\"active\"" } else { "" };
        out.push_str(&format!(
            "<a href=\"{}\"{}>{}</a>\n",
            page_href(&page.id),
            class,
            escape_html(&page.name)
        ));
    }
    out.push_str("</nav>\n</header>\n");
    out
}

fn footer(ctx: &RenderContext<'_>) -> String {
    format!(
        "<footer>&copy; {} {}</footer>\n",
        ctx.year,
        escape_html(&ctx.user.name)
    )
}

fn home(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    if ctx.section_enabled("hero") {
        out.push_str("<section class=\"hero\">\n");
        if ctx.user.profile_image.is_empty() {
            out.push_str(&format!(
                "<p class=\"muted\">{}</p>\n",
                escape_html(&initials(&ctx.user.name))
            ));
        } else {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" width=\"96\">\n",
                escape_html(&ctx.user.profile_image),
                escape_html(&ctx.user.name)
            ));
        }
        out.push_str(&format!(
            "<h1>{}</h1>\n<p class=\"muted\">{}</p>\n<p>{}</p>\n</section>\n",
            escape_html(&ctx.user.name),
            escape_html(&ctx.user.title),
            escape_html(&ctx.user.bio)
        ));
    }
    if ctx.section_enabled("featured-projects") && !ctx.user.projects.is_empty() {
        out.push_str("<section>\n<h2>Selected work</h2>\n<ul>\n");
        for project in ctx.user.projects.iter().take(2) {
            out.push_str(&format!(
                "<li><strong>{}</strong> <span class=\"muted\">{}</span></li>\n",
                escape_html(&project.title),
                escape_html(&project.description)
            ));
        }
        out.push_str("</ul>\n</section>\n");
    }
    out
}

fn about(ctx: &RenderContext<'_>) -> String {
    let mut out = format!("<h1>About {}</h1>\n", escape_html(&ctx.user.name));
    if ctx.section_enabled("bio") {
        out.push_str(&format!(
            "<p class=\"muted\">{}</p>\n<p>{}</p>\n",
            escape_html(&ctx.user.title),
            escape_html(&ctx.user.bio)
        ));
    }
    if ctx.section_enabled("social-links") {
        let links = ctx.user.social_links.entries();
        if !links.is_empty() {
            out.push_str("<p>\n");
            for (label, url) in links {
                out.push_str(&format!(
                    "<a href=\"{}\">{}</a>\n",
                    escape_html(url),
                    label
                ));
            }
            out.push_str("</p>\n");
        }
    }
    out
}

fn experience(ctx: &RenderContext<'_>) -> String {
    let mut out = String::from("<h1>Experience</h1>\n");
    if ctx.section_enabled("timeline") {
        for entry in &ctx.user.experience {
            out.push_str(&format!(
                "<div class=\"entry\">\n<h2>{}</h2>\n<p class=\"muted\">{} &middot; {}</p>\n<p>{}</p>\n</div>\n",
                escape_html(&entry.position),
                escape_html(&entry.company),
                escape_html(&entry.period),
                escape_html(&entry.description)
            ));
        }
    }
    out
}

fn projects(ctx: &RenderContext<'_>) -> String {
    let mut out = String::from("<h1>Projects</h1>\n");
    if ctx.section_enabled("project-grid") {
        for project in &ctx.user.projects {
            out.push_str("<div class=\"entry project\">\n");
            if !project.image.is_empty() {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" width=\"100%\">\n",
                    escape_html(&project.image),
                    escape_html(&project.title)
                ));
            }
            out.push_str(&format!(
                "<h2>{}</h2>\n<p>{}</p>\n<p class=\"tags\">",
                escape_html(&project.title),
                escape_html(&project.description)
            ));
            for tag in &project.tags {
                out.push_str(&format!("<span>{}</span>", escape_html(tag)));
            }
            out.push_str("</p>\n</div>\n");
        }
    }
    out
}

fn skills(ctx: &RenderContext<'_>) -> String {
    let mut out = String::from("<h1>Skills</h1>\n");
    if ctx.section_enabled("skill-list") {
        out.push_str("<ul>\n");
        for skill in &ctx.user.skills {
            out.push_str(&format!("<li>{}</li>\n", escape_html(skill)));
        }
        out.push_str("</ul>\n");
    }
    out
}

fn contact(ctx: &RenderContext<'_>) -> String {
    let mut out = String::from("<h1>Contact</h1>\n");
    if ctx.section_enabled("contact-details") {
        out.push_str(&format!(
            "<p><a href=\"mailto:{0}\">{0}</a></p>\n<p>{1}</p>\n",
            escape_html(&ctx.user.email),
            escape_html(&ctx.user.phone)
        ));
    }
    if ctx.section_enabled("contact-form") {
        out.push_str(
            "<form>\n<p><input name=\"name\" placeholder=\"Name\"></p>\n\
             <p><input name=\"email\" placeholder=\"Email\"></p>\n\
             <p><textarea name=\"message\" placeholder=\"Message\"></textarea></p>\n\
             <button type=\"button\">Send</button>\n</form>\n",
        );
    }
    out
}

fn generic(ctx: &RenderContext<'_>) -> String {
    format!(
        "<h1>{}</h1>\n<p class=\"muted\">{}</p>\n",
        escape_html(&ctx.page.name),
        escape_html(&ctx.user.title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{UserDetails, default_pages, default_sections, sections_for_page};

    fn render_page(page_id: &str, user: &UserDetails) -> String {
        let pages = default_pages();
        let sections = default_sections();
        let page = pages.iter().find(|p| p.id == page_id).unwrap();
        let ctx = RenderContext {
            page,
            nav: &pages,
            sections: sections_for_page(&sections, page_id),
            user,
            primary: "#111827",
            secondary: "#6b7280",
            year: 2026,
        };
        MinimalTemplate.render(&ctx)
    }

    #[test]
    fn test_projects_in_stored_order() {
        let user = UserDetails::sample();
        let html = render_page("projects", &user);
        let first = html.find("E-commerce Platform").unwrap();
        let second = html.find("Task Manager").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("class=\"entry project\"").count(), 2);
    }

    #[test]
    fn test_initials_without_profile_image() {
        let user = UserDetails::sample();
        let html = render_page("home", &user);
        assert!(html.contains(">AM<"));
    }

    #[test]
    fn test_active_nav_link() {
        let user = UserDetails::sample();
        let html = render_page("skills", &user);
        assert!(html.contains("href=\"/portfolio/skills\" class=\"active\""));
        assert!(!html.contains("href=\"/portfolio/home\" class=\"active\""));
    }
}
