use super::html::{document, escape_html, initials, page_href};
use super::{RenderContext, Template};
use folio_types::StyleId;

/// Structured sidebar layout with a sober palette.
#[derive(Debug, Default, Clone, Copy)]
pub struct CorporateTemplate;

impl Template for CorporateTemplate {
    fn style(&self) -> StyleId {
        StyleId::Corporate
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut body = String::from("<div class=\"layout\">\n");
        body.push_str(&sidebar(ctx));
        body.push_str("<div class=\"content\">\n");
        body.push_str(&format!(
            "<div class=\"page-title\"><h1>{}</h1></div>\n",
            escape_html(&ctx.page.name)
        ));
        body.push_str(&match ctx.page.id.as_str() {
            "home" => home(ctx),
            "about" => about(ctx),
            "experience" => experience(ctx),
            "projects" => projects(ctx),
            "skills" => skills(ctx),
            "contact" => contact(ctx),
            _ => String::new(),
        });
        body.push_str(&footer(ctx));
        body.push_str("</div>\n</div>\n");

        let title = format!("{} | {}", ctx.user.name, ctx.user.title);
        document(&title, &css(ctx), &body)
    }
}

fn css(ctx: &RenderContext<'_>) -> String {
    format!(
        ":root {{ --primary: {}; --secondary: {}; }}\n\
         body {{ margin: 0; font-family: Helvetica, Arial, sans-serif; background: #f3f4f6; color: #111827; }}\n\
         .layout {{ display: flex; min-height: 100vh; }}\n\
         aside {{ width: 260px; background: var(--primary); color: #fff; padding: 32px 20px; }}\n\
         aside .profile {{ text-align: center; margin-bottom: 32px; }}\n\
         aside .badge {{ width: 72px; height: 72px; margin: 0 auto 12px; border-radius: 8px; \
         background: var(--secondary); display: flex; align-items: center; justify-content: center; \
         font-weight: bold; font-size: 1.4em; }}\n\
         aside nav a {{ display: block; padding: 10px 12px; color: #e5e7eb; text-decoration: none; \
         border-left: 3px solid transparent; }}\n\
         aside nav a[aria-current] {{ border-left-color: var(--secondary); color: #fff; \
         background: rgba(255,255,255,0.08); }}\n\
         .content {{ flex: 1; padding: 40px 48px; }}\n\
         .page-title h1 {{ margin-top: 0; color: var(--primary); border-bottom: 2px solid var(--secondary); \
         padding-bottom: 8px; }}\n\
         .panel {{ background: #fff; border: 1px solid #e5e7eb; border-radius: 4px; padding: 24px; \
         margin-bottom: 24px; }}\n\
         table {{ width: 100%; border-collapse: collapse; }}\n\
         td, th {{ text-align: left; padding: 8px; border-bottom: 1px solid #e5e7eb; }}\n\
         footer {{ margin-top: 48px; font-size: 0.8em; color: #6b7280; }}\n",
        ctx.primary, ctx.secondary
    )
}

fn sidebar(ctx: &RenderContext<'_>) -> String {
    let mut out = String::from("<aside>\n<div class=\"profile\">\n");
    if ctx.user.profile_image.is_empty() {
        out.push_str(&format!(
            "<div class=\"badge\">{}</div>\n",
            escape_html(&initials(&ctx.user.name))
        ));
    } else {
        out.push_str(&format!(
            "<img class=\"badge\" src=\"{}\" alt=\"{}\">\n",
            escape_html(&ctx.user.profile_image),
            escape_html(&ctx.user.name)
        ));
    }
    out.push_str(&format!(
        "<strong>{}</strong><br><small>{}</small>\n</div>\n<nav>\n",
        escape_html(&ctx.user.name),
        escape_html(&ctx.user.title)
    ));
    for page in ctx.nav {
        let current = if ctx.is_current(page) { " aria-current=\"page\"" } else { "" };
        out.push_str(&format!(
            "<a href=\"{}\"{}>{}</a>\n",
            page_href(&page.id),
            current,
            escape_html(&page.name)
        ));
    }
    out.push_str("</nav>\n</aside>\n");
    out
}

fn footer(ctx: &RenderContext<'_>) -> String {
    format!(
        "<footer>&copy; {} {}. All rights reserved.</footer>\n",
        ctx.year,
        escape_html(&ctx.user.name)
    )
}

fn home(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    if ctx.section_enabled("hero") {
        out.push_str(&format!(
            "<div class=\"panel\">\n<h2>{}</h2>\n<p>{}</p>\n<p>{}</p>\n</div>\n",
            escape_html(&ctx.user.title),
            escape_html(&ctx.user.bio),
            escape_html(&ctx.user.email)
        ));
    }
    if ctx.section_enabled("featured-projects") && !ctx.user.projects.is_empty() {
        out.push_str("<div class=\"panel\">\n<h2>Key projects</h2>\n<table>\n");
        for project in ctx.user.projects.iter().take(3) {
            out.push_str(&format!(
                "<tr><th>{}</th><td>{}</td></tr>\n",
                escape_html(&project.title),
                escape_html(&project.description)
            ));
        }
        out.push_str("</table>\n</div>\n");
    }
    out
}

fn about(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    if ctx.section_enabled("bio") {
        out.push_str(&format!(
            "<div class=\"panel\">\n<h2>Profile</h2>\n<p>{}</p>\n</div>\n",
            escape_html(&ctx.user.bio)
        ));
    }
    if ctx.section_enabled("social-links") {
        let links = ctx.user.social_links.entries();
        if !links.is_empty() {
            out.push_str("<div class=\"panel\">\n<h2>Professional networks</h2>\n<table>\n");
            for (label, url) in links {
                out.push_str(&format!(
                    "<tr><th>{}</th><td><a href=\"{1}\">{1}</a></td></tr>\n",
                    label,
                    escape_html(url)
                ));
            }
            out.push_str("</table>\n</div>\n");
        }
    }
    out
}

fn experience(ctx: &RenderContext<'_>) -> String {
    if !ctx.section_enabled("timeline") {
        return String::new();
    }
    let mut out = String::from(
        "<div class=\"panel\">\n<table>\n<tr><th>Period</th><th>Role</th><th>Company</th></tr>\n",
    );
    for entry in &ctx.user.experience {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}<br><small>{}</small></td><td>{}</td></tr>\n",
            escape_html(&entry.period),
            escape_html(&entry.position),
            escape_html(&entry.description),
            escape_html(&entry.company)
        ));
    }
    out.push_str("</table>\n</div>\n");
    out
}

fn projects(ctx: &RenderContext<'_>) -> String {
    if !ctx.section_enabled("project-grid") {
        return String::new();
    }
    let mut out = String::new();
    for project in &ctx.user.projects {
        out.push_str("<div class=\"panel project\">\n");
        if !project.image.is_empty() {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" style=\"max-width: 100%\">\n",
                escape_html(&project.image),
                escape_html(&project.title)
            ));
        }
        out.push_str(&format!(
            "<h2>{}</h2>\n<p>{}</p>\n",
            escape_html(&project.title),
            escape_html(&project.description)
        ));
        if !project.tags.is_empty() {
            let tags: Vec<String> = project.tags.iter().map(|t| escape_html(t)).collect();
            out.push_str(&format!("<p><small>{}</small></p>\n", tags.join(" / ")));
        }
        out.push_str("</div>\n");
    }
    out
}

fn skills(ctx: &RenderContext<'_>) -> String {
    if !ctx.section_enabled("skill-list") {
        return String::new();
    }
    let mut out = String::from("<div class=\"panel\">\n<h2>Core competencies</h2>\n<table>\n");
    for (index, skill) in ctx.user.skills.iter().enumerate() {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            index + 1,
            escape_html(skill)
        ));
    }
    out.push_str("</table>\n</div>\n");
    out
}

fn contact(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    if ctx.section_enabled("contact-details") {
        out.push_str(&format!(
            "<div class=\"panel\">\n<table>\n\
             <tr><th>Email</th><td><a href=\"mailto:{0}\">{0}</a></td></tr>\n\
             <tr><th>Phone</th><td>{1}</td></tr>\n</table>\n</div>\n",
            escape_html(&ctx.user.email),
            escape_html(&ctx.user.phone)
        ));
    }
    if ctx.section_enabled("contact-form") {
        out.push_str(
            "<div class=\"panel\">\n<h2>Send an inquiry</h2>\n<form>\n\
             <p><input name=\"name\" placeholder=\"Full name\"></p>\n\
             <p><input name=\"company\" placeholder=\"Company\"></p>\n\
             <p><input name=\"email\" placeholder=\"Email\"></p>\n\
             <p><textarea name=\"message\" placeholder=\"Message\"></textarea></p>\n\
             <button type=\"button\">Submit</button>\n</form>\n</div>\n",
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{UserDetails, default_pages, default_sections, sections_for_page};

    #[test]
    fn test_sidebar_marks_current_page() {
        let pages = default_pages();
        let sections = default_sections();
        let user = UserDetails::sample();
        let html = CorporateTemplate.render(&RenderContext {
            page: &pages[2],
            nav: &pages,
            sections: sections_for_page(&sections, &pages[2].id),
            user: &user,
            primary: "#0f172a",
            secondary: "#2563eb",
            year: 2026,
        });
        assert!(html.contains("href=\"/portfolio/experience\" aria-current=\"page\""));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("Tech Solutions Inc."));
    }
}
