//! Page rendering.
//!
//! Turns a [`Page`] plus the parsed content into HTML with
//! [maud](https://maud.lambda.xyz/). Every page is a `main` element; the
//! shared header and footer are added by [`render_shell`], and
//! [`render_document`] wraps a single page into a standalone document.
//!
//! Renderers never fail. Unknown slugs render a not-found card, empty
//! fields render nothing, and a missing CSV preview renders a notice.

use crate::catalog::{BlogEntry, Catalog, ProjectEntry};
use crate::config::PortfolioConfig;
use crate::content::{self, ExperienceRecord};
use crate::preview::PreviewState;
use crate::router::Page;
use crate::settings::Settings;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, Tag, TagEnd, html as md_html};
use std::collections::BTreeMap;

/// Everything a page needs, borrowed from the application root.
pub struct RenderContext<'a> {
    pub settings: &'a Settings,
    pub config: &'a PortfolioConfig,
    pub projects: &'a Catalog<ProjectEntry>,
    pub blogs: &'a Catalog<BlogEntry>,
    /// Loaded previews keyed by asset path. Absent keys render as missing.
    pub previews: &'a BTreeMap<String, PreviewState>,
    /// Year printed in the footer.
    pub year: i32,
}

/// Top-level navigation, in header order.
const NAV_LINKS: [(&str, Page); 4] = [
    ("About", Page::About),
    ("Resume", Page::Resume),
    ("Projects", Page::Projects),
    ("Blogs", Page::Blogs { open: None }),
];

/// Convert Markdown to HTML.
///
/// An image alone in its paragraph becomes a zoomable `figure`, with the
/// image title (`![alt](src "caption")`) as its caption.
pub fn markdown(source: &str) -> Markup {
    let events: Vec<Event<'_>> = Parser::new(source).collect();
    let mut out = String::new();
    md_html::push_html(&mut out, with_figures(events).into_iter());
    PreEscaped(out)
}

fn with_figures(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut i = 0;
    while i < events.len() {
        match standalone_image(&events[i..]) {
            Some((figure, consumed)) => {
                out.push(Event::Html(figure.into_string().into()));
                i += consumed;
            }
            None => {
                out.push(events[i].clone());
                i += 1;
            }
        }
    }
    out
}

/// Match `<p><img></p>` at the start of `events`, returning the figure and
/// how many events it replaces.
fn standalone_image(events: &[Event<'_>]) -> Option<(Markup, usize)> {
    let [
        Event::Start(Tag::Paragraph),
        Event::Start(Tag::Image {
            dest_url, title, ..
        }),
        rest @ ..,
    ] = events
    else {
        return None;
    };
    let end = rest
        .iter()
        .position(|e| matches!(e, Event::End(TagEnd::Image)))?;
    if !matches!(rest.get(end + 1), Some(Event::End(TagEnd::Paragraph))) {
        return None;
    }
    let alt: String = rest[..end]
        .iter()
        .filter_map(|e| match e {
            Event::Text(text) | Event::Code(text) => Some(&**text),
            _ => None,
        })
        .collect();
    let figure = html! {
        figure class="result-figure" {
            img class="zoomable" src=(&**dest_url) alt=(alt);
            @if !title.is_empty() {
                figcaption { (&**title) }
            }
        }
    };
    Some((figure, end + 4))
}

// ============================================================================
// Shell
// ============================================================================

/// Wrap a single page into a complete HTML document.
pub fn render_document(page: &Page, ctx: &RenderContext<'_>, css: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_title(page, ctx)) }
                style { (PreEscaped(css)) }
            }
            body {
                (render_shell(page, ctx, render_page(page, ctx)))
            }
        }
    }
}

/// Header, page content, footer.
pub fn render_shell(page: &Page, ctx: &RenderContext<'_>, content: Markup) -> Markup {
    html! {
        div.paper {
            (site_header(page, ctx))
            (content)
            (site_footer(ctx))
        }
    }
}

/// Marks the nav link for the section a page belongs to.
fn is_section(link: &Page, page: &Page) -> bool {
    match (link, page) {
        (Page::Projects, Page::ProjectDetail { .. }) => true,
        (Page::Blogs { .. }, Page::Blogs { .. }) => true,
        _ => link == page,
    }
}

fn site_header(page: &Page, ctx: &RenderContext<'_>) -> Markup {
    html! {
        header.site-header {
            div.site-header-inner {
                a.brand href="#/" { (ctx.config.site.brand) }
                nav.site-nav {
                    @for (label, link) in &NAV_LINKS {
                        a href=(link.href()) class=[is_section(link, page).then_some("current")] {
                            (label)
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(ctx: &RenderContext<'_>) -> Markup {
    html! {
        footer.site-footer {
            div.site-footer-inner {
                "© " (ctx.year) " " (ctx.config.site.owner) " • Portfolio"
            }
        }
    }
}

/// `<title>` text for a page.
pub fn page_title(page: &Page, ctx: &RenderContext<'_>) -> String {
    let name = &ctx.settings.name;
    match page {
        Page::About => name.clone(),
        Page::Resume => format!("Resume · {name}"),
        Page::Projects => format!("Projects · {name}"),
        Page::ProjectDetail { slug } => match ctx.projects.find(slug) {
            Some(project) => format!("{} · {name}", project.label),
            None => format!("Project not found · {name}"),
        },
        Page::Blogs { open } => match open.as_deref().and_then(|s| ctx.blogs.find(s)) {
            Some(blog) => format!("{} · {name}", blog.title),
            None => format!("Blogs · {name}"),
        },
        Page::NotFound => format!("Page not found · {name}"),
    }
}

// ============================================================================
// Shared components
// ============================================================================

fn section_title(icon: &str, label: &str) -> Markup {
    html! {
        div.section-title {
            span.section-icon { (icon) }
            span.section-label { (label) }
        }
    }
}

fn chip_list(items: &[String]) -> Markup {
    html! {
        div.chips {
            @for item in items {
                span.chip { (item) }
            }
        }
    }
}

fn rule() -> Markup {
    html! { div.rule {} }
}

// ============================================================================
// Pages
// ============================================================================

/// Render the `main` element for a page.
pub fn render_page(page: &Page, ctx: &RenderContext<'_>) -> Markup {
    match page {
        Page::About => render_about(ctx.settings),
        Page::Resume => render_resume(ctx.settings),
        Page::Projects => render_projects(ctx.projects),
        Page::ProjectDetail { slug } => render_project_detail(slug, ctx),
        Page::Blogs { open } => render_blogs(ctx.blogs, open.as_deref()),
        Page::NotFound => render_not_found(),
    }
}

fn render_about(settings: &Settings) -> Markup {
    let degrees = content::split_list(&settings.degrees, ';');
    let focus = content::split_list(&settings.experiences, ',');

    html! {
        main.page.about-page {
            div.about-intro {
                h1.display-name { (settings.name) }
                div.tagline-pill {
                    span.dot {}
                    (settings.tagline)
                    span.dot {}
                }
            }
            blockquote.hero-quote {
                span.quote-mark { "“" }
                div.hero-statement { (settings.hero_statement) }
            }
            div.about-grid {
                div.about-left {
                    (section_title("🎓", "Education"))
                    div.card.card-past {
                        ul.timeline {
                            @for degree in &degrees {
                                li { (degree) }
                            }
                        }
                    }
                    (section_title("💼", "Experience Focus"))
                    div.card.card-note {
                        div.focus-grid {
                            @for area in &focus {
                                span.chip { (area) }
                            }
                        }
                    }
                }
                div.about-right {
                    div.photo-frame {
                        @if settings.headshot_url.is_empty() {
                            div.photo-placeholder {
                                div.placeholder-title { "Your Photo Here" }
                                p { "Set headshotUrl in the settings store. Suggested: 900×1200px." }
                            }
                        } @else {
                            img src=(settings.headshot_url) alt=(settings.name);
                        }
                    }
                    @if !settings.bio_tagline.is_empty() {
                        div.bio-tagline { (settings.bio_tagline) }
                    }
                }
            }
        }
    }
}

fn experience_card(item: &ExperienceRecord, side: &str) -> Markup {
    html! {
        div class={ "arrow-card arrow-" (side) } {
            div.card.card-gold {
                div.experience-title { (item.title) }
                @if !item.body.is_empty() {
                    div.experience-body { (item.body) }
                }
            }
        }
    }
}

fn render_resume(settings: &Settings) -> Markup {
    let experience = content::parse_experience_lines(&settings.resume_lines);
    let projects = content::parse_project_lines(&settings.past_project_lines);
    let publications = content::parse_publication_lines(&settings.publication_lines);
    let skills = content::split_list(&settings.skills, ',');
    let categories = content::parse_skill_categories(&settings.skills_by_category);

    html! {
        main.page.resume-page {
            section.experience {
                (section_title("💼", "Experience"))
                ul.experience-timeline {
                    @for (idx, item) in experience.iter().enumerate() {
                        @let left_side = idx % 2 != 0;
                        li.experience-row {
                            div.experience-left {
                                @if left_side { (experience_card(item, "left")) }
                            }
                            div.experience-date {
                                span.date-badge { (item.dates) }
                            }
                            div.experience-right {
                                @if !left_side { (experience_card(item, "right")) }
                            }
                        }
                    }
                }
            }
            (rule())
            section.past-projects {
                (section_title("∎", "Past Projects"))
                ul.project-grid {
                    @for project in &projects {
                        li {
                            div.card.card-project {
                                div.project-name { (project.name) }
                                p.project-desc { (project.desc) }
                                @if !project.url.is_empty() {
                                    a.external href=(project.url) target="_blank" rel="noreferrer" { "View" }
                                }
                            }
                        }
                    }
                }
            }
            (rule())
            section.publications {
                (section_title("¶", "Publications"))
                ul.publication-list {
                    @for publication in &publications {
                        li {
                            div.scroll-paper {
                                div.publication-title { (publication.title) }
                                @if !publication.url.is_empty() {
                                    a.external href=(publication.url) target="_blank" rel="noreferrer" { "Link" }
                                }
                            }
                        }
                    }
                }
            }
            (rule())
            section.skills {
                (section_title("★", "Skills"))
                div.card.card-note {
                    (chip_list(&skills))
                }
                @if !categories.is_empty() {
                    div.skill-categories {
                        @for category in &categories {
                            div.skill-category {
                                @if !category.name.is_empty() {
                                    div.skill-category-name { (category.name) }
                                }
                                (chip_list(&category.skills))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_projects(projects: &Catalog<ProjectEntry>) -> Markup {
    html! {
        main.page.projects-page {
            h2.page-heading { "Projects" }
            ul.gallery {
                @for project in projects.entries() {
                    @let link = Page::ProjectDetail { slug: project.slug.to_string() };
                    li {
                        a.gallery-card href=(link.href()) {
                            div.gallery-label { (project.label) }
                            @if !project.subtitle.is_empty() {
                                div.gallery-subtitle { (project.subtitle) }
                            }
                            div.gallery-arrow { "→" }
                        }
                    }
                }
            }
        }
    }
}

fn render_preview(title: &str, src: &str, state: &PreviewState) -> Markup {
    html! {
        @match state {
            PreviewState::Missing => {
                div.preview.preview-missing {
                    div.preview-title { (title) }
                    div.preview-notice {
                        "Preview not found. Ensure the CSV exists at " code { (src) } "."
                    }
                }
            }
            PreviewState::Empty => {}
            PreviewState::Table { columns, rows } => {
                div.preview {
                    div.preview-title { (title) }
                    table {
                        thead {
                            tr {
                                @for column in columns { th { (column) } }
                            }
                        }
                        tbody {
                            @for row in rows {
                                tr {
                                    @for cell in row { td { (cell) } }
                                }
                            }
                        }
                    }
                    div.preview-footnote { "Showing first " (rows.len()) " rows for preview." }
                }
                div.downloads {
                    div.downloads-title { "Downloads" }
                    ul {
                        li { a href=(src) download { (file_name(src)) } }
                    }
                }
            }
        }
    }
}

fn file_name(src: &str) -> &str {
    src.rsplit('/').next().unwrap_or(src)
}

fn render_project_detail(slug: &str, ctx: &RenderContext<'_>) -> Markup {
    let missing = PreviewState::Missing;
    html! {
        main.page.project-detail {
            article.detail-card {
                @match ctx.projects.find(slug) {
                    Some(project) => {
                        h1.detail-title { (project.label) }
                        p.detail-subtitle { (project.subtitle) }
                        div.prose {
                            (markdown(project.body))
                        }
                        @if let Some(preview) = &project.preview {
                            (render_preview(
                                preview.title,
                                preview.src,
                                ctx.previews.get(preview.src).unwrap_or(&missing),
                            ))
                        }
                    }
                    None => {
                        h1.detail-title { "Project not found" }
                        p.muted { "The requested project does not exist or the URL is incorrect." }
                    }
                }
            }
        }
    }
}

fn render_blogs(blogs: &Catalog<BlogEntry>, open: Option<&str>) -> Markup {
    let opened = open.and_then(|slug| blogs.find(slug));
    let close = Page::Blogs { open: None };

    html! {
        main.page.blogs-page {
            h2.page-heading { "Blogs" }
            div.sticky-grid {
                @for (idx, blog) in blogs.entries().iter().enumerate() {
                    @let link = Page::Blogs { open: Some(blog.slug.to_string()) };
                    a href=(link.href()) class={ "sticky-note " (if idx % 2 == 0 { "tilt-left" } else { "tilt-right" }) } {
                        span.tape {}
                        div.sticky-title { (blog.title) }
                        @if !blog.subtitle.is_empty() {
                            div.sticky-subtitle { (blog.subtitle) }
                        }
                    }
                }
            }
            @if let Some(blog) = opened {
                div.modal {
                    a.modal-backdrop href=(close.href()) aria-label="Close" {}
                    div.modal-panel role="dialog" aria-modal="true" {
                        div.modal-header {
                            h3.modal-title { (blog.title) }
                            a.modal-close href=(close.href()) { "Close" }
                        }
                        article.blog-prose {
                            (markdown(blog.body))
                        }
                    }
                }
            }
        }
    }
}

fn render_not_found() -> Markup {
    html! {
        main.page.not-found {
            div.centered { "Page not found." }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::dispatch;
    use crate::test_helpers::*;

    fn render(route: &str) -> String {
        let fx = Fixture::new();
        render_page(&dispatch(route), &fx.ctx()).into_string()
    }

    #[test]
    fn markdown_standalone_image_becomes_figure() {
        let out = markdown("![A plot](figs/plot.png \"The caption\")").into_string();
        assert!(out.starts_with(r#"<figure class="result-figure">"#));
        assert!(out.contains(r#"<img class="zoomable" src="figs/plot.png" alt="A plot">"#));
        assert!(out.contains("<figcaption>The caption</figcaption></figure>"));
        assert!(!out.contains("<p>"));
    }

    #[test]
    fn markdown_figure_without_title_has_no_caption() {
        let out = markdown("![A plot](plot.png)").into_string();
        assert!(out.contains(r#"<img class="zoomable" src="plot.png" alt="A plot">"#));
        assert!(!out.contains("figcaption"));
    }

    #[test]
    fn markdown_inline_image_stays_inline() {
        let out = markdown("See ![icon](i.png) here.").into_string();
        assert!(out.contains("<p>See <img"));
        assert!(!out.contains("<figure"));
    }

    #[test]
    fn markdown_escapes_figure_attributes() {
        let out = markdown(r#"![a & b](x.png "<b>caption</b>")"#).into_string();
        assert!(out.contains(r#"alt="a &amp; b""#));
        assert!(out.contains("<figcaption>&lt;b&gt;caption&lt;/b&gt;</figcaption>"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn markdown_converts_emphasis() {
        let out = markdown("This is **bold** and *italic*.").into_string();
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<em>italic</em>"));
    }

    #[test]
    fn about_page_shows_identity() {
        let html = render("/");
        assert!(html.contains("Test Person"));
        assert!(html.contains("Tests • Fixtures"));
        assert!(html.contains("about-page"));
    }

    #[test]
    fn about_page_lists_degrees_and_focus() {
        let html = render("/");
        assert!(html.contains("<li>M.S. Testing — Somewhere</li>"));
        assert!(html.contains("<li>B.S. Mocking — Elsewhere</li>"));
        assert!(html.contains(r#"<span class="chip">Parsing</span>"#));
    }

    #[test]
    fn about_page_placeholder_without_headshot() {
        let mut fx = Fixture::new();
        fx.settings.headshot_url.clear();
        let html = render_page(&Page::About, &fx.ctx()).into_string();
        assert!(html.contains("Your Photo Here"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn resume_alternates_sides() {
        let html = render("/resume");
        let first_right = html.find("arrow-right").unwrap();
        let first_left = html.find("arrow-left").unwrap();
        assert!(first_right < first_left);
        assert!(html.contains("2020-2021"));
        assert!(html.contains("Data Engineer"));
    }

    #[test]
    fn resume_links_only_when_url_present() {
        let html = render("/resume");
        assert!(html.contains(r#"href="https://example.com/tool""#));
        assert_eq!(html.matches(">View<").count(), 1);
        assert_eq!(html.matches(">Link<").count(), 1);
    }

    #[test]
    fn resume_shows_skill_categories() {
        let html = render("/resume");
        assert!(html.contains("skill-category-name"));
        assert!(html.contains("Languages"));
    }

    #[test]
    fn projects_gallery_links_to_detail_routes() {
        let html = render("/projects");
        assert!(html.contains(r##"href="#/projects/alpha""##));
        assert!(html.contains(r##"href="#/projects/beta""##));
    }

    #[test]
    fn project_detail_renders_markdown_body() {
        let html = render("/projects/alpha");
        assert!(html.contains("Alpha Project"));
        assert!(html.contains("<h3>Question</h3>"));
    }

    #[test]
    fn project_detail_unknown_and_empty_slug_not_found() {
        for route in ["/projects/", "/projects/zzz", "/projects/Alpha"] {
            assert!(render(route).contains("Project not found"), "route {route}");
        }
    }

    #[test]
    fn project_detail_preview_table() {
        let html = render("/projects/beta");
        assert!(html.contains("<th>rsid</th>"));
        assert!(html.contains("<td>rs1</td>"));
        assert!(html.contains("Showing first 1 rows for preview."));
        assert!(html.contains("table.csv"));
    }

    #[test]
    fn project_detail_preview_missing_notice() {
        let fx = Fixture::new();
        let previews = BTreeMap::new();
        let ctx = RenderContext {
            previews: &previews,
            ..fx.ctx()
        };
        let html = render_page(
            &Page::ProjectDetail {
                slug: "beta".into(),
            },
            &ctx,
        )
        .into_string();
        assert!(html.contains("Preview not found."));
        assert!(html.contains("<code>data/table.csv</code>"));
    }

    #[test]
    fn blogs_listing_without_modal() {
        let html = render("/blogs");
        assert!(html.contains("First Post"));
        assert!(html.contains(r##"href="#/blogs/first-post""##));
        assert!(!html.contains("modal-panel"));
    }

    #[test]
    fn blogs_route_with_known_slug_opens_modal() {
        let html = render("/blogs/first-post");
        assert!(html.contains("modal-panel"));
        assert!(html.contains("<p>Hello from the first post.</p>"));
        assert!(html.contains(r##"href="#/blogs">Close</a>"##));
    }

    #[test]
    fn blogs_route_with_unknown_slug_is_plain_listing() {
        for route in ["/blogs/", "/blogs/missing"] {
            let html = render(route);
            assert!(html.contains("First Post"));
            assert!(!html.contains("modal-panel"), "route {route}");
        }
    }

    #[test]
    fn not_found_page() {
        assert!(render("/unknown").contains("Page not found."));
    }

    #[test]
    fn shell_marks_current_section() {
        let fx = Fixture::new();
        let page = Page::ProjectDetail {
            slug: "alpha".into(),
        };
        let html = render_shell(&page, &fx.ctx(), html! {}).into_string();
        assert!(html.contains(r##"<a href="#/projects" class="current">Projects</a>"##));
        assert!(html.contains("© 2026 Test Owner • Portfolio"));
    }

    #[test]
    fn document_has_doctype_and_title() {
        let fx = Fixture::new();
        let doc = render_document(&Page::Resume, &fx.ctx(), "body {}").into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Resume · Test Person</title>"));
    }

    #[test]
    fn page_titles_follow_catalog_lookups() {
        let fx = Fixture::new();
        let ctx = fx.ctx();
        assert_eq!(page_title(&dispatch("/projects/alpha"), &ctx), "Alpha Project · Test Person");
        assert_eq!(page_title(&dispatch("/projects/"), &ctx), "Project not found · Test Person");
        assert_eq!(page_title(&dispatch("/blogs/first-post"), &ctx), "First Post · Test Person");
        assert_eq!(page_title(&dispatch("/blogs/nope"), &ctx), "Blogs · Test Person");
    }

    #[test]
    fn content_is_escaped() {
        let mut fx = Fixture::new();
        fx.settings.name = "<script>alert('xss')</script>".to_string();
        let html = render_page(&Page::About, &fx.ctx()).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn preview_component_download_link_uses_file_name() {
        let state = PreviewState::Table {
            columns: vec!["a".into()],
            rows: vec![vec!["1".into()]],
        };
        let html = render_preview("T", "x/y/z.csv", &state).into_string();
        assert!(html.contains(r#"<a href="x/y/z.csv" download>z.csv</a>"#));
    }

    #[test]
    fn empty_preview_renders_nothing() {
        assert_eq!(render_preview("T", "a.csv", &PreviewState::Empty).into_string(), "");
    }

    #[test]
    fn builtin_catalogs_render() {
        let fx = Fixture::new();
        let previews = BTreeMap::new();
        let ctx = RenderContext {
            projects: crate::catalog::projects(),
            blogs: crate::catalog::blogs(),
            previews: &previews,
            ..fx.ctx()
        };
        let html = render_page(&dispatch("/projects/epilepsy-gwas"), &ctx).into_string();
        assert!(html.contains("Research Question"));
        let html = render_page(&dispatch("/blogs/why-genomics-journey"), &ctx).into_string();
        assert!(html.contains("modal-panel"));
    }
}
