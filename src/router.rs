//! Hash routing: fragment normalization, page dispatch, and change
//! notification.
//!
//! The site is a single document; the part of the URL after `#` selects the
//! page. [`dispatch`] maps a route string to a [`Page`], and [`HashRouter`]
//! keeps the current route in sync with a [`Navigator`] and tells
//! subscribers when it changes.
//!
//! ## Routes
//!
//! | Route | Page |
//! |-------|------|
//! | `/` | [`Page::About`] |
//! | `/resume` | [`Page::Resume`] |
//! | `/projects` | [`Page::Projects`] |
//! | `/projects/<slug>` | [`Page::ProjectDetail`] |
//! | `/blogs` | [`Page::Blogs`] with nothing open |
//! | `/blogs/<slug>` | [`Page::Blogs`] with `<slug>` requested open |
//! | anything else | [`Page::NotFound`] |
//!
//! Detail routes are prefix matches. The slug is the third `/`-separated
//! segment, so `/projects/` yields an empty slug, which no catalog entry can
//! have.

use std::fmt;

/// The page selected by a route, with any extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    About,
    Resume,
    Projects,
    ProjectDetail { slug: String },
    /// Blog listing. `open` is the slug requested in the route, if any; it
    /// is only shown as a modal when it names a catalog entry.
    Blogs { open: Option<String> },
    NotFound,
}

impl Page {
    /// Canonical route for this page. `dispatch(&page.path()) == page` for
    /// every page except `NotFound`, whose canonical path is a route that
    /// nothing else claims.
    pub fn path(&self) -> String {
        match self {
            Page::About => "/".to_string(),
            Page::Resume => "/resume".to_string(),
            Page::Projects => "/projects".to_string(),
            Page::ProjectDetail { slug } => format!("/projects/{slug}"),
            Page::Blogs { open: None } => "/blogs".to_string(),
            Page::Blogs { open: Some(slug) } => format!("/blogs/{slug}"),
            Page::NotFound => "/not-found".to_string(),
        }
    }

    /// `#`-prefixed link target for anchors.
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::About => write!(f, "about"),
            Page::Resume => write!(f, "resume"),
            Page::Projects => write!(f, "projects"),
            Page::ProjectDetail { slug } => write!(f, "project-detail({slug})"),
            Page::Blogs { open: None } => write!(f, "blogs"),
            Page::Blogs { open: Some(slug) } => write!(f, "blogs(open={slug})"),
            Page::NotFound => write!(f, "not-found"),
        }
    }
}

/// Turn a raw location fragment (`"#/resume"`, `""`) into a route.
///
/// Removes the first `#` and defaults to `/` when nothing is left.
pub fn route_from_fragment(fragment: &str) -> String {
    let route = fragment.replacen('#', "", 1);
    if route.is_empty() {
        "/".to_string()
    } else {
        route
    }
}

/// Third `/`-separated segment of a route, or `""`.
fn slug_segment(route: &str) -> String {
    route.split('/').nth(2).unwrap_or("").to_string()
}

/// Map a route to the page it selects. Total; first match wins.
pub fn dispatch(route: &str) -> Page {
    if route == "/" {
        return Page::About;
    }
    if route == "/resume" {
        return Page::Resume;
    }
    if route == "/projects" {
        return Page::Projects;
    }
    if route.starts_with("/projects/") {
        return Page::ProjectDetail {
            slug: slug_segment(route),
        };
    }
    if route == "/blogs" {
        return Page::Blogs { open: None };
    }
    if route.starts_with("/blogs/") {
        return Page::Blogs {
            open: Some(slug_segment(route)),
        };
    }
    Page::NotFound
}

/// The embedding environment's navigation primitive.
///
/// A browser would back this with `location.hash`; the CLI and tests use
/// [`MemoryNavigator`].
pub trait Navigator {
    /// Current raw fragment, with or without the leading `#`.
    fn fragment(&self) -> String;
    /// Replace the fragment.
    fn set_fragment(&mut self, fragment: &str);
}

/// In-process navigator that records every fragment it was given.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    fragment: String,
    history: Vec<String>,
}

impl MemoryNavigator {
    pub fn new(initial: &str) -> Self {
        Self {
            fragment: initial.to_string(),
            history: Vec::new(),
        }
    }

    /// Fragments set since construction, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Navigator for MemoryNavigator {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.history.push(fragment.to_string());
    }
}

/// Handle returned by [`HashRouter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&str, &Page)>;

/// Current-route state plus change subscriptions.
///
/// All methods take `&mut self`, so a navigation finishes notifying every
/// subscriber before another can begin.
pub struct HashRouter<N: Navigator> {
    navigator: N,
    route: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<N: Navigator> HashRouter<N> {
    /// Build a router whose initial route comes from the navigator.
    pub fn new(navigator: N) -> Self {
        let route = route_from_fragment(&navigator.fragment());
        Self {
            navigator,
            route,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// Page for the current route.
    pub fn page(&self) -> Page {
        dispatch(&self.route)
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Register a callback run after every fragment change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&str, &Page) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Set the fragment and process the resulting change.
    pub fn navigate(&mut self, fragment: &str) -> Page {
        self.navigator.set_fragment(fragment);
        self.handle_fragment_change()
    }

    /// Re-read the navigator's fragment, update the route, and notify
    /// subscribers in registration order.
    ///
    /// Subscribers are notified even if the route did not change, matching
    /// a browser firing `hashchange`.
    pub fn handle_fragment_change(&mut self) -> Page {
        self.route = route_from_fragment(&self.navigator.fragment());
        let page = dispatch(&self.route);
        log::debug!("route {} -> {}", self.route, page);
        for (_, listener) in &mut self.listeners {
            listener(&self.route, &page);
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    // =========================================================================
    // Fragment normalization
    // =========================================================================

    #[test]
    fn empty_fragment_is_root() {
        assert_eq!(route_from_fragment(""), "/");
        assert_eq!(route_from_fragment("#"), "/");
    }

    #[test]
    fn fragment_strips_leading_hash() {
        assert_eq!(route_from_fragment("#/resume"), "/resume");
        assert_eq!(route_from_fragment("/resume"), "/resume");
    }

    #[test]
    fn fragment_strips_only_first_hash() {
        assert_eq!(route_from_fragment("#/blogs/#x"), "/blogs/#x");
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    #[test]
    fn dispatch_top_level_routes() {
        assert_eq!(dispatch("/"), Page::About);
        assert_eq!(dispatch("/resume"), Page::Resume);
        assert_eq!(dispatch("/projects"), Page::Projects);
        assert_eq!(dispatch("/blogs"), Page::Blogs { open: None });
    }

    #[test]
    fn dispatch_project_detail_extracts_slug() {
        assert_eq!(
            dispatch("/projects/abc"),
            Page::ProjectDetail {
                slug: "abc".to_string()
            }
        );
    }

    #[test]
    fn dispatch_project_trailing_slash_has_empty_slug() {
        assert_eq!(
            dispatch("/projects/"),
            Page::ProjectDetail {
                slug: String::new()
            }
        );
    }

    #[test]
    fn dispatch_project_slug_is_third_segment_only() {
        assert_eq!(
            dispatch("/projects/abc/extra"),
            Page::ProjectDetail {
                slug: "abc".to_string()
            }
        );
    }

    #[test]
    fn dispatch_blog_with_slug() {
        assert_eq!(
            dispatch("/blogs/rsids-to-meaning"),
            Page::Blogs {
                open: Some("rsids-to-meaning".to_string())
            }
        );
        assert_eq!(
            dispatch("/blogs/"),
            Page::Blogs {
                open: Some(String::new())
            }
        );
    }

    #[test]
    fn dispatch_unknown_routes() {
        for route in ["/unknown", "", "resume", "/Resume", "/resume/", "/projectsx", "/blog"] {
            assert_eq!(dispatch(route), Page::NotFound, "route {route:?}");
        }
    }

    #[test]
    fn dispatch_is_idempotent() {
        for route in ["/", "/projects/abc", "/blogs/x", "/nope"] {
            assert_eq!(dispatch(route), dispatch(route));
        }
    }

    #[test]
    fn page_path_roundtrips_through_dispatch() {
        let pages = [
            Page::About,
            Page::Resume,
            Page::Projects,
            Page::ProjectDetail {
                slug: "epilepsy-gwas".to_string(),
            },
            Page::Blogs { open: None },
            Page::Blogs {
                open: Some("why-genomics-journey".to_string()),
            },
            Page::NotFound,
        ];
        for page in pages {
            assert_eq!(dispatch(&page.path()), page);
        }
    }

    #[test]
    fn page_href_is_fragment() {
        assert_eq!(Page::Resume.href(), "#/resume");
    }

    // =========================================================================
    // HashRouter
    // =========================================================================

    #[test]
    fn router_initial_route_from_navigator() {
        let router = HashRouter::new(MemoryNavigator::new(""));
        assert_eq!(router.route(), "/");
        assert_eq!(router.page(), Page::About);

        let router = HashRouter::new(MemoryNavigator::new("#/blogs"));
        assert_eq!(router.page(), Page::Blogs { open: None });
    }

    #[test]
    fn navigate_updates_route_and_navigator() {
        let mut router = HashRouter::new(MemoryNavigator::default());
        let page = router.navigate("#/projects/epilepsy-gwas");
        assert_eq!(router.route(), "/projects/epilepsy-gwas");
        assert_eq!(
            page,
            Page::ProjectDetail {
                slug: "epilepsy-gwas".to_string()
            }
        );
        assert_eq!(router.navigator().history(), ["#/projects/epilepsy-gwas"]);
    }

    #[test]
    fn subscribers_notified_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut router = HashRouter::new(MemoryNavigator::default());

        let first = Rc::clone(&seen);
        router.subscribe(move |route, _| first.borrow_mut().push(format!("a:{route}")));
        let second = Rc::clone(&seen);
        router.subscribe(move |_, page| second.borrow_mut().push(format!("b:{page}")));

        router.navigate("#/resume");
        assert_eq!(*seen.borrow(), ["a:/resume", "b:resume"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut router = HashRouter::new(MemoryNavigator::default());
        let counter = Rc::clone(&count);
        let id = router.subscribe(move |_, _| *counter.borrow_mut() += 1);

        router.navigate("#/resume");
        assert!(router.unsubscribe(id));
        router.navigate("#/blogs");
        assert_eq!(*count.borrow(), 1);
        assert!(!router.unsubscribe(id));
    }

    #[test]
    fn navigating_to_empty_fragment_returns_home() {
        let mut router = HashRouter::new(MemoryNavigator::default());
        router.navigate("#/resume");
        router.navigate("");
        assert_eq!(router.route(), "/");
        assert_eq!(router.page(), Page::About);
    }

    /// Navigator whose fragment can be changed from outside the router,
    /// like a user editing the address bar.
    struct SharedNavigator(Rc<RefCell<String>>);

    impl Navigator for SharedNavigator {
        fn fragment(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_fragment(&mut self, fragment: &str) {
            *self.0.borrow_mut() = fragment.to_string();
        }
    }

    #[test]
    fn external_fragment_change_is_picked_up() {
        let location = Rc::new(RefCell::new(String::from("#/resume")));
        let mut router = HashRouter::new(SharedNavigator(Rc::clone(&location)));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        router.subscribe(move |route, _| sink.borrow_mut().push(route.to_string()));
        assert_eq!(router.route(), "/resume");

        *location.borrow_mut() = String::from("#/blogs/x");
        // Nothing re-reads the fragment until the change is handled.
        assert_eq!(router.route(), "/resume");

        let page = router.handle_fragment_change();
        assert_eq!(
            page,
            Page::Blogs {
                open: Some("x".to_string())
            }
        );
        assert_eq!(router.route(), "/blogs/x");
        assert_eq!(*seen.borrow(), ["/blogs/x"]);
    }
}
