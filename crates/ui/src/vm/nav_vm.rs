#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Assessment,
    Results,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLinkVm {
    pub label: &'static str,
    pub target: NavTarget,
    pub active: bool,
}

impl NavLinkVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active { "nav-link active" } else { "nav-link" }
    }
}

/// Header links for the page at `path`.
#[must_use]
pub fn map_nav_links(path: &str) -> Vec<NavLinkVm> {
    vec![
        NavLinkVm {
            label: "Home",
            target: NavTarget::Home,
            active: path == "/",
        },
        NavLinkVm {
            label: "Assessment",
            target: NavTarget::Assessment,
            active: path.starts_with("/assessment"),
        },
        NavLinkVm {
            label: "Results",
            target: NavTarget::Results,
            active: false,
        },
    ]
}
