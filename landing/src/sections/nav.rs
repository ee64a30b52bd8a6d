use leptos::prelude::*;

use crate::config::SiteLinks;
use crate::icons::{ICON_LIST, ICON_X, Icon};

struct NavLink {
    href: String,
    label: &'static str,
    external: bool,
}

fn nav_links(links: &SiteLinks) -> Vec<NavLink> {
    vec![
        NavLink { href: "#features".into(), label: "Features", external: false },
        NavLink { href: "#pricing".into(), label: "Pricing", external: false },
        NavLink { href: "#faq".into(), label: "FAQ", external: false },
        NavLink { href: links.community.clone(), label: "Community", external: true },
    ]
}

#[component]
pub fn Nav(links: SiteLinks) -> impl IntoView {
    let desktop = nav_links(&links)
        .into_iter()
        .map(|link| view! { <NavAnchor link=link in_menu=false /> })
        .collect::<Vec<_>>();
    let mobile = nav_links(&links)
        .into_iter()
        .map(|link| view! { <NavAnchor link=link in_menu=true /> })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav" data-role="nav">
            <div class="nav-inner">
                <a href="#" class="brand">
                    <span class="brand-mark">"~"</span>
                    <span>"Rising Tides"</span>
                </a>

                <div class="nav-links">
                    {desktop}
                    <a href="#pricing" class="nav-cta">"Get the Pack"</a>
                </div>

                <button
                    class="nav-toggle"
                    data-role="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded="false"
                >
                    <span class="icon-open"><Icon path=ICON_LIST size="24" /></span>
                    <span class="icon-close"><Icon path=ICON_X size="24" /></span>
                </button>
            </div>

            // Collapsed until the toggle opens it
            <div class="nav-mobile">
                {mobile}
                <a href="#pricing" class="btn btn-primary" data-role="menu-link">"Get the Pack"</a>
            </div>
        </nav>
    }
}

#[component]
fn NavAnchor(link: NavLink, in_menu: bool) -> impl IntoView {
    let target = link.external.then_some("_blank");
    let rel = link.external.then_some("noopener noreferrer");
    let role = in_menu.then_some("menu-link");
    view! {
        <a href=link.href class="nav-link" target=target rel=rel data-role=role>
            {link.label}
        </a>
    }
}
