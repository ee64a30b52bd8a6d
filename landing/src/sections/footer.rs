use leptos::prelude::*;

use crate::config::SiteLinks;

#[component]
pub fn Footer(links: SiteLinks) -> impl IntoView {
    let mailto = links.mailto();
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <a href="#" class="brand">
                    <span class="brand-mark">"~"</span>
                    <span>"Rising Tides"</span>
                </a>
                <div class="footer-links">
                    <a href=links.community target="_blank" rel="noopener noreferrer">"Community"</a>
                    <a href=links.github target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    <a href=mailto>"Contact"</a>
                </div>
                <p class="footer-copyright">
                    "© 2026 Rising Tides. Built with Claude Code, naturally."
                </p>
            </div>
        </footer>
    }
}
