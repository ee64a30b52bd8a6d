use leptos::prelude::*;

use crate::config::AssetsConfig;

/// Promo video block. Callers drop it entirely when the asset is missing.
#[component]
pub fn VideoHero(assets: AssetsConfig) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container-narrow" data-reveal="">
                <div class="video-frame">
                    <video
                        src=assets.video
                        poster=assets.poster
                        controls=true
                        muted=true
                        loop=true
                        playsinline=true
                        preload="metadata"
                    ></video>
                </div>
                <p class="video-caption">"See the full skills pack in action"</p>
            </div>
        </section>
    }
}
