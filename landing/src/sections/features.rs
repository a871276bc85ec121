use leptos::prelude::*;
use saas_platform::LanguageToggle;
use saas_platform::features::{FEATURES, FeatureCard};

#[component]
pub fn Features(toggle: ReadSignal<LanguageToggle>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-12 max-w-6xl relative z-10">
            {FEATURES
                .iter()
                .map(|card| view! { <FeatureCardView card=*card toggle=toggle /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn FeatureCardView(card: FeatureCard, toggle: ReadSignal<LanguageToggle>) -> impl IntoView {
    view! {
        <article class="group relative bg-white/10 backdrop-blur-lg rounded-2xl p-6 border border-white/20 hover:bg-white/20 hover:border-white/40 transition-all duration-500 hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/25 cursor-pointer">
            <div class="absolute inset-0 bg-gradient-to-r from-blue-400 to-purple-400 opacity-0 group-hover:opacity-20 rounded-2xl transition-opacity duration-500"></div>

            <div class=move || format!("relative z-10 {}", toggle.get().align_class())>
                <div class=move || {
                    format!(
                        "text-blue-300 mb-4 transform group-hover:scale-110 group-hover:text-white transition-all duration-300 {}",
                        toggle.get().icon_justify_class(),
                    )
                }>
                    <svg class="w-12 h-12" fill="currentColor" viewBox="0 0 24 24">
                        <path d=card.icon></path>
                    </svg>
                </div>
                <h3 class="text-xl font-semibold text-white mb-2 group-hover:text-blue-200 transition-colors duration-300">
                    {move || card.title(toggle.get().language())}
                </h3>
                <p class="text-blue-300 text-sm leading-relaxed group-hover:text-white transition-colors duration-300">
                    {move || card.description(toggle.get().language())}
                </p>
            </div>

            // Hover dot sits in the trailing corner
            <div class=move || {
                format!(
                    "absolute top-2 w-2 h-2 bg-blue-400 rounded-full opacity-0 group-hover:opacity-100 animate-pulse transition-opacity duration-500 {}",
                    toggle.get().dot_corner_class(),
                )
            }></div>
        </article>
    }
}
