use leptos::prelude::*;
use saas_platform::{LanguageToggle, Text};

#[component]
pub fn Hero(toggle: ReadSignal<LanguageToggle>) -> impl IntoView {
    view! {
        <div class=move || format!("text-center mb-12 relative z-10 {}", toggle.get().align_class())>
            <div class="mb-6 transform hover:scale-105 transition-transform duration-300 text-center">
                <span class="text-6xl animate-bounce">"⭐✨⚡"</span>
            </div>
            <h1 class="text-6xl font-bold text-white mb-4 tracking-tight bg-gradient-to-r from-blue-200 to-purple-200 bg-clip-text text-transparent animate-pulse">
                {move || toggle.get().text(Text::LandingTitle)}
            </h1>
            <p class="text-xl text-blue-200 max-w-2xl animate-fade-in">
                {move || toggle.get().text(Text::LandingSubtitle)}
            </p>
        </div>
    }
}
