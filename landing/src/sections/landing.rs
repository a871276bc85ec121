use leptos::prelude::*;
use saas_platform::{Language, LanguageToggle};

use super::{Features, GetStarted, Hero, LanguageToggleButton};

/// The marketing page. Owns the language toggle; every child reads it.
#[component]
pub fn LandingPage(
    /// Language the toggle starts in
    #[prop(default = Language::English)]
    initial_language: Language,
) -> impl IntoView {
    let toggle = RwSignal::new(LanguageToggle::starting_in(initial_language));
    let lang_view = toggle.read_only();

    view! {
        <div
            class="min-h-screen"
            dir=move || toggle.get().dir()
            lang=move || toggle.get().language().code()
        >
            <div class="min-h-screen bg-gradient-to-br from-blue-900 via-purple-900 to-indigo-900 flex flex-col items-center justify-center p-8 relative overflow-hidden">
                <LanguageToggleButton toggle=toggle />
                <Backdrop />
                <Hero toggle=lang_view />
                <Features toggle=lang_view />
                <GetStarted toggle=lang_view />
            </div>
        </div>
    }
}

/// Pulsing blurred blobs behind the content
#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden">
            <div class="absolute -top-40 -right-40 w-80 h-80 bg-purple-500 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-pulse"></div>
            <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-blue-500 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-pulse delay-1000"></div>
            <div class="absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 w-96 h-96 bg-indigo-500 rounded-full mix-blend-multiply filter blur-xl opacity-10 animate-pulse delay-500"></div>
        </div>
    }
}
