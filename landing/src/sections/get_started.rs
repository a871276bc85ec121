use leptos::prelude::*;
use saas_platform::{LanguageToggle, Text};

/// Call-to-action button under the feature grid
#[component]
pub fn GetStarted(toggle: ReadSignal<LanguageToggle>) -> impl IntoView {
    view! {
        <div class="relative z-10">
            <button class="group relative px-12 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold text-lg rounded-2xl shadow-2xl hover:shadow-3xl hover:shadow-purple-500/50 transition-all duration-500 hover:scale-110 transform-gpu overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-r from-purple-600 to-blue-600 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                <div class="absolute inset-0 -skew-x-12 bg-gradient-to-r from-transparent via-white/20 to-transparent translate-x-[-200%] group-hover:translate-x-[200%] transition-transform duration-1000"></div>

                <span class="relative z-10 flex items-center gap-3">
                    <span class="text-2xl">"⭐✨⚡"</span>
                    {move || toggle.get().text(Text::GetStarted)}
                </span>

                <div class="absolute inset-0 rounded-2xl bg-gradient-to-r from-blue-400 to-purple-400 opacity-0 group-hover:opacity-30 blur-lg transition-opacity duration-500 scale-150"></div>
            </button>
        </div>
    }
}
