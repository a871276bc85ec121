use leptos::prelude::*;
use saas_platform::LanguageToggle;

/// Floating button that flips the page language. Pinned to the trailing
/// corner, so it jumps sides with the text direction.
#[component]
pub fn LanguageToggleButton(toggle: RwSignal<LanguageToggle>) -> impl IntoView {
    view! {
        <div class=move || format!("absolute top-6 z-20 {}", toggle.get().corner_class())>
            <button
                class="px-4 py-2 bg-white/20 backdrop-blur-lg rounded-lg text-white hover:bg-white/30 transition-all duration-300 border border-white/30"
                data-role="language-toggle"
                on:click=move |_| toggle.update(|t| t.toggle())
            >
                {move || toggle.get().button_label()}
            </button>
        </div>
    }
}
