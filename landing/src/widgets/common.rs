//! Building blocks shared by the webhook dashboard and the billing widget.

use leptos::prelude::*;

/// Renders an inline SVG icon from a Phosphor path string.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

// Phosphor Icons (Regular weight) - https://phosphoricons.com/

/// Warning circle, used by error banners
pub const ICON_WARNING_CIRCLE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm-8-80V80a8,8,0,0,1,16,0v56a8,8,0,0,1-16,0Zm8,40a12,12,0,1,1,12-12A12,12,0,0,1,128,176Z";

/// Circular arrow, used by refresh and retry buttons
pub const ICON_ARROW_CLOCKWISE: &str = "M240,56v48a8,8,0,0,1-8,8H184a8,8,0,0,1,0-16H211.4L184.81,71.64l-.25-.24a80,80,0,1,0-1.67,114.78,8,8,0,0,1,11,11.63A95.44,95.44,0,0,1,128,224h-1.32A96,96,0,1,1,195.75,60L224,85.8V56a8,8,0,1,1,16,0Z";

/// Card outline, used by the payment method panel
pub const ICON_CREDIT_CARD: &str = "M224,48H32A16,16,0,0,0,16,64V192a16,16,0,0,0,16,16H224a16,16,0,0,0,16-16V64A16,16,0,0,0,224,48Zm0,16V88H32V64Zm0,128H32V104H224v88Zm-16-24a8,8,0,0,1-8,8H168a8,8,0,0,1,0-16h32A8,8,0,0,1,208,168Zm-64,0a8,8,0,0,1-8,8H120a8,8,0,0,1,0-16h16A8,8,0,0,1,144,168Z";

/// Spinner plus a caption, shown while a collaborator call is outstanding.
#[component]
pub fn LoadingIndicator(message: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            <span class="mx-3 text-gray-600">{message}</span>
        </div>
    }
}

/// Red banner for a failed load or action. The retry button only renders
/// when a handler is supplied.
#[component]
pub fn ErrorBanner(
    /// Localized headline
    title: &'static str,
    /// Underlying error message
    #[prop(into)]
    detail: String,
    /// Localized retry caption
    #[prop(default = "")]
    retry_label: &'static str,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-4 flex items-start gap-3" role="alert">
            <Icon path=ICON_WARNING_CIRCLE class="text-red-600 shrink-0" />
            <div class="flex-1">
                <p class="font-medium text-red-800">{title}</p>
                <p class="text-sm text-red-700">{detail}</p>
            </div>
            {on_retry.map(|retry| {
                view! {
                    <button
                        class="px-3 py-1 text-sm bg-red-600 text-white rounded hover:bg-red-700"
                        on:click=move |_| retry.run(())
                    >
                        {retry_label}
                    </button>
                }
            })}
        </div>
    }
}

/// Rounded status pill; `class` comes from the status tone.
#[component]
pub fn StatusBadge(#[prop(into)] label: String, class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 rounded-full text-xs font-medium {class}")>{label}</span>
    }
}

/// White summary card with a label and a big number.
#[component]
pub fn StatCard(label: &'static str, value: usize, value_class: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded-lg shadow">
            <div class="text-sm text-gray-600">{label}</div>
            <div class=format!("text-2xl font-bold {value_class}")>{value}</div>
        </div>
    }
}

/// Widget heading with its one-line description.
#[component]
pub fn PanelHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{title}</h1>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
