use leptos::prelude::*;
use saas_platform::billing::CancelDialog;
use saas_platform::{Language, Text};

/// Modal asking the customer to confirm cancellation.
///
/// Visibility lives in `dialog`; "keep" dismisses locally and "yes, cancel"
/// hands off to `on_confirm`, which settles the dialog when the billing
/// service answers.
#[component]
pub fn CancelDialogView(
    dialog: RwSignal<CancelDialog>,
    lang: Language,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let t = move |key: Text| key.in_lang(lang);

    view! {
        <Show when=move || dialog.get().is_open()>
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50" role="dialog" aria-modal="true">
                <div class="bg-white rounded-lg shadow-xl max-w-md w-full mx-4 p-6" dir=lang.dir()>
                    <h3 class="text-lg font-medium text-gray-900 mb-4">{t(Text::CancelSubscription)}</h3>
                    <p class="text-gray-600 mb-6">{t(Text::CancelDialogBody)}</p>

                    {move || {
                        dialog
                            .with(|d| d.error().map(str::to_owned))
                            .map(|message| {
                                view! {
                                    <p class="mb-4 text-sm text-red-700 bg-red-50 border border-red-200 rounded p-2" role="alert">
                                        {format!("{} {message}", t(Text::CancelFailed))}
                                    </p>
                                }
                            })
                    }}

                    <div class="flex gap-3 justify-end">
                        <button
                            class="px-4 py-2 text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200 transition-colors"
                            data-role="keep-subscription"
                            on:click=move |_| dialog.update(|d| d.dismiss())
                        >
                            {t(Text::KeepSubscription)}
                        </button>
                        <button
                            class="px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 transition-colors disabled:opacity-50"
                            data-role="confirm-cancel"
                            disabled=move || dialog.get().is_pending()
                            on:click=move |_| on_confirm.run(())
                        >
                            {t(Text::ConfirmCancel)}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
