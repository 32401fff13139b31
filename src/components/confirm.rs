//! Confirmation Dialog
//!
//! Modal gate for destructive actions. The action closure only runs from
//! the confirm button, so no delete or verify request can be issued without
//! an explicit acknowledgement.

use leptos::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    message: String,
    on_confirm: impl Fn() + 'static,
    on_cancel: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-sm mx-4">
                <h2 class="text-lg font-semibold mb-2">"Are you sure?"</h2>
                <p class="text-gray-400 mb-6">{message}</p>

                <div class="flex space-x-3">
                    <button
                        type="button"
                        on:click=move |_| on_cancel()
                        class="flex-1 px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        on:click=move |_| on_confirm()
                        class="flex-1 px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
                    >
                        "Confirm"
                    </button>
                </div>
            </div>
        </div>
    }
}
