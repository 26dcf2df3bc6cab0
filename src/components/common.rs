use dioxus::prelude::*;

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4",
            p { "{message}" }
        }
    }
}

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "animate-spin rounded-full h-5 w-5 border-b-2 border-white" }
    }
}
