//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Optional caption under the spinner.
    #[prop_or_default]
    pub text: Option<String>,
}

/// Centered spinner shown while the session is being restored.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-16">
            <div class="h-8 w-8 animate-spin rounded-full border-2 border-slate-300 border-t-indigo-600"></div>
            if let Some(text) = &props.text {
                <span class="mt-4 text-sm text-slate-500">{text}</span>
            }
        </div>
    }
}
