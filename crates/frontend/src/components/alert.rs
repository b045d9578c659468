//! Dismissible notification banner

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    const fn classes(self) -> &'static str {
        match self {
            Self::Success => "bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300 border-green-400",
            Self::Danger => "bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 border-red-400",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            role="alert"
            class={classes!(
                "w-3/5", "mx-auto", "mt-4", "p-3", "border", "rounded-md", "text-sm",
                "flex", "items-center", "justify-between",
                props.kind.classes()
            )}
        >
            <span>{props.message.clone()}</span>
            <button
                type="button"
                aria-label="Close"
                class="ml-4 font-bold leading-none opacity-70 hover:opacity-100"
                {onclick}
            >
                {"×"}
            </button>
        </div>
    }
}
