//! Labelled form inputs.

use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::Icon;

const INPUT_CLASS: &str = "block w-full pr-10 focus:outline-none sm:text-sm rounded-md focus:ring-indigo-500 focus:border-indigo-500 border-gray-300 shadow-sm";
const INPUT_ERROR_CLASS: &str = "block w-full pr-10 focus:outline-none sm:text-sm rounded-md focus:ring-red-500 focus:border-red-500 border-red-300 text-red-900 placeholder-red-300";

/// Single-line text input with a label and an optional inline error.
#[component]
pub fn TextInput(
    id: String,
    label: String,
    value: String,
    error: Option<String>,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
    #[props(default)] onblur: EventHandler<()>,
) -> Element {
    let class = if error.is_some() {
        INPUT_ERROR_CLASS
    } else {
        INPUT_CLASS
    };
    let error_id = format!("{id}-error");

    rsx! {
        div {
            label {
                r#for: "{id}",
                class: "block text-sm font-medium text-gray-700",
                "{label}"
            }
            div {
                class: "mt-1 relative rounded-md shadow-sm",
                input {
                    id: "{id}",
                    r#type: "text",
                    class: "{class}",
                    value: "{value}",
                    disabled: disabled,
                    aria_invalid: error.is_some(),
                    aria_describedby: "{error_id}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                    onblur: move |_| onblur.call(()),
                }
                if error.is_some() {
                    div {
                        class: "absolute inset-y-0 right-0 pr-3 flex items-center pointer-events-none text-red-500",
                        Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                    }
                }
            }
            if let Some(message) = error.as_ref() {
                p { id: "{error_id}", class: "mt-2 text-sm text-red-600", "{message}" }
            }
        }
    }
}

/// Multi-line text input with a label.
#[component]
pub fn TextArea(
    id: String,
    label: String,
    value: String,
    #[props(default)] disabled: bool,
    #[props(default = 4)] rows: u32,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label {
                r#for: "{id}",
                class: "block text-sm font-medium text-gray-700",
                "{label}"
            }
            div {
                class: "mt-1",
                textarea {
                    id: "{id}",
                    name: "{id}",
                    rows: "{rows}",
                    class: "shadow-sm focus:ring-indigo-500 focus:border-indigo-500 block w-full sm:text-sm border-gray-300 rounded-md",
                    value: "{value}",
                    disabled: disabled,
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
        }
    }
}
