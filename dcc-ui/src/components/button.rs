//! Dashboard buttons

use dioxus::prelude::*;

/// Bare `<button>` with the disabled/busy wiring but no styling.
///
/// Clicks are swallowed while disabled or loading, so a pending request
/// cannot be sent twice.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let inert = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            title: title.as_deref(),
            disabled: inert,
            aria_disabled: inert.then_some("true"),
            aria_busy: loading.then_some("true"),
            onclick: move |e| {
                if !inert {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// The action the current state invites (e.g. unlocking a locked release)
    Primary,
    Secondary,
    /// Locks, clears or otherwise stops something
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-500 text-white",
            ButtonVariant::Secondary => "bg-gray-200 hover:bg-gray-300 text-gray-800",
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-500 text-white",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1.5 text-sm",
            ButtonSize::Medium => "px-4 py-2",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center gap-2 rounded transition-colors \
                           disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let mut classes = format!("{BUTTON_BASE} {} {}", size.class(), variant.class());
    if let Some(extra) = class {
        classes.push(' ');
        classes.push_str(&extra);
    }

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            r#type,
            class: Some(classes),
            onclick,
            {children}
        }
    }
}
