//! Lucide (https://lucide.dev) outline icons used by the dashboard.
//!
//! Strokes use `currentColor`, so icons take the text color of their parent.
//! Default size is w-4 h-4; pass `class` to override.

use dioxus::prelude::*;

/// 24x24 outline frame shared by every icon; `children` are the shapes.
#[component]
fn Outline(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

/// Padlock body shared by the lock and unlock icons.
fn padlock_body() -> Element {
    rsx! {
        rect {
            x: "3",
            y: "11",
            width: "18",
            height: "11",
            rx: "2",
            ry: "2",
        }
    }
}

/// Closed padlock: submissions are locked
#[component]
pub fn LockIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Outline { class,
            {padlock_body()}
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        }
    }
}

/// Open padlock: submissions are open
#[component]
pub fn UnlockIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Outline { class,
            {padlock_body()}
            path { d: "M7 11V7a5 5 0 0 1 9.9-1" }
        }
    }
}

#[component]
pub fn RocketIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Outline { class,
            path { d: "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" }
            path { d: "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" }
            path { d: "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" }
            path { d: "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" }
        }
    }
}

#[component]
pub fn TrashIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Outline { class,
            path { d: "M3 6h18" }
            path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" }
            path { d: "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
            path { d: "M10 11v6" }
            path { d: "M14 11v6" }
        }
    }
}

#[component]
pub fn AlertTriangleIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Outline { class,
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        }
    }
}

#[component]
pub fn LogOutIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Outline { class,
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            path { d: "m16 17 5-5-5-5" }
            path { d: "M21 12H9" }
        }
    }
}
