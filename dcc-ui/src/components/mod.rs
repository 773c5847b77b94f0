//! Shared UI components

pub mod admin;
pub mod app_layout;
pub mod button;
pub mod data_table;
pub mod helpers;
pub mod icons;
pub mod login;
pub mod text_input;
pub mod utils;

pub use admin::{AdminView, ReleaseHeaderView, SftpSessionsView, ValidationQueueView};
pub use app_layout::AppLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use data_table::DataTable;
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use icons::{AlertTriangleIcon, LockIcon, LogOutIcon, RocketIcon, TrashIcon, UnlockIcon};
pub use login::LoginView;
pub use text_input::{TextInput, TextInputType};
pub use utils::format_since;
