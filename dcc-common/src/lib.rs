mod action_status;
mod relative_time;
mod release_name;
mod summary;
mod table_options;
mod table_rows;

pub use action_status::ActionStatus;
pub use relative_time::format_relative_time;
pub use release_name::suggest_next_release_name;
pub use summary::{lock_button_label, lock_hint, sftp_sessions_summary};
pub use table_options::{default_pagination_shows_total, SortOrder, TableOptions, TableProps};
pub use table_rows::visible_rows;
