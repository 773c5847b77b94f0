mod release_header;
mod sftp_sessions;
mod validation_queue;
mod view;

pub use release_header::ReleaseHeaderView;
pub use sftp_sessions::SftpSessionsView;
pub use validation_queue::ValidationQueueView;
pub use view::AdminView;
