pub mod issues;
pub mod statuses;
pub mod teams;
pub mod users;

pub use issues::fetch_all_issues;
pub use statuses::list_statuses;
pub use teams::list_teams;
pub use users::list_users;
