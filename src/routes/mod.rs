pub mod assignments;
pub mod auth;
pub mod class_users;
pub mod classes;
pub mod frontend;
pub mod judges;
pub mod problems;
pub mod submissions;
pub mod system;
pub mod tests;
pub mod users;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use class_users::configure_class_users_routes;
pub use classes::configure_classes_routes;
pub use frontend::configure_frontend_routes;
pub use judges::configure_judges_routes;
pub use problems::configure_problems_routes;
pub use submissions::configure_submissions_routes;
pub use system::configure_system_routes;
pub use tests::configure_tests_routes;
pub use users::configure_user_routes;
