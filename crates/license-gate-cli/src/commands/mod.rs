//! Command implementations.

pub mod config;
pub mod coordinate;
pub mod get;
pub mod is_false;
pub mod list;
pub mod settings;

pub use self::config::execute_config;
pub use self::coordinate::execute_coordinate;
pub use self::get::execute_get;
pub use self::is_false::execute_is_false;
pub use self::list::execute_list;
pub use self::settings::execute_settings;
