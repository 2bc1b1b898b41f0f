pub mod layout;
pub mod path;
pub mod text_input;

pub use layout::center_rect;
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text_input::TextInput;
