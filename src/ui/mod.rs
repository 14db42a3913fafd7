pub mod keys;
pub mod terminal;
pub mod theme;
pub mod view;

pub use keys::key_to_event;
pub use terminal::TuiManager;
pub use view::{plain_result_card, render_result_card};
