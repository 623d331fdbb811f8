mod callback_handler;
mod login_handler;
mod logout_handler;
mod profile_handler;

pub use callback_handler::callback_handler;
pub use login_handler::{build_authorize_url, generate_state, login_handler};
pub use logout_handler::logout_handler;
pub use profile_handler::profile_handler;
