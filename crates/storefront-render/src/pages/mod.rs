//! Page renderers: payload in, `{head, html}` out.

mod detail;
mod home;
mod status;

pub use detail::{render_detail_page, DetailRenderer};
pub use home::{render_home_page, HomeRenderer};
pub use status::{error_page, not_found_page};
