pub mod detail;
pub mod list;

pub use detail::{is_success, present_detail};
pub use list::present_list;
