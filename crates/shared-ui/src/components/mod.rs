// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;

// List-page feedback
pub mod empty_state;
pub mod error_banner;
pub mod filter_chips;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use empty_state::*;
pub use error_banner::*;
pub use filter_chips::*;
pub use input::*;
pub use page_header::*;
pub use search_bar::*;
pub use skeleton::*;
