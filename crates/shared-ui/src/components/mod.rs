pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod field;
pub mod form_select;
pub mod input;
pub mod loading_panel;
pub mod page_header;
pub mod side_nav;
pub mod stat_card;
pub mod textarea;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use field::*;
pub use form_select::*;
pub use input::*;
pub use loading_panel::*;
pub use page_header::*;
pub use side_nav::*;
pub use stat_card::*;
pub use textarea::*;
pub use toast::*;
