pub mod ads;
pub mod app_title;
pub mod layout;
pub mod navbar;
pub mod page;

pub use ads::AdContainer;
pub use app_title::AppTitleButton;
pub use layout::Layout;
pub use navbar::{Navbar, SideDrawer};
pub use page::Page;
