//! UI Components
//!
//! Page views and the pieces they share.

mod theme_toggle;
mod nav_bar;
mod login_view;
mod register_view;
mod home_view;
mod result_view;
mod shopping_panel;

pub use theme_toggle::ThemeToggle;
pub use nav_bar::NavBar;
pub use login_view::LoginView;
pub use register_view::RegisterView;
pub use home_view::HomeView;
pub use result_view::ResultView;
pub use shopping_panel::ShoppingPanel;
