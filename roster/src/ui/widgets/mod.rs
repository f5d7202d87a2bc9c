//! TUI widgets for the roster

pub mod character_list;
pub mod filter_bar;
pub mod form;
pub mod input;
pub mod toast;

pub use character_list::CharacterListWidget;
pub use filter_bar::FilterBarWidget;
pub use form::AddFormWidget;
pub use input::InputWidget;
pub use toast::ToastWidget;
