pub mod brand;
pub mod character_card;
pub mod character_form;
pub mod navbar;
pub mod page;
pub mod spinner;
pub mod toaster;

pub use brand::BrandLink;
pub use character_card::CharacterCard;
pub use character_form::CharacterForm;
pub use navbar::Navbar;
pub use page::Page;
pub use spinner::Spinner;
pub use toaster::Toaster;
