// Landing page sections

mod features;
mod get_started;
mod hero;
mod landing;
mod language_toggle;

pub use features::{FeatureCardView, Features};
pub use get_started::GetStarted;
pub use hero::Hero;
pub use landing::LandingPage;
pub use language_toggle::LanguageToggleButton;
