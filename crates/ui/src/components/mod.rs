//! Reusable presentational components, leaf to root.

mod button;
mod card;
mod feature_card;
mod footer;
mod hero;
mod navbar;

pub use button::{Button, ButtonRow, activate};
pub use card::{Card, CardGrid};
pub use feature_card::{FeatureCard, FeatureGrid};
pub use footer::Footer;
pub use hero::{Hero, alert, greet};
pub use navbar::Navbar;
