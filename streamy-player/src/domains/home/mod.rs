//! The home screen: hero spotlight on top, themed rows below.

pub mod messages;
pub mod state;
pub mod view;

pub use messages::{Intent, Message, SpotlightMessage};
pub use state::{HomeScreen, LoadState};
pub use view::{CardView, ErrorView, HeroView, HomeView, SectionView};
