//! UI Components

pub mod backdrop;
pub mod card;
pub mod github_icon;
pub mod particles;

pub use backdrop::Backdrop;
pub use card::ComingSoonCard;
pub use github_icon::GitHubIcon;
pub use particles::ParticleLayer;
