pub mod chat;
pub mod hero;
pub mod projects;
pub mod pulse;
pub mod shared;
pub mod switcher;
pub mod verify;

pub use chat::ChatWidget;
pub use hero::HeroSection;
pub use projects::{ProjectsSection, SiteFooter, SkillsSection};
pub use pulse::ActivityPulse;
pub use switcher::ThemeSwitcher;
pub use verify::VerificationModal;
