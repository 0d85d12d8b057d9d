pub mod config;
pub mod contact;
pub mod content;
pub mod ease;
pub mod motion;
pub mod pin;
pub mod snap;
pub mod timeline;
pub mod typing;
pub mod viewport;

pub use config::{ConfigError, PageSettings, SnapSettings};
pub use contact::{ContactDraft, ContactError, ContactField, SubmitPhase};
pub use ease::Ease;
pub use motion::SnapMotion;
pub use pin::PinSpan;
pub use snap::{PinnedRegion, SnapResolver};
pub use timeline::{Length, Pose, Scrub, Timeline, TriggerRange, Tween};
pub use typing::TypingCycle;
pub use viewport::Layout;
