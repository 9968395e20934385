pub mod input;
pub mod textarea;

pub use input::Input;
pub use textarea::Textarea;
