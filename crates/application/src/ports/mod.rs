pub mod display_surface;
pub mod event_source;

pub use display_surface::DisplaySurface;
pub use event_source::EventSource;
