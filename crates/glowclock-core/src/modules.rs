pub mod clock;
pub mod presentation;
