mod buttons;
mod theme;

pub use buttons::{
    immersive_style, option_button_style, panel_style, preview_style, swatch_button_style,
};
pub use theme::{NEBULA_CYCLE_SECS, backdrop, glow, glowclock_theme, nebula_phase};
