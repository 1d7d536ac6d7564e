//! Readers for each supported source format.
//!
//! Every decoder is a pure function of the complete input text and returns
//! one fully-populated [`Theme`](crate::Theme) or the first error it hits.
//!
//! | Module | Format |
//! |--------|--------|
//! | [`yaml`] | Gogh (`color_01`..`color_16`) or Alacritty (`colors.primary`) YAML |
//! | [`nidx`] | whitespace-separated `name #rrggbb` lines |
//! | [`csv`] | headerless `name,#rrggbb` records |
//! | [`stconf`] | suckless st `config.h` color array |
//! | [`xres`] | X resources (`*.color0: #rrggbb`) |

pub mod csv;
pub mod nidx;
pub mod stconf;
pub mod xres;
pub mod yaml;
