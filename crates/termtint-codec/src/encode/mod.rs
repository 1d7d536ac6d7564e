//! Writers for each supported target format.
//!
//! Encoders cannot fail for a complete [`Theme`](crate::Theme); the only
//! errors they return come from the output stream.
//!
//! | Module | Format |
//! |--------|--------|
//! | [`stconf`] | suckless st `config.h` color array |
//! | [`nidx`] | whitespace-separated `name #rrggbb` lines |
//! | [`xres`] | X resources, terminal.sexy layout |
//! | [`csv`] | headerless `name,#rrggbb` records |
//! | [`osc`] | xterm OSC 4/10/11/12 escape sequences |

pub mod csv;
pub mod nidx;
pub mod osc;
pub mod stconf;
pub mod xres;
