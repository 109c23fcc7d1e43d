//! Game rules for gomoku.
//!
//! The only terminal rule is five-in-a-row; there is no draw rule.

mod win;

pub use win::{Axis, WinningLine, winning_line};
