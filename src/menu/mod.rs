/// Interactive text menu
/// 
/// This module contains the numbered menu and the session loop that reads a
/// choice, prompts for its arguments, and reports the result.

pub mod choice;
pub mod session;

pub use choice::*;
pub use session::*;
