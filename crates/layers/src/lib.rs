pub mod glyphs;
pub mod legend;
pub mod satellites;
pub mod symbology;

pub use glyphs::*;
pub use symbology::*;
