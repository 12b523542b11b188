//! Library code shared by the morphx demo programs.

pub mod phyllotaxis;
