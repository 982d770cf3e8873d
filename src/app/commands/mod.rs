pub mod formula;
pub mod icons;
