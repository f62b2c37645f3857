pub mod goal;
pub mod promotion;
