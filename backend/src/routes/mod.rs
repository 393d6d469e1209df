pub mod figure;
pub mod layout;
pub mod scatter;
pub mod success;
