pub mod dashboard;
pub mod helpers;
pub mod system;
