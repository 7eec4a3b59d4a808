pub mod booking;
pub mod catalog;
pub mod currency;
pub mod email;
pub mod fortune;
pub mod memory;
pub mod repository;
pub mod signup;
pub mod subscription;
