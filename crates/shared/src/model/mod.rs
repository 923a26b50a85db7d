pub mod account;
pub mod withdraw;
