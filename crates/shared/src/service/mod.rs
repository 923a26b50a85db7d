pub mod withdraw;
