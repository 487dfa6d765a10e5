pub mod check;
pub mod init;
pub mod paths;
pub mod show;
