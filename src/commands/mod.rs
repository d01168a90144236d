pub mod dispatch;
pub mod filter;
pub mod init;
pub mod load;
pub mod report;
pub mod stats;
