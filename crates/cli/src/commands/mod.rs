pub(crate) mod init;
pub(crate) mod list;
pub(crate) mod serve;
