pub(crate) mod dirs;
pub(crate) mod request;
pub(crate) mod thumbnail;
pub(crate) mod uploads;
