pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod submit;
pub mod update;
