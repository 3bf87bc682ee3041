pub mod composer_directory;
pub mod publisher_directory;
pub mod work_repository;

pub use composer_directory::{ComposerDirectory, DirectoryError};
pub use publisher_directory::PublisherDirectory;
pub use work_repository::{RepoError, WorkRepository};
