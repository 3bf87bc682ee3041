pub mod directory;
pub mod ids;
pub mod publisher_category;
pub mod rights_chain;
pub mod work_rights;
pub mod writer;
pub mod writer_role;

pub use directory::{ComposerCandidate, NewComposer, NewPublisher, PublisherCandidate};
pub use ids::{ComposerId, PublisherId, WorkId, WriterId};
pub use publisher_category::PublisherCategory;
pub use rights_chain::{ComposerNode, PublisherNode, RightsChain, RightsChainNode, TerritoryNode};
pub use work_rights::{ComposerShareRow, WorkRightsUpdate};
pub use writer::{OwnershipMode, WriterEntry};
pub use writer_role::{FALLBACK_ROLE_LABEL, WriterRole};
