pub mod equal_split;
pub mod ownership_mode;
pub mod rights_chain_builder;
pub mod share_validator;
pub mod work_rights_service;

pub use equal_split::{equal_shares, split_equally};
pub use ownership_mode::{enter_advanced_mode, on_share_edited};
pub use rights_chain_builder::{PUBLISHER_PERFORMANCE_SPLIT, RightsChainBuilder, WORLD_TERRITORY};
pub use share_validator::{SHARE_TOLERANCE, ShareReport, ShareValidator};
pub use work_rights_service::WorkRightsService;
