pub mod create_airdrop;
pub mod set_root;
pub mod claim;
pub mod sweep_and_close;
pub mod close_claim_record;
pub mod views;

pub use create_airdrop::*;
pub use set_root::*;
pub use claim::*;
pub use sweep_and_close::*;
pub use close_claim_record::*;
pub use views::*;
