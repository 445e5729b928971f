//! Events published on every successful mutation.

use soroban_sdk::{contractevent, Address};

use crate::types::TournamentStatus;

#[contractevent]
pub struct GameTypeUpdated {
    #[topic]
    pub game_type_id: u32,
    pub active: bool,
}

#[contractevent]
pub struct TournamentCreated {
    #[topic]
    pub tournament_id: u64,
    pub creator: Address,
    pub game_type_id: u32,
    pub start_time: u64,
    pub betting_close_time: u64,
}

#[contractevent]
pub struct StatusAdvanced {
    #[topic]
    pub tournament_id: u64,
    pub status: TournamentStatus,
}

#[contractevent]
pub struct BetPlaced {
    #[topic]
    pub bet_id: u64,
    #[topic]
    pub tournament_id: u64,
    pub bettor: Address,
    pub side: u32,
    pub amount: i128,
}

#[contractevent]
pub struct ResultSubmitted {
    #[topic]
    pub tournament_id: u64,
    pub winner: u32,
    pub fee_accrued: i128,
}

#[contractevent]
pub struct WinningsClaimed {
    #[topic]
    pub bet_id: u64,
    #[topic]
    pub bettor: Address,
    pub amount: i128,
}

#[contractevent]
pub struct TournamentCancelled {
    #[topic]
    pub tournament_id: u64,
}

#[contractevent]
pub struct ContractPaused {
    pub admin: Address,
}

#[contractevent]
pub struct ContractUnpaused {
    pub admin: Address,
}

#[contractevent]
pub struct OracleRotated {
    pub new_oracle: Address,
}

#[contractevent]
pub struct FeesWithdrawn {
    pub amount: i128,
}

#[contractevent]
pub struct EmergencyWithdrawal {
    pub amount: i128,
}
