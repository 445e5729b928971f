//! Storage types, keys, and platform constants.

use soroban_sdk::{contracttype, Address, String};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
/// Bumped on every write so tournament and bet records never expire.
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Smallest stake the ledger accepts (0.1 unit at 6 decimals).
pub const MIN_BET: i128 = 100_000;
/// Largest stake the ledger accepts.
pub const MAX_BET: i128 = 1_000_000_000;

/// Platform fee taken from the total pool at settlement, in basis points.
pub const FEE_RATE_BPS: i128 = 250;
/// Fixed-point denominator for fee arithmetic.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Odds are reported as `(pool_a + pool_b) * ODDS_SCALE / pool_x`,
/// i.e. fixed-point with two decimal places.
pub const ODDS_SCALE: i128 = 100;

pub const MAX_NAME_LEN: u32 = 100;
pub const MAX_TEAM_LEN: u32 = 50;

/// Wire encoding of the binary outcome.
pub const SIDE_TEAM_A: u32 = 1;
pub const SIDE_TEAM_B: u32 = 2;

// ---------------------------------------------------------------------------
// Storage Types
// ---------------------------------------------------------------------------

/// Discriminants for all storage keys.
///
/// Instance keys hold the platform config and counters in one ledger entry.
/// Persistent keys hold per-entity records, each with its own TTL. Records
/// are append-only: ids are never reclaimed and entries are never deleted,
/// so the full history stays available for audits and late claims.
#[contracttype]
pub enum DataKey {
    // --- instance() ---
    Admin,
    Oracle,
    Token,
    Paused,
    AccumulatedFees,
    TournamentCount,
    BetCount,
    TotalVolume,
    // --- persistent() ---
    /// Game category keyed by small integer id.
    GameType(u32),
    /// Tournament record keyed by monotonic id.
    Tournament(u64),
    /// Bet record keyed by global monotonic id.
    Bet(u64),
    /// Per-bettor aggregate counters.
    UserStats(Address),
    /// Per-creator aggregate counters.
    CreatorRep(Address),
}

/// Admin-managed catalog entry for a supported game category.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameType {
    pub name: String,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentStatus {
    Upcoming      = 0, // Created, betting open
    Live          = 1, // Match started, betting open until close time
    BettingClosed = 2, // Awaiting the oracle's result
    Finished      = 3, // Result recorded, winning bets claimable
    Cancelled     = 4, // Admin override, all stakes refundable
}

/// A tournament and its pari-mutuel pools.
///
/// `betting_close_time < start_time` strictly, enforced at creation.
/// `pool_a`/`pool_b` equal the sum of stakes placed on each side.
/// `winner` is set exactly once, by `submit_result`, and only together with
/// the transition to `Finished`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tournament {
    pub creator: Address,
    pub name: String,
    pub game_type_id: u32,
    pub team_a: String,
    pub team_b: String,
    pub start_time: u64,
    pub betting_close_time: u64,
    pub status: TournamentStatus,
    pub pool_a: i128,
    pub pool_b: i128,
    pub winner: Option<u32>,
    pub total_bets: u32,
}

/// An individual stake. `claimed` goes false -> true exactly once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bet {
    pub tournament_id: u64,
    pub bettor: Address,
    pub side: u32,
    pub amount: i128,
    pub claimed: bool,
}

/// Per-bettor aggregates, updated incrementally on bets and claims.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStats {
    pub total_bets: u32,
    pub total_wagered: i128,
    pub bets_won: u32,
    pub total_won: i128,
}

/// Per-creator aggregates, updated on creation and on bets against the
/// creator's tournaments.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatorReputation {
    pub tournaments_created: u32,
    pub total_volume: i128,
}

/// Platform-wide view returned by `get_platform_stats`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformStats {
    pub total_tournaments: u64,
    pub total_bets: u64,
    pub total_volume: i128,
    pub accumulated_fees: i128,
    pub paused: bool,
}

/// Current pool odds, scaled by [`ODDS_SCALE`]. A side with no stakes yet
/// reports 0 as the "no bets" sentinel.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Odds {
    pub side_a: i128,
    pub side_b: i128,
}
