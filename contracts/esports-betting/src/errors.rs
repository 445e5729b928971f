use soroban_sdk::contracterror;

/// Every mutating entrypoint validates its preconditions in a fixed order
/// and returns the first violation with no prior writes.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized          = 1,
    NotInitialized              = 2,
    NotAuthorized               = 3,
    PlatformPaused              = 4,
    NotPaused                   = 5,
    InvalidInput                = 6,
    InvalidGameType             = 7,
    InvalidTimeOrdering         = 8,
    TournamentNotFound          = 9,
    TournamentNotOpenForBetting = 10,
    InvalidSide                 = 11,
    BetBelowMinimum             = 12,
    BetAboveMaximum             = 13,
    BetNotFound                 = 14,
    NotBetOwner                 = 15,
    AlreadyClaimed              = 16,
    NotWinningSide              = 17,
    TournamentNotClosed         = 18,
    ResultAlreadySubmitted      = 19,
    InvalidWinner               = 20,
    TournamentNotFinished       = 21,
    InvalidStateTransition      = 22,
    InsufficientFeeBalance      = 23,
    InvalidAmount               = 24,
    NoWinningPool               = 25,
    Overflow                    = 26,
}
