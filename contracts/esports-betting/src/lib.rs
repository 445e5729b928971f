//! E-Sports Betting Platform Contract
//!
//! A pari-mutuel wagering ledger for e-sports tournaments: tournaments are
//! created against an admin-managed game-type catalog, stakes accumulate in
//! per-side pools while betting is open, a designated oracle records the
//! outcome, and winning bettors claim their stake plus a pro-rata share of
//! the losing pool net of the platform fee. Stakes move through an external
//! settlement token fixed at init; the contract never mints or burns value.
//!
//! ## Storage Strategy
//! - `instance()`: Admin, Oracle, Token, pause flag, fee accumulator, and
//!   the monotonic counters. Small, fixed config in one ledger entry.
//! - `persistent()`: GameType, Tournament, Bet, UserStats, CreatorRep.
//!   Append-only records, each a separate ledger entry with its own TTL,
//!   bumped on every write. Ids are never reclaimed and records are never
//!   deleted, so bets and results remain auditable after settlement.
//!
//! ## Lifecycle
//! `Upcoming -> [now >= start_time] Live -> [now >= betting_close_time]
//! BettingClosed -> [oracle submits result] Finished`. The first two edges
//! are time-guarded pokes any caller may trigger; only the oracle can reach
//! `Finished`, and only the admin can reach the terminal `Cancelled` state
//! (from `Upcoming` or `Live`), which makes every stake refundable.

#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

mod errors;
mod events;
mod types;

pub use errors::Error;
pub use events::*;
pub use types::*;


// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct EsportsBetting;

#[contractimpl]
impl EsportsBetting {
    // -----------------------------------------------------------------------
    // init
    // -----------------------------------------------------------------------

    /// Initialize the platform. May only be called once.
    ///
    /// `admin` controls the pause switch, the game-type catalog, fee and
    /// emergency withdrawals, and oracle rotation. `oracle` is the only
    /// address allowed to submit results. `token` is the settlement asset
    /// all stakes and payouts move through.
    ///
    /// Seeds the initial game-type catalog (1 = League of Legends,
    /// 2 = CS:GO, 3 = Dota 2), all active.
    pub fn init(env: Env, admin: Address, oracle: Address, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Oracle, &oracle);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(&DataKey::AccumulatedFees, &0i128);
        env.storage().instance().set(&DataKey::TournamentCount, &0u64);
        env.storage().instance().set(&DataKey::BetCount, &0u64);
        env.storage().instance().set(&DataKey::TotalVolume, &0i128);

        seed_game_type(&env, 1, "League of Legends");
        seed_game_type(&env, 2, "CS:GO");
        seed_game_type(&env, 3, "Dota 2");

        Ok(())
    }

    // -----------------------------------------------------------------------
    // set_game_type
    // -----------------------------------------------------------------------

    /// Create or update a game-type catalog entry. Admin only.
    ///
    /// Idempotent upsert: the id is fixed, `name` and `active` may be
    /// rewritten. Deactivating a game type blocks new tournaments for it but
    /// does not touch existing ones.
    pub fn set_game_type(
        env: Env,
        admin: Address,
        game_type_id: u32,
        name: String,
        active: bool,
    ) -> Result<(), Error> {
        require_admin(&env, &admin)?;
        validate_text(&name, MAX_NAME_LEN)?;

        let key = DataKey::GameType(game_type_id);
        env.storage().persistent().set(&key, &GameType { name, active });
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);

        GameTypeUpdated { game_type_id, active }.publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // create_tournament
    // -----------------------------------------------------------------------

    /// Create a tournament. Open to any caller while the platform is
    /// unpaused and the game type is active.
    ///
    /// `betting_close_time` must be strictly before `start_time`: betting
    /// always closes before the match begins. Returns the new tournament id
    /// (monotonic from 1). The tournament starts `Upcoming` with empty
    /// pools.
    pub fn create_tournament(
        env: Env,
        creator: Address,
        name: String,
        game_type_id: u32,
        team_a: String,
        team_b: String,
        start_time: u64,
        betting_close_time: u64,
    ) -> Result<u64, Error> {
        require_not_paused(&env)?;

        let game_type: GameType = env
            .storage()
            .persistent()
            .get(&DataKey::GameType(game_type_id))
            .ok_or(Error::InvalidGameType)?;
        if !game_type.active {
            return Err(Error::InvalidGameType);
        }

        if betting_close_time >= start_time {
            return Err(Error::InvalidTimeOrdering);
        }

        validate_text(&name, MAX_NAME_LEN)?;
        validate_text(&team_a, MAX_TEAM_LEN)?;
        validate_text(&team_b, MAX_TEAM_LEN)?;

        creator.require_auth();

        let id = read_counter(&env, &DataKey::TournamentCount)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::TournamentCount, &id);

        let tournament = Tournament {
            creator: creator.clone(),
            name,
            game_type_id,
            team_a,
            team_b,
            start_time,
            betting_close_time,
            status: TournamentStatus::Upcoming,
            pool_a: 0,
            pool_b: 0,
            winner: None,
            total_bets: 0,
        };
        save_tournament(&env, id, &tournament);

        let mut rep = load_creator_rep(&env, &creator);
        rep.tournaments_created += 1;
        save_creator_rep(&env, &creator, &rep);

        TournamentCreated {
            tournament_id: id,
            creator,
            game_type_id,
            start_time,
            betting_close_time,
        }
        .publish(&env);

        Ok(id)
    }

    // -----------------------------------------------------------------------
    // update_status
    // -----------------------------------------------------------------------

    /// Advance a tournament along its time-guarded edges. Any caller, no
    /// authorization: the transition is a pure function of ledger time.
    ///
    /// Applies at most one edge per call (`Upcoming -> Live` once
    /// `now >= start_time`, `Live -> BettingClosed` once
    /// `now >= betting_close_time`). When the guard does not hold, or the
    /// current status has no time edge, this is a no-op returning the
    /// unchanged status. `Finished` is only reachable via `submit_result`.
    pub fn update_status(env: Env, tournament_id: u64) -> Result<TournamentStatus, Error> {
        let mut tournament = load_tournament(&env, tournament_id)?;
        let now = env.ledger().timestamp();

        let next = match tournament.status {
            TournamentStatus::Upcoming if now >= tournament.start_time => {
                Some(TournamentStatus::Live)
            }
            TournamentStatus::Live if now >= tournament.betting_close_time => {
                Some(TournamentStatus::BettingClosed)
            }
            _ => None,
        };

        if let Some(status) = next {
            tournament.status = status.clone();
            save_tournament(&env, tournament_id, &tournament);
            StatusAdvanced { tournament_id, status }.publish(&env);
        }

        Ok(tournament.status)
    }

    // -----------------------------------------------------------------------
    // place_bet
    // -----------------------------------------------------------------------

    /// Stake `amount` on `side` (1 = team A, 2 = team B) of a tournament.
    ///
    /// Accepted while the status is `Upcoming` or `Live` and the ledger
    /// clock is strictly before `betting_close_time`; the time check holds
    /// even if nobody has poked the status forward yet. The stake is
    /// transferred from the bettor to the contract and credited to the
    /// side's pool. Every accepted bet stays in the pool: this is a
    /// pari-mutuel market, odds emerge from relative pool sizes and no
    /// matching counter-order is needed. Returns the new bet id.
    pub fn place_bet(
        env: Env,
        bettor: Address,
        tournament_id: u64,
        side: u32,
        amount: i128,
    ) -> Result<u64, Error> {
        require_not_paused(&env)?;

        let mut tournament = load_tournament(&env, tournament_id)?;

        let open_status = matches!(
            tournament.status,
            TournamentStatus::Upcoming | TournamentStatus::Live
        );
        if !open_status || env.ledger().timestamp() >= tournament.betting_close_time {
            return Err(Error::TournamentNotOpenForBetting);
        }

        if side != SIDE_TEAM_A && side != SIDE_TEAM_B {
            return Err(Error::InvalidSide);
        }
        if amount < MIN_BET {
            return Err(Error::BetBelowMinimum);
        }
        if amount > MAX_BET {
            return Err(Error::BetAboveMaximum);
        }

        bettor.require_auth();

        // All checks passed; move the stake, then record it.
        settlement(&env)?.transfer(&bettor, &env.current_contract_address(), &amount);

        if side == SIDE_TEAM_A {
            tournament.pool_a = tournament.pool_a.checked_add(amount).ok_or(Error::Overflow)?;
        } else {
            tournament.pool_b = tournament.pool_b.checked_add(amount).ok_or(Error::Overflow)?;
        }
        tournament.total_bets += 1;
        save_tournament(&env, tournament_id, &tournament);

        let bet_id = read_counter(&env, &DataKey::BetCount)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::BetCount, &bet_id);
        save_bet(
            &env,
            bet_id,
            &Bet {
                tournament_id,
                bettor: bettor.clone(),
                side,
                amount,
                claimed: false,
            },
        );

        let mut stats = load_user_stats(&env, &bettor);
        stats.total_bets += 1;
        stats.total_wagered = stats.total_wagered.checked_add(amount).ok_or(Error::Overflow)?;
        save_user_stats(&env, &bettor, &stats);

        let mut rep = load_creator_rep(&env, &tournament.creator);
        rep.total_volume = rep.total_volume.checked_add(amount).ok_or(Error::Overflow)?;
        save_creator_rep(&env, &tournament.creator, &rep);

        let volume = read_amount(&env, &DataKey::TotalVolume)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::TotalVolume, &volume);

        BetPlaced {
            bet_id,
            tournament_id,
            bettor,
            side,
            amount,
        }
        .publish(&env);

        Ok(bet_id)
    }

    // -----------------------------------------------------------------------
    // submit_result
    // -----------------------------------------------------------------------

    /// Record the match outcome. Oracle only.
    ///
    /// The tournament must be `BettingClosed`: a result can neither be
    /// submitted early nor twice (a second call finds `Finished` and fails
    /// with `ResultAlreadySubmitted`). Sets the winner, moves the
    /// tournament to `Finished`, and accrues the platform fee from the
    /// total pool. This is the single path that sets `winner`.
    pub fn submit_result(
        env: Env,
        caller: Address,
        tournament_id: u64,
        winner: u32,
    ) -> Result<(), Error> {
        require_oracle(&env, &caller)?;

        let mut tournament = load_tournament(&env, tournament_id)?;
        match tournament.status {
            TournamentStatus::BettingClosed => {}
            TournamentStatus::Finished => return Err(Error::ResultAlreadySubmitted),
            _ => return Err(Error::TournamentNotClosed),
        }

        if winner != SIDE_TEAM_A && winner != SIDE_TEAM_B {
            return Err(Error::InvalidWinner);
        }

        let total_pool = tournament
            .pool_a
            .checked_add(tournament.pool_b)
            .ok_or(Error::Overflow)?;
        let fee = total_pool
            .checked_mul(FEE_RATE_BPS)
            .ok_or(Error::Overflow)?
            / BPS_DENOMINATOR;
        let fees = read_amount(&env, &DataKey::AccumulatedFees)
            .checked_add(fee)
            .ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::AccumulatedFees, &fees);

        tournament.winner = Some(winner);
        tournament.status = TournamentStatus::Finished;
        save_tournament(&env, tournament_id, &tournament);

        ResultSubmitted {
            tournament_id,
            winner,
            fee_accrued: fee,
        }
        .publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // claim_winnings
    // -----------------------------------------------------------------------

    /// Pay out a bet. Only the bet's owner may claim, exactly once.
    ///
    /// On a `Finished` tournament the bet must be on the winning side;
    /// losing bets stay unclaimed in the archive. The payout is the stake
    /// plus a pro-rata share of the losing pool net of the platform fee:
    /// `stake + stake * losing_pool * (10000 - fee_bps) / (winning_pool * 10000)`.
    /// On a `Cancelled` tournament every bet refunds its original stake
    /// regardless of side.
    ///
    /// Deliberately not gated by the pause switch: a paused platform must
    /// never trap already-staked funds.
    pub fn claim_winnings(env: Env, caller: Address, bet_id: u64) -> Result<i128, Error> {
        let mut bet = load_bet(&env, bet_id)?;

        caller.require_auth();
        if caller != bet.bettor {
            return Err(Error::NotBetOwner);
        }
        if bet.claimed {
            return Err(Error::AlreadyClaimed);
        }

        let tournament = load_tournament(&env, bet.tournament_id)?;
        let payout = match tournament.status {
            TournamentStatus::Cancelled => bet.amount,
            TournamentStatus::Finished => {
                let winner = tournament.winner.ok_or(Error::InvalidWinner)?;
                if bet.side != winner {
                    return Err(Error::NotWinningSide);
                }
                let (winning_pool, losing_pool) = if winner == SIDE_TEAM_A {
                    (tournament.pool_a, tournament.pool_b)
                } else {
                    (tournament.pool_b, tournament.pool_a)
                };
                winning_payout(bet.amount, winning_pool, losing_pool)?
            }
            _ => return Err(Error::TournamentNotFinished),
        };

        settlement(&env)?.transfer(&env.current_contract_address(), &bet.bettor, &payout);

        bet.claimed = true;
        save_bet(&env, bet_id, &bet);

        if tournament.status == TournamentStatus::Finished {
            let mut stats = load_user_stats(&env, &bet.bettor);
            stats.bets_won += 1;
            stats.total_won = stats.total_won.checked_add(payout).ok_or(Error::Overflow)?;
            save_user_stats(&env, &bet.bettor, &stats);
        }

        WinningsClaimed {
            bet_id,
            bettor: bet.bettor,
            amount: payout,
        }
        .publish(&env);

        Ok(payout)
    }

    // -----------------------------------------------------------------------
    // cancel_tournament
    // -----------------------------------------------------------------------

    /// Cancel a tournament. Admin-only emergency override.
    ///
    /// Allowed from `Upcoming` or `Live` only; terminal. Every bet on the
    /// tournament becomes refundable for its original stake through
    /// `claim_winnings`.
    pub fn cancel_tournament(env: Env, caller: Address, tournament_id: u64) -> Result<(), Error> {
        require_admin(&env, &caller)?;

        let mut tournament = load_tournament(&env, tournament_id)?;
        if !matches!(
            tournament.status,
            TournamentStatus::Upcoming | TournamentStatus::Live
        ) {
            return Err(Error::InvalidStateTransition);
        }

        tournament.status = TournamentStatus::Cancelled;
        save_tournament(&env, tournament_id, &tournament);

        TournamentCancelled { tournament_id }.publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // pause / unpause
    // -----------------------------------------------------------------------

    /// Pause the platform. Admin only. Blocks `create_tournament` and
    /// `place_bet`; claims keep working.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        env.storage().instance().set(&DataKey::Paused, &true);
        ContractPaused { admin: caller }.publish(&env);
        Ok(())
    }

    /// Unpause the platform. Admin only.
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        env.storage().instance().set(&DataKey::Paused, &false);
        ContractUnpaused { admin: caller }.publish(&env);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // set_oracle
    // -----------------------------------------------------------------------

    /// Rotate the oracle address. Admin only. Tournaments already
    /// `Finished` are unaffected; pending ones settle under the new oracle.
    pub fn set_oracle(env: Env, caller: Address, new_oracle: Address) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        env.storage().instance().set(&DataKey::Oracle, &new_oracle);
        OracleRotated { new_oracle }.publish(&env);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // withdraw_fees
    // -----------------------------------------------------------------------

    /// Withdraw accumulated platform fees to the admin. Admin only.
    /// `amount` must be positive and within the fee accumulator.
    pub fn withdraw_fees(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        require_admin(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let fees = read_amount(&env, &DataKey::AccumulatedFees);
        if amount > fees {
            return Err(Error::InsufficientFeeBalance);
        }

        env.storage()
            .instance()
            .set(&DataKey::AccumulatedFees, &(fees - amount));
        settlement(&env)?.transfer(&env.current_contract_address(), &caller, &amount);

        FeesWithdrawn { amount }.publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // emergency_withdraw
    // -----------------------------------------------------------------------

    /// Last-resort fund recovery. Admin only, and only while paused.
    ///
    /// Draws from the contract's full token balance, including unclaimed
    /// stakes, and leaves the ledger accounting untouched. This is an
    /// operational escape hatch, not part of the settlement flow.
    pub fn emergency_withdraw(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        require_admin(&env, &caller)?;

        if !is_paused(&env) {
            return Err(Error::NotPaused);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        settlement(&env)?.transfer(&env.current_contract_address(), &caller, &amount);

        EmergencyWithdrawal { amount }.publish(&env);

        Ok(())
    }

    // --- Getters ---

    pub fn get_tournament(env: Env, tournament_id: u64) -> Option<Tournament> {
        env.storage()
            .persistent()
            .get(&DataKey::Tournament(tournament_id))
    }

    pub fn get_bet(env: Env, bet_id: u64) -> Option<Bet> {
        env.storage().persistent().get(&DataKey::Bet(bet_id))
    }

    pub fn get_game_type(env: Env, game_type_id: u32) -> Option<GameType> {
        env.storage()
            .persistent()
            .get(&DataKey::GameType(game_type_id))
    }

    /// Aggregates for a bettor. Zero counters for unseen identities.
    pub fn get_user_stats(env: Env, user: Address) -> UserStats {
        load_user_stats(&env, &user)
    }

    /// Aggregates for a tournament creator. Zero counters for unseen
    /// identities.
    pub fn get_creator_reputation(env: Env, creator: Address) -> CreatorReputation {
        load_creator_rep(&env, &creator)
    }

    /// Current pool odds, recomputed on demand and never stored.
    /// `(pool_a + pool_b) * 100 / pool_x`; 0 for a side with no bets yet.
    pub fn get_current_odds(env: Env, tournament_id: u64) -> Result<Odds, Error> {
        let tournament = load_tournament(&env, tournament_id)?;
        let total = tournament
            .pool_a
            .checked_add(tournament.pool_b)
            .ok_or(Error::Overflow)?;

        let odds_for = |pool: i128| -> Result<i128, Error> {
            if pool <= 0 {
                return Ok(0);
            }
            Ok(total.checked_mul(ODDS_SCALE).ok_or(Error::Overflow)? / pool)
        };

        Ok(Odds {
            side_a: odds_for(tournament.pool_a)?,
            side_b: odds_for(tournament.pool_b)?,
        })
    }

    pub fn get_platform_stats(env: Env) -> PlatformStats {
        PlatformStats {
            total_tournaments: read_counter(&env, &DataKey::TournamentCount),
            total_bets: read_counter(&env, &DataKey::BetCount),
            total_volume: read_amount(&env, &DataKey::TotalVolume),
            accumulated_fees: read_amount(&env, &DataKey::AccumulatedFees),
            paused: is_paused(&env),
        }
    }

    /// Whether `claim_winnings` would currently pay out for this bet.
    pub fn can_claim(env: Env, bet_id: u64) -> bool {
        let bet: Bet = match env.storage().persistent().get(&DataKey::Bet(bet_id)) {
            Some(bet) => bet,
            None => return false,
        };
        if bet.claimed {
            return false;
        }
        let tournament: Tournament = match env
            .storage()
            .persistent()
            .get(&DataKey::Tournament(bet.tournament_id))
        {
            Some(tournament) => tournament,
            None => return false,
        };
        match tournament.status {
            TournamentStatus::Cancelled => true,
            TournamentStatus::Finished => tournament.winner == Some(bet.side),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Verify that `caller` is the stored admin and has signed the invocation.
fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)?;
    caller.require_auth();
    if caller != &admin {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// Verify that `caller` is the configured oracle and has signed the
/// invocation.
fn require_oracle(env: &Env, caller: &Address) -> Result<(), Error> {
    let oracle: Address = env
        .storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(Error::NotInitialized)?;
    caller.require_auth();
    if caller != &oracle {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

fn require_not_paused(env: &Env) -> Result<(), Error> {
    if !env.storage().instance().has(&DataKey::Admin) {
        return Err(Error::NotInitialized);
    }
    if is_paused(env) {
        return Err(Error::PlatformPaused);
    }
    Ok(())
}

/// Client for the settlement token fixed at init.
fn settlement(env: &Env) -> Result<token::TokenClient<'_>, Error> {
    let token_addr: Address = env
        .storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)?;
    Ok(token::TokenClient::new(env, &token_addr))
}

fn validate_text(text: &String, max_len: u32) -> Result<(), Error> {
    if text.len() == 0 || text.len() > max_len {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// Stake return plus the pro-rata share of the losing pool net of fee.
/// Integer fixed-point throughout so independent runs produce identical
/// payouts.
fn winning_payout(stake: i128, winning_pool: i128, losing_pool: i128) -> Result<i128, Error> {
    // A side cannot normally be declared winner with zero stakes; guard
    // explicitly instead of dividing by zero.
    if winning_pool <= 0 {
        return Err(Error::NoWinningPool);
    }
    let share = stake
        .checked_mul(losing_pool)
        .and_then(|v| v.checked_mul(BPS_DENOMINATOR - FEE_RATE_BPS))
        .ok_or(Error::Overflow)?
        / winning_pool
            .checked_mul(BPS_DENOMINATOR)
            .ok_or(Error::Overflow)?;
    stake.checked_add(share).ok_or(Error::Overflow)
}

fn read_counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

fn read_amount(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

fn seed_game_type(env: &Env, game_type_id: u32, name: &str) {
    let key = DataKey::GameType(game_type_id);
    env.storage().persistent().set(
        &key,
        &GameType {
            name: String::from_str(env, name),
            active: true,
        },
    );
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

fn load_tournament(env: &Env, tournament_id: u64) -> Result<Tournament, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Tournament(tournament_id))
        .ok_or(Error::TournamentNotFound)
}

fn save_tournament(env: &Env, tournament_id: u64, tournament: &Tournament) {
    let key = DataKey::Tournament(tournament_id);
    env.storage().persistent().set(&key, tournament);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

fn load_bet(env: &Env, bet_id: u64) -> Result<Bet, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Bet(bet_id))
        .ok_or(Error::BetNotFound)
}

fn save_bet(env: &Env, bet_id: u64, bet: &Bet) {
    let key = DataKey::Bet(bet_id);
    env.storage().persistent().set(&key, bet);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

fn load_user_stats(env: &Env, user: &Address) -> UserStats {
    env.storage()
        .persistent()
        .get(&DataKey::UserStats(user.clone()))
        .unwrap_or(UserStats {
            total_bets: 0,
            total_wagered: 0,
            bets_won: 0,
            total_won: 0,
        })
}

fn save_user_stats(env: &Env, user: &Address, stats: &UserStats) {
    let key = DataKey::UserStats(user.clone());
    env.storage().persistent().set(&key, stats);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

fn load_creator_rep(env: &Env, creator: &Address) -> CreatorReputation {
    env.storage()
        .persistent()
        .get(&DataKey::CreatorRep(creator.clone()))
        .unwrap_or(CreatorReputation {
            tournaments_created: 0,
            total_volume: 0,
        })
}

fn save_creator_rep(env: &Env, creator: &Address, rep: &CreatorReputation) {
    let key = DataKey::CreatorRep(creator.clone());
    env.storage().persistent().set(&key, rep);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
