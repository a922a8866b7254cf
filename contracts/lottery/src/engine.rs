//! Decision engine: turns a delivered random word into a win or a loss.

use soroban_sdk::{log, Address, BytesN, Env};

use crate::config::LotteryConfig;
use crate::errors::LotteryError;
use crate::events::{EntryResolved, WinForfeited};
use crate::jackpot;
use crate::probability::{draw, is_winning_draw};
use crate::store;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Unknown or already resolved id; nothing changed
    Ignored,
    Lost,
    Won(i128),
    /// Drew a win but the payout could not be made
    Forfeited,
}

/// Resolves entry `id` against `word`, using the probability stored with the
/// entry rather than the current configuration.
///
/// The entry is marked resolved before anything else, so a redelivery of the
/// same response is ignored regardless of the outcome here.
pub fn on_randomness_received(
    env: &Env,
    config: &LotteryConfig,
    id: u64,
    word: &BytesN<32>,
) -> Result<Outcome, LotteryError> {
    let entry = match store::resolve(env, id) {
        Some(entry) => entry,
        None => {
            log!(env, "ignoring randomness for unknown or resolved entry", id);
            return Ok(Outcome::Ignored);
        }
    };

    // odds were fixed when the entry was submitted
    let probability = entry.probability;
    let won = is_winning_draw(draw(word), probability);

    EntryResolved {
        request_id: id,
        owner: entry.owner.clone(),
        probability,
        won,
    }
    .publish(env);

    if !won {
        return Ok(Outcome::Lost);
    }

    match jackpot::distribute(env, config, &entry.owner) {
        Ok(payout) => Ok(Outcome::Won(payout.amount)),
        Err(LotteryError::ContractRecipientRejected) => {
            log!(env, "win forfeited by contract owner", id);
            forfeit(env, id, entry.owner);
            Ok(Outcome::Forfeited)
        }
        Err(LotteryError::EmptyJackpot) => {
            log!(env, "win on empty jackpot", id);
            forfeit(env, id, entry.owner);
            Ok(Outcome::Forfeited)
        }
        Err(err) => Err(err),
    }
}

fn forfeit(env: &Env, request_id: u64, owner: Address) {
    jackpot::record_forfeit(env);
    WinForfeited { request_id, owner }.publish(env);
}
