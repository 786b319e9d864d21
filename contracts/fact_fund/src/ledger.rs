//! Payment capability used by the engine.
//!
//! Every entry point moves value through [`Ledger::transfer`] as its final
//! step. A failed transfer surfaces as [`Error::TransferFailed`]; returning
//! that error from the contract function makes the host discard every write
//! the invocation made before it.

use crate::errors::Error;
use soroban_sdk::{token, Address, Env};

pub trait Ledger {
    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), Error>;
}

/// [`Ledger`] backed by a Stellar asset (SEP-41) token contract.
pub struct TokenLedger<'a> {
    client: token::Client<'a>,
}

impl<'a> TokenLedger<'a> {
    pub fn new(env: &Env, token: &Address) -> Self {
        TokenLedger {
            client: token::Client::new(env, token),
        }
    }
}

impl Ledger for TokenLedger<'_> {
    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        match self.client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }
}
