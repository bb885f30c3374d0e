use std::collections::HashMap;

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;

use crate::controller::TokenLedger;
use crate::error::AirdropError;
use crate::utils::Entitlement;

pub mod test_merkle;

/// Deterministic identity for fixtures.
pub fn identity(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

/// [(a1, 100), (a2, 88), (a3, 99)]
pub fn sample_entitlements() -> Vec<Entitlement> {
    vec![
        Entitlement::new(identity(1), 100),
        Entitlement::new(identity(2), 88),
        Entitlement::new(identity(3), 99),
    ]
}

pub fn error_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(err) => Some(err.error_code_number),
        _ => None,
    }
}

pub fn code_of(expected: AirdropError) -> u32 {
    expected as u32 + ERROR_CODE_OFFSET
}

pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T>, expected: AirdropError) {
    match result {
        Err(err) => assert_eq!(
            error_code(&err),
            Some(code_of(expected)),
            "expected {:?}, got {:?}",
            expected,
            err
        ),
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
    }
}

/// In-memory token ledger for the pool account.
#[derive(Debug, Default, Clone)]
pub struct MockLedger {
    pub pool: u64,
    pub balances: HashMap<Pubkey, u64>,
    pub fail_transfers: bool,
}

impl MockLedger {
    pub fn funded(pool: u64) -> Self {
        Self {
            pool,
            ..Default::default()
        }
    }

    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_paid(&self) -> u64 {
        self.balances.values().sum()
    }
}

impl TokenLedger for MockLedger {
    fn pool_balance(&self) -> Result<u64> {
        Ok(self.pool)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.fail_transfers, AirdropError::InsufficientPool);
        self.pool = self
            .pool
            .checked_sub(amount)
            .ok_or(AirdropError::InsufficientPool)?;
        *self.balances.entry(*to).or_default() += amount;
        Ok(())
    }
}
