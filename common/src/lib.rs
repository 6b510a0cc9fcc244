#![no_std]

pub mod nft;
pub mod royalty;
pub mod semi_fungible;
pub mod soul_bound;
