// handlers/mod.rs - two tiers: public (no token) and protected (caller token)
pub mod protected;
pub mod public;
