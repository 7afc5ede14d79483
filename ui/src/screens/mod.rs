pub mod bitcoin_rates;
