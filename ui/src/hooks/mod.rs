pub mod use_btc_price;
