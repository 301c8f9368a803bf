mod supplier;
mod user_account;
