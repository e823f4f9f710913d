mod error;
mod views;
