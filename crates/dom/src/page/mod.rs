mod cookies;
mod events;
mod query;
