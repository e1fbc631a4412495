
mod artists;
mod connect;
mod songs;
