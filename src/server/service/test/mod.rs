mod adoption;
mod auth;
