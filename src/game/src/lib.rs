pub mod config;
pub mod entrypoint;
pub mod service;

#[cfg(test)]
mod test;
