pub mod actions;
pub mod manager;

#[cfg(test)]
mod tests;

pub use actions::SignupAction;
pub use manager::SignupManager;

