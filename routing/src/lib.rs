pub mod candidate;
pub mod polyline;
pub mod providers;
pub mod proximity;
pub mod ranking;
pub mod route;
pub mod session;
#[cfg(test)]
mod tests;
