pub mod health;
pub mod submission;

#[cfg(test)]
mod test;
